//! Marker-based section slicing.
//!
//! The primary section runs from just after the first `<primary>: {` up to the
//! next `<primary>: {` or `<secondary>: {`, whichever comes first (or the end
//! of the text). The secondary section runs from just after the first
//! `<secondary>: {` in the whole text up to the next `<secondary>: {` or `}`
//! (or the end of the text). Nested objects are therefore cut short in the
//! secondary section; use the `ast` strategy when that matters.

use std::ops::Range;

use anyhow::{Result, bail};

use super::{Section, SectionPair};
use crate::core::{
    keys::extract_keys,
    locale::{Locales, section_marker},
};

pub fn split_sections(
    source: &str,
    file_path: &str,
    locales: &Locales,
) -> Result<SectionPair> {
    let primary_marker = section_marker(&locales.primary);
    let secondary_marker = section_marker(&locales.secondary);

    let Some(primary_start) = position_after(source, &primary_marker) else {
        bail!("Section marker '{}' not found in {}", primary_marker, file_path);
    };
    let Some(secondary_start) = position_after(source, &secondary_marker) else {
        bail!("Section marker '{}' not found in {}", secondary_marker, file_path);
    };

    let primary_end = section_end(
        source,
        primary_start,
        &[primary_marker.as_str(), secondary_marker.as_str()],
    );
    let secondary_end = section_end(source, secondary_start, &[secondary_marker.as_str(), "}"]);

    Ok(SectionPair {
        primary: slice_section(source, &locales.primary, primary_start..primary_end),
        secondary: slice_section(source, &locales.secondary, secondary_start..secondary_end),
    })
}

/// Byte offset of the earliest `stops` occurrence at or after `start`.
fn section_end(source: &str, start: usize, stops: &[&str]) -> usize {
    stops
        .iter()
        .filter_map(|stop| source[start..].find(stop))
        .min()
        .map_or(source.len(), |pos| start + pos)
}

/// Byte offset just past the first occurrence of `marker`.
fn position_after(source: &str, marker: &str) -> Option<usize> {
    source.find(marker).map(|pos| pos + marker.len())
}

fn slice_section(source: &str, locale: &str, span: Range<usize>) -> Section {
    Section {
        locale: locale.to_string(),
        keys: extract_keys(&source[span.clone()]),
        span,
    }
}
