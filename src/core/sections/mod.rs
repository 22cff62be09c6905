//! Locating the primary and secondary language sections.
//!
//! - `split`: literal `<locale>: {` marker slicing over the raw text
//! - `ast`: exact object-literal boundaries from an swc parse

use std::{collections::BTreeSet, ops::Range};

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::locale::Locales;

pub mod ast;
pub mod split;

/// How section boundaries are found in the source text.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Slice the text on `<locale>: {` markers
    #[default]
    Split,
    /// Parse the file as a JavaScript module and read the locale objects
    Ast,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Split => "split",
            Strategy::Ast => "ast",
        }
    }
}

/// Keys found in one language section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub locale: String,
    /// Every key occurrence in source order; duplicates are kept.
    pub keys: Vec<String>,
    /// Byte range of the section within the source text.
    pub span: Range<usize>,
}

impl Section {
    pub fn count(&self) -> usize {
        self.keys.len()
    }

    pub fn key_set(&self) -> BTreeSet<&str> {
        self.keys.iter().map(String::as_str).collect()
    }

    /// Keys of `self` that never appear in `other`, sorted and deduplicated.
    pub fn keys_missing_from(&self, other: &Section) -> Vec<String> {
        let theirs = other.key_set();
        self.key_set()
            .into_iter()
            .filter(|key| !theirs.contains(key))
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPair {
    pub primary: Section,
    pub secondary: Section,
}

/// Locate both sections of `source` with the chosen strategy.
///
/// `file_path` is only used in error messages.
pub fn locate_sections(
    source: &str,
    file_path: &str,
    locales: &Locales,
    strategy: Strategy,
) -> Result<SectionPair> {
    match strategy {
        Strategy::Split => split::split_sections(source, file_path, locales),
        Strategy::Ast => ast::ast_sections(source, file_path, locales),
    }
}
