//! Key counting engine.
//!
//! Reads a localization source, counts quoted keys across the whole text,
//! splits out the primary and secondary language sections, and compares them.
//! No output happens here; see `cli::report` for rendering.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

pub mod html;
pub mod keys;
pub mod locale;
pub mod parsers;
pub mod sections;

pub use html::HtmlScan;
pub use locale::Locales;
pub use sections::{Section, Strategy};

/// Inputs for one analysis run.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    pub locales: Locales,
    pub strategy: Strategy,
}

/// Result of analyzing one localization source.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub source: String,
    pub strategy: Strategy,
    pub primary: Section,
    pub secondary: Section,
    /// Distinct keys anywhere in the source, not only inside the sections.
    pub unique_key_count: usize,
    /// Keys in the primary section with no counterpart in the secondary one.
    pub missing_in_secondary: Vec<String>,
    /// Keys in the secondary section with no counterpart in the primary one.
    pub missing_in_primary: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<HtmlScan>,
    /// `data-key` values used in the HTML page but absent from the primary section.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub untranslated_html_keys: Vec<String>,
}

impl Analysis {
    /// True when both sections hold the same number of keys.
    pub fn is_match(&self) -> bool {
        self.primary.count() == self.secondary.count()
    }

    fn attach_html(&mut self, scan: HtmlScan) {
        let known = self.primary.key_set();
        self.untranslated_html_keys = scan
            .keys
            .iter()
            .filter(|key| !known.contains(key.as_str()))
            .cloned()
            .collect();
        self.html = Some(scan);
    }
}

/// Analyze source text that has already been loaded.
pub fn analyze(source: &str, source_name: &str, options: &AnalyzeOptions) -> Result<Analysis> {
    let unique_key_count = keys::unique_keys(source).len();
    let pair = sections::locate_sections(source, source_name, &options.locales, options.strategy)?;

    Ok(Analysis {
        source: source_name.to_string(),
        strategy: options.strategy,
        missing_in_secondary: pair.primary.keys_missing_from(&pair.secondary),
        missing_in_primary: pair.secondary.keys_missing_from(&pair.primary),
        primary: pair.primary,
        secondary: pair.secondary,
        unique_key_count,
        html: None,
        untranslated_html_keys: Vec::new(),
    })
}

/// Read `path` and analyze it, optionally cross-checking an HTML page.
///
/// Every file is read before analysis starts, so a missing file fails the
/// whole run without partial results.
pub fn analyze_file(
    path: &Path,
    html: Option<&Path>,
    options: &AnalyzeOptions,
) -> Result<Analysis> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    let html_scan = html.map(html::scan_html_file).transpose()?;

    let mut analysis = analyze(&source, &path.to_string_lossy(), options)?;
    if let Some(scan) = html_scan {
        analysis.attach_html(scan);
    }
    Ok(analysis)
}
