//! `data-key` attribute scanning for HTML pages.

use std::{collections::BTreeSet, fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

/// `data-key="..."` / `data-key='...'`, capturing the value.
static DATA_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)data-key\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlScan {
    pub file_path: String,
    /// Number of `data-key` attributes, duplicates included.
    pub attribute_count: usize,
    /// Distinct attribute values.
    pub keys: BTreeSet<String>,
}

pub fn scan_html(html: &str, file_path: &str) -> HtmlScan {
    let mut scan = HtmlScan {
        file_path: file_path.to_string(),
        ..Default::default()
    };
    for caps in DATA_KEY_REGEX.captures_iter(html) {
        scan.attribute_count += 1;
        if let Some(value) = caps.get(1).or_else(|| caps.get(2)) {
            scan.keys.insert(value.as_str().to_string());
        }
    }
    scan
}

pub fn scan_html_file(path: &Path) -> Result<HtmlScan> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read HTML file: {}", path.display()))?;
    Ok(scan_html(&html, &path.to_string_lossy()))
}
