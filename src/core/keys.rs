//! Quoted-key extraction.
//!
//! A key is any `"<name>":` occurrence in the text. Matching is purely lexical:
//! keys inside comments or string values that happen to look like `"x":` count
//! as well.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

/// Matches a double-quoted run of non-quote characters followed by a colon.
static QUOTED_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""[^"]+":"#).unwrap());

/// All non-overlapping raw key matches, in source order (quotes and colon included).
pub fn find_key_matches(text: &str) -> Vec<&str> {
    QUOTED_KEY_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Strip every double quote and the trailing colon from a raw match.
///
/// `"home_title":` -> `home_title`
pub fn normalize_key(raw: &str) -> String {
    let unquoted = raw.replace('"', "");
    match unquoted.strip_suffix(':') {
        Some(key) => key.to_string(),
        None => unquoted,
    }
}

/// Normalized keys in source order, duplicates kept.
pub fn extract_keys(text: &str) -> Vec<String> {
    find_key_matches(text)
        .into_iter()
        .map(normalize_key)
        .collect()
}

/// Distinct normalized keys found anywhere in `text`.
pub fn unique_keys(text: &str) -> BTreeSet<String> {
    find_key_matches(text)
        .into_iter()
        .map(normalize_key)
        .collect()
}
