//! The pair of locales being compared.

/// Primary and secondary locale codes, e.g. `en` and `vi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locales {
    pub primary: String,
    pub secondary: String,
}

impl Default for Locales {
    fn default() -> Self {
        Self {
            primary: "en".to_string(),
            secondary: "vi".to_string(),
        }
    }
}

impl Locales {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

/// Literal text that opens a locale section, e.g. `en: {`.
pub fn section_marker(locale: &str) -> String {
    format!("{}: {{", locale)
}

/// Human-readable language name used in reports.
///
/// Unknown locales are shown as their code.
pub fn display_name(locale: &str) -> &str {
    match locale {
        "en" => "English",
        "vi" => "Vietnamese",
        other => other,
    }
}
