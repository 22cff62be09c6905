use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::Strategy;

pub const CONFIG_FILE_NAME: &str = ".keycountrc.json";

/// Source file analyzed when neither the command line nor the config names one.
pub const DEFAULT_SOURCE: &str = "/workspace/i18n.js";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    #[serde(default = "default_secondary_locale")]
    pub secondary_locale: String,
    #[serde(default)]
    pub strategy: Strategy,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_primary_locale() -> String {
    "en".to_string()
}

fn default_secondary_locale() -> String {
    "vi".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            html: None,
            primary_locale: default_primary_locale(),
            secondary_locale: default_secondary_locale(),
            strategy: Strategy::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Both locales must be non-empty and different from each other.
    pub fn validate(&self) -> Result<()> {
        if self.primary_locale.trim().is_empty() {
            bail!("'primaryLocale' must not be empty");
        }
        if self.secondary_locale.trim().is_empty() {
            bail!("'secondaryLocale' must not be empty");
        }
        if self.primary_locale == self.secondary_locale {
            bail!(
                "'primaryLocale' and 'secondaryLocale' must differ (both are \"{}\")",
                self.primary_locale
            );
        }
        Ok(())
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
