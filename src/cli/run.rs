//! Resolve settings from the command line and config file, then analyze.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Result;

use super::args::Arguments;
use crate::config::{CONFIG_FILE_NAME, Config, ConfigLoadResult, load_config};
use crate::core::{Analysis, AnalyzeOptions, Locales, analyze_file};

/// Effective settings after command-line flags override the config file.
#[derive(Debug)]
pub struct Settings {
    pub source: PathBuf,
    pub html: Option<PathBuf>,
    pub options: AnalyzeOptions,
    /// True if a config file was found.
    pub config_from_file: bool,
}

pub fn resolve_settings(args: &Arguments, start_dir: &Path) -> Result<Settings> {
    let ConfigLoadResult { config, from_file } = load_config(start_dir)?;

    let merged = Config {
        source: args
            .source
            .as_ref()
            .map(|path| path.to_string_lossy().to_string())
            .unwrap_or(config.source),
        html: args
            .html
            .as_ref()
            .map(|path| path.to_string_lossy().to_string())
            .or(config.html),
        primary_locale: args.primary_locale.clone().unwrap_or(config.primary_locale),
        secondary_locale: args
            .secondary_locale
            .clone()
            .unwrap_or(config.secondary_locale),
        strategy: args.strategy.unwrap_or(config.strategy),
    };
    merged.validate()?;

    Ok(Settings {
        source: PathBuf::from(merged.source),
        html: merged.html.map(PathBuf::from),
        options: AnalyzeOptions {
            locales: Locales::new(merged.primary_locale, merged.secondary_locale),
            strategy: merged.strategy,
        },
        config_from_file: from_file,
    })
}

pub fn run(args: &Arguments) -> Result<Analysis> {
    let settings = resolve_settings(args, &env::current_dir()?)?;

    if args.verbose {
        if !settings.config_from_file {
            eprintln!("Note: No {} found, using default configuration", CONFIG_FILE_NAME);
        }
        eprintln!(
            "Note: Analyzing {} with the {} strategy",
            settings.source.display(),
            settings.options.strategy.as_str()
        );
    }

    analyze_file(&settings.source, settings.html.as_deref(), &settings.options)
}
