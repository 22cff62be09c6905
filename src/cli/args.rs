//! CLI argument definitions using clap.
//!
//! `keycount` takes a single optional source path plus flags that override the
//! `.keycountrc.json` configuration file.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::Strategy;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Localization source file (overrides config file)
    pub source: Option<PathBuf>,

    /// HTML page whose data-key attributes are counted (overrides config file)
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// How language sections are located (overrides config file)
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Primary locale, e.g. "en" (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Secondary locale, e.g. "vi" (overrides config file)
    #[arg(long)]
    pub secondary_locale: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Exit with status 1 when the key counts differ
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON
    Json,
}
