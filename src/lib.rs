//! Keycount - translation key counter for i18n source files
//!
//! Keycount reads a localization source (for example an `i18n.js` holding
//! `en: { ... }` and `vi: { ... }` dictionaries), counts the quoted keys in each
//! language section, and reports whether the two sections line up.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, report, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Key extraction, section location and comparison

pub mod cli;
pub mod config;
pub mod core;
