use std::process::ExitCode;

use crate::core::Analysis;

/// Exit status for the CLI.
///
/// - `Success` (0): Report printed (count mismatches included, unless strict)
/// - `Failure` (1): Strict mode and the section key counts differ
/// - `Error` (2): Run failed (unreadable file, bad config, missing section, parse error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Report printed.
    Success,
    /// Strict mode and the section key counts differ.
    Failure,
    /// Run failed before a report could be printed.
    Error,
}

impl ExitStatus {
    pub fn from_analysis(analysis: &Analysis, strict: bool) -> Self {
        if strict && !analysis.is_match() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
