use anyhow::Result;

pub mod args;
pub mod exit_status;
pub mod report;
pub mod run;

pub use args::{Arguments, OutputFormat};
pub use exit_status::ExitStatus;

/// Run one analysis and print its report.
///
/// All input is read and analyzed before anything is written to stdout, so an
/// error never leaves a partial report behind.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let analysis = run::run(&args)?;
    report::print(&analysis, args.format, args.verbose)?;
    Ok(ExitStatus::from_analysis(&analysis, args.strict))
}
