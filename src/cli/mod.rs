use anyhow::Result;
use log::LevelFilter;

use crate::build::BuildSummary;

pub use args::Arguments;
pub use exit_status::ExitStatus;

mod args;
mod exit_status;
mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    report::print_start(&args.app);
    let mut summary = BuildSummary::default();
    let result = run::run(&args, &mut summary);
    report::print_warnings(&summary);
    result?;
    report::print(&summary);

    Ok(ExitStatus::Success)
}

/// Initialize the `log` backend.
///
/// Warnings are always shown; `--verbose` adds the debug diagnostics
/// (command lines, search roots, per-language counts). `RUST_LOG` wins over both.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}
