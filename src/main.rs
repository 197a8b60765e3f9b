use std::process::ExitCode;

use clap::Parser;
use gamepack::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    gamepack::cli::init_logging(args.verbose);

    match gamepack::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
