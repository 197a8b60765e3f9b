//! CLI argument definitions using clap.
//!
//! Gamepack takes exactly one positional argument, the application
//! identifier. Missing or extra positionals are usage errors, which clap
//! reports with exit status 2.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Application to compress, e.g. `maze` or `pond/docs`
    pub app: String,

    /// Project directory containing the app root and build tools
    #[arg(long, env = "GAMEPACK_PROJECT_ROOT", default_value = ".")]
    pub project_root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
