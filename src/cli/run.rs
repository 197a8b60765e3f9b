use std::path::Path;

use anyhow::{Result, bail};

use super::args::Arguments;
use crate::{
    build::{self, BuildContext, BuildSummary},
    config::load_config,
    target::AppId,
};

/// Load configuration and compress the requested app.
///
/// Counts and non-fatal warnings go into `summary` as stages finish; it is
/// filled up to the failing stage when an error is returned. Artifacts of
/// finished stages stay on disk.
pub fn run(args: &Arguments, summary: &mut BuildSummary) -> Result<()> {
    let project_root = args.project_root.as_path();
    check_project_root(project_root)?;

    let loaded = load_config(project_root)?;
    if loaded.from_file {
        log::debug!("Using configuration from {}", project_root.display());
    }

    let app = AppId::new(args.app.as_str())?;
    let ctx = BuildContext::new(project_root, loaded.config, app);
    build::compress(&ctx, summary)
}

fn check_project_root(path: &Path) -> Result<()> {
    if !path.is_dir() {
        bail!("Project root is not a directory: {}", path.display());
    }
    Ok(())
}
