//! Dependency listing through the external analyzer.

use anyhow::Result;

use super::{BuildContext, BuildWarning};
use crate::tools::ToolCommand;

/// Build the analyzer command line for the app.
///
/// Shared roots come first, then the `generated/` and `src/` directories of
/// the app and each of its parents, skipping the ones that do not exist.
pub fn analyzer_command(ctx: &BuildContext) -> ToolCommand {
    let mut cmd = ToolCommand::from_parts(&ctx.config.deps_builder);
    cmd.arg(format!("--root={}", ctx.app_path("third-party/")))
        .arg(format!("--root={}", ctx.app_path("generated/")))
        .arg(format!("--root={}", ctx.app_path("src/")))
        .arg("--exclude=")
        .arg(format!("--namespace={}", ctx.app.namespace()));

    for dir in ctx.app.ancestors() {
        for sub in ["generated", "src"] {
            let root = ctx.app_path(&format!("{}/{}/", dir, sub));
            if ctx.resolve(&root).is_dir() {
                cmd.arg(format!("--root={}", root));
            } else {
                log::debug!("Skipping missing root {}", root);
            }
        }
    }
    cmd
}

/// Ordered list of files the app loads, one per analyzer output line.
pub fn list_dependencies(
    ctx: &BuildContext,
    warnings: &mut Vec<BuildWarning>,
) -> Result<Vec<String>> {
    let output = analyzer_command(ctx).run(&ctx.project_root)?;
    if let Some(message) = output.failure {
        warnings.push(BuildWarning::ToolFailed { message });
    }

    Ok(output.stdout.lines().map(str::to_string).collect())
}
