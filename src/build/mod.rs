//! The compression pipeline for one application.
//!
//! Stages run strictly in order and each writes its artifact only after it
//! has fully succeeded:
//!
//! 1. `dependencies`: ask the analyzer for the ordered dependency list
//! 2. `bootstrap`: write `generated/uncompressed.js`
//! 3. `compiler`: write `generated/compressed.js`
//! 4. `messages::filter`: pick the message keys the compressed script uses
//! 5. `messages::emit`: write `generated/msg/<lang>.js` for every language

pub mod bootstrap;
pub mod compiler;
pub mod dependencies;
pub mod languages;

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    config::Config,
    messages::{self, MessageTable},
    target::{AppId, Injection, TargetProfile, profile_for},
};

/// Everything a stage needs to know about the current build.
#[derive(Debug, Clone)]
pub struct BuildContext {
    pub project_root: PathBuf,
    pub config: Config,
    pub app: AppId,
    pub profile: TargetProfile,
}

impl BuildContext {
    pub fn new(project_root: impl Into<PathBuf>, config: Config, app: AppId) -> Self {
        let profile = profile_for(&app);
        Self {
            project_root: project_root.into(),
            config,
            app,
            profile,
        }
    }

    /// Path of `rel` below the app root, as seen by the external tools
    /// (relative to the project root): `src/` gives `appengine/src/`.
    pub fn app_path(&self, rel: &str) -> String {
        format!("{}{}", self.config.source_prefix(), rel)
    }

    /// Absolute location of a project-relative path.
    pub fn resolve(&self, rel: &str) -> PathBuf {
        self.project_root.join(rel)
    }

    /// `<project>/<app_root>/<app>/generated`
    pub fn generated_dir(&self) -> PathBuf {
        self.resolve(&self.app_path(&format!("{}/generated", self.app)))
    }
}

/// Non-fatal condition met during a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
    /// The injection anchor was not in the dependency list, so nothing was injected.
    InjectionAnchorMissing { anchor: String, entry: String },
    /// An external tool exited unsuccessfully; its output was used as-is.
    ToolFailed { message: String },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InjectionAnchorMissing { anchor, entry } => write!(
                f,
                "could not find \"{}\" to inject \"{}\" after",
                anchor, entry
            ),
            Self::ToolFailed { message } => f.write_str(message),
        }
    }
}

/// What a build produced up to its last finished stage, for reporting.
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    pub dependency_count: usize,
    pub injected: Option<Injection>,
    pub compressed_bytes: usize,
    pub blockly_messages: usize,
    pub blockly_games_messages: usize,
    pub languages: Vec<String>,
    pub warnings: Vec<BuildWarning>,
}

/// Run every stage for `ctx.app`, recording results into `summary`.
///
/// `summary` is owned by the caller so warnings raised before a fatal error
/// are still available for reporting.
pub fn compress(ctx: &BuildContext, summary: &mut BuildSummary) -> Result<()> {
    let files = dependencies::list_dependencies(ctx, &mut summary.warnings)?;
    let bundle = bootstrap::write_uncompressed(ctx, &files, &mut summary.warnings)?;
    summary.dependency_count = bundle.sources.len();
    summary.injected = bundle.injected;

    let compressed = compiler::write_compressed(ctx, &mut summary.warnings)?;
    summary.compressed_bytes = compressed.script_len;

    let baseline = messages::read_message_file(ctx, &ctx.config.baseline_language)?;
    let retained = messages::filter::filter_messages(&compressed.contents, &baseline);
    summary.blockly_messages = retained.len(MessageTable::Blockly);
    summary.blockly_games_messages = retained.len(MessageTable::BlocklyGames);

    let langs = languages::supported_languages(ctx)?;
    for lang in &langs {
        messages::emit::write_language(ctx, lang, &retained)?;
    }
    summary.languages = langs;

    Ok(())
}

/// Write a generated file, creating its directory first.
pub(crate) fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
