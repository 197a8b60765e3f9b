//! Localized message files.
//!
//! Each language has one generated script under `<app_root>/generated/msg/`
//! whose lines assign into two tables (see [`format`]). A build keeps only the
//! keys the compressed bundle references ([`filter`]) and writes a trimmed copy
//! per language next to the app ([`emit`]).

pub mod emit;
pub mod filter;
pub mod format;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

pub use format::{MessageEntry, MessageTable};

use crate::build::BuildContext;

/// Full (unfiltered) message file of a language.
pub fn message_file_path(ctx: &BuildContext, lang: &str) -> PathBuf {
    ctx.resolve(&ctx.app_path(&format!("generated/msg/{}.js", lang)))
}

pub fn read_message_file(ctx: &BuildContext, lang: &str) -> Result<String> {
    let path = message_file_path(ctx, lang);
    fs::read_to_string(&path)
        .with_context(|| format!("Failed to read message file: {}", path.display()))
}
