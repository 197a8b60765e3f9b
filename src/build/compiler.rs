//! Compressed bundle produced by the optimizing compiler.

use std::{borrow::Cow, sync::LazyLock};

use anyhow::Result;
use regex::Regex;

use super::{BuildContext, BuildWarning, write_output};
use crate::{GENERATED_BANNER, tools::ToolCommand};

/// License block the compiler copies from every Blockly source file.
static LICENSE_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"/\*\n",
        r"\n",
        r" (Copyright \d+ (Google LLC|Massachusetts Institute of Technology))\n",
        r"( All rights reserved.\n)?",
        r" SPDX-License-Identifier: Apache-2.0\n",
        r"\*/",
    ))
    .unwrap()
});

/// Compressed script as written to disk.
#[derive(Debug, Clone)]
pub struct CompressedBundle {
    /// Banner plus script: the full contents of `compressed.js`.
    pub contents: String,
    /// Size of the script without banner, in bytes.
    pub script_len: usize,
}

pub fn compiler_command(ctx: &BuildContext) -> ToolCommand {
    let mut cmd = ToolCommand::from_parts(&ctx.config.compiler);
    cmd.arg("--generate_exports")
        .arg("--compilation_level")
        .arg("ADVANCED_OPTIMIZATIONS")
        .arg("--dependency_mode=PRUNE");
    for externs in &ctx.config.externs {
        cmd.arg("--externs").arg(externs.as_str());
    }
    cmd.arg("--language_out")
        .arg(ctx.config.language_out.as_str())
        .arg(format!(
            "--entry_point={}",
            ctx.app_path(&format!("{}/src/main", ctx.app))
        ))
        .arg(format!("--js={}", ctx.app_path("third-party/base.js")))
        .arg(format!("--js={}", ctx.app_path("third-party/blockly/**.js")))
        .arg(format!("--js={}", ctx.app_path("src/*.js")))
        .arg("--warning_level")
        .arg("QUIET");
    for dir in ctx.app.ancestors() {
        cmd.arg(format!("--js={}", ctx.app_path(&format!("{}/src/*.js", dir))));
    }
    cmd
}

/// Remove the Apache-2.0 license blocks. Anything not matching exactly is kept.
pub fn trim_license(code: &str) -> Cow<'_, str> {
    LICENSE_BLOCK_REGEX.replace_all(code, "")
}

/// Compile the app and write `generated/compressed.js`.
pub fn write_compressed(
    ctx: &BuildContext,
    warnings: &mut Vec<BuildWarning>,
) -> Result<CompressedBundle> {
    let output = compiler_command(ctx).run(&ctx.project_root)?;
    if let Some(message) = output.failure {
        warnings.push(BuildWarning::ToolFailed { message });
    }

    let script = trim_license(&output.stdout);
    let contents = format!("{}{}", GENERATED_BANNER, script);
    write_output(&ctx.generated_dir().join("compressed.js"), &contents)?;

    Ok(CompressedBundle {
        script_len: script.len(),
        contents,
    })
}
