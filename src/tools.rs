//! External process invocation.
//!
//! Both collaborators (dependency analyzer, optimizing compiler) are run
//! synchronously from the project root with their stdout captured in full.
//! Stderr is inherited so tool diagnostics reach the terminal unchanged.

use std::{
    fmt,
    path::Path,
    process::{Command, Stdio},
};

use anyhow::{Context, Result};

/// A command line for an external tool, built up argument by argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
}

/// Captured result of running a tool.
#[derive(Debug)]
pub struct ToolOutput {
    pub stdout: String,
    /// `None` when the tool exited successfully, otherwise a description of the failure.
    pub failure: Option<String>,
}

impl ToolCommand {
    /// Create a command from a configured `[program, leading args...]` list.
    ///
    /// The list is validated non-empty when the config is loaded.
    pub fn from_parts(parts: &[String]) -> Self {
        let (program, args) = parts.split_first().map_or_else(
            || (String::new(), Vec::new()),
            |(program, args)| (program.clone(), args.to_vec()),
        );
        Self { program, args }
    }

    pub fn arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Run to completion and capture stdout.
    ///
    /// Failing to start the process, or stdout that is not UTF-8, is an error
    /// naming the whole command line.
    /// A non-zero exit is returned in `failure` for the caller to report.
    pub fn run(&self, cwd: &Path) -> Result<ToolOutput> {
        log::debug!("Running: {}", self);
        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .with_context(|| format!("Failed to start: {}", self))?;

        let failure = if output.status.success() {
            None
        } else {
            Some(format!("`{}` exited with {}", self.program, output.status))
        };

        let stdout = String::from_utf8(output.stdout)
            .with_context(|| format!("`{}` produced non-UTF-8 output", self))?;

        Ok(ToolOutput { stdout, failure })
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
