//! Progress and summary output.
//!
//! Kept apart from the pipeline so `build` can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::{build::BuildSummary, target::AppId};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print_start(app: &str) {
    let name = AppId::new(app).map_or_else(|_| app.to_string(), |app| app.display_name());
    let _ = writeln!(io::stdout().lock(), "Compressing {}", name.bold());
}

/// Print the warnings collected so far, whether or not the build finished.
pub fn print_warnings(summary: &BuildSummary) {
    print_warnings_to(summary, &mut io::stderr().lock());
}

pub fn print(summary: &BuildSummary) {
    print_to(summary, &mut io::stdout().lock());
}

/// Print the stage results to a custom writer.
pub fn print_to<W: Write>(summary: &BuildSummary, writer: &mut W) {
    if let Some(injection) = &summary.injected {
        let _ = writeln!(
            writer,
            "Injected {} after {}.",
            injection.entry.cyan(),
            injection.anchor.cyan()
        );
    }
    let _ = writeln!(writer, "Found {} dependencies.", summary.dependency_count);
    let _ = writeln!(
        writer,
        "Compressed to {:.2} KB.",
        summary.compressed_bytes as f64 / 1024.0
    );
    let _ = writeln!(writer, "Found {} Blockly messages.", summary.blockly_messages);
    let _ = writeln!(
        writer,
        "Found {} Blockly Games messages.",
        summary.blockly_games_messages
    );
    let count = summary.languages.len();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote message files for {} {}",
            count,
            if count == 1 { "language" } else { "languages" }
        )
        .green()
    );
}

pub fn print_warnings_to<W: Write>(summary: &BuildSummary, writer: &mut W) {
    for warning in &summary.warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }
}
