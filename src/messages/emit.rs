//! Per-language message files trimmed to the retained keys.

use anyhow::Result;

use super::{MessageTable, filter::RetainedKeys, read_message_file};
use crate::{
    GENERATED_BANNER,
    build::{BuildContext, write_output},
};

/// Retained entries of one language, rendered as object-literal members in
/// source file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredMessages {
    pub blockly: Vec<String>,
    pub blockly_games: Vec<String>,
}

impl FilteredMessages {
    /// Keep the entries of `source` whose key is retained.
    pub fn from_source(source: &str, retained: &RetainedKeys) -> Self {
        let mut filtered = Self::default();
        for line in source.lines() {
            for table in MessageTable::ALL {
                let Some(entry) = table.parse_entry(line) else {
                    continue;
                };
                if !retained.contains(table, entry.key) {
                    continue;
                }
                match table {
                    // Bare identifiers: Blockly keys are valid property names.
                    MessageTable::Blockly => {
                        filtered.blockly.push(format!("{}:{}", entry.key, entry.value))
                    }
                    MessageTable::BlocklyGames => filtered
                        .blockly_games
                        .push(format!("\"{}\":{}", entry.key, entry.value)),
                }
            }
        }
        filtered
    }

    /// File contents: banner plus one `var` declaration per non-empty table.
    pub fn render(&self) -> String {
        let mut out = String::from(GENERATED_BANNER);
        for (table, members) in [
            (MessageTable::Blockly, &self.blockly),
            (MessageTable::BlocklyGames, &self.blockly_games),
        ] {
            if !members.is_empty() {
                out.push_str(&format!(
                    "var {}={{ {} }}\n",
                    table.variable(),
                    members.join(",")
                ));
            }
        }
        out
    }
}

/// Write `generated/msg/<lang>.js` for the app.
pub fn write_language(ctx: &BuildContext, lang: &str, retained: &RetainedKeys) -> Result<()> {
    let source = read_message_file(ctx, lang)?;
    let filtered = FilteredMessages::from_source(&source, retained);
    log::debug!(
        "{}: {} Blockly, {} Blockly Games messages",
        lang,
        filtered.blockly.len(),
        filtered.blockly_games.len()
    );

    let path = ctx.generated_dir().join("msg").join(format!("{}.js", lang));
    write_output(&path, &filtered.render())
}
