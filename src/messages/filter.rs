//! Selection of the message keys a compressed bundle actually uses.

use std::collections::BTreeSet;

use super::MessageTable;

/// Keys kept per table, sorted alphabetically.
///
/// Computed once from the baseline language and applied unchanged to every
/// language, so all languages of an app expose the same keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetainedKeys {
    blockly: BTreeSet<String>,
    blockly_games: BTreeSet<String>,
}

impl RetainedKeys {
    pub fn keys(&self, table: MessageTable) -> &BTreeSet<String> {
        match table {
            MessageTable::Blockly => &self.blockly,
            MessageTable::BlocklyGames => &self.blockly_games,
        }
    }

    pub fn contains(&self, table: MessageTable, key: &str) -> bool {
        self.keys(table).contains(key)
    }

    pub fn len(&self, table: MessageTable) -> usize {
        self.keys(table).len()
    }

    pub fn is_empty(&self) -> bool {
        self.blockly.is_empty() && self.blockly_games.is_empty()
    }

    pub fn insert(&mut self, table: MessageTable, key: impl Into<String>) {
        let keys = match table {
            MessageTable::Blockly => &mut self.blockly,
            MessageTable::BlocklyGames => &mut self.blockly_games,
        };
        keys.insert(key.into());
    }
}

/// Whether `script` references `key` of `table`.
///
/// A key counts as used when it appears quoted (`"KEY"`), as a property
/// access (`.KEY`), or, for Blockly messages only, inside a `%{BKY_KEY}`
/// placeholder. The property rule also matches unrelated properties sharing
/// a prefix with the key; such false positives only keep extra messages.
pub fn is_referenced(table: MessageTable, key: &str, script: &str) -> bool {
    script.contains(&format!("\"{}\"", key))
        || script.contains(&format!(".{}", key))
        || (table == MessageTable::Blockly && script.contains(&format!("%{{BKY_{}}}", key)))
}

/// Keys declared in the baseline message file that `script` references.
pub fn filter_messages(script: &str, baseline: &str) -> RetainedKeys {
    let mut retained = RetainedKeys::default();
    for line in baseline.lines() {
        for table in MessageTable::ALL {
            if let Some(key) = table.declared_key(line)
                && is_referenced(table, key, script)
            {
                retained.insert(table, key);
            }
        }
    }
    log::debug!(
        "Retained {} Blockly and {} Blockly Games messages",
        retained.len(MessageTable::Blockly),
        retained.len(MessageTable::BlocklyGames)
    );
    retained
}
