//! Line format of the generated message files.
//!
//! A message is declared on one line as
//!
//! ```text
//! <Table>["<key>"] = <value>;
//! ```
//!
//! where `<Table>` is `BlocklyMsg` or `BlocklyGamesMsg`, `<key>` is one or
//! more characters other than `"`, and `<value>` is a JavaScript expression
//! running up to the last `;` of the line. The declaration may be preceded
//! by anything (indentation, `goog.provide` leftovers); the first occurrence
//! on a line that parses is the one used.

/// The two message tables the games read at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageTable {
    /// Blockly's own messages; also referenced from `%{BKY_...}` placeholders.
    Blockly,
    /// Messages specific to the games.
    BlocklyGames,
}

impl MessageTable {
    pub const ALL: [MessageTable; 2] = [Self::Blockly, Self::BlocklyGames];

    /// Global variable holding the table.
    pub fn variable(self) -> &'static str {
        match self {
            Self::Blockly => "BlocklyMsg",
            Self::BlocklyGames => "BlocklyGamesMsg",
        }
    }

    /// Key declared on `line` for this table, if any. The value may be incomplete.
    pub fn declared_key(self, line: &str) -> Option<&str> {
        self.declarations(line).next().map(|(key, _)| key)
    }

    /// Complete `key = value;` entry on `line` for this table, if any.
    pub fn parse_entry(self, line: &str) -> Option<MessageEntry<'_>> {
        self.declarations(line).find_map(|(key, rest)| {
            let end = rest.rfind(';')?;
            Some(MessageEntry {
                key,
                value: &rest[..end],
            })
        })
    }

    /// Every `<Table>["<key>"] = ` on the line, as key and the text after it.
    fn declarations(self, line: &str) -> impl Iterator<Item = (&str, &str)> {
        let open = format!("{}[\"", self.variable());
        let starts: Vec<usize> = line.match_indices(&open).map(|(i, _)| i + open.len()).collect();
        starts.into_iter().filter_map(move |start| {
            let after_open = &line[start..];
            let key_len = after_open.find('"')?;
            if key_len == 0 {
                return None;
            }
            let rest = after_open[key_len..].strip_prefix("\"] = ")?;
            Some((&after_open[..key_len], rest))
        })
    }
}

/// One message declaration, borrowed from its source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageEntry<'a> {
    pub key: &'a str,
    /// Literal value expression, without the trailing `;`.
    pub value: &'a str,
}
