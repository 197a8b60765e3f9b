//! Application identifiers and per-target build profiles.

use std::fmt;

use anyhow::{Result, bail};

/// Slash-delimited name of one game, e.g. `maze` or `pond/docs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() || id.starts_with('/') || id.ends_with('/') || id.contains("//") {
            bail!("Invalid application identifier: \"{}\"", id);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Closure namespace of the app: `pond/docs` becomes `Pond.Docs`.
    pub fn namespace(&self) -> String {
        title_case(&self.0.replace('/', "."))
    }

    /// The identifier followed by each of its parent paths, deepest first.
    ///
    /// `pond/docs` yields `pond/docs`, then `pond`.
    pub fn ancestors(&self) -> impl Iterator<Item = &str> {
        let id = self.0.as_str();
        std::iter::once(id).chain(id.rmatch_indices('/').map(move |(i, _)| &id[..i]))
    }

    /// Human-readable name used in progress output.
    pub fn display_name(&self) -> String {
        title_case(&self.0)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Extra dependency spliced into the uncompressed load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Injection {
    /// Entry (below the app root) after which `entry` is inserted.
    pub anchor: &'static str,
    /// Entry (below the app root) to insert.
    pub entry: &'static str,
}

/// Build settings that differ between targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TargetProfile {
    /// Prepended to every script path of the uncompressed bootstrap.
    pub path_prefix: &'static str,
    pub injection: Option<Injection>,
}

const TARGET_PROFILES: &[(&str, TargetProfile)] = &[
    // The docs page is served one directory deeper than the games.
    (
        "pond/docs",
        TargetProfile {
            path_prefix: "../",
            injection: None,
        },
    ),
    // Maze can show Python code, but nothing requires the Python generator.
    (
        "maze",
        TargetProfile {
            path_prefix: "",
            injection: Some(Injection {
                anchor: "third-party/blockly/generators/javascript.js",
                entry: "third-party/blockly/generators/python_compressed.js",
            }),
        },
    ),
];

pub fn profile_for(app: &AppId) -> TargetProfile {
    TARGET_PROFILES
        .iter()
        .find(|(id, _)| *id == app.as_str())
        .map(|(_, profile)| *profile)
        .unwrap_or_default()
}
