//! Mapping table: ordered shortcut → token rules for a named vocabulary.
//!
//! Each vocabulary is embedded from `config/<name>.json` at compile time (validated by `build.rs`).

mod validation;

use std::fmt;
use std::str::FromStr;

use validation::{RuleEntry, validate_and_convert};

/// A named mapping table. Exactly one vocabulary is active per engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// `yh_*` tokens (the canonical table).
    #[default]
    Yahoo,
    /// Platform-standard emoji names such as `slightly_smiling_face`.
    Standard,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 2] = [Vocabulary::Yahoo, Vocabulary::Standard];

    pub fn name(self) -> &'static str {
        match self {
            Vocabulary::Yahoo => "yahoo",
            Vocabulary::Standard => "standard",
        }
    }

    /// Path of the embedded table, relative to the crate root.
    pub fn source(self) -> &'static str {
        match self {
            Vocabulary::Yahoo => "config/yahoo.json",
            Vocabulary::Standard => "config/standard.json",
        }
    }

    fn json(self) -> &'static str {
        match self {
            Vocabulary::Yahoo => include_str!("../../../config/yahoo.json"),
            Vocabulary::Standard => include_str!("../../../config/standard.json"),
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Vocabulary {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vocabulary::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MappingError::UnknownVocabulary(s.to_string()))
    }
}

/// One shortcut and the bare token it becomes (emitted as `:token:`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortcutRule {
    pub shortcut: String,
    pub token: String,
}

impl ShortcutRule {
    pub fn new(shortcut: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            shortcut: shortcut.into(),
            token: token.into(),
        }
    }

    /// Token wrapped in the delimiter, e.g. `:yh_smile:`.
    pub fn wrapped_token(&self) -> String {
        format!(":{}:", self.token)
    }
}

/// Error loading or validating a mapping table.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("unknown vocabulary '{0}' (expected one of: yahoo, standard)")]
    UnknownVocabulary(String),
}

/// Immutable, ordered list of rules for one vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingTable {
    vocabulary: Vocabulary,
    rules: Vec<ShortcutRule>,
}

impl MappingTable {
    /// Load and validate the embedded table for `vocabulary`.
    pub fn load(vocabulary: Vocabulary) -> Result<Self, MappingError> {
        Self::from_json(vocabulary, vocabulary.json())
    }

    pub fn from_json(vocabulary: Vocabulary, json: &str) -> Result<Self, MappingError> {
        let entries: Vec<RuleEntry> = serde_json::from_str(json)?;
        let rules = validate_and_convert(entries)?;
        Ok(Self { vocabulary, rules })
    }

    /// Build a table from rules already in memory. Same validation as the JSON path.
    pub fn from_rules(
        vocabulary: Vocabulary,
        rules: Vec<ShortcutRule>,
    ) -> Result<Self, MappingError> {
        let entries = rules
            .into_iter()
            .map(|r| RuleEntry {
                shortcut: r.shortcut,
                token: r.token,
            })
            .collect();
        let rules = validate_and_convert(entries)?;
        Ok(Self { vocabulary, rules })
    }

    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    pub fn rules(&self) -> &[ShortcutRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
