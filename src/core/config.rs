//! Configuration from the environment (optionally loaded from `.env`).

use std::env;
use std::fmt;

use crate::core::mapping::{MappingError, Vocabulary};

/// Environment variable selecting the vocabulary (`yahoo` or `standard`).
pub const VOCABULARY_VAR: &str = "EMOJI_SHORTCUTS_VOCABULARY";

/// Where the active vocabulary came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Source {
    #[default]
    Default,
    Environment,
    Flag,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Default => f.write_str("default"),
            Source::Environment => write!(f, "{}", VOCABULARY_VAR),
            Source::Flag => f.write_str("--vocabulary"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub vocabulary: Vocabulary,
    pub source: Source,
}

impl Config {
    /// Apply a command-line override, if any.
    pub fn with_override(self, vocabulary: Option<Vocabulary>) -> Self {
        match vocabulary {
            Some(vocabulary) => Config {
                vocabulary,
                source: Source::Flag,
            },
            None => self,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("EMOJI_SHORTCUTS_VOCABULARY: {0}")]
    InvalidVocabulary(#[from] MappingError),
}

/// Load configuration from the environment.
pub fn load() -> Result<Config, ConfigError> {
    from_value(env::var(VOCABULARY_VAR).ok())
}

/// Build configuration from the raw value of [`VOCABULARY_VAR`]. Unset or blank means default.
pub fn from_value(value: Option<String>) -> Result<Config, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(Config::default()),
        Some(v) => Ok(Config {
            vocabulary: v.parse()?,
            source: Source::Environment,
        }),
    }
}
