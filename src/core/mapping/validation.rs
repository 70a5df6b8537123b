//! Table validation: disk format and conversion to ShortcutRule.

use std::collections::HashSet;

use serde::Deserialize;

use super::{MappingError, ShortcutRule};

/// JSON structure of one rule on disk.
#[derive(Debug, Deserialize)]
pub(crate) struct RuleEntry {
    pub shortcut: String,
    pub token: String,
}

/// Validate entries in order and convert them to rules. Rejects the whole table on the first problem.
pub(crate) fn validate_and_convert(
    entries: Vec<RuleEntry>,
) -> Result<Vec<ShortcutRule>, MappingError> {
    let mut seen = HashSet::new();
    let mut rules = Vec::with_capacity(entries.len());

    for (i, entry) in entries.into_iter().enumerate() {
        if entry.shortcut.is_empty() {
            return Err(MappingError::Validation(format!(
                "Rule at index {}: shortcut cannot be empty",
                i
            )));
        }
        // printable ASCII, no whitespace: whitespace is a boundary character
        if !entry.shortcut.chars().all(|c| c.is_ascii_graphic()) {
            return Err(MappingError::Validation(format!(
                "Shortcut '{}': must be printable ASCII without whitespace",
                entry.shortcut.escape_debug()
            )));
        }
        if entry.token.is_empty() {
            return Err(MappingError::Validation(format!(
                "Shortcut '{}': token cannot be empty",
                entry.shortcut
            )));
        }
        if !entry
            .token
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '+' | '-'))
        {
            return Err(MappingError::Validation(format!(
                "Shortcut '{}': token '{}' must contain only a-z, 0-9, '_', '+' and '-'",
                entry.shortcut,
                entry.token.escape_debug()
            )));
        }
        if !seen.insert(entry.shortcut.clone()) {
            return Err(MappingError::Validation(format!(
                "Duplicate shortcut '{}'",
                entry.shortcut
            )));
        }
        rules.push(ShortcutRule {
            shortcut: entry.shortcut,
            token: entry.token,
        });
    }

    // An inserted token must never contain a shortcut, or a later rule could rewrite it.
    for rule in &rules {
        let wrapped = rule.wrapped_token();
        if let Some(other) = rules.iter().find(|r| wrapped.contains(r.shortcut.as_str())) {
            return Err(MappingError::Validation(format!(
                "Token '{}' contains shortcut '{}'",
                wrapped, other.shortcut
            )));
        }
    }

    Ok(rules)
}
