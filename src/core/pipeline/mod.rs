//! Pipeline: code-span masking → shortcut substitution → span restoration.
//!
//! One [`Engine`] per vocabulary is compiled on first use and shared read-only
//! for the rest of the process.

use std::sync::OnceLock;

use crate::core::code_spans::{self, CodeSpans};
use crate::core::mapping::{MappingTable, Vocabulary};
use crate::core::matcher::{self, CompiledMatcher};
use crate::core::substitute::substitute;

/// Compiled matchers for one vocabulary.
#[derive(Debug)]
pub struct Engine {
    vocabulary: Vocabulary,
    matchers: Vec<CompiledMatcher>,
}

impl Engine {
    pub fn new(table: &MappingTable) -> Self {
        let matchers = matcher::compile(table);
        if matchers.len() < table.len() {
            log::warn!(
                "{} vocabulary: {} of {} rules compiled",
                table.vocabulary(),
                matchers.len(),
                table.len()
            );
        }
        Self {
            vocabulary: table.vocabulary(),
            matchers,
        }
    }

    /// Engine without rules: every message comes back unchanged.
    pub fn empty(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            matchers: Vec::new(),
        }
    }

    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    pub fn matchers(&self) -> &[CompiledMatcher] {
        &self.matchers
    }

    pub fn rule_count(&self) -> usize {
        self.matchers.len()
    }

    /// Replace every standalone shortcut outside code spans. Never fails.
    pub fn process(&self, message: &str) -> String {
        if message.is_empty() {
            return String::new();
        }
        if code_spans::is_whole_code(message) {
            return message.to_string();
        }
        let Some((masked, spans)) = CodeSpans::extract(message) else {
            log::debug!("No free placeholder sentinel, leaving message unchanged");
            return message.to_string();
        };
        let substituted = substitute(&masked, &self.matchers);
        spans.restore(&substituted)
    }
}

static YAHOO: OnceLock<Engine> = OnceLock::new();
static STANDARD: OnceLock<Engine> = OnceLock::new();

/// Shared engine for `vocabulary`, built on first access.
pub fn engine(vocabulary: Vocabulary) -> &'static Engine {
    let cell = match vocabulary {
        Vocabulary::Yahoo => &YAHOO,
        Vocabulary::Standard => &STANDARD,
    };
    cell.get_or_init(|| build_engine(vocabulary))
}

fn build_engine(vocabulary: Vocabulary) -> Engine {
    match MappingTable::load(vocabulary) {
        Ok(table) => {
            let engine = Engine::new(&table);
            log::debug!(
                "Compiled {} shortcut rules for {} vocabulary",
                engine.rule_count(),
                vocabulary
            );
            engine
        }
        Err(e) => {
            log::error!(
                "{} ({}): {}; shortcuts disabled",
                vocabulary.source(),
                vocabulary,
                e
            );
            Engine::empty(vocabulary)
        }
    }
}

/// Process a message with the default vocabulary.
pub fn process_message(raw: &str) -> String {
    process_message_with(Vocabulary::default(), raw)
}

pub fn process_message_with(vocabulary: Vocabulary, raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    engine(vocabulary).process(raw)
}
