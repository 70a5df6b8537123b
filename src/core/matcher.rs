//! Pattern compiler: one boundary-aware regex per shortcut rule.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::core::mapping::{MappingTable, ShortcutRule};

/// Start of text, whitespace, or an opening bracket.
const LEADING_BOUNDARY: &str = r"(?:^|[\s(\[{])";
/// End of text, whitespace, a closing bracket, or sentence punctuation.
const TRAILING_BOUNDARY: &str = r"(?:$|[\s)\]}.,!?])";

/// Compiled size limit per rule.
pub const SIZE_LIMIT: usize = 1 << 20;

/// Matcher for one rule. Only the shortcut itself (capture group 1) is replaced.
#[derive(Clone, Debug)]
pub struct CompiledMatcher {
    regex: Regex,
    shortcut: String,
    replacement: String,
}

impl CompiledMatcher {
    pub fn new(rule: &ShortcutRule, size_limit: usize) -> Result<Self, regex::Error> {
        let pattern = format!(
            "{}({}){}",
            LEADING_BOUNDARY,
            regex::escape(&rule.shortcut),
            TRAILING_BOUNDARY
        );
        let regex = RegexBuilder::new(&pattern).size_limit(size_limit).build()?;
        Ok(Self {
            regex,
            shortcut: rule.shortcut.clone(),
            replacement: rule.wrapped_token(),
        })
    }

    pub fn shortcut(&self) -> &str {
        &self.shortcut
    }

    /// The wrapped token, e.g. `:yh_smile:`.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Byte range of the next standalone shortcut starting the search at `start`.
    /// Boundary characters before `start` are not visible to the search, except
    /// that `^` only ever matches at offset 0.
    pub fn find_at(&self, text: &str, start: usize) -> Option<Range<usize>> {
        self.regex
            .captures_at(text, start)
            .and_then(|caps| caps.get(1))
            .map(|m| m.range())
    }
}

/// Compile every rule of `table`, skipping (and logging) any that fail.
pub fn compile(table: &MappingTable) -> Vec<CompiledMatcher> {
    compile_with(table.rules(), SIZE_LIMIT)
}

pub fn compile_with(rules: &[ShortcutRule], size_limit: usize) -> Vec<CompiledMatcher> {
    rules
        .iter()
        .filter_map(|rule| match CompiledMatcher::new(rule, size_limit) {
            Ok(matcher) => Some(matcher),
            Err(e) => {
                log::warn!(
                    "Failed to compile pattern for shortcut '{}', skipping: {}",
                    rule.shortcut,
                    e
                );
                None
            }
        })
        .collect()
}
