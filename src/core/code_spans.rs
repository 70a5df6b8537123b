//! Code-span masking: fenced (```` ``` ````) and inline (`` ` ``) code is swapped for
//! placeholders before substitution and spliced back afterwards.
//!
//! A placeholder is `<sentinel><index><sentinel>`, where the sentinel is a Unicode
//! noncharacter absent from the message and the index is a decimal position in the
//! span list.

use std::ops::RangeInclusive;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Unicode noncharacters; never part of interchanged text, tried in order.
const SENTINELS: RangeInclusive<char> = '\u{FDD0}'..='\u{FDEF}';

static FENCED: OnceLock<Regex> = OnceLock::new();
static INLINE: OnceLock<Regex> = OnceLock::new();

fn fenced() -> &'static Regex {
    FENCED.get_or_init(|| Regex::new(r"(?s)```.*?```").expect("fenced code pattern is valid"))
}

fn inline() -> &'static Regex {
    INLINE.get_or_init(|| Regex::new(r"`[^`\n]+`").expect("inline code pattern is valid"))
}

/// True when the whole message (ignoring surrounding whitespace) is one code block
/// or one inline code span.
pub fn is_whole_code(message: &str) -> bool {
    let trimmed = message.trim();
    if trimmed.starts_with("```") && trimmed.ends_with("```") {
        return true;
    }
    trimmed.starts_with('`')
        && trimmed.ends_with('`')
        && trimmed.matches('`').count() == 2
}

/// Spans extracted from one message, in extraction order.
#[derive(Debug)]
pub struct CodeSpans {
    sentinel: char,
    spans: Vec<String>,
}

impl CodeSpans {
    /// Mask every code span of `message`. Fenced blocks go first so a fence holding
    /// single backticks is never split. Unterminated delimiters stay as plain text.
    ///
    /// Returns `None` when every sentinel already occurs in the message.
    pub fn extract(message: &str) -> Option<(String, CodeSpans)> {
        let mut candidates = SENTINELS;
        let sentinel = candidates.find(|c| !message.contains(*c))?;
        let mut spans = CodeSpans {
            sentinel,
            spans: Vec::new(),
        };

        let masked = fenced().replace_all(message, |caps: &Captures<'_>| {
            spans.push(caps[0].to_string())
        });
        let masked = inline()
            .replace_all(&masked, |caps: &Captures<'_>| {
                // an inline span may swallow a fence placeholder; store original text
                let verbatim = spans.restore(&caps[0]);
                spans.push(verbatim)
            })
            .into_owned();

        Some((masked, spans))
    }

    /// Replace each placeholder in `text` with its span.
    pub fn restore(&self, text: &str) -> String {
        if self.spans.is_empty() || !text.contains(self.sentinel) {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len());
        // placeholders come in sentinel pairs, so odd parts are indices
        for (i, part) in text.split(self.sentinel).enumerate() {
            if i % 2 == 0 {
                out.push_str(part);
                continue;
            }
            match part.parse::<usize>().ok().and_then(|idx| self.spans.get(idx)) {
                Some(span) => out.push_str(span),
                None => {
                    out.push(self.sentinel);
                    out.push_str(part);
                    out.push(self.sentinel);
                }
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn spans(&self) -> &[String] {
        &self.spans
    }

    pub fn sentinel(&self) -> char {
        self.sentinel
    }

    fn push(&mut self, span: String) -> String {
        let placeholder = format!("{0}{1}{0}", self.sentinel, self.spans.len());
        self.spans.push(span);
        placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_fenced_block_is_code() {
        assert!(is_whole_code("```\ncode here\n```"));
        assert!(is_whole_code("  ```rust\nfn main() {}\n```\n"));
    }

    #[test]
    fn whole_inline_span_is_code() {
        assert!(is_whole_code("`code`"));
        assert!(!is_whole_code("`a` and `b`"));
    }

    #[test]
    fn text_is_not_whole_code() {
        assert!(!is_whole_code("Just text"));
        assert!(!is_whole_code("Some `code` here"));
        assert!(!is_whole_code("`"));
        assert!(!is_whole_code(""));
    }

    #[test]
    fn extract_without_code_is_identity() {
        let (masked, spans) = CodeSpans::extract("Hello :)").unwrap();
        assert_eq!(masked, "Hello :)");
        assert!(spans.is_empty());
    }

    #[test]
    fn extract_masks_inline_span() {
        let (masked, spans) = CodeSpans::extract("Use `:)` for smiley").unwrap();
        assert!(!masked.contains('`'));
        assert!(!masked.contains(":)"));
        assert_eq!(spans.spans(), ["`:)`"]);
        assert_eq!(spans.restore(&masked), "Use `:)` for smiley");
    }

    #[test]
    fn fenced_blocks_extracted_before_inline() {
        let msg = "see\n```\nlet s = `:)`;\n```\nand `x`";
        let (masked, spans) = CodeSpans::extract(msg).unwrap();
        assert_eq!(spans.spans(), ["```\nlet s = `:)`;\n```", "`x`"]);
        assert_eq!(spans.restore(&masked), msg);
    }

    #[test]
    fn inline_span_does_not_cross_lines() {
        let msg = "a ` b\nc ` d";
        let (masked, spans) = CodeSpans::extract(msg).unwrap();
        assert!(spans.is_empty());
        assert_eq!(masked, msg);
    }

    #[test]
    fn unterminated_fence_is_plain_text() {
        let msg = "look ```\n:) never closed";
        let (masked, spans) = CodeSpans::extract(msg).unwrap();
        assert!(spans.is_empty());
        assert_eq!(masked, msg);
    }

    #[test]
    fn many_spans_use_multi_digit_indices() {
        let msg: String = (0..25).map(|i| format!("`c{}` :) ", i)).collect();
        let (masked, spans) = CodeSpans::extract(&msg).unwrap();
        assert_eq!(spans.len(), 25);
        assert!(masked.contains(&format!("{0}24{0}", spans.sentinel())));
        assert_eq!(spans.restore(&masked), msg);
    }

    #[test]
    fn sentinel_avoids_characters_in_message() {
        let msg = "\u{FDD0}\u{FDD1} `x`";
        let (masked, spans) = CodeSpans::extract(msg).unwrap();
        assert_eq!(spans.sentinel(), '\u{FDD2}');
        assert_eq!(spans.restore(&masked), msg);
    }

    #[test]
    fn extract_gives_up_when_no_sentinel_is_free() {
        let msg: String = SENTINELS.collect();
        assert!(CodeSpans::extract(&msg).is_none());
    }

    #[test]
    fn inline_span_swallowing_fence_keeps_original_text() {
        let msg = "x `a ```b``` c` y";
        let (masked, spans) = CodeSpans::extract(msg).unwrap();
        assert!(spans.spans().iter().any(|s| s == "`a ```b``` c`"));
        assert_eq!(spans.restore(&masked), msg);
    }
}
