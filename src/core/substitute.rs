//! Shortcut substitution over masked text.

use crate::core::matcher::CompiledMatcher;

/// Apply every matcher in order. Each rule replaces all of its standalone occurrences;
/// boundary characters around a shortcut are kept as they are.
pub fn substitute(text: &str, matchers: &[CompiledMatcher]) -> String {
    let mut result = text.to_string();
    for matcher in matchers {
        if let Some(replaced) = replace_standalone(&result, matcher) {
            result = replaced;
        }
    }
    result
}

/// Returns `None` when the rule does not occur, so untouched text is not copied.
fn replace_standalone(text: &str, matcher: &CompiledMatcher) -> Option<String> {
    let mut out: Option<String> = None;
    let mut last = 0;
    // Resume at the end of the shortcut, not of the whole match: the trailing
    // separator can be the leading separator of the next occurrence.
    while let Some(range) = matcher.find_at(text, last) {
        let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
        buf.push_str(&text[last..range.start]);
        buf.push_str(matcher.replacement());
        last = range.end;
    }
    out.map(|mut buf| {
        buf.push_str(&text[last..]);
        buf
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mapping::ShortcutRule;
    use crate::core::matcher::{SIZE_LIMIT, compile_with};

    fn matchers(rules: &[(&str, &str)]) -> Vec<CompiledMatcher> {
        let rules: Vec<ShortcutRule> = rules
            .iter()
            .map(|(s, t)| ShortcutRule::new(*s, *t))
            .collect();
        compile_with(&rules, SIZE_LIMIT)
    }

    #[test]
    fn replaces_only_the_shortcut() {
        let m = matchers(&[(":)", "smile")]);
        assert_eq!(substitute("Hello :)", &m), "Hello :smile:");
        assert_eq!(substitute("(:)) ok", &m), "(:smile:) ok");
        assert_eq!(substitute("yes :), sure", &m), "yes :smile:, sure");
    }

    #[test]
    fn replaces_every_occurrence() {
        let m = matchers(&[(":)", "smile")]);
        assert_eq!(substitute(":) :) :)", &m), ":smile: :smile: :smile:");
        assert_eq!(substitute(":)\n:)", &m), ":smile:\n:smile:");
    }

    #[test]
    fn back_to_back_shortcuts_are_left_alone() {
        let m = matchers(&[(":)", "smile")]);
        assert_eq!(substitute(":):)", &m), ":):)");
    }

    #[test]
    fn rules_apply_in_table_order() {
        // ":))" first, otherwise ":)" would match with ')' as trailing boundary
        let m = matchers(&[(":))", "laughing"), (":)", "smile")]);
        assert_eq!(substitute(":)) and :)", &m), ":laughing: and :smile:");

        let reversed = matchers(&[(":)", "smile"), (":))", "laughing")]);
        assert_eq!(substitute(":))", &reversed), ":smile:)");
    }

    #[test]
    fn inserted_tokens_are_not_rematched() {
        let m = matchers(&[(":)", "smile"), (":s", "worried")]);
        assert_eq!(substitute(":) :s", &m), ":smile: :worried:");
    }

    #[test]
    fn no_matchers_is_identity() {
        assert_eq!(substitute("Hello :)", &[]), "Hello :)");
    }

    #[test]
    fn non_ascii_text_around_shortcuts() {
        let m = matchers(&[(":)", "smile")]);
        assert_eq!(substitute("héllo :) ünïcode", &m), "héllo :smile: ünïcode");
    }
}
