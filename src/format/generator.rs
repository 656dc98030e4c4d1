//! Builders turning a prefix pattern set into ordered replacement rules.

use regex::Regex;

use super::pattern_set::PrefixPatternSet;
use super::replace::ReplacePattern;

/// Build one rule per pattern in the set: patterns other than `target` map
/// to `target_replacement` (achieving the target prefix), `target` itself
/// maps to `alternative_replacement`.
pub fn replace_with_target_pattern_or_alternative(
    set: &PrefixPatternSet,
    target: &Regex,
    target_replacement: &str,
    alternative_replacement: &str,
) -> Vec<ReplacePattern> {
    set.patterns()
        .iter()
        .map(|pattern| {
            let replacement = if pattern.as_str() == target.as_str() {
                alternative_replacement
            } else {
                target_replacement
            };
            ReplacePattern::new(pattern.clone(), replacement)
        })
        .collect()
}

/// Build rules converting any recognized prefix into the target prefix; a
/// line already carrying the target prefix has it stripped down to its
/// captured indent (toggle-off).
pub fn replace_with_target_prefix_or_remove(
    set: &PrefixPatternSet,
    target: &Regex,
    target_replacement: &str,
) -> Vec<ReplacePattern> {
    // "${1}" keeps only the whitespace captured before the prefix
    replace_with_target_pattern_or_alternative(set, target, target_replacement, "${1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{StringBuffer, TextBuffer};
    use crate::format::replace::apply_replace_patterns;

    fn re(s: &str) -> Regex {
        Regex::new(s).unwrap()
    }

    fn simple_set() -> (PrefixPatternSet, Regex) {
        let bullet = re(r"^(\s*)([-]\s)");
        let set = PrefixPatternSet::new(vec![
            re(r"^(\s*)(\d+\.\s)"),
            bullet.clone(),
            re(r"^(\s*)"),
        ])
        .unwrap();
        (set, bullet)
    }

    fn run(rules: &[ReplacePattern], text: &str) -> String {
        let mut buf = StringBuffer::from_text(text);
        apply_replace_patterns(&mut buf, 0, 0, rules);
        buf.content()
    }

    #[test]
    fn test_other_prefix_becomes_target() {
        let (set, bullet) = simple_set();
        let rules = replace_with_target_prefix_or_remove(&set, &bullet, "${1}- ");
        assert_eq!(run(&rules, "3. item"), "- item");
    }

    #[test]
    fn test_target_prefix_is_removed() {
        let (set, bullet) = simple_set();
        let rules = replace_with_target_prefix_or_remove(&set, &bullet, "${1}- ");
        assert_eq!(run(&rules, "  - item"), "  item");
    }

    #[test]
    fn test_plain_line_gets_prefix_inserted() {
        let (set, bullet) = simple_set();
        let rules = replace_with_target_prefix_or_remove(&set, &bullet, "${1}- ");
        assert_eq!(run(&rules, "  item"), "  - item");
    }

    #[test]
    fn test_alternative_replacement_on_target() {
        let (set, bullet) = simple_set();
        let rules =
            replace_with_target_pattern_or_alternative(&set, &bullet, "${1}- [ ] ", "${1}- [x] ");
        assert_eq!(run(&rules, "- item"), "- [x] item");
        assert_eq!(run(&rules, "plain"), "- [ ] plain");
    }
}
