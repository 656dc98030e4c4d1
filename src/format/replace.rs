//! Regex replacement rules and their application to selected lines.

use regex::Regex;
use tracing::trace;

use crate::buffer::TextBufferMut;

/// One search-and-replace rule: a pattern plus a replacement template
/// (`${n}` group references).
#[derive(Debug, Clone)]
pub struct ReplacePattern {
    pattern: Regex,
    replacement: String,
    replace_all: bool,
}

impl ReplacePattern {
    pub fn new(pattern: Regex, replacement: impl Into<String>) -> Self {
        Self {
            pattern,
            replacement: replacement.into(),
            replace_all: false,
        }
    }

    pub fn new_replace_all(pattern: Regex, replacement: impl Into<String>) -> Self {
        Self {
            pattern,
            replacement: replacement.into(),
            replace_all: true,
        }
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// A `$0` template reproduces the match verbatim; such rules stop the
    /// rule scan without editing the line.
    pub fn is_same_replace(&self) -> bool {
        self.replacement == "$0" || self.replacement == "${0}"
    }

    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// Apply the rule to one line (first occurrence, or all if constructed
    /// with `new_replace_all`).
    pub fn replace(&self, line: &str) -> String {
        if self.replace_all {
            self.pattern.replace_all(line, &self.replacement).into_owned()
        } else {
            self.pattern.replace(line, &self.replacement).into_owned()
        }
    }
}

/// Run a sequence of replacement rules over each line touched by the
/// selection. Per line, the first rule whose pattern matches is applied and
/// the rest are skipped; lines matching no rule are left untouched.
///
/// Returns the selection with offsets shifted through the edits.
pub fn apply_replace_patterns<B: TextBufferMut>(
    buffer: &mut B,
    sel_start: usize,
    sel_end: usize,
    rules: &[ReplacePattern],
) -> (usize, usize) {
    let len = buffer.len_chars();
    let sel_start = sel_start.min(len);
    let sel_end = sel_end.min(len).max(sel_start);

    let line_count = buffer
        .slice(sel_start..sel_end)
        .chars()
        .filter(|c| *c == '\n')
        .count()
        + 1;

    let mut new_start = sel_start;
    let mut new_end = sel_end;
    let mut line_start = buffer.line_start(sel_start);

    for _ in 0..line_count {
        let line_end = buffer.line_end(line_start);
        let line = buffer.slice(line_start..line_end);
        let mut new_line_len = line_end - line_start;

        if let Some(rule) = rules.iter().find(|r| r.matches(&line)) {
            if !rule.is_same_replace() {
                let replaced = rule.replace(&line);
                new_line_len = replaced.chars().count();
                let delta = new_line_len as isize - (line_end - line_start) as isize;
                buffer.replace(line_start..line_end, &replaced);
                trace!(line_start, delta, "applied line replacement");

                new_start = shift_through_edit(new_start, line_start, line_end, new_line_len, delta);
                new_end = shift_through_edit(new_end, line_start, line_end, new_line_len, delta);
            }
        }

        // Step past this line's newline (using the post-edit line length)
        line_start = line_start + new_line_len + 1;
        if line_start > buffer.len_chars() {
            break;
        }
    }

    let len = buffer.len_chars();
    (new_start.min(len), new_end.min(len))
}

/// Shift an offset across a whole-line replacement: offsets at or past the
/// old line end move by the length delta, offsets inside the line shift by
/// the delta clamped to the new line bounds.
fn shift_through_edit(
    offset: usize,
    line_start: usize,
    old_line_end: usize,
    new_line_len: usize,
    delta: isize,
) -> usize {
    if offset >= old_line_end {
        (offset as isize + delta).max(0) as usize
    } else if offset > line_start {
        let in_line = (offset - line_start) as isize + delta;
        line_start + in_line.clamp(0, new_line_len as isize) as usize
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{StringBuffer, TextBuffer};

    fn re(s: &str) -> Regex {
        Regex::new(s).unwrap()
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let mut buf = StringBuffer::from_text("- [x] done");
        let rules = vec![
            ReplacePattern::new(re(r"^(\s*)([-*+]\s\[[xX]\]\s)"), "${1}CHECKED "),
            ReplacePattern::new(re(r"^(\s*)([-*+]\s)"), "${1}BULLET "),
        ];
        apply_replace_patterns(&mut buf, 0, 0, &rules);
        assert_eq!(buf.content(), "CHECKED done");
    }

    #[test]
    fn test_unmatched_line_untouched() {
        let mut buf = StringBuffer::from_text("plain text");
        let rules = vec![ReplacePattern::new(re(r"^(\s*)(#\s)"), "${1}")];
        apply_replace_patterns(&mut buf, 0, 5, &rules);
        assert_eq!(buf.content(), "plain text");
    }

    #[test]
    fn test_same_replace_stops_scan() {
        let mut buf = StringBuffer::from_text("keep me");
        let rules = vec![
            ReplacePattern::new(re(r"^(keep)"), "$0"),
            ReplacePattern::new(re(r"^(\w+)"), "CHANGED"),
        ];
        apply_replace_patterns(&mut buf, 0, 0, &rules);
        assert_eq!(buf.content(), "keep me");
    }

    #[test]
    fn test_multi_line_selection_edits_each_line() {
        let mut buf = StringBuffer::from_text("one\ntwo\nthree");
        let rules = vec![ReplacePattern::new(re(r"^()"), "> ")];
        // Selection spans lines 0 and 1 only
        apply_replace_patterns(&mut buf, 1, 5, &rules);
        assert_eq!(buf.content(), "> one\n> two\nthree");
    }

    #[test]
    fn test_selection_shifts_with_edits() {
        let mut buf = StringBuffer::from_text("aaa\nbbb");
        let rules = vec![ReplacePattern::new(re(r"^()"), "-- ")];
        let (s, e) = apply_replace_patterns(&mut buf, 1, 5, &rules);
        assert_eq!(buf.content(), "-- aaa\n-- bbb");
        // Each offset keeps pointing at the same character after its line
        // gained a "-- " prefix
        assert_eq!((s, e), (4, 11));
    }

    #[test]
    fn test_offsets_clamp_when_line_shrinks() {
        let mut buf = StringBuffer::from_text("### x");
        let rules = vec![ReplacePattern::new(re(r"^(\s{0,3})### "), "${1}")];
        let (s, e) = apply_replace_patterns(&mut buf, 2, 5, &rules);
        assert_eq!(buf.content(), "x");
        assert!(s <= buf.len_chars() && e <= buf.len_chars());
    }
}
