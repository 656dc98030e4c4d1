//! Ordered-list renumbering.
//!
//! Flat collaborator contract: given a cursor inside a contiguous run of
//! ordered-list lines sharing one indent, renumber the run sequentially
//! continuing from the first item's number, preserving indentation. Nested
//! multi-level renumbering is out of scope.

use anyhow::{bail, Result};
use regex::Regex;
use tracing::trace;

use crate::buffer::TextBufferMut;

/// An ordered-list prefix pattern with the group layout the renumberer
/// relies on: group 1 is the indent, group 3 the list number.
#[derive(Debug, Clone)]
pub struct OrderedListPattern {
    pattern: Regex,
}

struct NumberedLine {
    indent: String,
    number: u64,
    // Char offsets of the number within the line
    num_start: usize,
    num_end: usize,
}

impl OrderedListPattern {
    pub fn new(pattern: Regex) -> Result<Self> {
        if pattern.captures_len() < 4 {
            bail!(
                "ordered list pattern `{}` must capture indent (group 1) and number (group 3)",
                pattern
            );
        }
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Whether the line carries this ordered-list prefix with the given indent
    fn parse_with_indent(&self, line: &str, indent: Option<&str>) -> Option<NumberedLine> {
        let caps = self.pattern.captures(line)?;
        let line_indent = caps.get(1)?.as_str();
        if let Some(required) = indent {
            if line_indent != required {
                return None;
            }
        }
        let num = caps.get(3)?;
        let number: u64 = num.as_str().parse().ok()?;
        let num_start = line[..num.start()].chars().count();
        let num_end = num_start + num.as_str().chars().count();
        Some(NumberedLine {
            indent: line_indent.to_string(),
            number,
            num_start,
            num_end,
        })
    }
}

/// Renumber the contiguous same-indent ordered-list run containing `cursor`.
/// Lines outside a run, or runs whose numbers are not numeric, are left
/// untouched.
pub fn renumber_ordered_list<B: TextBufferMut>(
    buffer: &mut B,
    cursor: usize,
    list: &OrderedListPattern,
) {
    let cursor = cursor.min(buffer.len_chars());
    let mut run_start = buffer.line_start(cursor);

    let cursor_line = buffer.slice(run_start..buffer.line_end(run_start));
    let Some(parsed) = list.parse_with_indent(&cursor_line, None) else {
        return;
    };
    let indent = parsed.indent;

    // Walk up to the top of the run
    while run_start > 0 {
        let prev_start = buffer.line_start(run_start - 1);
        let prev = buffer.slice(prev_start..buffer.line_end(prev_start));
        if list.parse_with_indent(&prev, Some(&indent)).is_none() {
            break;
        }
        run_start = prev_start;
    }

    // Walk down, numbering sequentially from the first item's number
    let first = buffer.slice(run_start..buffer.line_end(run_start));
    let Some(first_parsed) = list.parse_with_indent(&first, Some(&indent)) else {
        return;
    };
    let mut next = first_parsed.number;
    let mut line_start = run_start;

    loop {
        let line_end = buffer.line_end(line_start);
        let line = buffer.slice(line_start..line_end);
        let Some(item) = list.parse_with_indent(&line, Some(&indent)) else {
            break;
        };

        if item.number != next {
            trace!(line_start, from = item.number, to = next, "renumbered item");
            buffer.replace(
                line_start + item.num_start..line_start + item.num_end,
                &next.to_string(),
            );
        }
        next += 1;

        let line_end = buffer.line_end(line_start);
        if line_end >= buffer.len_chars() {
            break;
        }
        line_start = line_end + 1;
    }
}
