//! Validated, ordered sets of line-prefix patterns.

use anyhow::{bail, Result};
use regex::Regex;

/// An ordered sequence of mutually-exclusive line-prefix regexes for one
/// markup dialect (ordered list, heading, checkbox, unordered list, ...).
///
/// Ordering is the exclusivity mechanism: a checked-list line also matches
/// the plain unordered-list pattern, so the more specific pattern must come
/// first and consumers stop at the first match. The constructor enforces the
/// structural parts of that contract; per-dialect precedence is pinned by
/// generated-line tests.
#[derive(Debug, Clone)]
pub struct PrefixPatternSet {
    patterns: Vec<Regex>,
}

impl PrefixPatternSet {
    /// Build a set from ordered patterns.
    ///
    /// Fails if the set is empty, if a pattern lacks the indent capture
    /// group, or if a catch-all pattern (one matching the empty line) is in
    /// any position but the last. Malformed tables are a dialect data error,
    /// not a runtime condition.
    pub fn new(patterns: Vec<Regex>) -> Result<Self> {
        if patterns.is_empty() {
            bail!("prefix pattern set must not be empty");
        }
        let last = patterns.len() - 1;
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.captures_len() < 2 {
                bail!(
                    "prefix pattern `{}` must capture the leading indent as group 1",
                    pattern
                );
            }
            if i != last && pattern.is_match("") {
                bail!(
                    "catch-all prefix pattern `{}` must be the last entry",
                    pattern
                );
            }
        }
        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// First pattern matching the line, together with its position.
    pub fn first_match(&self, line: &str) -> Option<(usize, &Regex)> {
        self.patterns
            .iter()
            .enumerate()
            .find(|(_, p)| p.is_match(line))
    }

    /// Whether `pattern` is this set's entry at any position (compared by
    /// source text, the regex crate has no pattern identity).
    pub fn position_of(&self, pattern: &Regex) -> Option<usize> {
        self.patterns
            .iter()
            .position(|p| p.as_str() == pattern.as_str())
    }
}
