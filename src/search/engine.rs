//! Incremental search/replace engine.
//!
//! Stateful controller over a caller-owned text buffer: finds all occurrences
//! of a query, tracks the active match, and performs single or iterated
//! replacement with offset-shifting of the remaining matches after each edit.
//!
//! The engine never holds a buffer reference between calls and never fires
//! callbacks; every operation takes the buffer explicitly and returns a
//! [`SearchReport`] the caller can feed to its "N/M" indicator.

use regex::{Regex, RegexBuilder};
use tracing::{debug, trace};

use crate::buffer::{TextBuffer, TextBufferMut};

use super::matches::{MatchColor, SearchMatch};
use super::options::SearchOptions;
use super::selection::Selection;

/// How `find` chooses the active match in a fresh result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveIndexMode {
    /// Pick the match closest to the captured selection
    Nearest,
    /// Preserve the previous active index, clamped to the new result count
    Keep,
    /// Activate the first match
    First,
    /// Activate an explicit index (clamped)
    At(usize),
}

/// Outcome of a find/next/previous/jump/replace operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchReport {
    /// No matches (empty query, empty result set, or no current match)
    NoMatches,
    /// `current` is 1-based for display
    Matches { current: usize, total: usize },
    /// Query failed to compile as a regex; carries the regex error message
    BadPattern(String),
}

impl SearchReport {
    /// `(current, total)` pair for a UI indicator; `total == -1` signals a
    /// bad pattern.
    pub fn display_counts(&self) -> (i64, i64) {
        match self {
            SearchReport::NoMatches => (0, 0),
            SearchReport::Matches { current, total } => (*current as i64, *total as i64),
            SearchReport::BadPattern(_) => (0, -1),
        }
    }
}

/// The search/replace engine.
///
/// Owns the current match list, the active index, the captured selection and
/// the search options. The buffer is passed into each operation; the caller
/// must serialize edits and searches (single-threaded, run-to-completion).
#[derive(Debug, Default)]
pub struct SearchEngine {
    matches: Vec<SearchMatch>,
    current: Option<usize>,
    options: SearchOptions,
    selection: Selection,
}

impl SearchEngine {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Change options. Takes effect on the next `find`.
    pub fn set_options(&mut self, options: SearchOptions) {
        self.options = options;
    }

    /// Current result set, in buffer order, with active/normal color flags.
    /// Intended for the highlight collaborator.
    pub fn matches(&self) -> &[SearchMatch] {
        &self.matches
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Index of the active match, if any
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Capture the user's selection for nearest-match arbitration and
    /// find-in-selection scoping. Reversed anchor/head pairs are normalized.
    pub fn capture_selection(&mut self, start: usize, end: usize) {
        self.selection = Selection::new(start.min(end), start.max(end));
    }

    pub fn clear_selection(&mut self) {
        self.selection.reset();
    }

    /// Discard the current result set
    pub fn clear(&mut self) {
        self.matches.clear();
        self.current = None;
    }

    /// Run a fresh search pass, replacing the previous result set.
    ///
    /// An empty query clears all matches. A query that fails to compile under
    /// `use_regex` yields `SearchReport::BadPattern` and leaves zero matches.
    pub fn find<B: TextBuffer>(
        &mut self,
        buffer: &B,
        query: &str,
        mode: ActiveIndexMode,
    ) -> SearchReport {
        let previous = self.current;
        self.clear();

        if query.is_empty() {
            return SearchReport::NoMatches;
        }

        let pattern = match self.compile_pattern(query) {
            Ok(p) => p,
            Err(message) => {
                debug!("search pattern failed to compile: {}", message);
                return SearchReport::BadPattern(message);
            }
        };

        let region_start;
        let haystack;
        if self.options.find_in_selection {
            if !self.selection.is_selected() {
                return SearchReport::NoMatches;
            }
            region_start = self.selection.start;
            haystack = buffer.slice(self.selection.start..self.selection.end);
        } else {
            region_start = 0;
            haystack = buffer.content();
        }

        self.load_matches(&pattern, &haystack, region_start);
        debug!(total = self.matches.len(), "search pass complete");

        if self.matches.is_empty() {
            return SearchReport::NoMatches;
        }

        let index = match mode {
            ActiveIndexMode::Nearest => self.nearby_match_index().unwrap_or(0),
            ActiveIndexMode::Keep => previous.unwrap_or(0).min(self.matches.len() - 1),
            ActiveIndexMode::First => 0,
            ActiveIndexMode::At(i) => i.min(self.matches.len() - 1),
        };
        self.activate(index);
        self.report()
    }

    /// Advance to the next match, wrapping from last to first.
    pub fn next(&mut self) -> SearchReport {
        if self.matches.is_empty() {
            return SearchReport::NoMatches;
        }
        let index = match self.current {
            Some(i) if i + 1 < self.matches.len() => i + 1,
            _ => 0,
        };
        self.activate(index);
        self.report()
    }

    /// Retreat to the previous match, wrapping from first to last.
    pub fn previous(&mut self) -> SearchReport {
        if self.matches.is_empty() {
            return SearchReport::NoMatches;
        }
        let index = match self.current {
            Some(i) if i > 0 => i - 1,
            _ => self.matches.len() - 1,
        };
        self.activate(index);
        self.report()
    }

    /// Activate an explicit match index. Out-of-range indices are ignored.
    pub fn jump(&mut self, index: usize) -> SearchReport {
        if self.matches.is_empty() {
            return SearchReport::NoMatches;
        }
        if index < self.matches.len() {
            self.activate(index);
        }
        self.report()
    }

    /// Activate the match nearest to the captured selection.
    pub fn jump_to_nearest(&mut self) -> SearchReport {
        if let Some(index) = self.nearby_match_index() {
            self.activate(index);
        }
        self.report()
    }

    /// Replace the active match and shift the remaining match offsets.
    ///
    /// Returns the report for the shrunken result set; the caller loops on
    /// `match_count` for replace-all behavior (see [`SearchEngine::replace_all`]).
    pub fn replace<B: TextBufferMut>(&mut self, buffer: &mut B, replacement: &str) -> SearchReport {
        let Some(index) = self.current else {
            return SearchReport::NoMatches;
        };
        if self.matches.is_empty() {
            return SearchReport::NoMatches;
        }

        let replacement = if self.options.preserve_case {
            lowercase_first_letter(replacement)
        } else {
            replacement.to_string()
        };

        let removed = self.matches.remove(index);
        buffer.replace(removed.start..removed.end, &replacement);

        let delta = replacement.chars().count() as isize - removed.len() as isize;
        for m in &mut self.matches[index..] {
            m.shift(delta);
        }
        trace!(
            start = removed.start,
            end = removed.end,
            delta,
            remaining = self.matches.len(),
            "replaced match"
        );

        if self.matches.is_empty() {
            self.current = None;
            return SearchReport::NoMatches;
        }

        let index = index.min(self.matches.len() - 1);
        self.activate(index);
        self.report()
    }

    /// Replace every match in the current result set.
    ///
    /// Each call to `replace` strictly removes one match and the result set is
    /// never re-scanned mid-loop, so this terminates after exactly the initial
    /// match count iterations even when the replacement re-matches the query.
    pub fn replace_all<B: TextBufferMut>(
        &mut self,
        buffer: &mut B,
        replacement: &str,
    ) -> SearchReport {
        let mut report = self.replace(buffer, replacement);
        while !self.matches.is_empty() {
            report = self.replace(buffer, replacement);
        }
        report
    }

    fn compile_pattern(&self, query: &str) -> Result<Regex, String> {
        let mut target = if self.options.use_regex {
            query.to_string()
        } else {
            regex::escape(query)
        };
        if self.options.match_whole_word {
            target = format!(r"\b{}\b", target);
        }
        RegexBuilder::new(&target)
            .case_insensitive(!self.options.match_case)
            .build()
            .map_err(|e| e.to_string())
    }

    fn load_matches(&mut self, pattern: &Regex, haystack: &str, region_start: usize) {
        // find_iter yields byte offsets; convert incrementally to char offsets
        let mut char_pos = 0;
        let mut byte_pos = 0;
        for m in pattern.find_iter(haystack) {
            char_pos += haystack[byte_pos..m.start()].chars().count();
            let start = char_pos;
            char_pos += haystack[m.start()..m.end()].chars().count();
            byte_pos = m.end();
            self.matches
                .push(SearchMatch::new(region_start + start, region_start + char_pos));
        }
    }

    /// Index of the match nearest to the captured selection: the first match
    /// starting past the selection, unless the one before it ends closer to
    /// the selection (ties favor the later match).
    fn nearby_match_index(&self) -> Option<usize> {
        if self.matches.is_empty() {
            return None;
        }
        for (i, m) in self.matches.iter().enumerate() {
            if m.start > self.selection.start {
                if i > 0 {
                    let last = &self.matches[i - 1];
                    let behind = self.selection.start.saturating_sub(last.end);
                    let ahead = m.start.saturating_sub(self.selection.end);
                    if behind < ahead {
                        return Some(i - 1);
                    }
                }
                return Some(i);
            }
        }
        Some(self.matches.len() - 1)
    }

    fn activate(&mut self, index: usize) {
        for m in &mut self.matches {
            m.color = MatchColor::Normal;
        }
        self.matches[index].color = MatchColor::Active;
        self.current = Some(index);
    }

    fn report(&self) -> SearchReport {
        match self.current {
            Some(i) if !self.matches.is_empty() => SearchReport::Matches {
                current: i + 1,
                total: self.matches.len(),
            },
            _ => SearchReport::NoMatches,
        }
    }
}

/// Lower-case the first character of the replacement iff it is a letter.
fn lowercase_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() => c.to_lowercase().chain(chars).collect(),
        _ => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::StringBuffer;

    #[test]
    fn test_empty_query_clears_matches() {
        let buf = StringBuffer::from_text("aaa");
        let mut engine = SearchEngine::default();
        engine.find(&buf, "a", ActiveIndexMode::First);
        assert_eq!(engine.match_count(), 3);

        let report = engine.find(&buf, "", ActiveIndexMode::First);
        assert_eq!(report, SearchReport::NoMatches);
        assert_eq!(engine.match_count(), 0);
    }

    #[test]
    fn test_bad_pattern_reported_not_panicking() {
        let buf = StringBuffer::from_text("text");
        let mut engine = SearchEngine::new(SearchOptions {
            use_regex: true,
            ..Default::default()
        });
        let report = engine.find(&buf, "[unclosed", ActiveIndexMode::First);
        assert!(matches!(report, SearchReport::BadPattern(_)));
        assert_eq!(report.display_counts().1, -1);
    }

    #[test]
    fn test_literal_query_escapes_metacharacters() {
        let buf = StringBuffer::from_text("1+1=2 111");
        let mut engine = SearchEngine::default();
        let report = engine.find(&buf, "1+1", ActiveIndexMode::First);
        assert_eq!(
            report,
            SearchReport::Matches {
                current: 1,
                total: 1
            }
        );
        assert_eq!(engine.matches()[0].start, 0);
    }

    #[test]
    fn test_unicode_offsets_are_char_offsets() {
        let buf = StringBuffer::from_text("héé cat héé cat");
        let mut engine = SearchEngine::default();
        engine.find(&buf, "cat", ActiveIndexMode::First);
        let m = engine.matches();
        assert_eq!((m[0].start, m[0].end), (4, 7));
        assert_eq!((m[1].start, m[1].end), (12, 15));
    }

    #[test]
    fn test_active_color_follows_current() {
        let buf = StringBuffer::from_text("x x x");
        let mut engine = SearchEngine::default();
        engine.find(&buf, "x", ActiveIndexMode::First);
        assert_eq!(engine.matches()[0].color, MatchColor::Active);
        engine.next();
        assert_eq!(engine.matches()[0].color, MatchColor::Normal);
        assert_eq!(engine.matches()[1].color, MatchColor::Active);
    }

    #[test]
    fn test_lowercase_first_letter() {
        assert_eq!(lowercase_first_letter("Cat"), "cat");
        assert_eq!(lowercase_first_letter("cat"), "cat");
        assert_eq!(lowercase_first_letter("9Cat"), "9Cat");
        assert_eq!(lowercase_first_letter(""), "");
    }
}
