//! Match model for the search engine.

/// Visual state of a match. The engine toggles this flag; interpreting it as
/// an actual color is the rendering collaborator's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchColor {
    #[default]
    Normal,
    Active,
}

/// One located occurrence of the search pattern.
///
/// Offsets are character offsets into the full buffer, with
/// `start <= end <= buffer.len_chars()`. Matches are owned by the engine's
/// current result set and replaced wholesale on the next search pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    pub start: usize,
    pub end: usize,
    pub color: MatchColor,
}

impl SearchMatch {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end,
            color: MatchColor::Normal,
        }
    }

    /// Length of the matched text in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Shift both offsets after an edit earlier in the buffer
    pub fn shift(&mut self, delta: isize) {
        self.start = (self.start as isize + delta).max(0) as usize;
        self.end = (self.end as isize + delta).max(0) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_len() {
        let m = SearchMatch::new(3, 8);
        assert_eq!(m.len(), 5);
        assert!(!m.is_empty());
    }

    #[test]
    fn test_match_shift() {
        let mut m = SearchMatch::new(10, 13);
        m.shift(-4);
        assert_eq!((m.start, m.end), (6, 9));
        m.shift(2);
        assert_eq!((m.start, m.end), (8, 11));
    }

    #[test]
    fn test_match_default_color() {
        assert_eq!(SearchMatch::new(0, 1).color, MatchColor::Normal);
    }
}
