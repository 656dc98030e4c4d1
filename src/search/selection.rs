//! Captured selection for scoped search.

/// The user's selection at the time a search was requested.
///
/// Captured explicitly by the caller; the engine never reads live editor
/// state. Character offsets, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A selection is active iff it covers at least one character
    pub fn is_selected(&self) -> bool {
        self.start != self.end
    }

    pub fn reset(&mut self) {
        self.start = 0;
        self.end = 0;
    }
}
