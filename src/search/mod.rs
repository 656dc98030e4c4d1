//! Incremental text search and replace.
//!
//! The engine finds, tracks and replaces occurrences of a pattern within a
//! mutable text buffer while keeping an active-match cursor and shifting the
//! remaining match offsets after each edit. Debouncing of search-as-you-type
//! input is the caller's responsibility; every operation here is a single
//! synchronous pass.

mod engine;
mod matches;
mod options;
mod selection;

pub use engine::{ActiveIndexMode, SearchEngine, SearchReport};
pub use matches::{MatchColor, SearchMatch};
pub use options::SearchOptions;
pub use selection::Selection;
