//! prosemark - search and markup transforms for plain-text notes
//!
//! This crate provides the text-manipulation core of a markup note editor:
//! incremental search and replace over an editable buffer, and per-dialect
//! format actions (headings, lists, checkboxes, inline styles) for markdown,
//! asciidoc, and wikitext.

pub mod buffer;
pub mod format;
pub mod search;

// Re-export commonly used types
pub use buffer::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
pub use format::{apply_action, ActionTable, FormatAction, FormatConfig};
pub use search::{SearchEngine, SearchOptions, SearchReport, Selection};
