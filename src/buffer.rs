//! Text buffer traits and implementations.
//!
//! Provides `TextBuffer` (read-only) and `TextBufferMut` (read-write) traits
//! that abstract over different buffer backends (String for small texts, Rope
//! for large documents). All offsets are character offsets.

use ropey::Rope;
use std::ops::Range;

/// Read-only view into a text buffer.
/// Abstracts over Rope (large documents) and String (small texts).
pub trait TextBuffer {
    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Total length in bytes
    fn len_bytes(&self) -> usize;

    /// Check if buffer is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Get slice of text as String (by character indices)
    fn slice(&self, range: Range<usize>) -> String;

    /// Get full content as String (may be expensive for large buffers)
    fn content(&self) -> String;

    /// Offset of the first character of the line containing `offset`.
    /// Lines are `\n`-separated; CRLF input must be normalized by the caller.
    fn line_start(&self, offset: usize) -> usize;

    /// Offset of the `\n` at or after `offset` (buffer length if none)
    fn line_end(&self, offset: usize) -> usize;
}

/// Mutable buffer operations. Extends TextBuffer.
pub trait TextBufferMut: TextBuffer {
    /// Insert text at character offset
    fn insert(&mut self, offset: usize, text: &str);

    /// Remove text in character range
    fn remove(&mut self, range: Range<usize>);

    /// Replace text in range with new text (atomic operation)
    fn replace(&mut self, range: Range<usize>, text: &str) {
        self.remove(range.clone());
        self.insert(range.start, text);
    }
}

// =============================================================================
// StringBuffer - for small texts and tests
// =============================================================================

/// TextBuffer implementation wrapping String.
#[derive(Debug, Clone, Default)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a StringBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Convert char offset to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl TextBuffer for StringBuffer {
    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn len_bytes(&self) -> usize {
        self.text.len()
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.text.chars().skip(start).take(end - start).collect()
    }

    fn content(&self) -> String {
        self.text.clone()
    }

    fn line_start(&self, offset: usize) -> usize {
        let clamped = offset.min(self.len_chars());
        let mut start = 0;
        for (i, ch) in self.text.chars().enumerate() {
            if i >= clamped {
                break;
            }
            if ch == '\n' {
                start = i + 1;
            }
        }
        start
    }

    fn line_end(&self, offset: usize) -> usize {
        let len = self.len_chars();
        let clamped = offset.min(len);
        self.text
            .chars()
            .enumerate()
            .skip(clamped)
            .find(|(_, ch)| *ch == '\n')
            .map(|(i, _)| i)
            .unwrap_or(len)
    }
}

impl TextBufferMut for StringBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert_str(byte_offset, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start_byte = self.char_to_byte(range.start);
        let end_byte = self.char_to_byte(range.end);
        self.text.replace_range(start_byte..end_byte, "");
    }
}

// =============================================================================
// RopeBuffer - for large multi-line documents
// =============================================================================

/// TextBuffer implementation wrapping ropey::Rope.
/// Used for multi-line documents with efficient operations on large files.
#[derive(Debug, Clone)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a RopeBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Access the underlying Rope for rope-specific operations
    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl Default for RopeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for RopeBuffer {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }

    fn line_start(&self, offset: usize) -> usize {
        let clamped = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(clamped);
        self.rope.line_to_char(line)
    }

    fn line_end(&self, offset: usize) -> usize {
        let len = self.rope.len_chars();
        let clamped = offset.min(len);
        let line = self.rope.char_to_line(clamped);
        if line + 1 < self.rope.len_lines() {
            // Line has a trailing newline; end is the char before it
            self.rope.line_to_char(line + 1) - 1
        } else {
            len
        }
    }
}

impl TextBufferMut for RopeBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert(clamped, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_buffer_basic() {
        let buf = StringBuffer::from_text("hello");
        assert_eq!(buf.len_chars(), 5);
        assert_eq!(buf.len_bytes(), 5);
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_string_buffer_utf8() {
        let buf = StringBuffer::from_text("héllo");
        assert_eq!(buf.len_chars(), 5);
        assert_eq!(buf.len_bytes(), 6); // é is 2 bytes
        assert_eq!(buf.slice(1..2), "é");
    }

    #[test]
    fn test_string_buffer_replace() {
        let mut buf = StringBuffer::from_text("hello world");
        buf.replace(6..11, "there");
        assert_eq!(buf.content(), "hello there");
    }

    #[test]
    fn test_string_buffer_line_bounds() {
        let buf = StringBuffer::from_text("one\ntwo\nthree");
        assert_eq!(buf.line_start(0), 0);
        assert_eq!(buf.line_end(0), 3);
        assert_eq!(buf.line_start(5), 4);
        assert_eq!(buf.line_end(5), 7);
        assert_eq!(buf.line_start(9), 8);
        assert_eq!(buf.line_end(9), 13);
    }

    #[test]
    fn test_string_buffer_line_bounds_at_newline() {
        let buf = StringBuffer::from_text("one\ntwo");
        // Offset 3 is the newline itself; it belongs to the first line
        assert_eq!(buf.line_start(3), 0);
        assert_eq!(buf.line_end(3), 3);
    }

    #[test]
    fn test_rope_buffer_replace() {
        let mut buf = RopeBuffer::from_text("hello\nworld");
        buf.replace(6..11, "there");
        assert_eq!(buf.content(), "hello\nthere");
    }

    #[test]
    fn test_rope_buffer_line_bounds() {
        let buf = RopeBuffer::from_text("one\ntwo\nthree");
        assert_eq!(buf.line_start(5), 4);
        assert_eq!(buf.line_end(5), 7);
        assert_eq!(buf.line_end(10), 13);
    }

    #[test]
    fn test_rope_buffer_line_end_no_trailing_newline() {
        let buf = RopeBuffer::from_text("only line");
        assert_eq!(buf.line_end(4), 9);
    }

    #[test]
    fn test_slice_out_of_bounds_clamps() {
        let buf = StringBuffer::from_text("short");
        assert_eq!(buf.slice(3..100), "rt");
        assert_eq!(buf.slice(10..20), "");
    }

    #[test]
    fn test_slice_reversed_range_is_empty() {
        let buf = StringBuffer::from_text("some text");
        assert_eq!(buf.slice(7..3), "");
        let buf = RopeBuffer::from_text("some text");
        assert_eq!(buf.slice(7..3), "");
    }
}
