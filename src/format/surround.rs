//! Inline surround toggling (bold/italic/code style wraps).

use crate::buffer::TextBufferMut;

/// Markers for one inline wrap: the text is surrounded by
/// `prefix + delim ... delim + suffix`.
///
/// Plain delimiters (markdown `**bold**`) use an empty prefix and suffix;
/// attribute-role wraps (asciidoc `[.underline]#text#`) carry the role in the
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineWrap {
    pub prefix: String,
    pub delim: String,
    pub suffix: String,
}

impl InlineWrap {
    pub fn new(
        prefix: impl Into<String>,
        delim: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            delim: delim.into(),
            suffix: suffix.into(),
        }
    }

    /// Symmetric wrap with only a delimiter (`**`, `_`, `` ` ``)
    pub fn delimiter(delim: impl Into<String>) -> Self {
        Self::new("", delim, "")
    }

    fn open(&self) -> String {
        format!("{}{}", self.prefix, self.delim)
    }

    fn close(&self) -> String {
        format!("{}{}", self.delim, self.suffix)
    }
}

/// Toggle an inline wrap around the selection and return the new selection.
///
/// Cases, in priority order:
/// 1. Selection is exactly the wrapped content with the full markers directly
///    outside it: both marker runs are removed, selection shifts left.
/// 2. Selection includes the markers at its own boundaries and has a
///    non-empty core: the markers inside the selection are stripped.
/// 3. Otherwise the markers are inserted around the selection.
/// 4. Empty selection: markers are inserted at the cursor with the cursor
///    placed between them.
///
/// All context probes are bounds-checked; never panics for a selection
/// within buffer bounds.
pub fn toggle_inline_surround<B: TextBufferMut>(
    buffer: &mut B,
    sel_start: usize,
    sel_end: usize,
    wrap: &InlineWrap,
) -> (usize, usize) {
    let len = buffer.len_chars();
    let start = sel_start.min(sel_end).min(len);
    let end = sel_start.max(sel_end).min(len);

    let open = wrap.open();
    let close = wrap.close();
    let ol = open.chars().count();
    let cl = close.chars().count();

    let selected = buffer.slice(start..end);

    // Markers directly around the selection: remove the outer wrap. Also
    // covers a cursor sitting between freshly inserted markers.
    if start >= ol && end + cl <= len {
        let flanked = buffer.slice(start - ol..end + cl);
        if flanked == format!("{}{}{}", open, selected, close) {
            buffer.replace(start - ol..end + cl, &selected);
            return (start - ol, end - ol);
        }
    }

    // Cursor only: insert the markers and leave the cursor between them
    if start == end {
        buffer.insert(start, &format!("{}{}", open, close));
        return (start + ol, start + ol);
    }

    // Markers inside the selection bounds with a non-empty core: strip them
    let sel_len = end - start;
    if sel_len > ol + cl {
        let starts_with_open = buffer.slice(start..start + ol) == open;
        let ends_with_close = buffer.slice(end - cl..end) == close;
        if starts_with_open && ends_with_close {
            let core: String = selected
                .chars()
                .skip(ol)
                .take(sel_len - ol - cl)
                .collect();
            buffer.replace(start..end, &core);
            return (start, end - ol - cl);
        }
    }

    // Default: wrap the selection; insert the closing run first so the start
    // offset stays valid
    buffer.insert(end, &close);
    buffer.insert(start, &open);
    (start + ol, end + ol)
}
