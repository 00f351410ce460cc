//! Programmatic text splices that keep the caret where the user expects it.

/// Text inserted by the Tab key.
pub const TAB_INDENT: &str = "  ";

/// A value after a splice, plus the char index the caret should land on once
/// the new value is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub value: String,
    pub caret: usize,
}

/// Replaces the char range `selection` (either order) with [`TAB_INDENT`].
///
/// Offsets are char indices, as reported by the input surface. Offsets past
/// the end clamp to the end of the document, so a stale selection never
/// panics.
pub fn insert_indent(value: &str, selection: (usize, usize)) -> Splice {
    let (start, end) = if selection.0 <= selection.1 {
        selection
    } else {
        (selection.1, selection.0)
    };
    let start_byte = byte_offset(value, start);
    let end_byte = byte_offset(value, end);

    let mut out = String::with_capacity(value.len() + TAB_INDENT.len());
    out.push_str(&value[..start_byte]);
    out.push_str(TAB_INDENT);
    out.push_str(&value[end_byte..]);

    let caret = value[..start_byte].chars().count() + TAB_INDENT.chars().count();
    Splice { value: out, caret }
}

/// Byte offset of char index `index`, clamped to `text.len()`.
fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map_or(text.len(), |(byte, _)| byte)
}
