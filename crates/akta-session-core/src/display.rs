use std::borrow::Cow;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Compact-display truncation: the input unchanged when it fits within
/// `max_len` characters, otherwise the first `max_len` characters followed
/// by the ellipsis marker. Char-based, so multi-byte input never splits.
pub fn truncate_text(text: &str, max_len: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_len {
        return Cow::Borrowed(text);
    }
    let mut out: String = text.chars().take(max_len).collect();
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}
