//! Text formatting helper.

/// Literal prefix of every string produced by [`format_text`].
pub const TEXT_PREFIX: &str = "This is the input text: ";

/// Embeds `text` verbatim after [`TEXT_PREFIX`].
///
/// Total over all inputs: empty strings, non-ASCII text and text that itself
/// contains the prefix are all copied unchanged.
///
/// # Example
/// ```
/// use arithprop_core::text::format_text;
/// assert_eq!(format_text("hello"), "This is the input text: hello");
/// ```
pub fn format_text(text: &str) -> String {
    let mut out = String::with_capacity(TEXT_PREFIX.len() + text.len());
    out.push_str(TEXT_PREFIX);
    out.push_str(text);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_text() {
        assert_eq!(format_text("hello"), "This is the input text: hello");
    }

    #[test]
    fn test_format_text_edge_cases() {
        assert_eq!(format_text(""), TEXT_PREFIX);
        assert_eq!(format_text("héllo wörld ✓"), "This is the input text: héllo wörld ✓");
        assert_eq!(
            format_text(TEXT_PREFIX),
            "This is the input text: This is the input text: "
        );
        assert_eq!(format_text("{text}"), "This is the input text: {text}");
        assert_eq!(format_text("a\nb\0c"), "This is the input text: a\nb\0c");
    }
}
