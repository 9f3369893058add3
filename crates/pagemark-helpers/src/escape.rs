//! HTML and URL percent-escaping.

/// Escape HTML special characters.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with entities. The result is safe in
/// HTML body text and inside a quoted attribute value. It is returned as a
/// plain string, not as [`Html`](pagemark_core::Html), so a template will
/// still treat it as text.
#[must_use]
pub fn escape(s: &str) -> String {
    html_escape::encode_quoted_attribute(s).into_owned()
}

/// Percent-encode a string for use in a URL query or path segment.
///
/// ASCII letters, digits and `-_.~` are kept; every other byte of the UTF-8
/// encoding, space included, becomes `%XX`. A space is `%20` rather than `+`
/// since asset paths are built from this output.
#[must_use]
pub fn escape_url(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_metacharacters() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");

        let escaped = escape(r#"<a href="x" title='y'>&</a>"#);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        assert!(escaped.split('&').skip(1).all(|rest| rest.contains(';')));
    }

    #[test]
    fn test_escape_passes_plain_text() {
        assert_eq!(escape(""), "");
        assert_eq!(escape("hello world"), "hello world");
        assert_eq!(escape("你好，世界！"), "你好，世界！");
    }

    #[test]
    fn test_escape_url() {
        assert_eq!(escape_url("hello world"), "hello%20world");
        assert_eq!(escape_url("a+b"), "a%2Bb");
        assert_eq!(escape_url("a&b=c"), "a%26b%3Dc");
        assert_eq!(escape_url("main-v1.2_x~"), "main-v1.2_x~");
        assert_eq!(escape_url("100%20"), "100%2520");
        assert_eq!(escape_url(""), "");
    }

    #[test]
    fn test_escape_url_non_ascii() {
        assert_eq!(escape_url("é"), "%C3%A9");
        assert_eq!(escape_url("../x"), "..%2Fx");
    }
}
