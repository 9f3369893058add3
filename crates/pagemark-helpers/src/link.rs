//! Anchor tag builder.

use pagemark_core::Html;

use crate::escape::escape;

/// Build an anchor tag with escaped text and URL.
///
/// `attrs` are pre-formatted attribute fragments such as `class="nav"`. They
/// must not contain user input. They are joined with a single space and the
/// joined string is escaped as a whole, so fragments containing quotes come
/// out entity-encoded.
///
/// With no attributes the tag keeps a space before `>`:
/// `<a href="/x" >text</a>`.
#[must_use]
pub fn link(text: &str, url: &str, attrs: &[&str]) -> Html {
    let attributes = attrs.join(" ");
    Html::trusted(format!(
        r#"<a href="{}" {}>{}</a>"#,
        escape(url),
        escape(&attributes),
        escape(text)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_without_attributes() {
        assert_eq!(
            link("A&B", "http://x?y=1&z=2", &[]).as_str(),
            r#"<a href="http://x?y=1&amp;z=2" >A&amp;B</a>"#
        );
    }

    #[test]
    fn test_link_escapes_text_and_url() {
        let html = link("<b>hi</b>", r#"/a"onclick="x"#, &[]);
        assert_eq!(
            html.as_str(),
            r#"<a href="/a&quot;onclick=&quot;x" >&lt;b&gt;hi&lt;/b&gt;</a>"#
        );
    }

    #[test]
    fn test_link_joins_attributes() {
        let html = link("Home", "/", &["rel=nofollow", "target=_blank"]);
        assert_eq!(
            html.as_str(),
            r#"<a href="/" rel=nofollow target=_blank>Home</a>"#
        );
    }

    #[test]
    fn test_link_escapes_attribute_quotes() {
        let html = link("Home", "/", &[r#"class="nav""#]);
        assert_eq!(html.as_str(), r#"<a href="/" class=&quot;nav&quot;>Home</a>"#);
    }
}
