//! Trust-boundary pass-throughs and fixed markup.
//!
//! `html`, `html_attribute` and `url` re-tag a string as safe markup without
//! touching it. They exist for markup the application itself produced; any
//! string reaching them must not contain user input.

use pagemark_core::{Html, HtmlAttr, SafeUrl};

/// The XML declaration emitted at the top of XML documents.
pub const XML_PREAMBLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Mark a string as HTML body markup. **Must not contain user input.**
#[must_use]
pub fn html(s: &str) -> Html {
    Html::trusted(s)
}

/// Mark a string as an HTML attribute. **Must not contain user input.**
#[must_use]
pub fn html_attribute(s: &str) -> HtmlAttr {
    HtmlAttr::trusted(s)
}

/// Mark a string as a URL. **Must not contain user input.**
#[must_use]
pub fn url(s: &str) -> SafeUrl {
    SafeUrl::trusted(s)
}

/// The XML preamble as HTML markup.
///
/// Returned pre-marked so that auto-escaping template contexts do not mangle
/// the leading `<?`.
#[must_use]
pub fn xml_preamble() -> Html {
    Html::trusted(XML_PREAMBLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_throughs_are_verbatim() {
        let raw = r#"<em class="x">&amp;</em>"#;
        assert_eq!(html(raw).as_str(), raw);
        assert_eq!(html_attribute(r#"data-id="7""#).as_str(), r#"data-id="7""#);
        assert_eq!(url("/a?b=1&c=2").as_str(), "/a?b=1&c=2");
    }

    #[test]
    fn test_xml_preamble() {
        assert_eq!(
            xml_preamble().as_str(),
            r#"<?xml version="1.0" encoding="UTF-8"?>"#
        );
        assert_eq!(xml_preamble(), xml_preamble());
    }
}
