//! Context-tagged safe markup.
//!
//! A value of one of these types is emitted verbatim by a template instead of
//! being escaped. There is one type per insertion context so that HTML body
//! markup cannot be passed where an attribute or URL is expected.
//!
//! The wrapped string is private. Values are produced by the escaping and
//! sanitizing helpers, or by the `trusted` constructors, which are the only
//! sanctioned way to bypass escaping. Never pass user input to `trusted`.

use std::fmt;

use serde::Serialize;

macro_rules! safe_markup {
    ($(#[$meta:meta])* $name:ident, $context:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Mark `s` as safe to emit verbatim in ", $context, " context.")]
            ///
            /// **Trust boundary.** No escaping or validation happens here. The
            /// caller guarantees that `s` contains no user-supplied content, or
            /// that it was already escaped or sanitized for this context.
            #[must_use]
            pub fn trusted(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Borrow the markup.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Take the markup as an owned string.
            #[must_use]
            pub fn into_string(self) -> String {
                self.0
            }

            /// Whether the markup is empty.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

safe_markup!(
    /// Markup safe to insert into an HTML body.
    Html,
    "HTML body"
);

safe_markup!(
    /// Markup safe to insert as an HTML attribute (name and value).
    HtmlAttr,
    "HTML attribute"
);

safe_markup!(
    /// A URL safe to insert into an `href` or `src` attribute.
    SafeUrl,
    "URL"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trusted_is_verbatim() {
        let html = Html::trusted("<b>bold</b>");
        assert_eq!(html.as_str(), "<b>bold</b>");
        assert_eq!(html.to_string(), "<b>bold</b>");
        assert_eq!(String::from(html), "<b>bold</b>");
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Html::default().is_empty());
        assert!(HtmlAttr::default().is_empty());
        assert!(SafeUrl::default().is_empty());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let attr = HtmlAttr::trusted(r#"class="x""#);
        let toml = toml::to_string(&std::collections::BTreeMap::from([("attr", attr)]))
            .expect("serialize");
        assert!(toml.contains("class"));
    }

    #[test]
    fn test_markup_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Html>();
        assert_send_sync::<HtmlAttr>();
        assert_send_sync::<SafeUrl>();
    }
}
