//! Name → helper table handed to templates.

use std::{collections::BTreeMap, fmt};

use pagemark_core::{AssetConfig, Config, HelperError, Html, HtmlAttr, SafeUrl};
use tracing::debug;

use crate::{
    assets, escape, link,
    sanitize::{self, AmmoniaSanitizer, HtmlSanitizer},
    trusted, urls,
};

/// A value produced for a template.
///
/// `Text` is escaped when rendered; the markup variants are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Plain text, escaped on output.
    Text(String),
    /// HTML body markup.
    Html(Html),
    /// HTML attribute markup.
    Attr(HtmlAttr),
    /// URL markup.
    Url(SafeUrl),
}

impl Value {
    /// The raw string content, unescaped.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Html(h) => h.as_str(),
            Self::Attr(a) => a.as_str(),
            Self::Url(u) => u.as_str(),
        }
    }

    /// The string to write into HTML output.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) => escape::escape(s),
            _ => self.as_str().to_string(),
        }
    }

    /// Whether this value is emitted without escaping.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        !matches!(self, Self::Text(_))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Html> for Value {
    fn from(h: Html) -> Self {
        Self::Html(h)
    }
}

impl From<HtmlAttr> for Value {
    fn from(a: HtmlAttr) -> Self {
        Self::Attr(a)
    }
}

impl From<SafeUrl> for Value {
    fn from(u: SafeUrl) -> Self {
        Self::Url(u)
    }
}

/// The built-in helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Helper {
    Style,
    Script,
    Escape,
    EscapeUrl,
    Link,
    Html,
    HtmlAttribute,
    Url,
    UrlEncoded,
    UrlMinusProtocol,
    Strip,
    Sanitize,
    XmlPreamble,
}

impl Helper {
    /// Every built-in helper.
    pub const ALL: [Helper; 13] = [
        Helper::Style,
        Helper::Script,
        Helper::Escape,
        Helper::EscapeUrl,
        Helper::Link,
        Helper::Html,
        Helper::HtmlAttribute,
        Helper::Url,
        Helper::UrlEncoded,
        Helper::UrlMinusProtocol,
        Helper::Strip,
        Helper::Sanitize,
        Helper::XmlPreamble,
    ];

    /// Name used to call the helper from a template.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Helper::Style => "style",
            Helper::Script => "script",
            Helper::Escape => "escape",
            Helper::EscapeUrl => "escape_url",
            Helper::Link => "link",
            Helper::Html => "html",
            Helper::HtmlAttribute => "html_attribute",
            Helper::Url => "url",
            Helper::UrlEncoded => "url_encoded",
            Helper::UrlMinusProtocol => "url_minus_protocol",
            Helper::Strip => "strip",
            Helper::Sanitize => "sanitize",
            Helper::XmlPreamble => "xml_preamble",
        }
    }

    fn check_arity(self, got: usize) -> Result<(), HelperError> {
        let ok = match self {
            Helper::Link => got >= 2,
            Helper::XmlPreamble => got == 0,
            _ => got == 1,
        };
        if ok {
            return Ok(());
        }
        let expected = match self {
            Helper::Link => "at least 2",
            Helper::XmlPreamble => "0",
            _ => "1",
        };
        Err(HelperError::arity(self.name(), expected, got))
    }
}

/// Table of helpers, bound to asset paths and a sanitizer.
pub struct HelperRegistry {
    helpers: BTreeMap<&'static str, Helper>,
    assets: AssetConfig,
    sanitizer: Box<dyn HtmlSanitizer + Send + Sync>,
}

impl HelperRegistry {
    /// Create a registry with default asset paths and sanitizer policy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Create a registry from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let helpers: BTreeMap<_, _> = Helper::ALL.iter().map(|h| (h.name(), *h)).collect();
        debug!(
            helpers = helpers.len(),
            styles = %config.assets.styles_path,
            scripts = %config.assets.scripts_path,
            "Registered template helpers"
        );
        Self {
            helpers,
            assets: config.assets.clone(),
            sanitizer: Box::new(AmmoniaSanitizer::new(config.sanitize.clone())),
        }
    }

    /// Replace the sanitizer backend.
    #[must_use]
    pub fn with_sanitizer(mut self, sanitizer: Box<dyn HtmlSanitizer + Send + Sync>) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    /// Registered helper names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.helpers.keys().copied()
    }

    /// Check if a helper is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    /// Look up a helper by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Helper> {
        self.helpers.get(name).copied()
    }

    /// Call a helper by name.
    pub fn call(&self, name: &str, args: &[&str]) -> Result<Value, HelperError> {
        let helper = self
            .get(name)
            .ok_or_else(|| HelperError::UnknownHelper(name.to_string()))?;
        helper.check_arity(args.len())?;

        let value: Value = match helper {
            Helper::Style => assets::style_tag(self.assets.styles_prefix(), args[0]).into(),
            Helper::Script => assets::script_tag(self.assets.scripts_prefix(), args[0]).into(),
            Helper::Escape => escape::escape(args[0]).into(),
            Helper::EscapeUrl => escape::escape_url(args[0]).into(),
            Helper::Link => link::link(args[0], args[1], &args[2..]).into(),
            Helper::Html => trusted::html(args[0]).into(),
            Helper::HtmlAttribute => trusted::html_attribute(args[0]).into(),
            Helper::Url => trusted::url(args[0]).into(),
            Helper::UrlEncoded => urls::url_encoded(args[0])?.into(),
            Helper::UrlMinusProtocol => urls::url_minus_protocol(args[0])?.into(),
            Helper::Strip => sanitize::strip_with(self.sanitizer.as_ref(), args[0]).into(),
            Helper::Sanitize => sanitize::sanitize_with(self.sanitizer.as_ref(), args[0]).into(),
            Helper::XmlPreamble => trusted::xml_preamble().into(),
        };
        Ok(value)
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HelperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelperRegistry")
            .field("helpers", &self.helpers.keys().collect::<Vec<_>>())
            .field("assets", &self.assets)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pagemark_core::SanitizeError;

    use super::*;

    struct BrokenSanitizer;

    impl HtmlSanitizer for BrokenSanitizer {
        fn strip_tags(&self, _input: &str) -> String {
            String::new()
        }

        fn sanitize(&self, _input: &str) -> Result<String, SanitizeError> {
            Err(SanitizeError::Policy("broken".to_string()))
        }
    }

    #[test]
    fn test_registry_names() {
        let registry = HelperRegistry::new();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names.len(), 13);
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert!(registry.contains("url_minus_protocol"));
        assert!(!registry.contains("nope"));
    }

    #[test]
    fn test_call_returns_matching_value_kind() {
        let registry = HelperRegistry::new();

        assert_eq!(
            registry.call("escape", &["<b>"]).unwrap(),
            Value::Text("&lt;b&gt;".to_string())
        );
        assert!(matches!(registry.call("style", &["main"]).unwrap(), Value::Html(_)));
        assert!(matches!(
            registry.call("html_attribute", &["id=x"]).unwrap(),
            Value::Attr(_)
        ));
        assert!(matches!(registry.call("url", &["/x"]).unwrap(), Value::Url(_)));
        assert_eq!(
            registry.call("xml_preamble", &[]).unwrap().as_str(),
            r#"<?xml version="1.0" encoding="UTF-8"?>"#
        );
    }

    #[test]
    fn test_call_link_with_attributes() {
        let registry = HelperRegistry::new();
        let value = registry
            .call("link", &["Docs", "/docs", "rel=help", "id=docs"])
            .unwrap();
        assert_eq!(value.as_str(), r#"<a href="/docs" rel=help id=docs>Docs</a>"#);
    }

    #[test]
    fn test_call_uses_configured_assets() {
        let config = Config::from_toml_str(
            r#"
[assets]
scripts_path = "/static/js"
"#,
        )
        .unwrap();
        let registry = HelperRegistry::from_config(&config);
        assert_eq!(
            registry.call("script", &["app"]).unwrap().as_str(),
            r#"<script src="/static/js/app.js" type="text/javascript"></script>"#
        );
    }

    #[test]
    fn test_call_errors() {
        let registry = HelperRegistry::new();

        assert_eq!(
            registry.call("missing", &[]).unwrap_err(),
            HelperError::UnknownHelper("missing".to_string())
        );
        assert!(matches!(
            registry.call("link", &["only text"]).unwrap_err(),
            HelperError::Arity { got: 1, .. }
        ));
        assert!(matches!(
            registry.call("xml_preamble", &["x"]).unwrap_err(),
            HelperError::Arity { got: 1, .. }
        ));
        assert!(matches!(
            registry.call("url_encoded", &["not a url :::"]).unwrap_err(),
            HelperError::Parse { .. }
        ));
    }

    #[test]
    fn test_custom_sanitizer_fails_closed() {
        let registry = HelperRegistry::new().with_sanitizer(Box::new(BrokenSanitizer));
        let value = registry.call("sanitize", &["<p>raw</p>"]).unwrap();
        assert_eq!(value, Value::Html(Html::default()));
    }

    #[test]
    fn test_value_render() {
        assert_eq!(Value::from("a<b").render(), "a&lt;b");
        assert_eq!(Value::from(Html::trusted("<i>x</i>")).render(), "<i>x</i>");
        assert!(!Value::from("x").is_safe());
        assert!(Value::from(SafeUrl::trusted("/")).is_safe());
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HelperRegistry>();
        assert_send_sync::<Value>();
    }
}
