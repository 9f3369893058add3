//! Stylesheet and script tag builders.
//!
//! Asset names are expected to be identifiers the application controls (a
//! file stem such as `main`), not free-form user input. They are still
//! percent-escaped before interpolation.

use pagemark_core::{AssetConfig, Html};

use crate::escape::escape_url;

/// Build a `<link>` tag for `/assets/styles/{name}.css`.
#[must_use]
pub fn style(name: &str) -> Html {
    style_tag(AssetConfig::default().styles_prefix(), name)
}

/// Build a `<script>` tag for `/assets/scripts/{name}.js`.
#[must_use]
pub fn script(name: &str) -> Html {
    script_tag(AssetConfig::default().scripts_prefix(), name)
}

/// Build a stylesheet `<link>` tag under the given path prefix.
#[must_use]
pub fn style_tag(prefix: &str, name: &str) -> Html {
    Html::trusted(format!(
        r#"<link href="{}/{}.css" media="all" rel="stylesheet" type="text/css" />"#,
        prefix.trim_end_matches('/'),
        escape_url(name)
    ))
}

/// Build a `<script>` tag under the given path prefix.
#[must_use]
pub fn script_tag(prefix: &str, name: &str) -> Html {
    Html::trusted(format!(
        r#"<script src="{}/{}.js" type="text/javascript"></script>"#,
        prefix.trim_end_matches('/'),
        escape_url(name)
    ))
}
