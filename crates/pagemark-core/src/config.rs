//! Helper configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for Pagemark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Asset tag settings.
    #[serde(default)]
    pub assets: AssetConfig,

    /// HTML sanitizer settings.
    #[serde(default)]
    pub sanitize: SanitizeConfig,
}

/// Where stylesheet and script assets are served from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// URL path prefix for stylesheets.
    #[serde(default = "default_styles_path")]
    pub styles_path: String,

    /// URL path prefix for scripts.
    #[serde(default = "default_scripts_path")]
    pub scripts_path: String,
}

/// Allow-list policy for the HTML sanitizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeConfig {
    /// Tags kept by the sanitizer.
    #[serde(default = "default_allowed_tags")]
    pub tags: Vec<String>,

    /// Attributes kept on any allowed tag.
    #[serde(default = "default_allowed_attributes")]
    pub attributes: Vec<String>,

    /// Whether HTML comments are removed.
    #[serde(default = "default_true")]
    pub strip_comments: bool,

    /// Largest input (in bytes) the sanitizer accepts. Unset means no limit.
    #[serde(default)]
    pub max_input_bytes: Option<usize>,
}

// Default value functions
fn default_styles_path() -> String {
    "/assets/styles".to_string()
}

fn default_scripts_path() -> String {
    "/assets/scripts".to_string()
}

fn default_allowed_tags() -> Vec<String> {
    [
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "div",
        "span",
        "hr",
        "p",
        "br",
        "b",
        "i",
        "strong",
        "em",
        "ol",
        "ul",
        "li",
        "a",
        "img",
        "pre",
        "code",
        "blockquote",
        "article",
        "section",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

fn default_allowed_attributes() -> Vec<String> {
    ["id", "class", "src", "href", "title", "alt", "name", "rel"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            styles_path: default_styles_path(),
            scripts_path: default_scripts_path(),
        }
    }
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            tags: default_allowed_tags(),
            attributes: default_allowed_attributes(),
            strip_comments: true,
            max_input_bytes: None,
        }
    }
}

impl AssetConfig {
    /// Stylesheet prefix without a trailing slash.
    #[must_use]
    pub fn styles_prefix(&self) -> &str {
        self.styles_path.trim_end_matches('/')
    }

    /// Script prefix without a trailing slash.
    #[must_use]
    pub fn scripts_prefix(&self) -> &str {
        self.scripts_path.trim_end_matches('/')
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, with `PAGEMARK__*`
    /// environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("PAGEMARK").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("assets.styles_path", &self.assets.styles_path),
            ("assets.scripts_path", &self.assets.scripts_path),
        ] {
            if value.is_empty() {
                return Err(CoreError::config(format!("{key} cannot be empty")));
            }
            if !value.starts_with('/') {
                return Err(CoreError::config(format!("{key} must start with '/'")));
            }
            if value.len() > 1 && value.ends_with('/') {
                tracing::warn!("{key} should not have a trailing slash");
            }
        }

        if self.sanitize.max_input_bytes == Some(0) {
            return Err(CoreError::config(
                "sanitize.max_input_bytes must be greater than zero",
            ));
        }

        Ok(())
    }
}
