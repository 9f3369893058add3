//! Error types for the Pagemark core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Configuration and I/O errors.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Errors surfaced to callers of the template helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HelperError {
    /// The input is not a syntactically valid URL.
    #[error("invalid URL {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// No helper is registered under this name.
    #[error("unknown helper: {0}")]
    UnknownHelper(String),

    /// A helper was called with the wrong number of arguments.
    #[error("helper {helper} expects {expected} argument(s), got {got}")]
    Arity {
        helper: String,
        expected: String,
        got: usize,
    },
}

impl HelperError {
    /// Create a URL parse error for the given input.
    pub fn parse(input: impl Into<String>, source: url::ParseError) -> Self {
        Self::Parse {
            input: input.into(),
            source,
        }
    }

    /// Create an arity error.
    pub fn arity(helper: impl Into<String>, expected: impl Into<String>, got: usize) -> Self {
        Self::Arity {
            helper: helper.into(),
            expected: expected.into(),
            got,
        }
    }
}

/// Internal failures of the HTML sanitizer.
///
/// These never reach template callers: the sanitizing helper logs them and
/// renders nothing instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SanitizeError {
    /// Input exceeds the configured size limit.
    #[error("input of {len} bytes exceeds the {max} byte sanitizer limit")]
    InputTooLarge { len: usize, max: usize },

    /// The allow-list policy cannot be applied.
    #[error("invalid sanitizer policy: {0}")]
    Policy(String),
}
