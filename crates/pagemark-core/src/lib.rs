//! Pagemark Core Library
//!
//! Safe-markup types, configuration, and error handling shared by the
//! Pagemark template helpers.

pub mod config;
pub mod error;
pub mod markup;

pub use config::{AssetConfig, Config, SanitizeConfig};
pub use error::{CoreError, HelperError, Result, SanitizeError};
pub use markup::{Html, HtmlAttr, SafeUrl};
