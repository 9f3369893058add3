//! Pagemark Helpers Library
//!
//! Template helpers that escape, sanitize and format HTML and URL fragments.
//! Every helper is a pure function; markup they produce is returned as one of
//! the safe-markup types from [`pagemark_core`].
//!
//! # Modules
//!
//! - [`escape`] - HTML and URL percent-escaping
//! - [`assets`] - Stylesheet and script tags
//! - [`link`] - Anchor tags
//! - [`trusted`] - Trust-boundary pass-throughs and the XML preamble
//! - [`urls`] - URL normalization
//! - [`sanitize`] - Tag stripping and allow-list sanitizing
//! - [`registry`] - Name → helper table

pub mod assets;
pub mod escape;
pub mod link;
pub mod registry;
pub mod sanitize;
pub mod trusted;
pub mod urls;

pub use assets::{script, style};
pub use escape::{escape, escape_url};
pub use link::link;
pub use pagemark_core::{Html, HtmlAttr, SafeUrl};
pub use registry::{Helper, HelperRegistry, Value};
pub use sanitize::{AmmoniaSanitizer, HtmlSanitizer, sanitize, strip};
pub use trusted::{html, html_attribute, url, xml_preamble};
pub use urls::{url_encoded, url_minus_protocol};
