//! HTML stripping and allow-list sanitizing.
//!
//! The sanitizing itself is done by [`ammonia`]; this module wires it to the
//! configured policy and makes sure a failure never lets unsanitized input
//! through.

use std::collections::{HashMap, HashSet};

use ammonia::Builder;
use pagemark_core::{Html, SanitizeConfig, SanitizeError};
use tracing::error;

/// Tags whose content is dropped along with the tag.
const CONTENT_DROPPING_TAGS: [&str; 2] = ["script", "style"];

/// An HTML sanitizer backend.
pub trait HtmlSanitizer {
    /// Remove every tag, keeping only (escaped) text.
    fn strip_tags(&self, input: &str) -> String;

    /// Remove everything not on the allow-list.
    fn sanitize(&self, input: &str) -> Result<String, SanitizeError>;
}

/// [`HtmlSanitizer`] backed by `ammonia` and a [`SanitizeConfig`] policy.
#[derive(Debug, Clone, Default)]
pub struct AmmoniaSanitizer {
    config: SanitizeConfig,
}

impl AmmoniaSanitizer {
    /// Create a sanitizer with the given policy.
    #[must_use]
    pub fn new(config: SanitizeConfig) -> Self {
        Self { config }
    }

    /// The policy in use.
    #[must_use]
    pub fn config(&self) -> &SanitizeConfig {
        &self.config
    }

    fn check_policy(&self) -> Result<(), SanitizeError> {
        if let Some(tag) = self
            .config
            .tags
            .iter()
            .find(|t| CONTENT_DROPPING_TAGS.contains(&t.to_ascii_lowercase().as_str()))
        {
            return Err(SanitizeError::Policy(format!(
                "tag <{tag}> cannot be allowed"
            )));
        }
        Ok(())
    }
}

impl HtmlSanitizer for AmmoniaSanitizer {
    fn strip_tags(&self, input: &str) -> String {
        Builder::empty()
            .clean_content_tags(HashSet::from(CONTENT_DROPPING_TAGS))
            .strip_comments(true)
            .clean(input)
            .to_string()
    }

    fn sanitize(&self, input: &str) -> Result<String, SanitizeError> {
        if let Some(max) = self.config.max_input_bytes
            && input.len() > max
        {
            return Err(SanitizeError::InputTooLarge {
                len: input.len(),
                max,
            });
        }
        self.check_policy()?;

        let tags: HashSet<&str> = self.config.tags.iter().map(String::as_str).collect();
        let attributes: HashSet<&str> = self.config.attributes.iter().map(String::as_str).collect();

        let cleaned = Builder::default()
            .tags(tags)
            .tag_attributes(HashMap::<&str, HashSet<&str>>::new())
            .generic_attributes(attributes)
            .link_rel(None)
            .strip_comments(self.config.strip_comments)
            .clean(input)
            .to_string();
        Ok(cleaned)
    }
}

/// Strip all HTML tags using the default sanitizer.
///
/// The result contains no markup, only entity-escaped text, so it is returned
/// as [`Html`].
#[must_use]
pub fn strip(s: &str) -> Html {
    strip_with(&AmmoniaSanitizer::default(), s)
}

/// Sanitize HTML with the default allow-list.
///
/// The default policy has no input size limit. Returns empty markup if the
/// sanitizer fails.
#[must_use]
pub fn sanitize(s: &str) -> Html {
    sanitize_with(&AmmoniaSanitizer::default(), s)
}

/// Strip all HTML tags using `sanitizer`.
#[must_use]
pub fn strip_with(sanitizer: &dyn HtmlSanitizer, s: &str) -> Html {
    Html::trusted(sanitizer.strip_tags(s))
}

/// Sanitize HTML using `sanitizer`.
///
/// On error the failure is logged and empty markup is returned; the raw input
/// is never passed through.
#[must_use]
pub fn sanitize_with(sanitizer: &dyn HtmlSanitizer, s: &str) -> Html {
    match sanitizer.sanitize(s) {
        Ok(clean) => Html::trusted(clean),
        Err(e) => {
            error!(error = %e, input_len = s.len(), "error sanitizing html");
            Html::default()
        }
    }
}
