//! URL normalization helpers.

use pagemark_core::HelperError;
use url::Url;

/// Origin that relative references are resolved against and then cut off again.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Parse `s` as a URL reference and return its canonical serialization.
///
/// This normalizes rather than percent-encodes arbitrary text: scheme and
/// host are lower-cased, default ports dropped, and characters that are not
/// allowed in a component are percent-encoded.
///
/// Relative references (`/a/b?c=1`, `example.com/a`, `//cdn/x.js`, `?q`)
/// stay relative: they are resolved against a placeholder origin, which is
/// removed from the output. A relative reference whose first path segment
/// contains `:` is rejected, as it would read as a scheme.
pub fn url_encoded(s: &str) -> Result<String, HelperError> {
    match Url::parse(s) {
        Ok(parsed) => Ok(parsed.into()),
        Err(url::ParseError::RelativeUrlWithoutBase) => relative_encoded(s),
        Err(e) => Err(HelperError::parse(s, e)),
    }
}

fn relative_encoded(s: &str) -> Result<String, HelperError> {
    let first_segment = s.split(['/', '\\', '?', '#']).next().unwrap_or_default();
    if first_segment.contains(':') || s.chars().any(|c| c.is_ascii_control()) {
        return Err(HelperError::parse(s, url::ParseError::RelativeUrlWithoutBase));
    }

    let base = Url::parse(RELATIVE_BASE).map_err(|e| HelperError::parse(s, e))?;
    let joined = base.join(s).map_err(|e| HelperError::parse(s, e))?;

    let leading_slashes = s
        .trim_start_matches(' ')
        .chars()
        .take_while(|c| matches!(c, '/' | '\\'))
        .count();
    let prefix = match leading_slashes {
        // path-relative, query or fragment only
        0 => RELATIVE_BASE,
        1 => RELATIVE_BASE.trim_end_matches('/'),
        // scheme-relative: keep the authority
        _ => "http:",
    };

    let serialized = joined.as_str();
    Ok(serialized.strip_prefix(prefix).unwrap_or(serialized).to_string())
}

/// Strip everything up to and including the first `//`.
///
/// Returns the segment after the first `//`, cut off at the next `//` if
/// there is one: `http://host//a//b` gives `host`. Input without `//` comes
/// back unchanged. Never fails; the `Result` mirrors [`url_encoded`].
pub fn url_minus_protocol(s: &str) -> Result<String, HelperError> {
    let mut parts = s.split("//");
    let first = parts.next().unwrap_or_default();
    Ok(parts.next().unwrap_or(first).to_string())
}
