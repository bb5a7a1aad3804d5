//! Small URL helpers built on the same scheme-tolerant input handling as
//! [`parse_url`](crate::parse_url).

use std::collections::BTreeMap;

use url::Url;

use crate::error::UrlPartsError;
use crate::url::normalizer::normalize_input;

/// Normalize raw input and parse it, treating empty input as malformed.
fn parse_input(input: &str) -> Result<Url, UrlPartsError> {
    let normalized = normalize_input(input).ok_or(UrlPartsError::InvalidFormat)?;
    Url::parse(&normalized).map_err(|err| {
        tracing::debug!(input = %normalized, error = %err, "url parser rejected input");
        UrlPartsError::from(err)
    })
}

/// Decoded query parameters of a URL.
///
/// # Examples
///
/// ```
/// use urlparts::query_params;
///
/// let params = query_params("example.com?foo=bar&page=1").unwrap();
/// assert_eq!(params.get("foo"), Some(&"bar".to_string()));
/// assert_eq!(params.get("page"), Some(&"1".to_string()));
/// ```
pub fn query_params(url: &str) -> Result<BTreeMap<String, String>, UrlPartsError> {
    let parsed = parse_input(url)?;
    Ok(parsed
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect())
}

/// A single query parameter value, if present.
pub fn query_value(url: &str, key: &str) -> Result<Option<String>, UrlPartsError> {
    let mut params = query_params(url)?;
    Ok(params.remove(key))
}

/// Non-empty path segments of a URL.
///
/// # Examples
///
/// ```
/// use urlparts::path_segments;
///
/// let segments = path_segments("https://example.com/api/v1/users/").unwrap();
/// assert_eq!(segments, vec!["api", "v1", "users"]);
/// ```
pub fn path_segments(url: &str) -> Result<Vec<String>, UrlPartsError> {
    let parsed = parse_input(url)?;
    if parsed.host_str().is_none() {
        return Err(UrlPartsError::MissingHost);
    }
    Ok(parsed
        .path_segments()
        .map(|segments| {
            segments
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default())
}

/// Serialize the URL without its fragment.
///
/// # Examples
///
/// ```
/// use urlparts::strip_fragment;
///
/// let clean = strip_fragment("https://example.com/page#section").unwrap();
/// assert_eq!(clean, "https://example.com/page");
/// ```
pub fn strip_fragment(url: &str) -> Result<String, UrlPartsError> {
    let mut parsed = parse_input(url)?;
    parsed.set_fragment(None);
    Ok(parsed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params() {
        let params = query_params("https://example.com?foo=bar&page=1").unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("foo"), Some(&"bar".to_string()));

        let empty = query_params("https://example.com").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_query_value() {
        let value = query_value("example.com?page=2&sort=name", "page").unwrap();
        assert_eq!(value, Some("2".to_string()));

        let missing = query_value("example.com?page=2", "missing").unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn test_path_segments() {
        let segments = path_segments("example.com/api//v1/users").unwrap();
        assert_eq!(segments, vec!["api", "v1", "users"]);

        let empty = path_segments("https://example.com/").unwrap();
        assert_eq!(empty, Vec::<String>::new());
    }

    #[test]
    fn test_path_segments_requires_host() {
        assert_eq!(
            path_segments("mailto:me@example.com"),
            Err(UrlPartsError::MissingHost)
        );
    }

    #[test]
    fn test_strip_fragment() {
        assert_eq!(
            strip_fragment("example.com/page?x=1#section").unwrap(),
            "https://example.com/page?x=1"
        );
    }

    #[test]
    fn test_empty_input_is_invalid() {
        assert_eq!(query_params("  "), Err(UrlPartsError::InvalidFormat));
        assert_eq!(strip_fragment(""), Err(UrlPartsError::InvalidFormat));
    }
}
