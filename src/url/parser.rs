//! Raw input to sparse URL component breakdown.

use std::collections::BTreeMap;

use url::Url;

use crate::error::UrlPartsError;
use crate::types::{non_empty, ParseOutcome, UrlComponents};
use crate::url::domain::extract_domain_parts;
use crate::url::normalizer::normalize_input;

/// Parse raw input into URL components.
///
/// Empty or whitespace-only input is not an error: it yields an empty
/// component record. Input without a recognized scheme is parsed as if it
/// started with `https://`.
///
/// # Examples
///
/// ```
/// use urlparts::try_parse_url;
///
/// let components = try_parse_url("api.github.com:8443/repos?page=1#readme")?;
/// assert_eq!(components.protocol.as_deref(), Some("https"));
/// assert_eq!(components.port.as_deref(), Some("8443"));
/// assert_eq!(components.subdomain.as_deref(), Some("api"));
/// assert_eq!(components.hash.as_deref(), Some("#readme"));
/// # Ok::<(), urlparts::UrlPartsError>(())
/// ```
pub fn try_parse_url(input: &str) -> Result<UrlComponents, UrlPartsError> {
    let normalized = match normalize_input(input) {
        Some(normalized) => normalized,
        None => return Ok(UrlComponents::default()),
    };

    let parsed = Url::parse(&normalized).map_err(|err| {
        tracing::debug!(input = %normalized, error = %err, "url parser rejected input");
        err
    })?;
    Ok(components_from_url(&parsed))
}

/// Parse raw input into a display-ready outcome. Never fails.
///
/// On failure the components are empty and `error` carries the fixed
/// message "Invalid URL format".
///
/// # Examples
///
/// ```
/// use urlparts::parse_url;
///
/// let outcome = parse_url("example.com");
/// assert!(outcome.success);
/// assert_eq!(outcome.components.hostname.as_deref(), Some("example.com"));
///
/// let failed = parse_url("://invalid");
/// assert!(!failed.success);
/// assert_eq!(failed.error.as_deref(), Some("Invalid URL format"));
/// ```
pub fn parse_url(input: &str) -> ParseOutcome {
    try_parse_url(input).into()
}

/// Assemble the sparse component record for an already-parsed URL.
pub fn components_from_url(url: &Url) -> UrlComponents {
    let mut components = UrlComponents {
        protocol: non_empty(url.scheme()),
        hostname: url.host_str().and_then(non_empty),
        port: url.port().map(|port| port.to_string()),
        pathname: non_empty(url.path()),
        search: url
            .query()
            .filter(|query| !query.is_empty())
            .map(|query| format!("?{}", query)),
        hash: url
            .fragment()
            .filter(|fragment| !fragment.is_empty())
            .map(|fragment| format!("#{}", fragment)),
        ..Default::default()
    };

    components.origin = non_empty(url.origin().ascii_serialization());

    let params: BTreeMap<String, String> = url
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    if !params.is_empty() {
        components.query_params = Some(params);
    }

    if let Some(host) = components.hostname.as_deref() {
        let parts = extract_domain_parts(host);
        components.merge_domain_parts(parts);
    }

    components
}
