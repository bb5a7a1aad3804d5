//! Raw input normalization ahead of URL parsing.

/// Schemes accepted as-is; anything else gets `https://` prepended.
pub const SUPPORTED_SCHEMES: &[&str] = &[
    "http", "https", "ftp", "file", "mailto", "tel", "irc", "ircs", "ssh", "sftp", "ldap",
    "ldaps", "news", "nntp", "rtsp", "sip", "sips", "xmpp", "ws", "wss", "git", "svn", "magnet",
    "data",
];

const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Return the allow-listed scheme `input` starts with, if any.
///
/// Matching is case-insensitive and only requires `<scheme>:`; the `//` is
/// optional so `mailto:` and `data:` inputs are recognized.
///
/// # Examples
///
/// ```
/// use urlparts::detect_scheme;
///
/// assert_eq!(detect_scheme("HTTP://example.com"), Some("http"));
/// assert_eq!(detect_scheme("mailto:me@example.com"), Some("mailto"));
/// assert_eq!(detect_scheme("localhost:3000"), None);
/// ```
pub fn detect_scheme(input: &str) -> Option<&'static str> {
    let (candidate, _) = input.split_once(':')?;
    SUPPORTED_SCHEMES
        .iter()
        .copied()
        .find(|scheme| scheme.eq_ignore_ascii_case(candidate))
}

/// Trim raw input and make sure it carries a scheme.
///
/// Returns `None` for empty or whitespace-only input. Input without a
/// recognized scheme is prefixed with `https://`, so a bare `example.com`
/// becomes `https://example.com`.
pub fn normalize_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if detect_scheme(trimmed).is_some() {
        return Some(trimmed.to_string());
    }

    tracing::debug!(input = trimmed, "no recognized scheme, assuming https");
    Some(format!("{}{}", DEFAULT_SCHEME_PREFIX, trimmed))
}
