//! Error types for URL breakdown operations.

use thiserror::Error;

/// Errors that can occur while turning raw input into URL components.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlPartsError {
    /// The scheme-normalized input could not be parsed as a URL.
    ///
    /// The message is fixed; callers log the underlying parser's reason.
    #[error("Invalid URL format")]
    InvalidFormat,

    /// The URL parsed but carries no host where one is required.
    #[error("URL has no host")]
    MissingHost,
}

impl From<url::ParseError> for UrlPartsError {
    fn from(_: url::ParseError) -> Self {
        UrlPartsError::InvalidFormat
    }
}
