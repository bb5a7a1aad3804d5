//! urlparts - break raw URL input into its components
//!
//! This crate takes whatever a user typed into a URL field, with or without a
//! scheme, and returns a sparse breakdown: protocol, hostname, port, path,
//! query, fragment, origin, decoded query parameters, plus a
//! subdomain/domain/TLD split computed against a fixed table of known
//! public suffixes.
//!
//! # Features
//!
//! - **Scheme-tolerant**: input without a recognized scheme is parsed as `https://`
//! - **Sparse output**: absent or empty fields are left out, not null-filled
//! - **Multi-label TLDs**: longest-suffix matching, so `co.uk` is never split
//! - **Never panics**: failures come back as a flag plus a fixed message
//!
//! # Quick Start
//!
//! ```
//! use urlparts::{extract_domain_parts, parse_url};
//!
//! let outcome = parse_url("shop.example.co.uk/cart?item=42");
//! assert!(outcome.success);
//! assert_eq!(outcome.components.protocol.as_deref(), Some("https"));
//! assert_eq!(outcome.components.tld.as_deref(), Some("co.uk"));
//! assert_eq!(outcome.components.subdomain.as_deref(), Some("shop"));
//!
//! let parts = extract_domain_parts("example.unknown-tld");
//! assert_eq!(parts.tld, "unknown-tld");
//! assert_eq!(parts.is_tld_known, Some(false));
//! ```
//!
//! # Error Handling
//!
//! [`try_parse_url`] returns `Result<UrlComponents, UrlPartsError>`;
//! [`parse_url`] folds that into a [`ParseOutcome`] that is always safe to
//! render. Empty input is a success with no components.

// Re-export the breakdown pipeline
pub use crate::url::{
    components_from_url, detect_scheme, extract_domain_parts, is_known_tld, lookup_tld,
    max_tld_labels, normalize_input, parse_url, try_parse_url, TldMatch, KNOWN_TLDS,
    SUPPORTED_SCHEMES,
};

// Re-export URL helpers
pub use crate::url::{path_segments, query_params, query_value, strip_fragment};

// Re-export public types
pub use error::UrlPartsError;
pub use types::{DomainParts, ParseOutcome, UrlComponents};

// Module declarations
pub mod error;
pub mod types;
pub mod url;
