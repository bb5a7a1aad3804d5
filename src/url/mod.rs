//! URL processing.
//!
//! This module contains the URL breakdown pipeline:
//! - Raw input normalization (trimming, scheme allow-list)
//! - Known-TLD table and longest-suffix lookup
//! - Hostname splitting into subdomain/domain/TLD
//! - URL component extraction and small helpers

pub mod domain;
pub mod normalizer;
pub mod parser;
pub mod tld;
pub mod utils;

// Re-export main functionality
pub use domain::extract_domain_parts;
pub use normalizer::{detect_scheme, normalize_input, SUPPORTED_SCHEMES};
pub use parser::{components_from_url, parse_url, try_parse_url};
pub use tld::{is_known_tld, lookup_tld, max_tld_labels, TldMatch, KNOWN_TLDS};
pub use utils::{path_segments, query_params, query_value, strip_fragment};
