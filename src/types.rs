//! Core data structures produced by URL breakdown.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::UrlPartsError;

/// Subdomain, domain and TLD split of a hostname.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainParts {
    /// Matched public suffix (e.g., "com", "co.uk"), empty for single-label hosts
    pub tld: String,
    /// Label immediately left of the TLD (e.g., "example")
    pub domain: String,
    /// Everything left of the domain, joined with dots (e.g., "api.v2")
    pub subdomain: String,
    /// Whether `tld` came from the known-TLD table; `None` when there is no TLD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_tld_known: Option<bool>,
}

impl DomainParts {
    /// The registrable name, `domain.tld`, when a TLD is present.
    pub fn registrable_domain(&self) -> Option<String> {
        if self.tld.is_empty() || self.domain.is_empty() {
            return None;
        }
        Some(format!("{}.{}", self.domain, self.tld))
    }
}

/// Sparse breakdown of a parsed URL.
///
/// Every field is optional and absent fields are left out of the serialized
/// form entirely. Empty strings are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlComponents {
    /// Scheme without the trailing colon (e.g., "https")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Host as serialized by the URL parser (lowercase, punycode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Explicit non-default port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Path, "/" for an empty hierarchical path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathname: Option<String>,
    /// Query string including the leading '?'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Fragment including the leading '#'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Scheme, host and port for tuple origins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tld: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Decoded query pairs; the last value wins for repeated keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_params: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_tld_known: Option<bool>,
}

impl UrlComponents {
    /// True when no field is set, i.e. nothing was entered.
    pub fn is_empty(&self) -> bool {
        *self == UrlComponents::default()
    }

    /// Merge a hostname breakdown into this record, skipping empty parts.
    pub fn merge_domain_parts(&mut self, parts: DomainParts) {
        self.tld = non_empty(parts.tld);
        self.domain = non_empty(parts.domain);
        self.subdomain = non_empty(parts.subdomain);
        self.is_tld_known = parts.is_tld_known;
    }

    /// Rebuild a URL string from protocol, host, port, path, query and fragment.
    ///
    /// Returns `None` when there is no protocol. Hosts get an authority
    /// ("//"); host-less URLs such as `mailto:` are rebuilt in opaque form.
    pub fn to_url_string(&self) -> Option<String> {
        let protocol = self.protocol.as_deref()?;
        let mut out = format!("{}:", protocol);

        if let Some(host) = &self.hostname {
            out.push_str("//");
            out.push_str(host);
            if let Some(port) = &self.port {
                out.push(':');
                out.push_str(port);
            }
        }

        if let Some(path) = &self.pathname {
            out.push_str(path);
        }
        if let Some(search) = &self.search {
            out.push_str(search);
        }
        if let Some(hash) = &self.hash {
            out.push_str(hash);
        }

        Some(out)
    }
}

/// Map an empty string to `None`.
pub(crate) fn non_empty<S: Into<String>>(value: S) -> Option<String> {
    let value = value.into();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Result of parsing raw input, shaped for display.
///
/// Exactly one of two outcomes: success with components, or failure with
/// empty components and a fixed error message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub success: bool,
    pub components: UrlComponents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParseOutcome {
    /// Successful outcome carrying `components`.
    pub fn ok(components: UrlComponents) -> Self {
        Self {
            success: true,
            components,
            error: None,
        }
    }

    /// Failed outcome; components are always empty.
    pub fn failed(error: &UrlPartsError) -> Self {
        Self {
            success: false,
            components: UrlComponents::default(),
            error: Some(error.to_string()),
        }
    }
}

impl From<Result<UrlComponents, UrlPartsError>> for ParseOutcome {
    fn from(result: Result<UrlComponents, UrlPartsError>) -> Self {
        match result {
            Ok(components) => ParseOutcome::ok(components),
            Err(err) => ParseOutcome::failed(&err),
        }
    }
}
