//! Hostname splitting into subdomain, domain and TLD.

use crate::types::DomainParts;
use crate::url::tld::lookup_tld;

/// Split a hostname into TLD, domain, and subdomain using the known-TLD table.
///
/// - `tld`: the longest known suffix (can be multi-label like "co.uk"),
///   or the last label when nothing in the table matches
/// - `domain`: label immediately left of the TLD
/// - `subdomain`: everything left of the domain, joined with dots
///
/// Input is lowercased first and the output reflects the lowercase form.
/// A single-label host such as "localhost" has no TLD and becomes the domain.
///
/// # Examples
///
/// ```
/// use urlparts::extract_domain_parts;
///
/// let parts = extract_domain_parts("shop.a.example.co.uk");
/// assert_eq!(parts.tld, "co.uk");
/// assert_eq!(parts.domain, "example");
/// assert_eq!(parts.subdomain, "shop.a");
/// assert_eq!(parts.is_tld_known, Some(true));
/// ```
pub fn extract_domain_parts(hostname: &str) -> DomainParts {
    let host = hostname.to_lowercase();
    let labels: Vec<&str> = host.split('.').collect();

    if labels.len() < 2 {
        return DomainParts {
            tld: String::new(),
            domain: host.clone(),
            subdomain: String::new(),
            is_tld_known: None,
        };
    }

    let matched = lookup_tld(&labels);
    let rest = &labels[..labels.len() - matched.label_count];

    let (domain, subdomain) = match rest.split_last() {
        Some((domain, before)) => (domain.to_string(), before.join(".")),
        None => (String::new(), String::new()),
    };

    DomainParts {
        tld: matched.tld,
        domain,
        subdomain,
        is_tld_known: Some(matched.is_known),
    }
}
