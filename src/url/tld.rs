//! Known top-level domain table and longest-suffix lookup.
//!
//! This is a fixed, simplified stand-in for the Public Suffix List: plain
//! set membership on one- and two-label suffixes, with no wildcard or
//! exception rules.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Public suffixes recognized as TLDs, single- and multi-label.
pub const KNOWN_TLDS: &[&str] = &[
    // Generic
    "com", "org", "net", "edu", "gov", "mil", "int", "info", "biz", "name",
    "pro", "aero", "coop", "museum", "mobi", "asia", "tel", "travel", "jobs",
    "cat", "xxx", "post",
    // Popular new generic
    "io", "ai", "app", "dev", "co", "me", "tv", "cc", "ly", "gg", "sh", "so",
    "xyz", "online", "site", "tech", "store", "shop", "blog", "cloud", "page",
    "link", "live", "news", "space", "website", "wiki", "design", "agency",
    "digital", "email", "network", "systems", "solutions", "services",
    "software", "studio", "media", "social", "world", "life", "today", "top",
    "club", "fun", "art", "game", "games", "run", "codes", "tools", "zone",
    "works", "rocks", "ninja", "guru", "expert", "company", "center", "group",
    "global", "one", "plus", "inc", "llc", "ltd", "bot", "chat", "new",
    // Country code
    "ac", "ad", "ae", "af", "ag", "al", "am", "ao", "aq", "ar", "as", "at",
    "au", "aw", "ax", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi",
    "bj", "bm", "bn", "bo", "br", "bs", "bt", "bw", "by", "bz", "ca", "cd",
    "cf", "cg", "ch", "ci", "ck", "cl", "cm", "cn", "cr", "cu", "cv", "cw",
    "cx", "cy", "cz", "de", "dj", "dk", "dm", "do", "dz", "ec", "ee", "eg",
    "er", "es", "et", "eu", "fi", "fj", "fk", "fm", "fo", "fr", "ga", "gd",
    "ge", "gf", "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt",
    "gu", "gw", "gy", "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il",
    "im", "in", "iq", "ir", "is", "it", "je", "jm", "jo", "jp", "ke", "kg",
    "kh", "ki", "km", "kn", "kp", "kr", "kw", "ky", "kz", "la", "lb", "lc",
    "li", "lk", "lr", "ls", "lt", "lu", "lv", "ma", "mc", "md", "mg", "mh",
    "mk", "ml", "mm", "mn", "mo", "mp", "mq", "mr", "ms", "mt", "mu", "mv",
    "mw", "mx", "my", "mz", "na", "nc", "ne", "nf", "ng", "ni", "nl", "no",
    "np", "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl",
    "pm", "pn", "pr", "ps", "pt", "pw", "py", "qa", "re", "ro", "rs", "ru",
    "rw", "sa", "sb", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn",
    "sr", "st", "su", "sv", "sx", "sy", "sz", "tc", "td", "tf", "tg", "th",
    "tj", "tk", "tl", "tm", "tn", "to", "tr", "tt", "tw", "tz", "ua", "ug",
    "uk", "us", "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn", "vu", "wf",
    "ws", "ye", "yt", "za", "zm", "zw",
    // Multi-label public suffixes
    "co.uk", "org.uk", "me.uk", "ltd.uk", "plc.uk", "net.uk", "ac.uk",
    "gov.uk", "nhs.uk", "sch.uk",
    "com.au", "net.au", "org.au", "edu.au", "gov.au", "asn.au", "id.au",
    "co.nz", "net.nz", "org.nz", "govt.nz", "ac.nz",
    "co.jp", "ne.jp", "or.jp", "ac.jp", "go.jp",
    "co.kr", "or.kr", "ne.kr", "go.kr",
    "co.in", "net.in", "org.in", "gov.in", "ac.in",
    "co.za", "org.za", "gov.za", "ac.za",
    "com.br", "net.br", "org.br", "gov.br",
    "com.cn", "net.cn", "org.cn", "gov.cn", "edu.cn",
    "com.mx", "org.mx", "gob.mx",
    "com.ar", "com.co", "com.pe", "com.ve", "com.ec",
    "com.tr", "com.tw", "com.hk", "com.sg", "com.my", "com.ph", "com.vn",
    "com.pk", "com.bd", "com.eg", "com.sa", "com.ua", "com.pl",
    "co.il", "org.il", "ac.il",
    "co.id", "or.id", "ac.id",
    "co.th", "in.th", "ac.th",
    "gov.sg", "edu.sg",
    // Hosting platforms that act as public suffixes
    "github.io", "gitlab.io", "herokuapp.com", "vercel.app", "netlify.app",
    "pages.dev", "workers.dev", "web.app", "firebaseapp.com", "appspot.com",
    "azurewebsites.net", "cloudfront.net", "blogspot.com",
];

static TLD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| KNOWN_TLDS.iter().copied().collect());

static MAX_TLD_LABELS: LazyLock<usize> = LazyLock::new(|| {
    KNOWN_TLDS
        .iter()
        .map(|tld| tld.split('.').count())
        .max()
        .unwrap_or(1)
});

/// Classification of a hostname's suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldMatch {
    /// Dot-joined suffix, empty when the host has fewer than two labels
    pub tld: String,
    /// Number of labels consumed by `tld`
    pub label_count: usize,
    /// Whether `tld` is in the known table
    pub is_known: bool,
}

/// Whether `suffix` is a known TLD. Case-insensitive.
pub fn is_known_tld(suffix: &str) -> bool {
    TLD_SET.contains(suffix.to_ascii_lowercase().as_str())
}

/// Largest number of labels in any known TLD.
pub fn max_tld_labels() -> usize {
    *MAX_TLD_LABELS
}

/// Find the longest known suffix of `labels`.
///
/// Labels are expected lowercase. A host that is itself a multi-label
/// suffix, such as `["co", "uk"]`, matches in full and leaves no domain
/// label. Falls back to the last label with `is_known = false` when
/// nothing matches.
pub fn lookup_tld(labels: &[&str]) -> TldMatch {
    if labels.len() < 2 {
        return TldMatch {
            tld: String::new(),
            label_count: 0,
            is_known: false,
        };
    }

    let longest = max_tld_labels().min(labels.len());
    for count in (1..=longest).rev() {
        let candidate = labels[labels.len() - count..].join(".");
        if TLD_SET.contains(candidate.as_str()) {
            tracing::trace!(tld = %candidate, labels = count, "matched known tld");
            return TldMatch {
                tld: candidate,
                label_count: count,
                is_known: true,
            };
        }
    }

    let last = labels[labels.len() - 1];
    tracing::trace!(tld = last, "no known tld, using last label");
    TldMatch {
        tld: last.to_string(),
        label_count: 1,
        is_known: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entries_are_lowercase_and_unique() {
        for tld in KNOWN_TLDS {
            assert_eq!(*tld, tld.to_ascii_lowercase(), "not lowercase: {}", tld);
            assert!(!tld.starts_with('.') && !tld.ends_with('.'), "stray dot: {}", tld);
        }
        assert_eq!(TLD_SET.len(), KNOWN_TLDS.len(), "duplicate entries in table");
    }

    #[test]
    fn test_max_tld_labels() {
        assert_eq!(max_tld_labels(), 2);
    }

    #[test]
    fn test_is_known_tld() {
        assert!(is_known_tld("com"));
        assert!(is_known_tld("CO.UK"));
        assert!(is_known_tld("io"));
        assert!(!is_known_tld("unknown-tld"));
        assert!(!is_known_tld(""));
    }

    #[test]
    fn test_single_label_match() {
        let m = lookup_tld(&["example", "com"]);
        assert_eq!(m.tld, "com");
        assert_eq!(m.label_count, 1);
        assert!(m.is_known);
    }

    #[test]
    fn test_longest_match_wins() {
        let m = lookup_tld(&["shop", "example", "co", "uk"]);
        assert_eq!(m.tld, "co.uk");
        assert_eq!(m.label_count, 2);
        assert!(m.is_known);
    }

    #[test]
    fn test_whole_host_can_be_multi_label_suffix() {
        let m = lookup_tld(&["co", "uk"]);
        assert_eq!(m.tld, "co.uk");
        assert_eq!(m.label_count, 2);
        assert!(m.is_known);

        let m = lookup_tld(&["github", "io"]);
        assert_eq!(m.tld, "github.io");
        assert_eq!(m.label_count, 2);
    }

    #[test]
    fn test_unknown_fallback() {
        let m = lookup_tld(&["example", "unknown-tld"]);
        assert_eq!(m.tld, "unknown-tld");
        assert_eq!(m.label_count, 1);
        assert!(!m.is_known);
    }

    #[test]
    fn test_too_few_labels() {
        assert_eq!(lookup_tld(&["localhost"]).tld, "");
        assert_eq!(lookup_tld(&["localhost"]).label_count, 0);
        assert_eq!(lookup_tld(&[]).label_count, 0);
    }
}
