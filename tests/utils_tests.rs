//! Integration tests for URL utilities.

use urlparts::{normalize_input, path_segments, query_params, query_value, strip_fragment};

#[test]
fn test_query_parameter_parsing() {
    let url = "search.example.com/results?q=rust&page=2&sort=relevance";

    let params = query_params(url).unwrap();
    assert_eq!(params.get("q"), Some(&"rust".to_string()));
    assert_eq!(params.get("page"), Some(&"2".to_string()));
    assert_eq!(params.get("sort"), Some(&"relevance".to_string()));
    assert_eq!(params.len(), 3);

    assert_eq!(query_value(url, "sort").unwrap(), Some("relevance".to_string()));
}

#[test]
fn test_path_and_fragment_helpers() {
    let url = "https://docs.rs/serde/latest/serde/#examples";

    assert_eq!(path_segments(url).unwrap(), vec!["serde", "latest", "serde"]);
    assert_eq!(strip_fragment(url).unwrap(), "https://docs.rs/serde/latest/serde/");
}

#[test]
fn test_helpers_share_scheme_handling() {
    assert_eq!(normalize_input("docs.rs").as_deref(), Some("https://docs.rs"));
    assert_eq!(strip_fragment("docs.rs#top").unwrap(), "https://docs.rs/");
    assert!(query_params("://broken").is_err());
}
