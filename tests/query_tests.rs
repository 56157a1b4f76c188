#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Query parameter tests
///
/// This test suite covers:
/// - Splitting a URL's query into name/value pairs
/// - Duplicates, empty names and missing values
/// - Helpers for data and javascript URLs
use urlcanon::{QueryParameters, Url, parsed_query};

#[test]
fn test_parse_empty() {
    let params = QueryParameters::parse("");
    assert_eq!(params.len(), 0);
    assert!(params.is_empty());
}

#[test]
fn test_parse_single() {
    let params = QueryParameters::parse("key=value");
    assert_eq!(params.len(), 1);
    assert_eq!(params.get("key"), Some("value"));
}

#[test]
fn test_parse_multiple() {
    let params = QueryParameters::parse("key1=value1&key2=value2&key3=value3");
    assert_eq!(params.len(), 3);
    assert_eq!(params.get("key1"), Some("value1"));
    assert_eq!(params.get("key2"), Some("value2"));
    assert_eq!(params.get("key3"), Some("value3"));
}

#[test]
fn test_parse_no_value() {
    let params = QueryParameters::parse("key1&key2=value2");
    assert_eq!(params.len(), 2);
    assert_eq!(params.get("key1"), Some(""));
    assert_eq!(params.get("key2"), Some("value2"));
}

#[test]
fn test_empty_names_are_skipped() {
    let params = QueryParameters::parse("=orphan&a=1&=&&");
    assert_eq!(params.len(), 1);
    assert_eq!(params.get(""), None);
}

#[test]
fn test_only_first_equals_splits() {
    let params = QueryParameters::parse("expr=a=b");
    assert_eq!(params.get("expr"), Some("a=b"));
}

#[test]
fn test_duplicates_kept_in_order() {
    let params = QueryParameters::parse("tag=a&x=1&tag=b&tag=c");
    assert_eq!(params.get("tag"), Some("a"));
    assert_eq!(params.get_all("tag"), ["a", "b", "c"]);
    assert!(params.get_all("missing").is_empty());
    let names: Vec<_> = params.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["tag", "x", "tag", "tag"]);
}

#[test]
fn test_names_are_case_sensitive() {
    let params = QueryParameters::parse("Key=1");
    assert!(params.contains("Key"));
    assert!(!params.contains("key"));
}

#[test]
fn test_from_url() {
    let url = Url::parse("https://search.example/find?q=rust%20lang&page=2#results");
    let params = url.query_parameters();
    assert_eq!(params.get("q"), Some("rust%20lang"));
    assert_eq!(params.get("page"), Some("2"));
    assert!(!params.contains("results"));

    let pairs: Vec<_> = parsed_query(&url).into_iter().collect();
    assert_eq!(pairs, [("q", "rust%20lang"), ("page", "2")]);
}

#[test]
fn test_values_are_canonical_text() {
    // The parser escapes spaces before the query is split
    let url = Url::parse("http://h/?a=x y&b=<>");
    assert_eq!(url.query_parameters().get("a"), Some("x%20y"));
    assert_eq!(url.query_parameters().get("b"), Some("%3C%3E"));
}

#[test]
fn test_no_query() {
    assert!(parsed_query(&Url::parse("http://h/p")).is_empty());
    assert!(parsed_query(&Url::parse("http://h/p?")).is_empty());
    assert!(parsed_query(&Url::parse("invalid")).is_empty());
}

#[test]
fn test_opaque_url_query() {
    let url = Url::parse("mailto:team@example.com?subject=Hello&cc=ops@example.com");
    let params = url.query_parameters();
    assert_eq!(params.get("subject"), Some("Hello"));
    assert_eq!(params.get("cc"), Some("ops@example.com"));
}

#[test]
fn test_protocol_helpers() {
    assert!(urlcanon::protocol_is("Data:,x", "data"));
    assert!(urlcanon::protocol_is_javascript("JAVASCRIPT:void(0)"));
    assert!(!urlcanon::protocol_is_javascript("javascriptx:void(0)"));
    assert_eq!(
        urlcanon::mime_type_from_data_url("data:Text/HTML;charset=utf-8,<p>"),
        "text/html"
    );
    assert_eq!(urlcanon::mime_type_from_data_url("data:,plain"), "text/plain");
    assert_eq!(urlcanon::mime_type_from_data_url("data:nocomma"), "");
}
