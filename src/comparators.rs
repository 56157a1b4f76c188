use crate::url_aggregator::UrlAggregator;

/// Same text up to the fragment.
///
/// ```
/// use urlcanon::{Url, equal_ignoring_fragment};
///
/// assert!(equal_ignoring_fragment(&Url::parse("http://a/b#x"), &Url::parse("http://a/b#y")));
/// ```
pub fn equal_ignoring_fragment(a: &UrlAggregator, b: &UrlAggregator) -> bool {
    let a_end = a.components.query_end as usize;
    let b_end = b.components.query_end as usize;
    a_end == b_end && a.buffer[..a_end] == b.buffer[..b_end]
}

/// Same scheme, host and port, e.g. for an origin check.
pub fn protocol_host_port_equal(a: &UrlAggregator, b: &UrlAggregator) -> bool {
    a.protocol() == b.protocol()
        && a.host().eq_ignore_ascii_case(b.host())
        && a.port() == b.port()
}
