use crate::compat::Vec;
use crate::url_aggregator::UrlAggregator;

/// Name/value pairs of a query string, in order, duplicates kept.
/// Names and values borrow the URL's text and are not decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters<'a> {
    params: Vec<(&'a str, &'a str)>,
}

impl<'a> QueryParameters<'a> {
    /// Split a query (without the `?`) on `&`, then on the first `=`.
    /// Empty segments and segments with an empty name are skipped; a
    /// segment without `=` has an empty value.
    pub fn parse(query: &'a str) -> Self {
        let params = query
            .split('&')
            .filter_map(|segment| {
                let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
                (!name.is_empty()).then_some((name, value))
            })
            .collect();
        Self { params }
    }

    /// Get the first value for a name.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, v)| v)
    }

    /// Get all values for a name.
    pub fn get_all(&self, name: &str) -> Vec<&'a str> {
        self.params
            .iter()
            .filter(|(n, _)| *n == name)
            .map(|&(_, v)| v)
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|(n, _)| *n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.params.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl<'a> IntoIterator for QueryParameters<'a> {
    type Item = (&'a str, &'a str);
    type IntoIter = crate::compat::VecIntoIter<(&'a str, &'a str)>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

/// Parameters of the URL's query; empty when there is none.
///
/// ```
/// use urlcanon::{Url, parsed_query};
///
/// let url = Url::parse("http://h/?a=1&b&&a=2&=x");
/// let params: Vec<_> = parsed_query(&url).into_iter().collect();
/// assert_eq!(params, [("a", "1"), ("b", ""), ("a", "2")]);
/// ```
pub fn parsed_query(url: &UrlAggregator) -> QueryParameters<'_> {
    url.query().map(QueryParameters::parse).unwrap_or_default()
}

impl UrlAggregator {
    /// Shorthand for [`parsed_query`].
    pub fn query_parameters(&self) -> QueryParameters<'_> {
        parsed_query(self)
    }
}
