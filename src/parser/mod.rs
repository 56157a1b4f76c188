mod parse_aggregator;
mod path;
mod resolve;

pub(crate) use parse_aggregator::{canonicalize, parse_url};
pub(crate) use resolve::resolve_url;
pub use parse_aggregator::parse;
pub use resolve::resolve;
