#![cfg_attr(not(feature = "std"), no_std)]
//! URL parsing, canonicalization and relative resolution for browser-class
//! clients.
//!
//! ```
//! use urlcanon::Url;
//!
//! let base = Url::parse("HTTP://Example.com:80/a/b/c");
//! assert_eq!(base.as_str(), "http://example.com/a/b/c");
//!
//! let next = base.resolve("../d?x=1#top");
//! assert_eq!(next.as_str(), "http://example.com/a/d?x=1#top");
//! assert_eq!(next.query(), Some("x=1"));
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;
mod log;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod comparators;
mod error;
mod helpers;
mod options;
mod parser;
mod ports;
mod query;
mod scheme;
mod setters;
mod types;
mod unicode;
mod url_aggregator;
mod url_components;

// Public API
pub use checkers::is_valid_protocol;
pub use comparators::{equal_ignoring_fragment, protocol_host_port_equal};
pub use error::{ParseError, Result};
pub use helpers::{mime_type_from_data_url, protocol_is, protocol_is_javascript};
pub use options::{IdnFailure, Options};
pub use parser::{parse, resolve};
pub use ports::{is_default_port_for_protocol, port_is_allowed};
pub use query::{QueryParameters, parsed_query};
pub use unicode::idna::normalize_hostname;
pub use unicode::percent_encode::{decode_percent_escapes, encode_percent_escapes};
pub use url_aggregator::UrlAggregator as Url;
pub use url_components::UrlComponents;

pub use encoding_rs;
