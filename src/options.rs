use encoding_rs::{Encoding, UTF_8};

/// What to do with a hostname that cannot be converted to ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IdnFailure {
    /// Keep the Unicode hostname (legacy browser behavior)
    #[default]
    Retain,
    /// Make the resolved URL invalid
    Reject,
}

/// Settings for [`Url::resolve_with`](crate::Url::resolve_with).
///
/// ```
/// use urlcanon::{IdnFailure, Options, Url};
/// use urlcanon::encoding_rs::WINDOWS_1252;
///
/// let base = Url::parse("http://example.com/");
/// let options = Options::default()
///     .with_encoding(WINDOWS_1252)
///     .with_idn_failure(IdnFailure::Reject);
/// assert_eq!(base.resolve_with("?q=é", &options).as_str(), "http://example.com/?q=%E9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Encoding of the query and fragment of non-ASCII references.
    /// Stored as its form-submission encoding, so UTF-16 becomes UTF-8.
    pub encoding: &'static Encoding,
    pub idn_failure: IdnFailure,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            encoding: UTF_8,
            idn_failure: IdnFailure::default(),
        }
    }
}

impl Options {
    #[must_use]
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding.output_encoding();
        self
    }

    #[must_use]
    pub fn with_idn_failure(mut self, idn_failure: IdnFailure) -> Self {
        self.idn_failure = idn_failure;
        self
    }
}
