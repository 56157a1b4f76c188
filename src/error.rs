/// Reasons a URL string can fail to parse or resolve.
///
/// Parsing never reports these through a panic: `Url::parse` and
/// `Url::resolve` fold them into an invalid [`Url`](crate::Url). They are
/// surfaced directly by `str::parse::<Url>()` and `Url::with_protocol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// The input was empty
    EmptyInput,
    /// Missing or malformed scheme
    InvalidScheme,
    /// A character that may not appear in the authority
    InvalidAuthority,
    /// Invalid character in the host
    InvalidHost,
    /// Unterminated or malformed IPv6 literal
    InvalidIpv6,
    /// Non-digit characters after the port colon
    InvalidPort,
    /// Credentials are present but host and port are empty
    MissingHost,
    /// The base URL is invalid and not empty
    InvalidBase,
    /// Only fragment references can be resolved against an opaque base
    OpaqueBase,
    /// Hostname could not be converted to its ASCII form
    IdnaError,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::EmptyInput => "Empty input",
            Self::InvalidScheme => "Invalid scheme",
            Self::InvalidAuthority => "Invalid character in authority",
            Self::InvalidHost => "Invalid host",
            Self::InvalidIpv6 => "Invalid IPv6 literal",
            Self::InvalidPort => "Invalid port",
            Self::MissingHost => "Credentials without host",
            Self::InvalidBase => "Invalid base URL",
            Self::OpaqueBase => "Relative reference against opaque base URL",
            Self::IdnaError => "IDNA processing error",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL operations
pub type Result<T> = core::result::Result<T, ParseError>;
