use crate::character_sets::{is_scheme_char, is_scheme_first_char};

/// Largest port number a URL may carry; 65535 is reserved as the
/// invalid-port marker.
pub const MAXIMUM_VALID_PORT: u16 = 0xFFFE;

/// Check that `protocol` is ALPHA followed by ALPHA / DIGIT / "+" / "-" / ".".
///
/// ```
/// assert!(urlcanon::is_valid_protocol("svn+ssh"));
/// assert!(!urlcanon::is_valid_protocol("1http"));
/// ```
pub fn is_valid_protocol(protocol: &str) -> bool {
    let mut bytes = protocol.bytes();
    bytes.next().is_some_and(is_scheme_first_char) && bytes.all(is_scheme_char)
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or exceeds
/// [`MAXIMUM_VALID_PORT`].
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok().filter(|&p| p <= MAXIMUM_VALID_PORT)
}
