use crate::compat::{Cow, String};

/// Find the first byte at or after `start` that is one of `needles`.
/// Uses SIMD-accelerated memchr for up to three needles.
pub fn find_first_of(haystack: &[u8], start: usize, needles: &[u8]) -> Option<usize> {
    let tail = haystack.get(start..)?;
    let found = match *needles {
        [a] => memchr::memchr(a, tail),
        [a, b] => memchr::memchr2(a, b, tail),
        [a, b, c] => memchr::memchr3(a, b, c, tail),
        _ => tail.iter().position(|b| needles.contains(b)),
    };
    found.map(|i| start + i)
}

/// Strip leading and trailing bytes up to and including space.
pub fn trim_url(input: &[u8]) -> &[u8] {
    let start = input.iter().position(|&b| b > b' ').unwrap_or(input.len());
    let end = input.iter().rposition(|&b| b > b' ').map_or(start, |i| i + 1);
    &input[start..end]
}

/// Turn `\` into `/` before the query or fragment.
pub fn substitute_backslashes(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let path_end = memchr::memchr2(b'?', b'#', bytes).unwrap_or(bytes.len());
    if memchr::memchr(b'\\', &bytes[..path_end]).is_none() {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len());
    result.extend(input[..path_end].chars().map(|c| if c == '\\' { '/' } else { c }));
    result.push_str(&input[path_end..]);
    Cow::Owned(result)
}

/// Whether `url` starts with `protocol` (case-insensitive) followed by `:`.
/// Never allocates.
///
/// ```
/// assert!(urlcanon::protocol_is("HTTP://example.com", "http"));
/// assert!(!urlcanon::protocol_is("https://example.com", "http"));
/// ```
pub fn protocol_is(url: &str, protocol: &str) -> bool {
    let url = url.as_bytes();
    let len = protocol.len();
    url.get(len) == Some(&b':') && url[..len].eq_ignore_ascii_case(protocol.as_bytes())
}

/// Whether `url` is a `javascript:` URL.
pub fn protocol_is_javascript(url: &str) -> bool {
    protocol_is(url, "javascript")
}

/// Lowercased MIME type of a `data:` URL, `text/plain` when omitted, or an
/// empty string when `url` is not a well-formed `data:` URL.
///
/// ```
/// assert_eq!(urlcanon::mime_type_from_data_url("data:Image/PNG;base64,AAAA"), "image/png");
/// assert_eq!(urlcanon::mime_type_from_data_url("data:,hello"), "text/plain");
/// ```
pub fn mime_type_from_data_url(url: &str) -> String {
    let Some(rest) = url.get(5..).filter(|_| protocol_is(url, "data")) else {
        return String::new();
    };
    let Some(end) = memchr::memchr2(b';', b',', rest.as_bytes()) else {
        return String::new();
    };
    if end == 0 {
        return String::from("text/plain");
    }
    rest[..end].to_ascii_lowercase()
}
