use crate::character_sets::{is_ascii_tab_or_newline, is_bad_char};
use crate::compat::{Cow, String, ToOwned, ToString};
use crate::unicode::text_encoding::decode_bytes;
use encoding_rs::Encoding;
use percent_encoding::{AsciiSet, CONTROLS, percent_decode, percent_encode, utf8_percent_encode};

// Encode sets mirroring the BAD_CHAR class of `character_sets`.
// `CONTROLS` covers 0x00-0x1F and 0x7F; every non-ASCII byte is always encoded.

/// Fragment set: only controls, DEL and non-ASCII
pub const FRAGMENT_SET: &AsciiSet = CONTROLS;

/// Path and query set: every bad byte except `%` and `?`
pub const PATH_SET: &AsciiSet = &FRAGMENT_SET
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>');

/// Every bad byte, `%` and `?` included
pub const BAD_CHAR_SET: &AsciiSet = &PATH_SET.add(b'%').add(b'?');

/// Password set: everything that is not a userinfo character
pub const USERINFO_SET: &AsciiSet = &FRAGMENT_SET
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// User set: userinfo plus `:`, which would otherwise start the password
pub const USER_SET: &AsciiSet = &USERINFO_SET.add(b':');

/// Query text handed to a setter: `#` would start a fragment
pub const QUERY_SET: &AsciiSet = &CONTROLS.add(b'#');

fn encode_into(buffer: &mut String, input: &[u8], encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());
    for chunk in input.split(|&b| is_ascii_tab_or_newline(b)) {
        for piece in percent_encode(chunk, encode_set) {
            buffer.push_str(piece);
        }
    }
}

/// Escape a path or query into `buffer`. `%` and `?` pass through,
/// tab, CR and LF are dropped.
pub fn encode_path_into(buffer: &mut String, input: &[u8]) {
    encode_into(buffer, input, PATH_SET);
}

/// Escape a fragment into `buffer`: only 0x20-0x7E survive
/// unescaped, tab, CR and LF are dropped.
pub fn encode_fragment_into(buffer: &mut String, input: &[u8]) {
    encode_into(buffer, input, FRAGMENT_SET);
}

/// Percent-encode a string using the provided encode set
pub fn percent_encode_with_set(input: &str, encode_set: &'static AsciiSet) -> String {
    utf8_percent_encode(input, encode_set).to_string()
}

/// Escape every byte that may not appear verbatim in a URL, `%`, `?` and
/// `#` included, so the result decodes back to `input`.
///
/// ```
/// assert_eq!(urlcanon::encode_percent_escapes("a b%?"), "a%20b%25%3F");
/// ```
pub fn encode_percent_escapes(input: &str) -> String {
    if !input.bytes().any(is_bad_char) {
        return input.to_owned();
    }
    percent_encode_with_set(input, BAD_CHAR_SET)
}

#[inline]
fn is_escape_at(bytes: &[u8], i: usize) -> bool {
    bytes.get(i) == Some(&b'%')
        && bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
        && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit)
}

/// Decode `%XX` escapes. Each contiguous run of escapes is decoded as one
/// byte sequence in `encoding`; a run that does not decode is kept escaped.
///
/// ```
/// use urlcanon::encoding_rs::{UTF_8, WINDOWS_1252};
///
/// assert_eq!(urlcanon::decode_percent_escapes("caf%C3%A9", UTF_8), "café");
/// assert_eq!(urlcanon::decode_percent_escapes("caf%E9", WINDOWS_1252), "café");
/// assert_eq!(urlcanon::decode_percent_escapes("caf%E9", UTF_8), "caf%E9");
/// ```
pub fn decode_percent_escapes(input: &str, encoding: &'static Encoding) -> String {
    let bytes = input.as_bytes();
    let mut result = String::with_capacity(input.len());
    let mut decoded_position = 0;
    let mut search_position = 0;

    while let Some(offset) = memchr::memchr(b'%', &bytes[search_position..]) {
        let run_start = search_position + offset;
        let mut run_end = run_start;
        while is_escape_at(bytes, run_end) {
            run_end += 3;
        }
        if run_end == run_start {
            search_position = run_start + 1;
            continue;
        }
        search_position = run_end;

        let run: Cow<'_, [u8]> = percent_decode(&bytes[run_start..run_end]).into();
        let Some(decoded) = decode_bytes(&run, encoding) else {
            continue;
        };
        result.push_str(&input[decoded_position..run_start]);
        result.push_str(&decoded);
        decoded_position = run_end;
    }

    result.push_str(&input[decoded_position..]);
    result
}
