use crate::character_sets::{is_path_segment_end_char, is_scheme_char, is_scheme_first_char};
use crate::compat::{Cow, String, ToOwned, Vec};
use crate::error::{ParseError, Result};
use crate::helpers::{find_first_of, protocol_is};
use crate::log::warning;
use crate::options::IdnFailure;

/// Hostnames longer than this (in UTF-16 code units) are left untouched.
const HOSTNAME_BUFFER_LENGTH: usize = 2048;

/// Convert a Unicode hostname to its ASCII-compatible form.
///
/// Labels that are already ASCII are copied as is; every other label goes
/// through UTS #46 processing.
pub fn domain_to_ascii(hostname: &str) -> Result<Cow<'_, str>> {
    if hostname.is_ascii() || hostname.encode_utf16().count() > HOSTNAME_BUFFER_LENGTH {
        return Ok(Cow::Borrowed(hostname));
    }

    let mut result = String::with_capacity(hostname.len() * 2);
    for (i, label) in hostname.split('.').enumerate() {
        if i > 0 {
            result.push('.');
        }
        if label.is_ascii() {
            result.push_str(label);
        } else {
            let ascii = idna::domain_to_ascii(label).map_err(|_| ParseError::IdnaError)?;
            result.push_str(&ascii);
        }
    }
    Ok(Cow::Owned(result))
}

/// Apply the configured failure policy to [`domain_to_ascii`].
pub(crate) fn convert_hostname(hostname: &str, on_failure: IdnFailure) -> Result<Cow<'_, str>> {
    match domain_to_ascii(hostname) {
        Ok(ascii) => Ok(ascii),
        Err(err) => match on_failure {
            IdnFailure::Retain => {
                warning!("keeping hostname {hostname:?}: {err}");
                Ok(Cow::Borrowed(hostname))
            }
            IdnFailure::Reject => Err(err),
        },
    }
}

/// ASCII-compatible form of `hostname`; a hostname that cannot be
/// converted is returned unchanged.
///
/// ```
/// assert_eq!(urlcanon::normalize_hostname("example.com"), "example.com");
/// assert_eq!(urlcanon::normalize_hostname("bücher.de"), "xn--bcher-kva.de");
/// ```
pub fn normalize_hostname(hostname: &str) -> String {
    match convert_hostname(hostname, IdnFailure::Retain) {
        Ok(ascii) => ascii.into_owned(),
        Err(_) => hostname.to_owned(),
    }
}

/// Byte ranges of the hostnames of a `mailto:` URL: each `@` up to the next
/// `>`, `,` or `?`. Quoted strings are skipped and scanning stops at `?`.
fn find_hostnames_in_mailto(url: &str) -> Vec<(usize, usize)> {
    let bytes = url.as_bytes();
    let mut ranges = Vec::new();
    let mut p = 0;

    loop {
        let Some(found) = find_first_of(bytes, p, b"\"@?") else {
            return ranges;
        };
        p = found + 1;
        match bytes[found] {
            b'?' => return ranges,
            b'@' => match find_first_of(bytes, p, b">,?") {
                Some(end) => {
                    ranges.push((p, end));
                    p = end;
                }
                None => {
                    ranges.push((p, bytes.len()));
                    return ranges;
                }
            },
            _ => loop {
                let Some(quote_or_escape) = find_first_of(bytes, p, b"\"\\") else {
                    return ranges;
                };
                p = quote_or_escape + 1;
                if bytes[quote_or_escape] == b'"' {
                    break;
                }
                // Backslash escapes the next byte
                if p == bytes.len() {
                    return ranges;
                }
                p += 1;
            },
        }
    }
}

/// Byte range of the hostname of a `scheme://[user[:pass]@]host...` URL.
fn find_hostname_in_hierarchical(url: &str) -> Option<(usize, usize)> {
    let bytes = url.as_bytes();
    let separator = memchr::memchr(b':', bytes)?;
    if bytes.get(separator + 1) != Some(&b'/') || bytes.get(separator + 2) != Some(&b'/') {
        return None;
    }
    if !bytes.first().copied().is_some_and(is_scheme_first_char)
        || !bytes[1..separator].iter().copied().all(is_scheme_char)
    {
        return None;
    }

    let authority_start = separator + 3;
    let authority_end = bytes[authority_start..]
        .iter()
        .position(|&b| is_path_segment_end_char(b))
        .map_or(bytes.len(), |i| authority_start + i);

    // The password may contain ':', so skip the userinfo first
    let hostname_start = memchr::memchr(b'@', &bytes[authority_start..authority_end])
        .map_or(authority_start, |at| authority_start + at + 1);
    let hostname_end = memchr::memchr(b':', &bytes[hostname_start..authority_end])
        .map_or(authority_end, |i| hostname_start + i);
    Some((hostname_start, hostname_end))
}

fn replace_ranges<'a>(
    url: &'a str,
    ranges: &[(usize, usize)],
    on_failure: IdnFailure,
) -> Result<Cow<'a, str>> {
    let mut result = String::with_capacity(url.len() * 2);
    let mut copied = 0;
    for &(start, end) in ranges {
        result.push_str(&url[copied..start]);
        result.push_str(&convert_hostname(&url[start..end], on_failure)?);
        copied = end;
    }
    result.push_str(&url[copied..]);
    Ok(Cow::Owned(result))
}

/// Convert the hostnames of a relative reference to ASCII-compatible form.
pub(crate) fn encode_hostnames(url: &str, on_failure: IdnFailure) -> Result<Cow<'_, str>> {
    let ranges = if protocol_is(url, "mailto") {
        find_hostnames_in_mailto(url)
    } else {
        find_hostname_in_hierarchical(url).into_iter().collect()
    };
    if ranges.iter().all(|&(start, end)| url[start..end].is_ascii()) {
        return Ok(Cow::Borrowed(url));
    }
    replace_ranges(url, &ranges, on_failure)
}
