//! Single-pass canonicalizer: scans the input once for component
//! boundaries, then writes the canonical form into one buffer while
//! recording offsets.

use crate::character_sets::{
    is_hostname_char, is_ipv6_char, is_scheme_char, is_scheme_first_char, is_segment_terminator,
    is_user_info_char,
};
use crate::compat::{Cow, String, Vec};
use crate::error::{ParseError, Result};
use crate::log::debug;
use crate::parser::path::{has_slash_dot_or_dot_dot, remove_dot_segments};
use crate::ports::is_default_port_text;
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;
use crate::unicode::percent_encode::{encode_fragment_into, encode_path_into};
use crate::url_aggregator::UrlAggregator;
use crate::url_components::UrlComponents;

#[inline]
fn peek(input: &[u8], i: usize) -> Option<u8> {
    input.get(i).copied()
}

/// Offsets of the authority inside the raw input.
#[derive(Debug, Clone, Copy)]
struct Authority {
    user_start: usize,
    user_end: usize,
    password_start: usize,
    password_end: usize,
    host_start: usize,
    host_end: usize,
    port_start: usize,
    port_end: usize,
}

impl Authority {
    /// No authority: everything collapses onto `at`.
    fn empty_at(at: usize) -> Self {
        Self {
            user_start: at,
            user_end: at,
            password_start: at,
            password_end: at,
            host_start: at,
            host_end: at,
            port_start: at,
            port_end: at,
        }
    }

    fn has_userinfo(&self) -> bool {
        self.user_start != self.user_end || self.password_start != self.password_end
    }

    fn has_port_colon(&self) -> bool {
        self.host_end != self.port_start
    }
}

/// Scan `[userinfo@]host[:port]` starting after the scheme colon.
fn scan_authority(
    input: &[u8],
    scheme_end: usize,
    leading_slashes: usize,
    scheme_type: SchemeType,
) -> Result<Authority> {
    let user_start = scheme_end + 1 + leading_slashes;

    let mut user_end = user_start;
    let mut first_colon = None;
    while let Some(c) = peek(input, user_end).filter(|&c| is_user_info_char(c)) {
        if c == b':' && first_colon.is_none() {
            first_colon = Some(user_end);
        }
        user_end += 1;
    }

    let (password_start, password_end, host_start);
    match peek(input, user_end) {
        Some(b'@') => {
            if let Some(colon) = first_colon {
                password_start = colon + 1;
                password_end = user_end;
                user_end = colon;
            } else {
                password_start = user_end;
                password_end = user_end;
            }
            host_start = password_end + 1;
        }
        c if c == Some(b'[') || is_segment_terminator(c) => {
            // What was scanned is the host, not userinfo
            user_end = user_start;
            password_start = user_start;
            password_end = user_start;
            host_start = user_start;
        }
        _ => return Err(ParseError::InvalidAuthority),
    }

    let mut host_end = host_start;
    if peek(input, host_end) == Some(b'[') {
        host_end += 1;
        while peek(input, host_end).is_some_and(is_ipv6_char) {
            host_end += 1;
        }
        if peek(input, host_end) != Some(b']') {
            return Err(ParseError::InvalidIpv6);
        }
        host_end += 1;
    } else {
        while peek(input, host_end).is_some_and(is_hostname_char) {
            host_end += 1;
        }
    }

    let (port_start, mut port_end) = if peek(input, host_end) == Some(b':') {
        (host_end + 1, host_end + 1)
    } else {
        (host_end, host_end)
    };
    while peek(input, port_end).is_some_and(|c| c.is_ascii_digit()) {
        port_end += 1;
    }

    if !is_segment_terminator(peek(input, port_end)) {
        return Err(if port_start == host_end {
            ParseError::InvalidHost
        } else {
            ParseError::InvalidPort
        });
    }

    if peek(input, password_end) == Some(b'@') && host_start == port_end {
        return Err(ParseError::MissingHost);
    }

    if user_start == port_end && !scheme_type.is_http_family() && scheme_type != SchemeType::File
    {
        return Ok(Authority::empty_at(scheme_end + 1));
    }

    Ok(Authority {
        user_start,
        user_end,
        password_start,
        password_end,
        host_start,
        host_end,
        port_start,
        port_end,
    })
}

/// Push ASCII bytes, lowercasing when asked.
fn push_ascii(buffer: &mut String, bytes: &[u8], lowercase: bool) {
    buffer.extend(bytes.iter().map(|&b| {
        char::from(if lowercase {
            b.to_ascii_lowercase()
        } else {
            b
        })
    }));
}

/// Canonicalize `input`, or report why it is not a URL.
pub(crate) fn canonicalize(input: &[u8]) -> Result<UrlAggregator> {
    let Some(&first) = input.first() else {
        return Err(ParseError::EmptyInput);
    };
    if !is_scheme_first_char(first) {
        return Err(ParseError::InvalidScheme);
    }
    let scheme_end = input
        .iter()
        .position(|&b| !is_scheme_char(b))
        .unwrap_or(input.len());
    if peek(input, scheme_end) != Some(b':') {
        return Err(ParseError::InvalidScheme);
    }

    let scheme_type = get_scheme_type(&input[..scheme_end]);
    let is_file = scheme_type == SchemeType::File;
    let hierarchical = peek(input, scheme_end + 1) == Some(b'/');
    let has_second_slash = hierarchical && peek(input, scheme_end + 2) == Some(b'/');

    let authority = if has_second_slash || scheme_type.always_has_authority() {
        let leading_slashes = usize::from(hierarchical) + usize::from(has_second_slash);
        scan_authority(input, scheme_end, leading_slashes, scheme_type)?
    } else {
        Authority::empty_at(scheme_end + 1)
    };

    let path_start = authority.port_end;
    let path_end = memchr::memchr2(b'?', b'#', &input[path_start..])
        .map_or(input.len(), |i| path_start + i);
    let query_end = if peek(input, path_end) == Some(b'?') {
        memchr::memchr(b'#', &input[path_end..]).map_or(input.len(), |i| path_end + i)
    } else {
        path_end
    };
    let path = &input[path_start..path_end];

    let host = &input[authority.host_start..authority.host_end];
    let host_is_localhost = input[authority.user_start..authority.port_end]
        .eq_ignore_ascii_case(b"localhost");
    let degenerate_file_path = path.is_empty() && (host.is_empty() || host_is_localhost);
    let have_non_host_authority_part = authority.has_userinfo() || authority.has_port_colon();

    let mut buffer = String::with_capacity(input.len() + 8);
    let mut components = UrlComponents::new();

    push_ascii(&mut buffer, &input[..scheme_end], true);
    components.scheme_end = buffer.len() as u32;
    buffer.push(':');

    let emit_authority = if is_file {
        !degenerate_file_path
    } else {
        have_non_host_authority_part || !host.is_empty()
    };

    if emit_authority {
        buffer.push_str("//");
        let user_start = buffer.len();
        components.user_start = user_start as u32;
        push_ascii(&mut buffer, &input[authority.user_start..authority.user_end], false);
        components.user_end = buffer.len() as u32;
        if authority.password_start != authority.password_end {
            buffer.push(':');
            push_ascii(
                &mut buffer,
                &input[authority.password_start..authority.password_end],
                false,
            );
        }
        components.password_end = buffer.len() as u32;
        if buffer.len() != user_start {
            buffer.push('@');
        }

        if !(is_file && host_is_localhost && !have_non_host_authority_part) {
            push_ascii(&mut buffer, host, scheme_type.lowercases_host());
        }
        components.host_end = buffer.len() as u32;

        if authority.has_port_colon() {
            let port = &input[authority.port_start..authority.port_end];
            if !port.is_empty() && !is_default_port_text(port, scheme_type) {
                buffer.push(':');
                push_ascii(&mut buffer, port, false);
            } else if host.is_empty() {
                buffer.push(':');
            }
        }
        components.port_end = buffer.len() as u32;
    } else {
        if is_file {
            buffer.push_str("//");
        }
        let at = buffer.len() as u32;
        components.user_start = at;
        components.user_end = at;
        components.password_end = at;
        components.host_end = at;
        components.port_end = at;
    }

    let port_end = buffer.len();
    let path: Cow<'_, [u8]> = if is_file && path.first() != Some(&b'/') {
        let mut rooted = Vec::with_capacity(path.len() + 1);
        rooted.push(b'/');
        rooted.extend_from_slice(path);
        Cow::Owned(rooted)
    } else {
        Cow::Borrowed(path)
    };
    if path.is_empty() && scheme_type.is_http_family() {
        buffer.push('/');
    }

    // Only rooted paths have segments to collapse
    if path.first() == Some(&b'/') && has_slash_dot_or_dot_dot(&path) {
        encode_path_into(&mut buffer, &remove_dot_segments(&path));
    } else {
        encode_path_into(&mut buffer, &path);
    }
    components.path_end = buffer.len() as u32;
    components.path_after_last_slash = buffer[port_end..]
        .rfind('/')
        .map_or(port_end, |i| port_end + i + 1) as u32;

    encode_path_into(&mut buffer, &input[path_end..query_end]);
    components.query_end = buffer.len() as u32;

    if peek(input, query_end) == Some(b'#') {
        buffer.push('#');
        encode_fragment_into(&mut buffer, &input[query_end + 1..]);
    }
    components.fragment_end = buffer.len() as u32;

    debug_assert!(components.is_monotonic(buffer.len()));

    Ok(UrlAggregator {
        buffer,
        components,
        scheme_type,
        is_valid: true,
    })
}

/// Parse `input`; failures produce an invalid URL holding `input` verbatim.
/// An input that is already canonical keeps its allocation.
pub(crate) fn parse_url(input: Cow<'_, str>) -> UrlAggregator {
    match canonicalize(input.as_bytes()) {
        Ok(mut url) => {
            if url.buffer == *input {
                if let Cow::Owned(original) = input {
                    url.buffer = original;
                }
            }
            url
        }
        Err(err) => {
            debug!("invalid URL {:?}: {err}", &*input);
            UrlAggregator::invalid(input.into_owned())
        }
    }
}

/// Parse a URL string.
///
/// ```
/// let url = urlcanon::parse("HTTP://Example.COM:80/a/./b");
/// assert_eq!(url.as_str(), "http://example.com/a/b");
/// ```
pub fn parse(input: &str) -> UrlAggregator {
    parse_url(Cow::Borrowed(input))
}
