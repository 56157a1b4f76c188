//! Combining a base URL with a relative reference.

use crate::character_sets::{is_scheme_char, is_scheme_first_char, is_segment_terminator};
use crate::compat::{Cow, Vec};
use crate::error::{ParseError, Result};
use crate::helpers::{
    find_first_of, protocol_is, protocol_is_javascript, substitute_backslashes, trim_url,
};
use crate::log::debug;
use crate::options::Options;
use crate::parser::parse_aggregator::canonicalize;
use crate::parser::path::{pop_segment, remove_dot_segments};
use crate::unicode::idna::encode_hostnames;
use crate::unicode::text_encoding::encode_into;
use crate::url_aggregator::UrlAggregator;

/// Length of the `scheme` in a `scheme:` prefix, if `input` has one.
fn scheme_prefix_len(input: &[u8]) -> Option<usize> {
    if !input.first().copied().is_some_and(is_scheme_first_char) {
        return None;
    }
    let end = input.iter().position(|&b| !is_scheme_char(b))?;
    (input[end] == b':').then_some(end)
}

/// Prepare a non-ASCII reference: hostnames to ASCII, the path as UTF-8 and,
/// for legacy encodings, the query and fragment in that encoding.
fn encode_relative_string(relative: &str, options: &Options) -> Result<Vec<u8>> {
    let with_ascii_hosts = encode_hostnames(relative, options.idn_failure)?;
    let text = with_ascii_hosts.as_ref();

    let encoding = options.encoding.output_encoding();
    let legacy_split = if encoding == encoding_rs::UTF_8
        || protocol_is(relative, "mailto")
        || protocol_is(relative, "data")
        || protocol_is_javascript(relative)
    {
        None
    } else {
        find_first_of(text.as_bytes(), 0, b"#?")
    };

    let mut output = Vec::with_capacity(text.len() * 2);
    match legacy_split {
        None => output.extend_from_slice(text.as_bytes()),
        Some(split) => {
            output.extend_from_slice(&text.as_bytes()[..split]);
            encode_into(&text[split..], encoding, &mut output);
        }
    }
    Ok(output)
}

/// Merge a relative path onto the directory of the base path, collapsing
/// dot segments of the reference on the way.
fn merge_paths(base: &UrlAggregator, reference: &[u8]) -> Vec<u8> {
    let base_text = base.buffer.as_bytes();
    let scheme_end = base.components.scheme_end as usize;
    let port_end = base.components.port_end as usize;
    let path_end = base.components.path_end as usize;

    let mut buffer = Vec::with_capacity(path_end + 1 + reference.len());
    buffer.extend_from_slice(&base_text[..port_end]);
    let path_start = buffer.len();

    let base_path = &base_text[port_end..path_end];
    match memchr::memrchr(b'/', base_path) {
        Some(last_slash) => buffer.extend(remove_dot_segments(&base_path[..=last_slash])),
        // Anything between the scheme colon and the path end needs a root
        None if scheme_end + 1 != path_end => buffer.push(b'/'),
        None => {}
    }

    let mut i = 0;
    while let Some(&c) = reference.get(i) {
        if c == b'?' || c == b'#' {
            break;
        }
        if c == b'.' && buffer.last() == Some(&b'/') {
            let next = reference.get(i + 1).copied();
            if is_segment_terminator(next) {
                i += 1;
                if next == Some(b'/') {
                    i += 1;
                }
                continue;
            }
            let after = reference.get(i + 2).copied();
            if next == Some(b'.') && is_segment_terminator(after) {
                i += 2;
                if after == Some(b'/') {
                    i += 1;
                }
                pop_segment(&mut buffer, path_start);
                continue;
            }
        }
        buffer.push(c);
        i += 1;
    }
    buffer.extend_from_slice(&reference[i..]);
    buffer
}

fn concat(head: &str, tail: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(head.len() + tail.len());
    buffer.extend_from_slice(head.as_bytes());
    buffer.extend_from_slice(tail);
    buffer
}

fn resolve_inner(base: &UrlAggregator, relative: &str, options: &Options) -> Result<UrlAggregator> {
    if !base.is_valid && !base.buffer.is_empty() {
        return Err(ParseError::InvalidBase);
    }

    let relative = if protocol_is_javascript(relative) || protocol_is(relative, "data") {
        Cow::Borrowed(relative)
    } else {
        substitute_backslashes(relative)
    };

    let encoded: Cow<'_, [u8]> = if relative.is_ascii() {
        Cow::Borrowed(relative.as_bytes())
    } else {
        Cow::Owned(encode_relative_string(&relative, options)?)
    };
    let mut reference = trim_url(&encoded);

    if let Some(scheme_len) = scheme_prefix_len(reference) {
        let rest = &reference[scheme_len + 1..];
        let same_scheme = base.is_hierarchical()
            && reference[..scheme_len].eq_ignore_ascii_case(base.protocol().as_bytes());
        if same_scheme && !rest.starts_with(b"//") {
            reference = rest;
        } else {
            return canonicalize(reference);
        }
    }

    let c = base.components;
    let text = base.buffer.as_str();

    if !base.is_hierarchical() {
        if reference.first() == Some(&b'#') {
            return canonicalize(&concat(&text[..c.query_end as usize], reference));
        }
        return Err(if base.is_valid {
            ParseError::OpaqueBase
        } else {
            ParseError::InvalidBase
        });
    }

    let assembled = match reference {
        [] => concat(&text[..c.query_end as usize], b""),
        [b'#', ..] => concat(&text[..c.query_end as usize], reference),
        [b'?', ..] => concat(&text[..c.path_end as usize], reference),
        [b'/', b'/', ..] => concat(&text[..=c.scheme_end as usize], reference),
        [b'/', ..] => concat(&text[..c.port_end as usize], reference),
        _ => merge_paths(base, reference),
    };
    canonicalize(&assembled)
}

/// Resolve `relative` against `base`; failures produce an invalid URL
/// holding `relative` verbatim.
pub(crate) fn resolve_url(base: &UrlAggregator, relative: &str, options: &Options) -> UrlAggregator {
    resolve_inner(base, relative, options).unwrap_or_else(|err| {
        debug!("cannot resolve {relative:?} against {:?}: {err}", base.as_str());
        UrlAggregator::invalid(relative.into())
    })
}

/// Resolve `relative` against `base` with default [`Options`].
///
/// ```
/// let base = urlcanon::parse("http://a/b/c/d;p?q");
/// assert_eq!(urlcanon::resolve(&base, "../g").as_str(), "http://a/b/g");
/// ```
pub fn resolve(base: &UrlAggregator, relative: &str) -> UrlAggregator {
    resolve_url(base, relative, &Options::default())
}
