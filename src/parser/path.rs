//! Dot-segment removal.

use crate::character_sets::is_segment_terminator;
use crate::compat::Vec;

/// Whether `path` contains a `/.` or `..` sequence worth collapsing.
pub fn has_slash_dot_or_dot_dot(path: &[u8]) -> bool {
    path.windows(2)
        .any(|w| w[1] == b'.' && (w[0] == b'/' || w[0] == b'.'))
}

/// Drop the last segment of `buffer`, never going below `floor + 1` so the
/// leading `/` survives.
pub fn pop_segment(buffer: &mut Vec<u8>, floor: usize) {
    if buffer.len() > floor + 1 {
        buffer.pop();
    }
    while buffer.len() > floor + 1 && buffer.last() != Some(&b'/') {
        buffer.pop();
    }
}

/// Copy `path` into a new buffer with `.` and `..` segments collapsed.
/// `..` above the root is dropped.
pub fn remove_dot_segments(path: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(path.len());
    let mut i = 0;

    while let Some(&c) = path.get(i) {
        if c == b'.' && buffer.last() == Some(&b'/') {
            let next = path.get(i + 1).copied();
            if is_segment_terminator(next) {
                // "./" or a trailing "."
                i += if next.is_some() { 2 } else { 1 };
                continue;
            }
            if next == Some(b'.') && is_segment_terminator(path.get(i + 2).copied()) {
                i += if path.get(i + 2).is_some() { 3 } else { 2 };
                pop_segment(&mut buffer, 0);
                continue;
            }
        }
        buffer.push(c);
        i += 1;
    }

    buffer
}
