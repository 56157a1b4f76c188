//! Byte classification for the URL scanner.
//!
//! One 256-entry table, one bit per class. The classes follow RFC 3986
//! `unreserved`/`sub-delims`, except that hostnames also accept `_` to match
//! widely deployed names.

/// ALPHA
pub const SCHEME_FIRST_CHAR: u8 = 1 << 0;
/// ALPHA / DIGIT / "+" / "-" / "."
pub const SCHEME_CHAR: u8 = 1 << 1;
/// unreserved / pct-encoded / ";" ":" "&" "=" "+" "$" ","
pub const USER_INFO_CHAR: u8 = 1 << 2;
/// alnum / "." / "-" / "%" / "_"
pub const HOSTNAME_CHAR: u8 = 1 << 3;
/// HEXDIG / ":" / "%" / "."
pub const IPV6_CHAR: u8 = 1 << 4;
/// "#" / "?" / "/"
pub const PATH_SEGMENT_END_CHAR: u8 = 1 << 5;
/// Bytes that must be percent-encoded in a path
pub const BAD_CHAR: u8 = 1 << 6;

const CHARACTER_CLASS_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    // C0 controls, space, DEL and every non-ASCII byte
    let mut i = 0;
    while i <= 0x20 {
        table[i] = BAD_CHAR;
        i += 1;
    }
    let mut i = 0x7F;
    while i <= 0xFF {
        table[i] = BAD_CHAR;
        i += 1;
    }

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = SCHEME_FIRST_CHAR | SCHEME_CHAR | USER_INFO_CHAR | HOSTNAME_CHAR;
        table[(i - 32) as usize] = table[i as usize];
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = SCHEME_CHAR | USER_INFO_CHAR | HOSTNAME_CHAR | IPV6_CHAR;
        i += 1;
    }
    let mut i = b'a';
    while i <= b'f' {
        table[i as usize] |= IPV6_CHAR;
        table[(i - 32) as usize] |= IPV6_CHAR;
        i += 1;
    }

    table[b'!' as usize] = USER_INFO_CHAR;
    table[b'"' as usize] = BAD_CHAR;
    table[b'#' as usize] = PATH_SEGMENT_END_CHAR | BAD_CHAR;
    table[b'$' as usize] = USER_INFO_CHAR;
    table[b'%' as usize] = USER_INFO_CHAR | HOSTNAME_CHAR | IPV6_CHAR | BAD_CHAR;
    table[b'&' as usize] = USER_INFO_CHAR;
    table[b'\'' as usize] = USER_INFO_CHAR;
    table[b'(' as usize] = USER_INFO_CHAR;
    table[b')' as usize] = USER_INFO_CHAR;
    table[b'*' as usize] = USER_INFO_CHAR;
    table[b'+' as usize] = SCHEME_CHAR | USER_INFO_CHAR;
    table[b',' as usize] = USER_INFO_CHAR;
    table[b'-' as usize] = SCHEME_CHAR | USER_INFO_CHAR | HOSTNAME_CHAR;
    table[b'.' as usize] = SCHEME_CHAR | USER_INFO_CHAR | HOSTNAME_CHAR | IPV6_CHAR;
    table[b'/' as usize] = PATH_SEGMENT_END_CHAR;
    table[b':' as usize] = USER_INFO_CHAR | IPV6_CHAR;
    table[b';' as usize] = USER_INFO_CHAR;
    table[b'<' as usize] = BAD_CHAR;
    table[b'=' as usize] = USER_INFO_CHAR;
    table[b'>' as usize] = BAD_CHAR;
    table[b'?' as usize] = PATH_SEGMENT_END_CHAR | BAD_CHAR;
    table[b'_' as usize] = USER_INFO_CHAR | HOSTNAME_CHAR;
    table[b'~' as usize] = USER_INFO_CHAR;
    // '@', '[', '\\', ']', '^', '`', '{', '|' and '}' belong to no class

    table
};

/// Class bitmask of a byte (branchless via lookup table)
#[inline]
pub fn classify(b: u8) -> u8 {
    CHARACTER_CLASS_TABLE[b as usize]
}

#[inline]
pub fn is_scheme_first_char(b: u8) -> bool {
    classify(b) & SCHEME_FIRST_CHAR != 0
}

#[inline]
pub fn is_scheme_char(b: u8) -> bool {
    classify(b) & SCHEME_CHAR != 0
}

#[inline]
pub fn is_user_info_char(b: u8) -> bool {
    classify(b) & USER_INFO_CHAR != 0
}

#[inline]
pub fn is_hostname_char(b: u8) -> bool {
    classify(b) & HOSTNAME_CHAR != 0
}

#[inline]
pub fn is_ipv6_char(b: u8) -> bool {
    classify(b) & IPV6_CHAR != 0
}

#[inline]
pub fn is_path_segment_end_char(b: u8) -> bool {
    classify(b) & PATH_SEGMENT_END_CHAR != 0
}

#[inline]
pub fn is_bad_char(b: u8) -> bool {
    classify(b) & BAD_CHAR != 0
}

/// End of input counts as the end of a path segment.
#[inline]
pub fn is_segment_terminator(b: Option<u8>) -> bool {
    b.is_none_or(is_path_segment_end_char)
}

/// Check if a byte is an ASCII tab or newline
#[inline]
pub fn is_ascii_tab_or_newline(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r')
}
