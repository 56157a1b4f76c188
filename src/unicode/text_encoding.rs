//! Bridge between URL bytes and legacy text encodings.

use crate::compat::{Cow, Vec, format};
use encoding_rs::{EncoderResult, Encoding, UTF_8};

/// Decode `bytes` as `encoding`, or `None` if they are malformed in it.
pub fn decode_bytes<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Option<Cow<'a, str>> {
    encoding.decode_without_bom_handling_and_without_replacement(bytes)
}

/// Append `input` encoded as `encoding` to `output`. Characters the
/// encoding cannot represent become an escaped numeric character
/// reference, `%26%23NNNN%3B`.
pub fn encode_into(input: &str, encoding: &'static Encoding, output: &mut Vec<u8>) {
    let encoding = encoding.output_encoding();
    if encoding == UTF_8 {
        output.extend_from_slice(input.as_bytes());
        return;
    }

    let mut encoder = encoding.new_encoder();
    let mut remaining = input;
    loop {
        let capacity = encoder
            .max_buffer_length_from_utf8_without_replacement(remaining.len())
            .unwrap_or(remaining.len().saturating_mul(4).saturating_add(16));
        let start = output.len();
        output.resize(start + capacity, 0);
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(remaining, &mut output[start..], true);
        output.truncate(start + written);
        remaining = &remaining[read..];

        match result {
            EncoderResult::InputEmpty => return,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(c) => {
                output.extend_from_slice(format!("%26%23{}%3B", u32::from(c)).as_bytes());
            }
        }
    }
}
