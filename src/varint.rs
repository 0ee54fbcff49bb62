//! Zigzag LEB128 varint used as the compact codec's length prefix.
//!
//! Signed 64-bit values are zigzag-mapped to unsigned ones (so small
//! magnitudes of either sign stay short) and emitted as little-endian
//! base-128 groups with a continuation high bit. A 64-bit value takes at
//! most [`MAX_VARINT_LEN`] bytes. Decoding consumes exactly the bytes
//! encoding produced.

use crate::error::CodecError;

/// Maximum encoded size of a 64-bit varint.
pub(crate) const MAX_VARINT_LEN: usize = 10;

/// Append the varint encoding of `v` to `buf`.
pub(crate) fn encode_varint(buf: &mut Vec<u8>, v: i64) {
    // Zigzag: 0, -1, 1, -2, ... -> 0, 1, 2, 3, ...
    let mut ux = ((v << 1) ^ (v >> 63)) as u64;
    while ux >= 0x80 {
        buf.push((ux as u8) | 0x80);
        ux >>= 7;
    }
    buf.push(ux as u8);
}

/// Decode one varint from the front of `b`, returning the unread tail and
/// the value.
pub(crate) fn decode_varint(b: &[u8]) -> Result<(&[u8], i64), CodecError> {
    let mut ux = 0u64;
    let mut shift = 0u32;
    for (i, &byte) in b.iter().enumerate() {
        if i == MAX_VARINT_LEN {
            return Err(CodecError::LengthPrefix("varint overflows a 64-bit integer"));
        }
        if byte < 0x80 {
            // The tenth byte only has room for the top bit of a u64.
            if i == MAX_VARINT_LEN - 1 && byte > 1 {
                return Err(CodecError::LengthPrefix("varint overflows a 64-bit integer"));
            }
            ux |= u64::from(byte) << shift;
            let v = ((ux >> 1) as i64) ^ -((ux & 1) as i64);
            return Ok((&b[i + 1..], v));
        }
        ux |= u64::from(byte & 0x7f) << shift;
        shift += 7;
    }
    Err(CodecError::LengthPrefix("varint truncated"))
}
