//! Length-prefixed raw byte codec.

use crate::buffer::ensure_capacity;
use crate::error::CodecError;
use crate::traits::ByteCodec;
use crate::varint::{decode_varint, encode_varint, MAX_VARINT_LEN};

/// Compact codec: a varint length followed by the raw bytes.
///
/// More efficient than [`GroupCodec`](crate::GroupCodec) in both space and
/// time, but the encoded form does not compare like the original data —
/// use it for values, not for sortable keys.
///
/// # Example
///
/// ```rust
/// use ordbytes::{ByteCodec, CompactCodec};
///
/// let mut buf = Vec::new();
/// CompactCodec.encode(&mut buf, b"payload");
/// let (rest, payload) = CompactCodec.decode(&buf).unwrap();
/// assert!(rest.is_empty());
/// assert_eq!(payload, b"payload");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CompactCodec;

impl ByteCodec for CompactCodec {
    fn encode(&self, buf: &mut Vec<u8>, data: &[u8]) {
        ensure_capacity(buf, MAX_VARINT_LEN + data.len());
        encode_varint(buf, data.len() as i64);
        buf.extend_from_slice(data);
    }

    fn decode<'a>(&self, buf: &'a [u8]) -> Result<(&'a [u8], Vec<u8>), CodecError> {
        let (rest, n) = decode_varint(buf)?;
        if n < 0 || n as u64 > rest.len() as u64 {
            return Err(CodecError::InsufficientBytes {
                expected: n.unsigned_abs(),
                actual: rest.len() as u64,
            });
        }
        let n = n as usize;
        Ok((&rest[n..], rest[..n].to_vec()))
    }
}
