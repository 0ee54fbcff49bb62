//! Common interface implemented by the codecs in this crate.

use crate::error::CodecError;

/// A codec that appends an encoded byte string to a buffer and consumes
/// one encoded value from the front of a buffer.
///
/// Implementations are stateless value types; encoding appends to the
/// caller's buffer without disturbing bytes already present, and decoding
/// returns the unread tail alongside a freshly owned payload so that
/// several values can be framed back to back in one buffer.
pub trait ByteCodec {
    /// Append the encoding of `data` to `buf`.
    ///
    /// Never fails; the only effect is growth of `buf`.
    fn encode(&self, buf: &mut Vec<u8>, data: &[u8]);

    /// Consume one encoded value from the front of `buf`.
    ///
    /// Returns the unconsumed trailing bytes and the decoded payload, or a
    /// [`CodecError`] if `buf` does not start with a well-formed value. On
    /// failure no partial payload is exposed.
    fn decode<'a>(&self, buf: &'a [u8]) -> Result<(&'a [u8], Vec<u8>), CodecError>;
}
