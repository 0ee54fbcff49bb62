//! Error type shared by all codecs in this crate.

use thiserror::Error;

/// Errors reported while decoding malformed input.
///
/// Encoding never fails; every variant here is a deterministic function of
/// the input bytes handed to a decode call. Nothing is retried internally
/// and no failure is fatal — callers decide how to treat corruption.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The buffer ended before a complete group or payload could be read.
    #[error("insufficient bytes to decode value, expected at least {expected}, got {actual}")]
    InsufficientBytes {
        /// Bytes the decoder needed to make progress.
        expected: u64,
        /// Bytes actually remaining in the buffer.
        actual: u64,
    },

    /// A group's marker byte encodes a pad count larger than the group
    /// size. Indicates corruption or a decode started mid-value.
    #[error("invalid marker byte 0x{marker:02x}, group bytes {group:?}")]
    InvalidMarker {
        /// The offending marker byte.
        marker: u8,
        /// The full 9-byte group, after un-complementing for descending
        /// input.
        group: Vec<u8>,
    },

    /// A non-zero byte was found where the marker promised zero padding.
    #[error("invalid padding byte, group bytes {group:?}")]
    InvalidPadding {
        /// The full 9-byte group, after un-complementing for descending
        /// input.
        group: Vec<u8>,
    },

    /// The varint length prefix of a compact value could not be decoded.
    #[error("invalid length prefix: {0}")]
    LengthPrefix(&'static str),
}
