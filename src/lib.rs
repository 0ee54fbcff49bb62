//! Memcomparable byte-string codecs.
//!
//! `ordbytes` encodes arbitrary byte sequences so that bytewise
//! lexicographic comparison of the encoded forms matches the comparison
//! order of the original data. This is the property sorted-storage engines
//! need to compare keys as raw byte strings — for range scans over a
//! log-structured or B-tree store — without ever deserializing them.
//!
//! # Codecs
//!
//! - **[`GroupCodec`]**: group-padded encoding. The input is split into
//!   8-byte groups, each followed by a marker byte; the encoded form
//!   compares exactly like the original bytes. A descending variant
//!   complements every encoded bit so that larger inputs sort *first*.
//! - **[`CompactCodec`]**: length-prefixed raw encoding. Smaller and
//!   faster, but carries no ordering guarantee.
//!
//! # Format
//!
//! The group-padded format follows [MySQL's memcomparable format]:
//!
//! ```text
//! [group 1][marker 1]...[group N][marker N]
//! ```
//!
//! where each group is 8 bytes zero-padded at the tail and each marker is
//! `255 - pad_count`. A marker of `255` means more groups follow.
//!
//! ```text
//! []                 -> [0, 0, 0, 0, 0, 0, 0, 0, 247]
//! [1, 2, 3]          -> [1, 2, 3, 0, 0, 0, 0, 0, 250]
//! [1, 2, 3, 0]       -> [1, 2, 3, 0, 0, 0, 0, 0, 251]
//! [1, 2, ..., 8]     -> [1, 2, 3, 4, 5, 6, 7, 8, 255, 0, 0, 0, 0, 0, 0, 0, 0, 247]
//! ```
//!
//! # Example
//!
//! ```rust
//! use ordbytes::{ByteCodec, GroupCodec};
//!
//! let codec = GroupCodec::new();
//!
//! let mut low = Vec::new();
//! codec.encode(&mut low, b"apple");
//! let mut high = Vec::new();
//! codec.encode(&mut high, b"banana");
//!
//! // Encoded keys compare like the originals.
//! assert!(low < high);
//!
//! // Decode consumes one value and returns the unread tail.
//! let (rest, payload) = codec.decode(&low).unwrap();
//! assert!(rest.is_empty());
//! assert_eq!(payload, b"apple");
//! ```
//!
//! [MySQL's memcomparable format]: https://github.com/facebook/mysql-5.6/wiki/MyRocks-record-format#memcomparable-format

#![warn(missing_docs)]
#![warn(clippy::all)]

mod buffer;
mod compact;
mod error;
mod group;
mod traits;
mod varint;

pub use compact::CompactCodec;
pub use error::CodecError;
pub use group::{complement_bytes, GroupCodec};
pub use traits::ByteCodec;

/// Sort order of a group-padded encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Encoded keys compare like the original bytes.
    #[default]
    Ascending,
    /// Encoded keys compare in the reverse of the original order.
    Descending,
}
