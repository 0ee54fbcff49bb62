//! Group-padded, order-preserving byte codec.
//!
//! Implements the memcomparable byte-string format: the input is cut into
//! 8-byte groups, the last group is zero-padded, and every group is
//! followed by a marker byte recording `255 - pad_count`. Because the
//! padding is the smallest possible byte and the marker ranks longer
//! groups above shorter ones, the encoded form compares bytewise exactly
//! like the original data.
//!
//! The descending variant complements every encoded bit, which inverts the
//! bytewise order: larger inputs yield lexicographically smaller keys.

use crate::buffer::ensure_capacity;
use crate::error::CodecError;
use crate::traits::ByteCodec;
use crate::SortOrder;

/// Data bytes per group.
const GROUP_SIZE: usize = 8;
/// Marker of a full group; also the base the pad count is subtracted from.
const MARKER: u8 = 0xff;
/// Byte used to pad the final group.
const PAD: u8 = 0x00;

const WORD_SIZE: usize = std::mem::size_of::<usize>();

/// Group-padded codec whose encoded keys compare like the original bytes.
///
/// Every input, the empty string included, encodes to at least one 9-byte
/// group; `ceil((len + 1) / 8)` groups in general. The empty string
/// encodes to `[0; 8]` plus marker `247`, the smallest possible encoded
/// value, so it sorts before every non-empty string.
///
/// # Example
///
/// ```rust
/// use ordbytes::{ByteCodec, GroupCodec, SortOrder};
///
/// let mut asc = Vec::new();
/// GroupCodec::new().encode(&mut asc, &[1, 2, 3]);
/// assert_eq!(asc, [1, 2, 3, 0, 0, 0, 0, 0, 250]);
///
/// let mut desc = Vec::new();
/// GroupCodec::with_order(SortOrder::Descending).encode(&mut desc, &[1, 2, 3]);
/// assert_eq!(desc, [254, 253, 252, 255, 255, 255, 255, 255, 5]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GroupCodec {
    order: SortOrder,
}

impl GroupCodec {
    /// Create an ascending-order codec.
    pub const fn new() -> Self {
        Self {
            order: SortOrder::Ascending,
        }
    }

    /// Create a codec with an explicit sort order.
    pub const fn with_order(order: SortOrder) -> Self {
        Self { order }
    }

    /// The sort order this codec encodes for.
    pub const fn order(&self) -> SortOrder {
        self.order
    }
}

impl ByteCodec for GroupCodec {
    fn encode(&self, buf: &mut Vec<u8>, data: &[u8]) {
        let start = buf.len();
        encode_ascending(buf, data);
        if self.order == SortOrder::Descending {
            // Only the region this call appended; a pre-existing prefix in
            // a shared buffer is already encoded and must stay untouched.
            complement_bytes(&mut buf[start..]);
        }
    }

    fn decode<'a>(&self, buf: &'a [u8]) -> Result<(&'a [u8], Vec<u8>), CodecError> {
        decode_groups(buf, self.order)
    }
}

impl Default for GroupCodec {
    fn default() -> Self {
        Self::new()
    }
}

fn encode_ascending(buf: &mut Vec<u8>, data: &[u8]) {
    // Worst-case output size; an under-estimate would only cost a regrow.
    ensure_capacity(buf, (data.len() / GROUP_SIZE + 1) * (GROUP_SIZE + 1));

    // One extra iteration when the length is an exact multiple of the
    // group size, so empty input still emits a group and the final group
    // always carries a marker below 0xff.
    let mut idx = 0;
    while idx <= data.len() {
        let remain = data.len() - idx;
        if remain >= GROUP_SIZE {
            buf.extend_from_slice(&data[idx..idx + GROUP_SIZE]);
            buf.push(MARKER);
        } else {
            let pad_count = GROUP_SIZE - remain;
            buf.extend_from_slice(&data[idx..]);
            buf.resize(buf.len() + pad_count, PAD);
            buf.push(MARKER - pad_count as u8);
        }
        idx += GROUP_SIZE;
    }
}

fn decode_groups(mut b: &[u8], order: SortOrder) -> Result<(&[u8], Vec<u8>), CodecError> {
    let mut data = Vec::with_capacity(b.len());
    loop {
        if b.len() < GROUP_SIZE + 1 {
            return Err(CodecError::InsufficientBytes {
                expected: (GROUP_SIZE + 1) as u64,
                actual: b.len() as u64,
            });
        }

        let mut group = [0u8; GROUP_SIZE + 1];
        group.copy_from_slice(&b[..GROUP_SIZE + 1]);
        if order == SortOrder::Descending {
            complement_bytes(&mut group);
        }

        let marker = group[GROUP_SIZE];
        let pad_count = (MARKER - marker) as usize;
        if pad_count > GROUP_SIZE {
            return Err(CodecError::InvalidMarker {
                marker,
                group: group.to_vec(),
            });
        }

        let real_size = GROUP_SIZE - pad_count;
        data.extend_from_slice(&group[..real_size]);
        b = &b[GROUP_SIZE + 1..];

        if marker != MARKER {
            if group[real_size..GROUP_SIZE].iter().any(|&pad| pad != PAD) {
                return Err(CodecError::InvalidPadding {
                    group: group.to_vec(),
                });
            }
            break;
        }
    }

    Ok((b, data))
}

/// Replace every byte of `b` with its bitwise complement, in place.
///
/// Runs over native-word-sized chunks where the length allows and falls
/// back to single bytes for the tail; both paths produce identical output.
pub fn complement_bytes(b: &mut [u8]) {
    let mut words = b.chunks_exact_mut(WORD_SIZE);
    for chunk in words.by_ref() {
        let mut word = [0u8; WORD_SIZE];
        word.copy_from_slice(chunk);
        chunk.copy_from_slice(&(!usize::from_ne_bytes(word)).to_ne_bytes());
    }
    for byte in words.into_remainder() {
        *byte = !*byte;
    }
}
