//! Buffer growth helper shared by the codecs.

/// Ensure `buf` has room for at least `additional` more bytes.
///
/// Reallocates (copying existing contents) only when spare capacity is
/// short; the buffer's length and contents are never touched. Purely an
/// allocation-amortization aid — callers stay correct if the estimate
/// passed in is too small.
pub(crate) fn ensure_capacity(buf: &mut Vec<u8>, additional: usize) {
    if buf.capacity() - buf.len() < additional {
        buf.reserve(additional);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grows_capacity() {
        let mut buf = vec![1u8, 2, 3];
        ensure_capacity(&mut buf, 100);
        assert!(buf.capacity() >= 103);
        assert_eq!(buf, [1, 2, 3]);
    }

    #[test]
    fn test_existing_capacity_is_reused() {
        let mut buf = Vec::with_capacity(64);
        buf.extend_from_slice(&[9u8; 8]);
        let cap = buf.capacity();
        ensure_capacity(&mut buf, 32);
        assert_eq!(buf.capacity(), cap);
        assert_eq!(buf, [9u8; 8]);
    }
}
