//! State root of a set: SHA-256 over its contents in chain order.
//!
//! Two sets with the same elements in the same order have the same root.
//! The encoding is `len` as u64 little-endian followed by every value's
//! fixed-width little-endian bytes, head to tail.

use sha2::{Digest, Sha256};

/// Fixed-width little-endian encoding of a value for the state root.
pub trait RootBytes {
    /// Append this value's bytes to `out`
    fn write_root_bytes(&self, out: &mut Vec<u8>);
}

macro_rules! impl_root_bytes {
    ($($t:ty),* $(,)?) => {
        $(
            impl RootBytes for $t {
                #[inline]
                fn write_root_bytes(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_root_bytes!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Compute the state root of an ordered sequence of values.
///
/// `len` is hashed first so that a prefix never shares a root with the
/// full sequence.
pub fn compute_root<'a, T, I>(len: usize, values: I) -> [u8; 32]
where
    T: RootBytes + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut buf = Vec::with_capacity(8 + len * 8);
    (len as u64).write_root_bytes(&mut buf);
    for value in values {
        value.write_root_bytes(&mut buf);
    }

    let mut hasher = Sha256::new();
    hasher.update(&buf);
    let result = hasher.finalize();

    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Render a root as lowercase hex
pub fn root_hex(root: &[u8; 32]) -> String {
    hex::encode(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_deterministic() {
        let a = compute_root(3, &[1u64, 2, 3]);
        let b = compute_root(3, &[1u64, 2, 3]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_root_depends_on_order() {
        let a = compute_root(2, &[1u64, 3]);
        let b = compute_root(2, &[3u64, 1]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_root_empty() {
        let empty: [u64; 0] = [];
        let root = compute_root(0, &empty);
        assert_ne!(root, [0u8; 32]);
        assert_eq!(root_hex(&root).len(), 64);
    }

    #[test]
    fn test_root_bytes_width() {
        let mut out = Vec::new();
        7u32.write_root_bytes(&mut out);
        (-1i16).write_root_bytes(&mut out);
        assert_eq!(out, vec![7, 0, 0, 0, 0xff, 0xff]);
    }
}
