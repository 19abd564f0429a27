//! The djb2 string hash and bucket indexing.
//!
//! Bucket placement is part of the table's observable behavior (collisions
//! and chain layout depend on it), so the algorithm is fixed: djb2 starts an
//! accumulator at 5381 and folds each byte in as `acc * 33 + byte`, wrapping
//! on overflow. Do not swap this for the std hasher.

/// djb2 over the raw bytes of `key`.
#[inline]
pub fn djb2(key: &str) -> u64 {
    let mut acc: u64 = 5381;
    for &byte in key.as_bytes() {
        acc = (acc << 5).wrapping_add(acc).wrapping_add(u64::from(byte));
    }
    acc
}

/// Maps `key` to a bucket index in `[0, capacity)`.
///
/// `capacity` must be nonzero; `ChainHashMap` guarantees that by
/// construction.
#[inline]
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    (djb2(key) % capacity as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(djb2(""), 5381);
        assert_eq!(djb2("abc"), 193_485_963);
        assert_eq!(bucket_index("abc", 16), 11);
        assert_eq!(bucket_index("", 7), 5381 % 7);
    }

    #[test]
    fn deterministic_for_same_inputs() {
        assert_eq!(bucket_index("abc", 16), bucket_index("abc", 16));
        assert_eq!(djb2("some longer key"), djb2("some longer key"));
    }

    #[test]
    fn index_stays_in_range() {
        for capacity in [1, 2, 3, 16, 1024] {
            for key in ["", "a", "abc", "longer key with spaces"] {
                assert!(bucket_index(key, capacity) < capacity);
            }
        }
    }

    #[test]
    fn capacity_changes_index() {
        // Same key, different modulus.
        assert_eq!(bucket_index("a", 2), 0);
        assert_eq!(bucket_index("a", 4), 2);
    }

    #[test]
    fn content_changes_index() {
        // Adjacent byte values land on adjacent buckets under djb2.
        assert_eq!(bucket_index("a", 2), 0);
        assert_eq!(bucket_index("b", 2), 1);
    }
}
