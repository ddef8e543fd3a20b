//! Bucket hashing for string keys.

/// Maps a key to the raw hash that picks its bucket.
///
/// The table reduces the result modulo its bucket count. Implementations must
/// be deterministic: a key is looked up in the bucket it was stored in, and
/// there is no rehashing.
pub trait KeyHash {
    fn hash_key(&self, key: &str) -> u64;
}

/// Sum of the code points of every character in the key.
///
/// Anagrams (and many other keys) collide.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CharSum;

impl KeyHash for CharSum {
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        key.chars()
            .fold(0u64, |sum, ch| sum.wrapping_add(u64::from(u32::from(ch))))
    }
}

impl<F> KeyHash for F
where
    F: Fn(&str) -> u64,
{
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_hashes_to_zero() {
        assert_eq!(CharSum.hash_key(""), 0);
    }

    #[test]
    fn sums_ascii_codes() {
        // 'V' 86 + 'l' 108 + 'a' 97 + 'd' 100
        assert_eq!(CharSum.hash_key("Vlad"), 391);
        assert_eq!(CharSum.hash_key("911"), 57 + 49 + 49);
    }

    /// Invariant: the hash is order-insensitive, so anagrams collide.
    #[test]
    fn anagrams_collide() {
        assert_eq!(CharSum.hash_key("listen"), CharSum.hash_key("silent"));
        assert_eq!(CharSum.hash_key("Anna"), CharSum.hash_key("nnAa"));
    }

    /// Invariant: non-ASCII characters contribute their full code point,
    /// not their UTF-8 bytes.
    #[test]
    fn uses_code_points_not_bytes() {
        assert_eq!(CharSum.hash_key("é"), 0xE9);
        assert_eq!(CharSum.hash_key("Ж"), 0x416);
        assert_eq!(CharSum.hash_key("🦀"), 0x1F980);
    }

    #[test]
    fn closures_are_key_hashes() {
        let h = |k: &str| k.len() as u64;
        assert_eq!(h.hash_key("abc"), 3);
    }
}
