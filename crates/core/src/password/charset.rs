//! Reference character sets as bitsets over the ASCII range.

/// A set of ASCII characters, one bit per code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharSet(u128);

impl CharSet {
    /// Build a set from ASCII bytes. Non-ASCII input fails const evaluation.
    pub const fn from_ascii(chars: &[u8]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < chars.len() {
            assert!(chars[i] < 128, "CharSet only holds ASCII characters");
            bits |= 1u128 << (chars[i] as u32);
            i += 1;
        }
        Self(bits)
    }

    pub fn contains(&self, c: char) -> bool {
        let code = c as u32;
        code < 128 && self.0 & (1u128 << code) != 0
    }

    /// True when no character of `candidate` belongs to this set.
    pub fn is_disjoint(&self, candidate: &str) -> bool {
        !candidate.chars().any(|c| self.contains(c))
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

pub const DIGITS: CharSet = CharSet::from_ascii(b"0123456789");

pub const LOWERCASE: CharSet = CharSet::from_ascii(b"abcdefghijklmnopqrstuvwxyz");

/// Printable ASCII punctuation: ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``.
pub const PUNCTUATION: CharSet = CharSet::from_ascii(b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~");
