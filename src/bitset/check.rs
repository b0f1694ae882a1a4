//! Check operations: emptiness, counting, equality.

use core::fmt;
use core::hash::{Hash, Hasher};

use super::Bitset;
use crate::word::popcount;

impl Bitset {
    /// `true` if no bit is set.
    ///
    /// Scans every stored word; the width does not matter.
    ///
    /// # Performance
    /// O(words)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Number of set bits.
    ///
    /// # Performance
    /// O(words) - POPCNT per word
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|&w| popcount(w) as usize).sum()
    }
}

/// Bitsets are equal when every bit position reads the same.
///
/// The overlapping words must match and the longer operand's remaining
/// words must all be zero; trailing zero words never matter.
impl PartialEq for Bitset {
    fn eq(&self, other: &Self) -> bool {
        let (short, long) = if self.words.len() <= other.words.len() {
            (&self.words, &other.words)
        } else {
            (&other.words, &self.words)
        };

        let (head, tail) = long.split_at(short.len());
        short[..] == *head && tail.iter().all(|&w| w == 0)
    }
}

impl Eq for Bitset {}

/// Consistent with `PartialEq`: only words up to the last non-zero one
/// are hashed.
impl Hash for Bitset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_words().hash(state);
    }
}

/// Formats as the set of set indices, e.g. `{0, 1, 30}`.
impl fmt::Debug for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ones()).finish()
    }
}
