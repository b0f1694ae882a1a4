//! Search operations for finding set and clear bits.

use core::iter::FusedIterator;

use super::Bitset;
use crate::constants::{Word, ALL_ONES, NON_INDEX, WORD_BITS};
use crate::word::{highest_set_bit, locate, lowest_set_bit};

impl Bitset {
    /// Shared scan for `next_set_bit` / `next_clear_bit`.
    ///
    /// Every word is XORed with `flip` before looking for its lowest set
    /// bit, so `flip == 0` finds set bits and `flip == ALL_ONES` finds clear
    /// ones. `beyond` maps the first index past the scanned region to the
    /// result: either `i` itself (start beyond width) or the width (scan ran
    /// off the end).
    #[inline]
    fn next_bit(&self, i: usize, flip: Word, beyond: impl Fn(usize) -> usize) -> usize {
        let (word_idx, bit) = locate(i);
        let Some(&first) = self.words.get(word_idx) else {
            return beyond(i);
        };

        // Remainder of the starting word
        let remainder = (first ^ flip) >> bit;
        let low = lowest_set_bit(remainder) as usize;
        if low < WORD_BITS {
            return i + low;
        }

        // First non-zero word after it
        for (idx, &w) in self.words.iter().enumerate().skip(word_idx + 1) {
            let w = w ^ flip;
            if w != 0 {
                return idx * WORD_BITS + lowest_set_bit(w) as usize;
            }
        }

        beyond(self.width())
    }

    /// Smallest set index `>= i`, or [`NON_INDEX`] if there is none.
    ///
    /// Returns `NON_INDEX` immediately when `i` is beyond the width: set
    /// bits cannot exist there.
    ///
    /// # Performance
    /// O(words scanned) - TZCNT on the masked first word, then one per word
    pub fn next_set_bit(&self, i: usize) -> usize {
        self.next_bit(i, 0, |_| NON_INDEX)
    }

    /// Smallest clear index `>= i`. Never returns [`NON_INDEX`].
    ///
    /// Everything beyond the width reads as 0, so:
    /// - `i` beyond the width returns `i` itself
    /// - a scan that finds every remaining stored bit set returns the width
    ///
    /// # Performance
    /// O(words scanned)
    pub fn next_clear_bit(&self, i: usize) -> usize {
        self.next_bit(i, ALL_ONES, |beyond| beyond)
    }

    /// Highest set index, or [`NON_INDEX`] if no bit is set.
    pub fn last_set_bit(&self) -> usize {
        let words = self.significant_words();
        match words.last() {
            Some(&w) => (words.len() - 1) * WORD_BITS + highest_set_bit(w) as usize,
            None => NON_INDEX,
        }
    }

    /// Iterate over set indices in ascending order.
    ///
    /// # Example
    /// ```rust
    /// use growable_bitset::Bitset;
    ///
    /// let bits: Bitset = [64, 3, 130].into_iter().collect();
    /// assert_eq!(bits.ones().collect::<Vec<_>>(), vec![3, 64, 130]);
    /// ```
    #[inline]
    pub fn ones(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bit indices in ascending order, produced by
/// [`Bitset::ones`].
///
/// Clears the lowest bit of a cached word per step (`w & (w - 1)`), so the
/// storage is only read once per word.
#[derive(Clone, Debug)]
pub struct Ones<'a> {
    words: &'a [Word],
    word_idx: usize,
    current: Word,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = lowest_set_bit(self.current) as usize;
                self.current &= self.current.wrapping_sub(1);
                return Some(self.word_idx * WORD_BITS + bit);
            }

            self.word_idx += 1;
            self.current = *self.words.get(self.word_idx)?;
        }
    }
}

impl FusedIterator for Ones<'_> {}

impl<'a> IntoIterator for &'a Bitset {
    type Item = usize;
    type IntoIter = Ones<'a>;

    fn into_iter(self) -> Ones<'a> {
        self.ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    const PATTERN: [usize; 12] = [0, 1, 30, 31, 32, 33, 62, 63, 64, 65, 94, 95];

    fn pattern() -> Bitset {
        let mut b = Bitset::new();
        for i in PATTERN {
            b.set_bit(i);
        }
        b
    }

    #[test]
    fn test_next_set_bit_pattern() {
        let b = pattern();
        assert_eq!(b.next_set_bit(0), 0);
        assert_eq!(b.next_set_bit(1), 1);
        assert_eq!(b.next_set_bit(2), 30);
        assert_eq!(b.next_set_bit(34), 62);
        assert_eq!(b.next_set_bit(66), 94);
        assert_eq!(b.next_set_bit(96), NON_INDEX);
    }

    #[test]
    fn test_next_clear_bit_pattern() {
        let b = pattern();
        assert_eq!(b.next_clear_bit(0), 2);
        assert_eq!(b.next_clear_bit(30), 34);
        assert_eq!(b.next_clear_bit(62), 66);
        assert_eq!(b.next_clear_bit(96), 96);
    }

    #[test]
    fn test_next_set_bit_every_start() {
        let b = pattern();
        for start in 0..200 {
            let expected = PATTERN
                .iter()
                .copied()
                .find(|&p| p >= start)
                .unwrap_or(NON_INDEX);
            assert_eq!(b.next_set_bit(start), expected, "start {start}");
        }
    }

    #[test]
    fn test_next_set_bit_beyond_width() {
        let mut b = Bitset::new();
        assert_eq!(b.next_set_bit(0), NON_INDEX);
        assert_eq!(b.next_set_bit(usize::MAX), NON_INDEX);

        b.set_bit(5);
        assert_eq!(b.next_set_bit(WORD_BITS), NON_INDEX);
        assert_eq!(b.next_set_bit(6), NON_INDEX);
    }

    #[test]
    fn test_next_clear_bit_beyond_width_is_identity() {
        let mut b = Bitset::new();
        assert_eq!(b.next_clear_bit(0), 0);
        assert_eq!(b.next_clear_bit(12345), 12345);

        b.set_bit(0);
        assert_eq!(b.next_clear_bit(WORD_BITS * 7 + 3), WORD_BITS * 7 + 3);
    }

    #[test]
    fn test_next_clear_bit_full_words_returns_width() {
        let mut b = Bitset::new();
        for i in 0..WORD_BITS * 2 {
            b.set_bit(i);
        }
        assert_eq!(b.next_clear_bit(0), WORD_BITS * 2);
        assert_eq!(b.next_clear_bit(WORD_BITS + 3), WORD_BITS * 2);
    }

    #[test]
    fn test_next_set_bit_skips_zero_words() {
        let mut b = Bitset::with_width(WORD_BITS * 10);
        b.set_bit(WORD_BITS * 9 + 1);
        assert_eq!(b.next_set_bit(0), WORD_BITS * 9 + 1);
        assert_eq!(b.next_set_bit(WORD_BITS * 9 + 2), NON_INDEX);
    }

    #[test]
    fn test_last_set_bit() {
        let mut b = Bitset::with_width(WORD_BITS * 4);
        assert_eq!(b.last_set_bit(), NON_INDEX);

        b.set_bit(3);
        assert_eq!(b.last_set_bit(), 3);

        b.set_bit(WORD_BITS + 9);
        assert_eq!(b.last_set_bit(), WORD_BITS + 9);

        assert_eq!(pattern().last_set_bit(), 95);
    }

    #[test]
    fn test_ones() {
        let b = pattern();
        assert_eq!(b.ones().collect::<Vec<_>>(), PATTERN.to_vec());

        let empty = Bitset::with_width(WORD_BITS * 3);
        assert_eq!(empty.ones().next(), None);
        assert_eq!(Bitset::new().ones().next(), None);
    }

    #[test]
    fn test_ones_is_fused() {
        let mut b = Bitset::new();
        b.set_bit(2);
        let mut it = b.ones();
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_ones_matches_next_set_bit_chain() {
        let b = pattern();
        let mut chained = Vec::new();
        let mut i = b.next_set_bit(0);
        while i != NON_INDEX {
            chained.push(i);
            i = b.next_set_bit(i + 1);
        }
        assert_eq!(chained, b.ones().collect::<Vec<_>>());
    }

    #[test]
    fn test_into_iter_for_ref() {
        let b = pattern();
        let mut seen = vec![];
        for i in &b {
            seen.push(i);
        }
        assert_eq!(seen.len(), PATTERN.len());
    }
}
