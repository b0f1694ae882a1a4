//! Single-bit operations.
//!
//! Two tiers:
//! - safe: any index is accepted; out-of-width reads are 0, writes grow
//! - existing: the index must already be within width, otherwise panic

use super::Bitset;
use crate::error::BitsetError;
use crate::word::{bit_mask, locate};

impl Bitset {
    /// Set bit `i`, growing the storage if `i` is beyond the current width.
    ///
    /// # Performance
    /// O(1) amortized - one word OR, plus zero-fill when growing
    #[inline]
    pub fn set_bit(&mut self, i: usize) {
        let (word, bit) = locate(i);
        self.ensure_word(word);
        self.words[word] |= bit_mask(bit);
        debug_assert!(self.get_existing_bit(i));
    }

    /// Fallible [`set_bit`](Self::set_bit): reports allocation failure
    /// instead of aborting. On error the bitset is left unchanged.
    pub fn try_set_bit(&mut self, i: usize) -> Result<(), BitsetError> {
        let (word, bit) = locate(i);
        self.try_grow_to(word + 1, i.saturating_add(1))?;
        self.words[word] |= bit_mask(bit);
        Ok(())
    }

    /// Set bit `i`, which must already be within width.
    ///
    /// Skips the growth check; use after `ensure_width` or `with_width`.
    ///
    /// # Panics
    /// If `i >= self.width()`.
    #[inline]
    pub fn set_existing_bit(&mut self, i: usize) {
        let (word, bit) = locate(i);
        assert!(word < self.words.len(), "bit index {i} out of width {}", self.width());
        self.words[word] |= bit_mask(bit);
    }

    /// Clear bit `i`. Bits beyond the width are already 0, so this never
    /// grows the storage.
    #[inline]
    pub fn clear_bit(&mut self, i: usize) {
        let (word, bit) = locate(i);
        if let Some(w) = self.words.get_mut(word) {
            *w &= !bit_mask(bit);
        }
        debug_assert!(!self.get_bit(i));
    }

    /// Clear bit `i`, which must already be within width.
    ///
    /// # Panics
    /// If `i >= self.width()`.
    #[inline]
    pub fn clear_existing_bit(&mut self, i: usize) {
        let (word, bit) = locate(i);
        assert!(word < self.words.len(), "bit index {i} out of width {}", self.width());
        self.words[word] &= !bit_mask(bit);
    }

    /// Set or clear bit `i` according to `value`.
    ///
    /// Only setting can grow the storage.
    #[inline]
    pub fn set_value(&mut self, i: usize, value: bool) {
        if value {
            self.set_bit(i);
        } else {
            self.clear_bit(i);
        }
    }

    /// Read bit `i`; `false` for any index beyond the width.
    #[inline]
    pub fn get_bit(&self, i: usize) -> bool {
        let (word, bit) = locate(i);
        self.words
            .get(word)
            .is_some_and(|&w| w & bit_mask(bit) != 0)
    }

    /// Read bit `i`, which must already be within width.
    ///
    /// # Panics
    /// If `i >= self.width()`.
    #[inline]
    pub fn get_existing_bit(&self, i: usize) -> bool {
        let (word, bit) = locate(i);
        assert!(word < self.words.len(), "bit index {i} out of width {}", self.width());
        self.words[word] & bit_mask(bit) != 0
    }
}
