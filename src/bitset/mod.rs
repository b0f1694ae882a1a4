//! Growable bitset backed by a `Vec` of words.
//!
//! Split by concern:
//! - `basic`: single-bit accessors
//! - `search`: next-set / next-clear scans and iteration
//! - `ops`: OR / AND / AND-NOT
//! - `check`: emptiness, counting, equality, hashing
//! - `convert`: `FromIterator` / `Extend`

mod basic;
mod check;
mod convert;
mod ops;
mod search;

pub use ops::SetOp;
pub use search::Ones;

use alloc::vec::Vec;

use crate::constants::{Word, WORD_BITS};
use crate::error::BitsetError;
use crate::word::words_for_bits;

/// Dynamic-length bitset.
///
/// An ordered sequence of bits stored in [`Word`]s. Bit `i` lives in word
/// `i / WORD_BITS` at offset `i % WORD_BITS`. The *width* is
/// `words.len() * WORD_BITS`; every bit at or beyond the width reads as 0.
///
/// # Growth
/// - `set_bit` and `ensure_width` append zero words on demand
/// - nothing shrinks implicitly; only `compact` trims and `clear` empties
/// - trailing zero words are allowed and never affect equality
///
/// # Performance
/// - Single-bit access: O(1)
/// - Scans: O(words scanned), TZCNT per word
/// - Set algebra: O(words), in place when an operand is owned
///
/// # Example
/// ```rust
/// use growable_bitset::Bitset;
///
/// let mut bits = Bitset::new();
/// bits.set_bit(3);
/// bits.set_bit(200);
/// assert!(bits.get_bit(200));
/// assert!(!bits.get_bit(10_000));
/// assert_eq!(bits.ones().collect::<Vec<_>>(), vec![3, 200]);
/// ```
#[derive(Clone, Default)]
pub struct Bitset {
    /// Backing words, lowest bits first.
    words: Vec<Word>,
}

impl Bitset {
    /// Create an empty bitset (width 0, no allocation).
    #[inline]
    pub const fn new() -> Self {
        Bitset { words: Vec::new() }
    }

    /// Create a zero-filled bitset whose width covers `width` bits.
    ///
    /// The resulting width is `width` rounded up to a multiple of
    /// `WORD_BITS`.
    pub fn with_width(width: usize) -> Self {
        Bitset {
            words: alloc::vec![0; words_for_bits(width)],
        }
    }

    /// Create an empty bitset with storage reserved for `width` bits.
    ///
    /// Width stays 0; later growth up to `width` does not reallocate.
    pub fn with_capacity(width: usize) -> Self {
        Bitset {
            words: Vec::with_capacity(words_for_bits(width)),
        }
    }

    /// Number of representable bit positions.
    #[inline]
    pub fn width(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Number of bits the current allocation can represent without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.capacity() * WORD_BITS
    }

    /// Backing words, lowest bits first.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Grow so that `width() >= width`. Never truncates.
    pub fn ensure_width(&mut self, width: usize) {
        let needed = words_for_bits(width);
        if needed > self.words.len() {
            trace!(from = self.words.len(), to = needed, "ensure_width: growing");
            self.words.resize(needed, 0);
        }
    }

    /// Fallible [`ensure_width`](Self::ensure_width).
    ///
    /// Reports allocation failure instead of aborting. On error the bitset
    /// is left unchanged.
    pub fn try_ensure_width(&mut self, width: usize) -> Result<(), BitsetError> {
        let needed = words_for_bits(width);
        self.try_grow_to(needed, width)
    }

    /// Append zero words until `word_idx` is a valid word index.
    #[inline]
    fn ensure_word(&mut self, word_idx: usize) {
        let len = self.words.len();
        if word_idx >= len {
            trace!(from = len, to = word_idx + 1, "ensure_word: growing");
            self.words.resize(word_idx + 1, 0);
        }
    }

    /// Grow to `needed` words using `try_reserve`. `width` is only used
    /// for error reporting.
    fn try_grow_to(&mut self, needed: usize, width: usize) -> Result<(), BitsetError> {
        let len = self.words.len();
        if needed <= len {
            return Ok(());
        }

        // Vec cannot hold more than isize::MAX bytes.
        if needed > isize::MAX as usize / core::mem::size_of::<Word>() {
            return Err(BitsetError::CapacityOverflow { width });
        }

        self.words
            .try_reserve(needed - len)
            .map_err(|_| BitsetError::AllocFailed { words: needed })?;
        self.words.resize(needed, 0);
        Ok(())
    }

    /// Reset to width 0. Keeps the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Drop trailing zero words and release unused capacity.
    ///
    /// Afterwards the last stored word (if any) is non-zero, so the width is
    /// the position just past the highest set bit, rounded up to a word.
    /// An all-zero bitset ends up with width 0.
    pub fn compact(&mut self) {
        let keep = self.significant_words().len();
        trace!(before = self.words.len(), after = keep, "compact");

        self.words.truncate(keep);
        self.words.shrink_to_fit();

        debug_assert!(self.words.last().map_or(true, |&w| w != 0));
    }

    /// Words up to and including the last non-zero one.
    #[inline]
    pub(crate) fn significant_words(&self) -> &[Word] {
        let keep = self
            .words
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |last| last + 1);
        &self.words[..keep]
    }
}
