//! Per-word primitives using CPU intrinsics.
//!
//! Everything above this module treats a [`Word`] as an opaque block of
//! `WORD_BITS` bits; the bit-twiddling lives here.

use crate::constants::{Word, WORD_BITS};

/// Index of the lowest set bit in `word`.
///
/// # Returns
/// Bit index (0..WORD_BITS), or `WORD_BITS` when `word == 0`
///
/// # Performance
/// O(1) - single CPU instruction (TZCNT)
#[inline]
pub fn lowest_set_bit(word: Word) -> u32 {
    word.trailing_zeros()
}

/// Index of the highest set bit in `word`, or `WORD_BITS` when `word == 0`.
///
/// # Performance
/// O(1) - single CPU instruction (LZCNT)
#[inline]
pub fn highest_set_bit(word: Word) -> u32 {
    if word == 0 {
        Word::BITS
    } else {
        Word::BITS - 1 - word.leading_zeros()
    }
}

/// Count set bits in a word.
///
/// # Performance
/// O(1) - single CPU instruction (POPCNT)
#[inline]
pub fn popcount(word: Word) -> u32 {
    word.count_ones()
}

/// Number of words needed to hold `bits` bits.
#[inline]
pub const fn words_for_bits(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Split a bit index into (word index, bit offset within word).
#[inline]
pub const fn locate(i: usize) -> (usize, u32) {
    (i / WORD_BITS, (i % WORD_BITS) as u32)
}

/// Single-bit mask for an in-word offset.
#[inline]
pub const fn bit_mask(bit: u32) -> Word {
    1 << bit
}
