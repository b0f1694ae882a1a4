//! Core constants and type definitions for growable-bitset.

/// Unsigned machine word holding one block of bits.
///
/// Selected at compile time:
/// - default: `u64`
/// - `word32` feature: `u32`
#[cfg(not(feature = "word32"))]
pub type Word = u64;

#[cfg(feature = "word32")]
pub type Word = u32;

/// Number of bits stored in one [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// Sentinel returned by scans when no matching bit exists.
///
/// Used to indicate:
/// - No set bit at or after the requested index (`next_set_bit`)
/// - No set bit at all (`last_set_bit`)
///
/// Never a valid bit position: the highest addressable bit lives in word
/// `usize::MAX / WORD_BITS`, whose allocation is impossible.
pub const NON_INDEX: usize = usize::MAX;

/// Word with every bit set.
pub(crate) const ALL_ONES: Word = !0;
