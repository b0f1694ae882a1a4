//! Errors reported by the fallible allocation API.

use thiserror::Error;

/// Failure to grow a [`Bitset`](crate::Bitset)'s backing storage.
///
/// Only returned by the `try_*` methods; every other operation either
/// succeeds or (for the "existing" accessors) panics on a broken
/// precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitsetError {
    /// The requested width cannot be expressed as a word count / byte size.
    #[error("bitset width {width} exceeds the addressable capacity")]
    CapacityOverflow { width: usize },

    /// The allocator refused to provide storage for `words` words.
    #[error("failed to allocate storage for {words} words")]
    AllocFailed { words: usize },
}
