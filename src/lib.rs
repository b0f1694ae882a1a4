//! # growable-bitset
//!
//! Dynamic-length bitset backed by a `Vec` of machine words.
//! Grows on demand, scans for the next set/clear bit word-at-a-time, and
//! combines bitsets with OR / AND / AND-NOT while reusing owned storage.
//!
//! ## Features
//! - O(1) single-bit access, lazy growth on `set_bit`
//! - Next-set / next-clear scans using TZCNT on whole words
//! - Set algebra for every owned/borrowed operand combination
//! - Width-insensitive equality (trailing zero words never matter)
//! - no_std compatible (requires alloc)
//!
//! ## Example
//! ```rust
//! use growable_bitset::{Bitset, NON_INDEX};
//!
//! let mut a = Bitset::new();
//! a.set_bit(0);
//! a.set_bit(1);
//!
//! let b: Bitset = [1, 30].into_iter().collect();
//!
//! assert_eq!((&a | &b).ones().collect::<Vec<_>>(), vec![0, 1, 30]);
//! assert_eq!((&a & &b).ones().collect::<Vec<_>>(), vec![1]);
//! assert_eq!(a.and_not(&b).ones().collect::<Vec<_>>(), vec![0]);
//!
//! assert_eq!(a.next_set_bit(2), NON_INDEX);
//! assert_eq!(a.next_clear_bit(0), 2);
//! ```

#![no_std]

extern crate alloc;

#[macro_use]
mod trace;

mod bitset;
mod constants;
mod error;
mod word;

pub use bitset::{Bitset, Ones, SetOp};
pub use constants::{Word, NON_INDEX, WORD_BITS};
pub use error::BitsetError;
