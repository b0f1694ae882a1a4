//! Set algebra: OR, AND and AND-NOT.
//!
//! All operator impls funnel into [`Bitset::combine`]. Ownership decides
//! the allocation strategy:
//! - owned operand: its `Vec` is reused and combined in place
//! - two owned operands: whichever one already has room for the result
//! - two borrowed operands: one allocation of exactly the result length
//!
//! The strategy never changes the result.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::mem;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

use super::Bitset;
use crate::constants::Word;

/// Word-wise set operation.
///
/// Bits beyond an operand's width count as 0 for that operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetOp {
    /// Union; result width is the larger operand width.
    Or,
    /// Intersection; result width is the smaller operand width.
    And,
    /// Difference (`lhs & !rhs`); result width is the left operand width.
    AndNot,
}

impl SetOp {
    #[inline]
    fn apply(self, lhs: Word, rhs: Word) -> Word {
        match self {
            SetOp::Or => lhs | rhs,
            SetOp::And => lhs & rhs,
            SetOp::AndNot => lhs & !rhs,
        }
    }

    /// Result length in words for operands of `lhs` and `rhs` words.
    ///
    /// Every op maps (0, 0) to 0 and treats a missing word as 0, so words
    /// past this length would be zero anyway.
    #[inline]
    fn result_len(self, lhs: usize, rhs: usize) -> usize {
        match self {
            SetOp::Or => lhs.max(rhs),
            SetOp::And => lhs.min(rhs),
            SetOp::AndNot => lhs,
        }
    }

    /// Combine in place where `out` holds the left operand.
    fn apply_left(self, out: &mut Vec<Word>, rhs: &[Word]) {
        let len = self.result_len(out.len(), rhs.len());
        out.resize(len, 0);
        // Past rhs.len() each op is the identity on lhs (x | 0, x & !0).
        for (o, &r) in out.iter_mut().zip(rhs) {
            *o = self.apply(*o, r);
        }
    }

    /// Combine in place where `out` holds the right operand.
    fn apply_right(self, lhs: &[Word], out: &mut Vec<Word>) {
        let len = self.result_len(lhs.len(), out.len());
        out.resize(len, 0);
        // Past lhs.len() only OR keeps words, and 0 | r == r.
        for (o, &l) in out.iter_mut().zip(lhs) {
            *o = self.apply(l, *o);
        }
    }
}

impl Bitset {
    /// Combine two bitsets word by word.
    ///
    /// Owned operands (`Cow::Owned`) donate their storage to the result;
    /// borrowed ones are only read.
    ///
    /// # Example
    /// ```rust
    /// use std::borrow::Cow;
    /// use growable_bitset::{Bitset, SetOp};
    ///
    /// let a: Bitset = [0, 1].into_iter().collect();
    /// let b: Bitset = [1, 30].into_iter().collect();
    ///
    /// let or = Bitset::combine(Cow::Borrowed(&a), Cow::Borrowed(&b), SetOp::Or);
    /// assert_eq!(or.ones().collect::<Vec<_>>(), vec![0, 1, 30]);
    ///
    /// let and_not = Bitset::combine(Cow::Owned(a), Cow::Borrowed(&b), SetOp::AndNot);
    /// assert_eq!(and_not.ones().collect::<Vec<_>>(), vec![0]);
    /// ```
    pub fn combine(lhs: Cow<'_, Bitset>, rhs: Cow<'_, Bitset>, op: SetOp) -> Bitset {
        let len = op.result_len(lhs.words.len(), rhs.words.len());

        let words = match (lhs, rhs) {
            (Cow::Owned(mut l), Cow::Owned(mut r)) => {
                if l.words.capacity() >= len || r.words.capacity() < len {
                    trace!(?op, len, "combine: reusing left storage");
                    op.apply_left(&mut l.words, &r.words);
                    l.words
                } else {
                    trace!(?op, len, "combine: reusing right storage");
                    op.apply_right(&l.words, &mut r.words);
                    r.words
                }
            }
            (Cow::Owned(mut l), Cow::Borrowed(r)) => {
                op.apply_left(&mut l.words, &r.words);
                l.words
            }
            (Cow::Borrowed(l), Cow::Owned(mut r)) => {
                op.apply_right(&l.words, &mut r.words);
                r.words
            }
            (Cow::Borrowed(l), Cow::Borrowed(r)) => {
                let mut out = Vec::with_capacity(len);
                out.extend_from_slice(&l.words[..l.words.len().min(len)]);
                op.apply_left(&mut out, &r.words);
                out
            }
        };

        debug_assert_eq!(words.len(), len);
        Bitset { words }
    }

    /// `self & !rhs` as a new bitset; both operands are borrowed.
    ///
    /// Also usable in associated form: `Bitset::and_not(&a, &b)`.
    pub fn and_not(&self, rhs: &Bitset) -> Bitset {
        Bitset::combine(Cow::Borrowed(self), Cow::Borrowed(rhs), SetOp::AndNot)
    }

    /// In-place `self &= !rhs`. Width is unchanged.
    pub fn and_not_assign(&mut self, rhs: &Bitset) {
        SetOp::AndNot.apply_left(&mut self.words, &rhs.words);
    }

    /// Run `op` with `self` as the owned left operand and store the result
    /// back into `self`.
    #[inline]
    fn combine_assign(&mut self, rhs: Cow<'_, Bitset>, op: SetOp) {
        let lhs = mem::take(self);
        *self = Bitset::combine(Cow::Owned(lhs), rhs, op);
    }
}

macro_rules! impl_set_op {
    ($Trait:ident, $method:ident, $AssignTrait:ident, $assign_method:ident, $op:expr) => {
        impl $Trait<Bitset> for Bitset {
            type Output = Bitset;

            #[inline]
            fn $method(self, rhs: Bitset) -> Bitset {
                Bitset::combine(Cow::Owned(self), Cow::Owned(rhs), $op)
            }
        }

        impl $Trait<&Bitset> for Bitset {
            type Output = Bitset;

            #[inline]
            fn $method(self, rhs: &Bitset) -> Bitset {
                Bitset::combine(Cow::Owned(self), Cow::Borrowed(rhs), $op)
            }
        }

        impl $Trait<Bitset> for &Bitset {
            type Output = Bitset;

            #[inline]
            fn $method(self, rhs: Bitset) -> Bitset {
                Bitset::combine(Cow::Borrowed(self), Cow::Owned(rhs), $op)
            }
        }

        impl $Trait<&Bitset> for &Bitset {
            type Output = Bitset;

            #[inline]
            fn $method(self, rhs: &Bitset) -> Bitset {
                Bitset::combine(Cow::Borrowed(self), Cow::Borrowed(rhs), $op)
            }
        }

        impl $AssignTrait<Bitset> for Bitset {
            #[inline]
            fn $assign_method(&mut self, rhs: Bitset) {
                self.combine_assign(Cow::Owned(rhs), $op);
            }
        }

        impl $AssignTrait<&Bitset> for Bitset {
            #[inline]
            fn $assign_method(&mut self, rhs: &Bitset) {
                self.combine_assign(Cow::Borrowed(rhs), $op);
            }
        }
    };
}

impl_set_op!(BitOr, bitor, BitOrAssign, bitor_assign, SetOp::Or);
impl_set_op!(BitAnd, bitand, BitAndAssign, bitand_assign, SetOp::And);
impl_set_op!(Sub, sub, SubAssign, sub_assign, SetOp::AndNot);
