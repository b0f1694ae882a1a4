//! Building bitsets from index iterators.

use super::Bitset;

impl FromIterator<usize> for Bitset {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut b = Bitset::new();
        b.extend(iter);
        b
    }
}

/// Sets every yielded index.
impl Extend<usize> for Bitset {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for i in iter {
            self.set_bit(i);
        }
    }
}

impl<'a> Extend<&'a usize> for Bitset {
    fn extend<I: IntoIterator<Item = &'a usize>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
