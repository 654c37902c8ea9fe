//! Square set type and operations.

use std::ops::{BitAnd, BitOr, BitOrAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::{Square, BOARD_SQUARES};

/// A 16-bit bitboard: bit `i` is set when the square with board index `i` is
/// in the set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SquareSet(pub u16);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);
    pub const ALL: SquareSet = SquareSet(u16::MAX);

    /// Create a set holding a single square; off-board squares give an empty set
    #[inline]
    #[must_use]
    pub fn from_square(sq: Square) -> Self {
        match sq.index() {
            Ok(idx) => SquareSet(1 << idx),
            Err(_) => SquareSet::EMPTY,
        }
    }

    /// Returns an iterator over the squares in this set, in board index order
    #[inline]
    #[must_use]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self)
    }

    /// Returns true if the set is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of squares in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the given square is in the set
    #[inline]
    #[must_use]
    pub fn contains(self, sq: Square) -> bool {
        !(self & SquareSet::from_square(sq)).is_empty()
    }

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        *self |= SquareSet::from_square(sq);
    }

    #[inline]
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !SquareSet::from_square(sq).0;
    }

    /// Squares in the set, in board index order
    #[must_use]
    pub fn to_vec(self) -> Vec<Square> {
        self.iter().collect()
    }
}

impl BitAnd for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the squares of a [`SquareSet`]
pub struct SquareSetIter(SquareSet);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 .0 == 0 {
            return None;
        }
        let idx = self.0 .0.trailing_zeros() as usize;
        self.0 .0 &= self.0 .0 - 1;
        debug_assert!(idx < BOARD_SQUARES);
        Square::from_index(idx).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareSetIter {}
