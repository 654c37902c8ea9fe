//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of ranks and files on the board.
pub const BOARD_SIDE: i8 = 4;

/// Number of slots on the board.
pub const BOARD_SQUARES: usize = 16;

/// A square on the board, represented as (rank, file).
///
/// Ranks run 1-4 from south to north, files 1-4 from A to D. Values outside
/// that range are allowed as sentinels but never name a board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub i8, pub i8); // (rank, file)

impl Square {
    /// All 16 squares in board index order (4A, 4B, ..., 1D)
    pub const ALL: [Square; BOARD_SQUARES] = {
        let mut squares = [Square(0, 0); BOARD_SQUARES];
        let mut idx = 0;
        while idx < BOARD_SQUARES {
            squares[idx] = Square::from_index_const(idx);
            idx += 1;
        }
        squares
    };

    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: i8, file: i8) -> Option<Self> {
        let sq = Square(rank, file);
        sq.is_on_board().then_some(sq)
    }

    /// Get the rank (1-4, where 1 = south edge)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> i8 {
        self.0
    }

    /// Get the file (1-4, where 1 = file A)
    #[inline]
    #[must_use]
    pub const fn file(self) -> i8 {
        self.1
    }

    /// True if both rank and file lie in 1-4
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 >= 1 && self.0 <= BOARD_SIDE && self.1 >= 1 && self.1 <= BOARD_SIDE
    }

    /// Get the square's board index (0-15, 4A=0, 4B=1, ..., 1D=15)
    pub fn index(self) -> Result<usize, SquareError> {
        if !self.is_on_board() {
            return Err(SquareError::OffBoard {
                rank: self.0,
                file: self.1,
            });
        }
        Ok(self.index_unchecked())
    }

    /// Create a square from a board index (0-15)
    pub fn from_index(index: usize) -> Result<Self, SquareError> {
        if index >= BOARD_SQUARES {
            return Err(SquareError::IndexOutOfRange { index });
        }
        Ok(Square::from_index_const(index))
    }

    #[must_use]
    const fn from_index_const(index: usize) -> Self {
        Square(BOARD_SIDE - (index / 4) as i8, 1 + (index % 4) as i8)
    }

    /// Index of a square already known to be on the board.
    #[inline]
    pub(crate) const fn index_unchecked(self) -> usize {
        ((BOARD_SIDE - self.0) * BOARD_SIDE + (self.1 - 1)) as usize
    }

    /// The on-board square `dr` ranks north and `df` files east of this one.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: i8, df: i8) -> Option<Self> {
        Square::new(self.0.checked_add(dr)?, self.1.checked_add(df)?)
    }

    /// File letter ('A'-'D'), or None off the board
    #[must_use]
    pub fn file_char(self) -> Option<char> {
        self.is_on_board().then(|| (b'A' + (self.1 - 1) as u8) as char)
    }

    /// Format as rank digit + file letter, e.g. "2C".
    pub fn to_notation(self) -> Result<String, SquareError> {
        if !self.is_on_board() {
            return Err(SquareError::OffBoard {
                rank: self.0,
                file: self.1,
            });
        }
        Ok(self.to_string())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file_char() {
            Some(file) => write!(f, "{}{}", self.0, file),
            None => write!(f, "({}, {})", self.0, self.1),
        }
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Board order: north rank first, then west to east
        other.0.cmp(&self.0).then(self.1.cmp(&other.1))
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (i8, i8)) -> Result<Self, Self::Error> {
        Square::new(rank, file).ok_or(SquareError::OffBoard { rank, file })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SquareError::MalformedNotation {
            notation: s.to_string(),
        };

        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(malformed());
        }

        let rank = match chars[0] {
            '1'..='4' => chars[0] as i8 - '0' as i8,
            _ => return Err(malformed()),
        };

        let file = match chars[1].to_ascii_uppercase() {
            c @ 'A'..='D' => c as i8 - 'A' as i8 + 1,
            _ => return Err(malformed()),
        };

        Ok(Square(rank, file))
    }
}
