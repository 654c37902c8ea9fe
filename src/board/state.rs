#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{LevelError, SquareError};
use super::{Piece, PieceKind, Square, SquareSet, BOARD_SQUARES};
use crate::levels;

/// Outcome of a position from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// More than one piece and at least one capture available
    InProgress,
    /// Exactly one piece left
    Solved,
    /// Not solved and no capture anywhere; only a restart helps
    Stuck,
}

/// The 4x4 board: 16 slots in row-major order, rank 4 first, file A first.
///
/// Every slot always holds a [`Piece`]; vacant slots hold an `Empty` piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) slots: [Piece; BOARD_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with every slot empty.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            slots: Square::ALL.map(Piece::empty),
        }
    }

    /// Build the starting position of a catalog level.
    pub fn for_level(level: usize) -> Result<Self, LevelError> {
        let layout = levels::layout_for(level)?;
        log::debug!("setting up level {level}");
        Ok(Board::from_kinds(layout))
    }

    /// Build a board from 16 piece kinds in board index order.
    #[must_use]
    pub fn from_kinds(kinds: &[PieceKind; BOARD_SQUARES]) -> Self {
        let mut board = Board::empty();
        for (slot, (&kind, sq)) in board.slots.iter_mut().zip(kinds.iter().zip(Square::ALL)) {
            *slot = Piece::new(kind, sq);
        }
        board
    }

    /// The piece (possibly Empty) on a square.
    pub fn piece_at(&self, sq: Square) -> Result<&Piece, SquareError> {
        Ok(&self.slots[sq.index()?])
    }

    /// The kind on a square, or None off the board.
    #[must_use]
    pub fn kind_at(&self, sq: Square) -> Option<PieceKind> {
        self.piece_at(sq).ok().map(Piece::kind)
    }

    /// All 16 slots in board index order.
    #[inline]
    #[must_use]
    pub fn pieces(&self) -> &[Piece; BOARD_SQUARES] {
        &self.slots
    }

    /// Every non-Empty piece, in board index order.
    pub fn occupants(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.slots.iter().filter(|p| !p.is_empty())
    }

    /// Squares holding a piece.
    #[must_use]
    pub fn occupied(&self) -> SquareSet {
        self.occupants().map(Piece::square).collect()
    }

    /// True if the square is on the board and holds a piece.
    #[must_use]
    pub fn spot_occupied(&self, sq: Square) -> bool {
        self.kind_at(sq).is_some_and(|kind| !kind.is_empty())
    }

    /// Number of non-Empty slots.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.occupants().count()
    }

    /// The puzzle is solved when exactly one piece remains.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.piece_count() == 1
    }

    /// Not solved, and nothing can capture.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        !self.is_solved() && self.all_captures().is_empty()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_solved() {
            GameStatus::Solved
        } else if self.is_stuck() {
            GameStatus::Stuck
        } else {
            GameStatus::InProgress
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, kind: PieceKind) -> Result<(), SquareError> {
        self.slots[sq.index()?] = Piece::new(kind, sq);
        Ok(())
    }
}
