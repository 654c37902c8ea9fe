//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing layout strings.
//!
//! # Example
//! ```
//! use solitaire_chess::board::{BoardBuilder, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(1, 1), PieceKind::Rook)
//!     .piece(Square(1, 2), PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.piece_count(), 2);
//! ```

use super::error::LevelError;
use super::{Board, PieceKind, Square};
use crate::levels;

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, PieceKind)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from a catalog level.
    pub fn from_level(level: usize) -> Result<Self, LevelError> {
        let layout = levels::layout_for(level)?;
        let pieces = layout
            .iter()
            .zip(Square::ALL)
            .filter(|(kind, _)| !kind.is_empty())
            .map(|(&kind, sq)| (sq, kind))
            .collect();
        Ok(BoardBuilder { pieces })
    }

    /// Place a piece on a square, replacing whatever was there.
    ///
    /// Off-board squares are ignored when the board is built.
    #[must_use]
    pub fn piece(mut self, square: Square, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, kind) in self.pieces {
            if let Err(e) = board.set_piece(square, kind) {
                log::warn!("skipping {kind}: {e}");
            }
        }

        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_level_matches_catalog() {
        for level in 0..levels::LEVEL_COUNT {
            let built = BoardBuilder::from_level(level).unwrap().build();
            assert_eq!(built, Board::for_level(level).unwrap(), "level {level}");
        }
    }

    #[test]
    fn test_from_unknown_level() {
        assert!(matches!(
            BoardBuilder::from_level(99),
            Err(LevelError::UnknownLevel { level: 99 })
        ));
    }

    #[test]
    fn test_piece_replaces_existing() {
        let board = BoardBuilder::new()
            .piece(Square(2, 2), PieceKind::Knight)
            .piece(Square(2, 2), PieceKind::Queen)
            .build();
        assert_eq!(board.kind_at(Square(2, 2)), Some(PieceKind::Queen));
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_clear() {
        let board = BoardBuilder::from_level(0)
            .unwrap()
            .clear(Square(2, 1))
            .build();
        assert_eq!(board.piece_count(), 3);
        assert!(!board.spot_occupied(Square(2, 1)));
    }

    #[test]
    fn test_off_board_piece_is_skipped() {
        let board = BoardBuilder::new()
            .piece(Square(0, 0), PieceKind::King)
            .piece(Square(4, 4), PieceKind::King)
            .build();
        assert_eq!(board.piece_count(), 1);
        assert!(board.spot_occupied(Square(4, 4)));
    }

    #[test]
    fn test_placing_empty_clears() {
        let board = BoardBuilder::from_level(0)
            .unwrap()
            .piece(Square(4, 3), PieceKind::Empty)
            .build();
        assert_eq!(board.piece_count(), 3);
    }
}
