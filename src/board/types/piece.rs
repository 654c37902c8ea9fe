//! Piece kinds, movement policies and placed pieces.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::{Square, BOARD_SQUARES};
use super::square_set::SquareSet;
use crate::board::range_tables::{Direction, KING_RANGES, KNIGHT_RANGES, PAWN_RANGES, RAYS};

/// Piece types, including the placeholder that fills an unoccupied slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    #[default]
    Empty,
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// How a piece kind turns its range into captures.
#[derive(Clone, Copy, Debug)]
pub enum Movement {
    /// Never moves
    Inert,
    /// Fixed offsets: any occupied square in the per-square table is a capture
    Step(&'static [SquareSet; BOARD_SQUARES]),
    /// Rays scanned outward; the first occupied square on each ray is a capture
    Slide(&'static [Direction]),
}

impl PieceKind {
    /// All real piece kinds (everything except Empty)
    pub const PIECES: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Display name ("Pawn", "Rook", ...)
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Empty => "Empty",
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    /// Parse a piece from its letter (P, R, N, B, Q, K), case-insensitive
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'R' => Some(PieceKind::Rook),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Uppercase piece letter; Empty has none
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> Option<char> {
        match self {
            PieceKind::Empty => None,
            PieceKind::Pawn => Some('P'),
            PieceKind::Rook => Some('R'),
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, PieceKind::Empty)
    }

    /// Returns true if this piece is a slider (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// The movement policy for this kind.
    #[must_use]
    pub fn movement(self) -> Movement {
        match self {
            PieceKind::Empty => Movement::Inert,
            PieceKind::Pawn => Movement::Step(&PAWN_RANGES),
            PieceKind::Knight => Movement::Step(&KNIGHT_RANGES),
            PieceKind::King => Movement::Step(&KING_RANGES),
            PieceKind::Rook => Movement::Slide(&Direction::ORTHOGONAL),
            PieceKind::Bishop => Movement::Slide(&Direction::DIAGONAL),
            PieceKind::Queen => Movement::Slide(&Direction::ALL),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece standing on a square. Empty slots hold an `Empty` piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    square: Square,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, square: Square) -> Self {
        Piece { kind, square }
    }

    /// The placeholder for a vacant slot
    #[must_use]
    pub const fn empty(square: Square) -> Self {
        Piece::new(PieceKind::Empty, square)
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }

    /// Every square this piece could capture on from its current square,
    /// ignoring what is actually on the board.
    ///
    /// Derived from kind and square on each call, so it always matches the
    /// piece's position.
    #[must_use]
    pub fn range(&self) -> SquareSet {
        let Ok(idx) = self.square.index() else {
            return SquareSet::EMPTY;
        };
        match self.kind.movement() {
            Movement::Inert => SquareSet::EMPTY,
            Movement::Step(table) => table[idx],
            Movement::Slide(directions) => directions
                .iter()
                .flat_map(|dir| RAYS[dir.index()][idx].iter().copied())
                .collect(),
        }
    }

    /// Move the piece onto `to`. Only the board calls this.
    #[inline]
    pub(crate) fn relocate(&mut self, to: Square) {
        self.square = to;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.kind, self.square)
    }
}
