//! Core board types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Square` - (rank, file) coordinate with board index conversions
//! - `SquareSet` - 16-bit bitboard over board indices
//! - `PieceKind`, `Movement` and `Piece` - piece identity, movement policy, placement
//! - `Capture` - a single capture move

mod capture;
mod piece;
mod square;
mod square_set;

pub use capture::Capture;
pub use piece::{Movement, Piece, PieceKind};
pub use square::{Square, BOARD_SIDE, BOARD_SQUARES};
pub use square_set::{SquareSet, SquareSetIter};
