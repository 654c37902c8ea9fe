//! Board representation and capture rules.
//!
//! A 4x4 board of 16 slots. Every move must capture; the puzzle is solved
//! when a single piece remains. Pieces have no colour, so any occupant can be
//! captured by any piece that reaches it.
//!
//! # Example
//! ```
//! use solitaire_chess::board::{Board, Square};
//!
//! let mut board = Board::for_level(0).unwrap();
//! let queen = Square(3, 1);
//! assert!(board.moves_from(queen).unwrap().contains(Square(2, 1)));
//!
//! board.apply_move(queen, Square(2, 1)).unwrap();
//! assert_eq!(board.piece_count(), 3);
//! ```

mod apply;
mod builder;
#[cfg(debug_assertions)]
mod debug;
mod error;
mod layout;
mod movegen;
pub mod prelude;
mod range_tables;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{LayoutError, LevelError, MoveError, SquareError};
pub use range_tables::Direction;
pub use state::{Board, GameStatus};
pub use types::{
    Capture, Movement, Piece, PieceKind, Square, SquareSet, SquareSetIter, BOARD_SIDE,
    BOARD_SQUARES,
};
