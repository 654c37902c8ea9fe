//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use solitaire_chess::board::prelude::*;
//!
//! let board = Board::for_level(1).unwrap();
//! assert_eq!(board.status(), GameStatus::InProgress);
//! ```

pub use super::{
    Board, BoardBuilder, Capture, GameStatus, LevelError, MoveError, Piece, PieceKind, Square,
    SquareError, SquareSet,
};
