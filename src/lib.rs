pub mod board;
pub mod levels;
pub mod shell;

pub use board::{Board, Capture, GameStatus, Piece, PieceKind, Square};
pub use levels::{Difficulty, LEVEL_COUNT};
