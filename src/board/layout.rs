//! Layout notation: a FEN-like text form of a board.
//!
//! Four ranks from rank 4 down to rank 1, separated by `/`. Pieces are the
//! letters `P R N B Q K` (case-insensitive on input) and digits `1`-`4` stand
//! for runs of empty squares. The tutorial level reads `2R1/QP2/N3/4`.

use std::str::FromStr;

use super::error::LayoutError;
use super::{Board, Piece, PieceKind, Square, BOARD_SIDE};

impl Board {
    /// Parse a board from layout notation.
    ///
    /// # Example
    /// ```
    /// use solitaire_chess::board::{Board, PieceKind, Square};
    ///
    /// let board = Board::try_from_layout("2R1/QP2/N3/4").unwrap();
    /// assert_eq!(board.kind_at(Square(3, 1)), Some(PieceKind::Queen));
    /// assert_eq!(board.piece_count(), 4);
    /// ```
    pub fn try_from_layout(layout: &str) -> Result<Self, LayoutError> {
        let ranks: Vec<&str> = layout.trim().split('/').collect();
        if ranks.len() != BOARD_SIDE as usize {
            return Err(LayoutError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = BOARD_SIDE - row as i8;
            let mut files = 0usize;
            for c in rank_str.chars() {
                if let run @ '1'..='4' = c {
                    files += run as usize - '0' as usize;
                } else {
                    let kind =
                        PieceKind::from_char(c).ok_or(LayoutError::InvalidPiece { char: c })?;
                    files += 1;
                    if files > BOARD_SIDE as usize {
                        return Err(LayoutError::TooManyFiles { rank, files });
                    }
                    let sq = Square(rank, files as i8);
                    board.slots[sq.index_unchecked()] = Piece::new(kind, sq);
                }
            }
            if files > BOARD_SIDE as usize {
                return Err(LayoutError::TooManyFiles { rank, files });
            }
            if files < BOARD_SIDE as usize {
                return Err(LayoutError::TooFewFiles { rank, files });
            }
        }
        Ok(board)
    }

    /// Convert the board to layout notation.
    #[must_use]
    pub fn to_layout(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in self.slots.chunks(BOARD_SIDE as usize) {
            let mut row = String::new();
            let mut empty = 0;
            for piece in rank {
                if let Some(letter) = piece.kind().to_char() {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(letter);
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_layout(s)
    }
}
