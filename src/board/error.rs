//! Error types for board operations.

use std::fmt;

use super::Square;

/// Error type for square conversions and notation parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank or file outside 1-4
    OffBoard { rank: i8, file: i8 },
    /// Board index outside 0-15
    IndexOutOfRange { index: usize },
    /// Text that is not a two-character square like "2C"
    MalformedNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OffBoard { rank, file } => {
                write!(f, "Square ({rank}, {file}) is not on the board (must be 1-4)")
            }
            SquareError::IndexOutOfRange { index } => {
                write!(f, "Board index {index} out of range (must be 0-15)")
            }
            SquareError::MalformedNotation { notation } => {
                write!(f, "Invalid square notation '{notation}', expected e.g. '2C'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move enumeration and move application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A move endpoint or queried square is not usable
    InvalidSquare(SquareError),
    /// The square holds no piece
    EmptySquare { square: Square },
    /// Source and destination are the same square
    SameSquare { square: Square },
    /// The destination is not among the piece's legal captures
    IllegalCapture { from: Square, to: Square },
    /// Capture notation could not be parsed
    MalformedCapture { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidSquare(e) => write!(f, "Invalid square: {e}"),
            MoveError::EmptySquare { square } => {
                write!(f, "There is no piece on {square}")
            }
            MoveError::SameSquare { square } => {
                write!(f, "Cannot move a piece from {square} onto itself")
            }
            MoveError::IllegalCapture { from, to } => {
                write!(f, "The piece on {from} cannot capture on {to}")
            }
            MoveError::MalformedCapture { notation } => {
                write!(f, "Invalid capture notation '{notation}', expected e.g. '3A2A'")
            }
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidSquare(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(e: SquareError) -> Self {
        MoveError::InvalidSquare(e)
    }
}

/// Error type for level catalog lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// No layout exists for this level id
    UnknownLevel { level: usize },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::UnknownLevel { level } => write!(f, "No level numbered {level}"),
        }
    }
}

impl std::error::Error for LevelError {}

/// Error type for layout notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout must have exactly 4 ranks separated by '/'
    WrongRankCount { found: usize },
    /// Invalid piece character
    InvalidPiece { char: char },
    /// A rank describes more than 4 squares
    TooManyFiles { rank: i8, files: usize },
    /// A rank describes fewer than 4 squares
    TooFewFiles { rank: i8, files: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRankCount { found } => {
                write!(f, "Layout must have 4 ranks, found {found}")
            }
            LayoutError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in layout")
            }
            LayoutError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            LayoutError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_off_board() {
        let err = SquareError::OffBoard { rank: 5, file: 0 };
        assert!(err.to_string().contains("(5, 0)"));
    }

    #[test]
    fn test_square_error_index() {
        let err = SquareError::IndexOutOfRange { index: 16 };
        assert!(err.to_string().contains("16"));
    }

    #[test]
    fn test_square_error_notation() {
        let err = SquareError::MalformedNotation {
            notation: "9Z".to_string(),
        };
        assert!(err.to_string().contains("'9Z'"));
    }

    #[test]
    fn test_move_error_empty_square() {
        let err = MoveError::EmptySquare {
            square: Square(2, 3),
        };
        assert!(err.to_string().contains("2C"));
    }

    #[test]
    fn test_move_error_illegal_capture() {
        let err = MoveError::IllegalCapture {
            from: Square(1, 1),
            to: Square(4, 4),
        };
        let msg = err.to_string();
        assert!(msg.contains("1A"));
        assert!(msg.contains("4D"));
    }

    #[test]
    fn test_move_error_from_square_error() {
        let err: MoveError = SquareError::OffBoard { rank: 0, file: 1 }.into();
        assert!(matches!(err, MoveError::InvalidSquare(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_level_error() {
        let err = LevelError::UnknownLevel { level: 42 };
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_layout_error_invalid_piece() {
        let err = LayoutError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_layout_error_rank_count() {
        let err = LayoutError::WrongRankCount { found: 3 };
        assert!(err.to_string().contains('3'));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_error_clone() {
        let err = MoveError::SameSquare {
            square: Square(1, 1),
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
