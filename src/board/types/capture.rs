//! Capture move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveError;

/// A capture: the piece on `from` takes whatever stands on `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capture {
    pub from: Square,
    pub to: Square,
}

impl Capture {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Capture { from, to }
    }
}

/// Prints as source and destination squares, e.g. "3A2A".
impl fmt::Display for Capture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Parses "3A2A", "3a-2a" or "3Ax2A". Only checks the syntax; use
/// `Board::parse_capture` to also check legality.
impl FromStr for Capture {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MoveError::MalformedCapture {
            notation: s.to_string(),
        };

        let compact: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | 'x' | 'X'))
            .collect();
        if compact.len() != 4 || !compact.is_ascii() {
            return Err(malformed());
        }

        let from = compact[..2].parse::<Square>().map_err(|_| malformed())?;
        let to = compact[2..].parse::<Square>().map_err(|_| malformed())?;
        Ok(Capture { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let capture: Capture = "3A2A".parse().unwrap();
        assert_eq!(capture, Capture::new(Square(3, 1), Square(2, 1)));
    }

    #[test]
    fn test_parse_with_separators() {
        assert_eq!(
            "3b-4c".parse::<Capture>().unwrap(),
            Capture::new(Square(3, 2), Square(4, 3))
        );
        assert_eq!(
            "2ax4c".parse::<Capture>().unwrap(),
            Capture::new(Square(2, 1), Square(4, 3))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "3A", "3A2", "3A2A1", "5A2A", "3E2A", "ééé"] {
            assert!(
                matches!(text.parse::<Capture>(), Err(MoveError::MalformedCapture { .. })),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display() {
        let capture = Capture::new(Square(3, 2), Square(4, 3));
        assert_eq!(capture.to_string(), "3B4C");
    }
}
