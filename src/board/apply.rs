use super::error::MoveError;
use super::{Board, Capture, Piece};
use crate::board::Square;

impl Board {
    /// Move the piece on `from` onto `to`, discarding whatever stood on `to`.
    ///
    /// This is the only mutation primitive. It checks that both squares are on
    /// the board, that they differ and that `from` holds a piece, but not that
    /// the capture is legal; see [`Board::try_capture`] for that.
    ///
    /// Returns the piece that was on `to`.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<Piece, MoveError> {
        let from_idx = from.index()?;
        let to_idx = to.index()?;
        if from_idx == to_idx {
            return Err(MoveError::SameSquare { square: from });
        }

        let mut moving = self.slots[from_idx];
        if moving.is_empty() {
            return Err(MoveError::EmptySquare { square: from });
        }

        moving.relocate(to);
        let captured = std::mem::replace(&mut self.slots[to_idx], moving);
        self.slots[from_idx] = Piece::empty(from);

        log::debug!(
            "{} {from} -> {to} took {}, {} piece(s) left",
            moving.kind(),
            captured.kind(),
            self.piece_count()
        );
        #[cfg(debug_assertions)]
        self.debug_assert_consistent();

        Ok(captured)
    }

    /// Apply a capture after checking it against [`Board::moves_from`].
    pub fn try_capture(&mut self, capture: Capture) -> Result<Piece, MoveError> {
        let Capture { from, to } = capture;
        if !self.moves_from(from)?.contains(to) {
            return Err(MoveError::IllegalCapture { from, to });
        }
        self.apply_move(from, to)
    }

    /// Parse capture notation ("3A2A") and check it is legal here.
    pub fn parse_capture(&self, text: &str) -> Result<Capture, MoveError> {
        let capture: Capture = text.parse()?;
        if !self.moves_from(capture.from)?.contains(capture.to) {
            return Err(MoveError::IllegalCapture {
                from: capture.from,
                to: capture.to,
            });
        }
        Ok(capture)
    }
}
