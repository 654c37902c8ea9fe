mod sliders;
mod steppers;

use super::error::MoveError;
use super::{Board, Capture, Movement, Square, SquareSet};

impl Board {
    /// Squares the piece on `from` can capture on.
    ///
    /// Steppers (pawn, knight, king) capture any occupied square in their range.
    /// Sliders (rook, bishop, queen) capture the first occupied square on each
    /// ray and nothing beyond it. Ownership is never considered: every occupant
    /// is capturable.
    pub fn moves_from(&self, from: Square) -> Result<SquareSet, MoveError> {
        let piece = self.piece_at(from)?;
        let from_idx = from.index()?;

        let targets = match piece.kind().movement() {
            Movement::Inert => return Err(MoveError::EmptySquare { square: from }),
            Movement::Step(table) => self.generate_step_captures(from_idx, table),
            Movement::Slide(directions) => self.generate_slide_captures(from_idx, directions),
        };

        log::trace!("{} on {from} can capture {} square(s)", piece.kind(), targets.len());
        Ok(targets)
    }

    /// Every legal capture on the board, grouped by source square in board
    /// index order.
    #[must_use]
    pub fn all_captures(&self) -> Vec<Capture> {
        let mut captures = Vec::new();
        for piece in self.occupants() {
            let from = piece.square();
            if let Ok(targets) = self.moves_from(from) {
                captures.extend(targets.iter().map(|to| Capture::new(from, to)));
            }
        }
        captures
    }
}
