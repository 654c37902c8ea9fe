use super::super::{Board, SquareSet, BOARD_SQUARES};

impl Board {
    pub(crate) fn generate_step_captures(
        &self,
        from_idx: usize,
        table: &[SquareSet; BOARD_SQUARES],
    ) -> SquareSet {
        table[from_idx] & self.occupied()
    }
}
