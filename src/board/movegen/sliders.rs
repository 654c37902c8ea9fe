use super::super::range_tables::{Direction, RAYS};
use super::super::{Board, SquareSet};

impl Board {
    pub(crate) fn generate_slide_captures(
        &self,
        from_idx: usize,
        directions: &[Direction],
    ) -> SquareSet {
        let occupied = self.occupied();
        let mut targets = SquareSet::EMPTY;

        for dir in directions {
            // The first occupant blocks the rest of the ray.
            let blocker = RAYS[dir.index()][from_idx]
                .iter()
                .find(|sq| occupied.contains(**sq));
            if let Some(&sq) = blocker {
                targets.insert(sq);
            }
        }
        targets
    }
}
