use super::{Board, Square};

#[cfg(debug_assertions)]
impl Board {
    /// Panics if any slot holds a piece whose square disagrees with the slot.
    pub(crate) fn debug_assert_consistent(&self) {
        for (piece, sq) in self.slots.iter().zip(Square::ALL) {
            debug_assert_eq!(
                piece.square(),
                sq,
                "slot {sq} holds {piece}, board is inconsistent"
            );
        }
    }
}
