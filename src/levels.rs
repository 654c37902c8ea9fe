//! Level catalog.
//!
//! Each level is a fixed starting layout of 16 piece kinds in board index
//! order (rank 4 first, file A first). Level 0 is the tutorial position; 1-20
//! are the curated puzzles, five per difficulty tier.

use std::fmt;
use std::ops::RangeInclusive;

use crate::board::{LevelError, PieceKind, BOARD_SQUARES};

/// Number of levels in the catalog, tutorial included.
pub const LEVEL_COUNT: usize = 21;

/// A level's starting layout.
pub type Layout = [PieceKind; BOARD_SQUARES];

const E: PieceKind = PieceKind::Empty;
const P: PieceKind = PieceKind::Pawn;
const R: PieceKind = PieceKind::Rook;
const N: PieceKind = PieceKind::Knight;
const B: PieceKind = PieceKind::Bishop;
const Q: PieceKind = PieceKind::Queen;
const K: PieceKind = PieceKind::King;

#[rustfmt::skip]
static LAYOUTS: [Layout; LEVEL_COUNT] = [
    [E, E, R, E,  Q, P, E, E,  N, E, E, E,  E, E, E, E],
    [E, E, E, E,  E, R, E, N,  B, N, E, E,  E, E, E, E],
    [R, E, Q, E,  E, P, E, E,  E, E, E, E,  N, E, E, E],
    [E, N, E, E,  E, Q, E, R,  P, E, E, E,  E, E, E, E],
    [E, E, Q, E,  E, E, R, E,  N, E, E, E,  E, P, E, E],
    [E, E, P, E,  N, Q, E, E,  E, B, E, E,  R, E, E, E],
    [K, E, R, E,  E, E, B, E,  E, E, N, E,  P, E, E, E],
    [R, E, E, E,  E, E, K, P,  N, B, E, E,  E, E, E, E],
    [R, E, E, E,  E, P, N, E,  E, E, E, E,  R, E, N, E],
    [R, N, E, E,  Q, E, E, E,  E, B, E, E,  N, E, P, E],
    [E, R, E, R,  E, E, P, E,  E, P, E, E,  B, E, N, E],
    [E, E, B, R,  E, E, B, R,  E, E, E, P,  N, E, E, E],
    [E, R, E, N,  N, E, P, E,  E, B, E, E,  E, E, P, E],
    [E, E, B, N,  E, R, B, P,  N, E, E, E,  E, P, E, E],
    [E, E, E, P,  E, E, B, N,  B, Q, E, E,  E, N, P, E],
    [R, E, E, P,  E, B, R, E,  B, E, E, N,  E, E, P, E],
    [E, E, R, N,  E, E, E, N,  B, E, R, E,  P, P, E, E],
    [P, B, E, E,  N, N, E, E,  Q, E, B, P,  R, E, E, E],
    [E, E, N, P,  E, E, B, P,  R, R, E, E,  B, N, E, E],
    [R, R, E, E,  N, Q, B, P,  B, E, E, E,  E, E, P, E],
    [E, E, R, P,  E, R, N, E,  B, N, E, E,  P, B, E, E],
];

/// The starting layout of a level.
///
/// # Example
/// ```
/// use solitaire_chess::levels::layout_for;
///
/// assert!(layout_for(20).is_ok());
/// assert!(layout_for(21).is_err());
/// ```
pub fn layout_for(level: usize) -> Result<&'static Layout, LevelError> {
    LAYOUTS.get(level).ok_or(LevelError::UnknownLevel { level })
}

/// Difficulty tiers as shown in the level-select menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Tutorial,
    Easy,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    /// The tiers offered in the menu, easiest first
    pub const MENU: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    /// The tier a level belongs to.
    pub fn of(level: usize) -> Result<Difficulty, LevelError> {
        match level {
            0 => Ok(Difficulty::Tutorial),
            1..=5 => Ok(Difficulty::Easy),
            6..=10 => Ok(Difficulty::Intermediate),
            11..=15 => Ok(Difficulty::Advanced),
            16..=20 => Ok(Difficulty::Expert),
            _ => Err(LevelError::UnknownLevel { level }),
        }
    }

    /// The levels in this tier.
    #[must_use]
    pub const fn levels(self) -> RangeInclusive<usize> {
        match self {
            Difficulty::Tutorial => 0..=0,
            Difficulty::Easy => 1..=5,
            Difficulty::Intermediate => 6..=10,
            Difficulty::Advanced => 11..=15,
            Difficulty::Expert => 16..=20,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Tutorial => "Tutorial",
            Difficulty::Easy => "Easy",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
