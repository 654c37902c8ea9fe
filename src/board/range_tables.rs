//! Precomputed range tables.
//!
//! Steppers (pawn, knight, king) get one [`SquareSet`] per square. Sliders get
//! one ray per direction per square, ordered outward from the origin so move
//! generation can stop at the first occupied square.

use once_cell::sync::Lazy;

use super::types::{Square, SquareSet, BOARD_SQUARES};

/// One of the eight ray directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
            Direction::NorthEast => 4,
            Direction::NorthWest => 5,
            Direction::SouthEast => 6,
            Direction::SouthWest => 7,
        }
    }

    /// (rank, file) step for one square along this direction
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::South => (-1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (1, -1),
            Direction::SouthEast => (-1, 1),
            Direction::SouthWest => (-1, -1),
        }
    }
}

// Pawns always capture, so only the two forward diagonals count.
const PAWN_DELTAS: [(i8, i8); 2] = [(1, 1), (1, -1)];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn step_table(deltas: &[(i8, i8)]) -> [SquareSet; BOARD_SQUARES] {
    let mut table = [SquareSet::EMPTY; BOARD_SQUARES];
    for (slot, sq) in table.iter_mut().zip(Square::ALL) {
        *slot = deltas
            .iter()
            .filter_map(|&(dr, df)| sq.offset(dr, df))
            .collect();
    }
    table
}

fn ray(from: Square, dir: Direction) -> Vec<Square> {
    let (dr, df) = dir.delta();
    std::iter::successors(from.offset(dr, df), |sq| sq.offset(dr, df)).collect()
}

pub(crate) static PAWN_RANGES: Lazy<[SquareSet; BOARD_SQUARES]> =
    Lazy::new(|| step_table(&PAWN_DELTAS));

pub(crate) static KNIGHT_RANGES: Lazy<[SquareSet; BOARD_SQUARES]> =
    Lazy::new(|| step_table(&KNIGHT_DELTAS));

pub(crate) static KING_RANGES: Lazy<[SquareSet; BOARD_SQUARES]> =
    Lazy::new(|| step_table(&KING_DELTAS));

/// `RAYS[direction][square]`: squares along the ray, nearest first.
pub(crate) static RAYS: Lazy<[[Vec<Square>; BOARD_SQUARES]; 8]> = Lazy::new(|| {
    std::array::from_fn(|d| {
        let dir = Direction::ALL[d];
        std::array::from_fn(|idx| ray(Square::ALL[idx], dir))
    })
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_index_matches_all() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }

    #[test]
    fn test_pawn_on_top_rank_has_no_range() {
        for file in 1..=4 {
            let idx = Square(4, file).index_unchecked();
            assert!(PAWN_RANGES[idx].is_empty());
        }
    }

    #[test]
    fn test_pawn_edge_file_has_single_capture() {
        let idx = Square(2, 1).index_unchecked();
        assert_eq!(PAWN_RANGES[idx].to_vec(), vec![Square(3, 2)]);
    }

    #[test]
    fn test_knight_never_exceeds_four_squares() {
        for table in KNIGHT_RANGES.iter() {
            assert!(table.len() <= 4);
        }
    }

    #[test]
    fn test_king_corner_and_centre() {
        assert_eq!(KING_RANGES[Square(1, 1).index_unchecked()].len(), 3);
        assert_eq!(KING_RANGES[Square(2, 2).index_unchecked()].len(), 8);
    }

    #[test]
    fn test_rays_are_ordered_outward() {
        let east = &RAYS[Direction::East.index()][Square(1, 1).index_unchecked()];
        assert_eq!(east, &vec![Square(1, 2), Square(1, 3), Square(1, 4)]);

        let south_west = &RAYS[Direction::SouthWest.index()][Square(4, 4).index_unchecked()];
        assert_eq!(south_west, &vec![Square(3, 3), Square(2, 2), Square(1, 1)]);
    }

    #[test]
    fn test_rays_stop_at_edge() {
        let north = &RAYS[Direction::North.index()][Square(4, 2).index_unchecked()];
        assert!(north.is_empty());
    }
}
