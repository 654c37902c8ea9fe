//! Coordinate conversion and notation tests.

use crate::board::{Square, SquareError};

#[test]
fn test_index_layout_is_row_major_from_rank_four() {
    assert_eq!(Square(4, 1).index(), Ok(0));
    assert_eq!(Square(4, 3).index(), Ok(2));
    assert_eq!(Square(3, 1).index(), Ok(4));
    assert_eq!(Square(3, 2).index(), Ok(5));
    assert_eq!(Square(2, 1).index(), Ok(8));
    assert_eq!(Square(1, 4).index(), Ok(15));
}

#[test]
fn test_index_round_trip() {
    for idx in 0..16 {
        let sq = Square::from_index(idx).unwrap();
        assert!(sq.is_on_board());
        assert_eq!(sq.index(), Ok(idx));
    }
    for sq in Square::ALL {
        assert_eq!(Square::from_index(sq.index().unwrap()), Ok(sq));
    }
}

#[test]
fn test_all_is_in_index_order() {
    for (idx, sq) in Square::ALL.iter().enumerate() {
        assert_eq!(sq.index(), Ok(idx));
    }
    let mut sorted = Square::ALL;
    sorted.sort();
    assert_eq!(sorted, Square::ALL);
}

#[test]
fn test_off_board_squares() {
    for sq in [Square(0, 1), Square(5, 1), Square(1, 0), Square(1, 5), Square(-1, -1)] {
        assert!(!sq.is_on_board());
        assert_eq!(
            sq.index(),
            Err(SquareError::OffBoard {
                rank: sq.rank(),
                file: sq.file()
            })
        );
        assert!(sq.to_notation().is_err());
        assert!(Square::new(sq.rank(), sq.file()).is_none());
        assert!(Square::try_from((sq.rank(), sq.file())).is_err());
    }
}

#[test]
fn test_index_out_of_range() {
    assert_eq!(
        Square::from_index(16),
        Err(SquareError::IndexOutOfRange { index: 16 })
    );
}

#[test]
fn test_notation_round_trip() {
    for sq in Square::ALL {
        let text = sq.to_notation().unwrap();
        assert_eq!(text.parse::<Square>(), Ok(sq));
    }
}

#[test]
fn test_notation_examples() {
    assert_eq!(Square(2, 3).to_notation().unwrap(), "2C");
    assert_eq!(Square(4, 1).to_string(), "4A");
    assert_eq!("2C".parse::<Square>(), Ok(Square(2, 3)));
    assert_eq!("2c".parse::<Square>(), Ok(Square(2, 3)));
    assert_eq!("1d".parse::<Square>(), Ok(Square(1, 4)));
}

#[test]
fn test_malformed_notation() {
    for text in ["", "2", "2CC", "0A", "5A", "2E", "C2", "2-", "٣A", " 2C"] {
        assert!(
            matches!(
                text.parse::<Square>(),
                Err(SquareError::MalformedNotation { .. })
            ),
            "{text:?} should not parse"
        );
    }
}

#[test]
fn test_display_of_sentinel() {
    assert_eq!(Square(-1, -1).to_string(), "(-1, -1)");
}

#[test]
fn test_offset() {
    assert_eq!(Square(2, 2).offset(1, 1), Some(Square(3, 3)));
    assert_eq!(Square(4, 4).offset(1, 0), None);
    assert_eq!(Square(1, 1).offset(0, -1), None);
}

#[test]
fn test_offset_from_extreme_sentinels() {
    assert_eq!(Square(i8::MAX, 1).offset(1, 0), None);
    assert_eq!(Square(1, i8::MIN).offset(0, -1), None);
    assert_eq!(Square(i8::MIN, i8::MAX).offset(-1, 1), None);
    // Stepping back onto the board from a near sentinel still works.
    assert_eq!(Square(5, 1).offset(-1, 0), Some(Square(4, 1)));
}
