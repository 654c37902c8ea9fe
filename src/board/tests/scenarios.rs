//! Whole-level play-throughs.

use crate::board::{Board, Capture, GameStatus, PieceKind, Square};
use crate::levels::LEVEL_COUNT;

fn play(board: &mut Board, line: &str) {
    for text in line.split_whitespace() {
        let capture = board.parse_capture(text).unwrap();
        board.try_capture(capture).unwrap();
    }
}

/// Depth-first search for a capture sequence that leaves one piece.
fn solve(board: &Board) -> Option<Vec<Capture>> {
    if board.is_solved() {
        return Some(Vec::new());
    }
    for capture in board.all_captures() {
        let mut next = board.clone();
        next.try_capture(capture).unwrap();
        if let Some(mut rest) = solve(&next) {
            rest.insert(0, capture);
            return Some(rest);
        }
    }
    None
}

#[test]
fn test_level_zero_play_through() {
    let mut board = Board::for_level(0).unwrap();
    assert_eq!(board.status(), GameStatus::InProgress);

    play(&mut board, "3A2A");
    assert_eq!(board.piece_count(), 3);
    assert_eq!(board.moves_from(Square(3, 2)).unwrap().to_vec(), [Square(4, 3)]);

    play(&mut board, "3B4C");
    assert_eq!(board.piece_count(), 2);
    assert!(!board.is_solved());
    assert_eq!(board.status(), GameStatus::InProgress);

    play(&mut board, "2A4C");
    assert!(board.is_solved());
    assert_eq!(board.status(), GameStatus::Solved);
    assert_eq!(board.kind_at(Square(4, 3)), Some(PieceKind::Queen));
}

#[test]
fn test_tutorial_alternative_line() {
    let mut board = Board::for_level(0).unwrap();
    play(&mut board, "3A2A 2A3B 3B4C");
    assert!(board.is_solved());
}

#[test]
fn test_known_solutions() {
    for (level, line) in [(1, "3D2B 3B2B 2B2A"), (2, "1A3B 4C3B 3B4A")] {
        let mut board = Board::for_level(level).unwrap();
        play(&mut board, line);
        assert!(board.is_solved(), "level {level} not solved by {line}");
    }
}

#[test]
fn test_stuck_position() {
    let board = Board::try_from_layout("4/4/4/P2P").unwrap();
    assert!(board.is_stuck());
    assert_eq!(board.status(), GameStatus::Stuck);
}

#[test]
fn test_dead_end_after_bad_capture() {
    // Taking the rook with the pawn first leaves pawn and knight apart.
    let mut board = Board::try_from_layout("2R1/1P2/N3/4").unwrap();
    play(&mut board, "3B4C");
    assert_eq!(board.piece_count(), 2);
    assert!(board.is_stuck());
}

#[test]
fn test_empty_board_is_stuck() {
    assert_eq!(Board::empty().status(), GameStatus::Stuck);
}

#[test]
fn test_single_piece_is_solved() {
    let board = Board::try_from_layout("4/4/4/3K").unwrap();
    assert!(board.is_solved());
    assert!(!board.is_stuck());
}

#[test]
fn test_easy_levels_are_solvable() {
    for level in 0..=2 {
        let board = Board::for_level(level).unwrap();
        let line = solve(&board).unwrap_or_else(|| panic!("level {level} has no solution"));
        assert_eq!(line.len(), board.piece_count() - 1);
    }
}

#[test]
#[ignore]
fn test_every_level_is_solvable() {
    for level in 0..LEVEL_COUNT {
        let board = Board::for_level(level).unwrap();
        assert!(solve(&board).is_some(), "level {level} has no solution");
    }
}
