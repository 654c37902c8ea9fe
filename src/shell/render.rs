//! ASCII-art rendering of boards and menus.
//!
//! Each square is a tile seven rows high and sixteen columns wide. A tile
//! draws its own left and bottom edges; the board adds the top border, the
//! right edge and the rank and file labels.

use std::fmt::Write as _;

use crate::board::{Board, PieceKind, Square, SquareSet, BOARD_SIDE};
use crate::levels::Difficulty;

/// Height of a tile in text rows.
pub const TILE_ROWS: usize = 7;
/// Width of a tile in text columns.
pub const TILE_COLS: usize = 16;

const SIDE: usize = BOARD_SIDE as usize;

/// Horizontal rule separating sections of shell output.
pub const RULE: &str =
    "-----------------------------------------------------------------------";

type Tile = [&'static str; TILE_ROWS];

static EMPTY_TILE: Tile = [
    r"|               ",
    r"|               ",
    r"|               ",
    r"|               ",
    r"|               ",
    r"|               ",
    r"----------------",
];

static PAWN_TILE: Tile = [
    r"|               ",
    r"|       _       ",
    r"|      (_)      ",
    r"|     _/_\_     ",
    r"|    (_____)    ",
    r"|               ",
    r"----------------",
];

static ROOK_TILE: Tile = [
    r"|               ",
    r"|     |UUU|     ",
    r"|      |_|      ",
    r"|     _)_(_     ",
    r"|    (_____)    ",
    r"|               ",
    r"----------------",
];

static KNIGHT_TILE: Tile = [
    r"|               ",
    r"|    ____|\     ",
    r"|    L__  |7    ",
    r"|      /  |7    ",
    r"|     (___)     ",
    r"|    (_____)    ",
    r"----------------",
];

static BISHOP_TILE: Tile = [
    r"|               ",
    r"|       o       ",
    r"|      (/)      ",
    r"|      {_}      ",
    r"|     _)_(_     ",
    r"|    (_____)    ",
    r"----------------",
];

static QUEEN_TILE: Tile = [
    r"|       o       ",
    r"|     \^^^/     ",
    r"|     <___>     ",
    r"|      )_(      ",
    r"|     (___)     ",
    r"|    (_____)    ",
    r"----------------",
];

static KING_TILE: Tile = [
    r"|      _+_      ",
    r"|     \___/     ",
    r"|      )_(      ",
    r"|     <___>     ",
    r"|     (___)     ",
    r"|    (_____)    ",
    r"----------------",
];

/// The art for one piece kind.
#[must_use]
pub fn tile(kind: PieceKind) -> &'static Tile {
    match kind {
        PieceKind::Empty => &EMPTY_TILE,
        PieceKind::Pawn => &PAWN_TILE,
        PieceKind::Rook => &ROOK_TILE,
        PieceKind::Knight => &KNIGHT_TILE,
        PieceKind::Bishop => &BISHOP_TILE,
        PieceKind::Queen => &QUEEN_TILE,
        PieceKind::King => &KING_TILE,
    }
}

/// Draw the whole board, rank 4 at the top, with rank labels on the left and
/// file letters underneath.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "   {}", "-".repeat(TILE_COLS * SIDE + 1));

    for row in board.pieces().chunks(SIDE) {
        let rank = row[0].square().rank();
        for line in 0..TILE_ROWS {
            if line == 2 {
                let _ = write!(out, " {rank} ");
            } else {
                out.push_str("   ");
            }
            for piece in row {
                out.push_str(tile(piece.kind())[line]);
            }
            out.push(if line == TILE_ROWS - 1 { '-' } else { '|' });
            out.push('\n');
        }
    }

    out.push_str("   ");
    for file in 1..=BOARD_SIDE {
        let label = Square(1, file).file_char().unwrap_or('?');
        let _ = write!(out, "{label:>9}{:7}", "");
    }
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

/// Numbered destination list for the move prompt:
///
/// ```text
/// [1] [2]
///  3B  2A
/// ```
#[must_use]
pub fn render_destinations(targets: SquareSet) -> String {
    let mut numbers = String::new();
    let mut squares = String::new();
    for (n, sq) in targets.iter().enumerate() {
        let _ = write!(numbers, "[{}] ", n + 1);
        let _ = write!(squares, " {sq} ");
    }
    format!("{}\n{}\n", numbers.trim_end(), squares.trim_end())
}

/// The level-select menu.
#[must_use]
pub fn render_menu() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}\n{:^71}\n{RULE}", "LEVEL SELECT");
    for tier in Difficulty::MENU {
        let _ = writeln!(out, "{tier}:");
        out.push('\t');
        let buttons: Vec<String> = tier.levels().map(|level| format!("[{level:>2}]")).collect();
        let _ = writeln!(out, "{}\n", buttons.join(" "));
    }
    let _ = writeln!(
        out,
        "{RULE}\n{:^71}\n{RULE}",
        "TUTORIAL ('t')   RANDOM ('r')   QUIT ('q')"
    );
    out
}
