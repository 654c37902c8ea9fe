//! Parsing of the three shell prompts.

use rand::Rng;

use crate::board::Square;
use crate::levels::LEVEL_COUNT;

/// Input at the level-select menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Level(usize),
    Tutorial,
    Random,
    Quit,
}

/// Input at the piece-selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    Select(Square),
    Back,
    Restart,
}

/// Input at the destination prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveChoice {
    /// Zero-based position in the listed destinations
    Destination(usize),
    Back,
}

fn first_char(line: &str) -> Option<char> {
    line.trim().chars().next().map(|c| c.to_ascii_lowercase())
}

/// Returns `None` for blank or unrecognised input.
///
/// Level numbers are not checked against the catalog here.
pub fn parse_menu_command(line: &str) -> Option<MenuCommand> {
    let trimmed = line.trim();
    if let Ok(level) = trimmed.parse::<usize>() {
        return Some(MenuCommand::Level(level));
    }

    match first_char(trimmed)? {
        't' => Some(MenuCommand::Tutorial),
        'r' | '?' => Some(MenuCommand::Random),
        'q' => Some(MenuCommand::Quit),
        _ => None,
    }
}

/// Returns `None` for blank or unrecognised input. Only the first two
/// characters are read as a square, so "2C please" selects 2C. Restart is
/// offered once a capture has been made.
pub fn parse_play_command(line: &str, can_restart: bool) -> Option<PlayCommand> {
    let trimmed = line.trim();
    match first_char(trimmed)? {
        'b' => return Some(PlayCommand::Back),
        'r' if can_restart => return Some(PlayCommand::Restart),
        _ => {}
    }

    let head: String = trimmed.chars().take(2).collect();
    head.parse::<Square>().ok().map(PlayCommand::Select)
}

/// Returns `None` unless the input is `b` or a number from 1 to `count`.
pub fn parse_move_choice(line: &str, count: usize) -> Option<MoveChoice> {
    let trimmed = line.trim();
    if first_char(trimmed)? == 'b' {
        return Some(MoveChoice::Back);
    }

    match trimmed.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(MoveChoice::Destination(n - 1)),
        _ => None,
    }
}

/// A puzzle level, never the tutorial.
pub fn random_level<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(1..LEVEL_COUNT)
}
