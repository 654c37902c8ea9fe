//! Interactive text shell.
//!
//! Menu, piece selection and destination prompts over any line-oriented
//! input and output. `run_shell_loop` binds it to the terminal.

use std::io::{self, BufRead, Write};

use crate::board::{Board, Capture, Square};

pub mod command;
pub mod render;
pub mod tutorial;

use command::{MenuCommand, MoveChoice, PlayCommand};
use render::RULE;

/// Where control goes after a level or the tutorial ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Menu,
    Quit,
}

struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Next input line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let line = self.read_line()?;
        writeln!(self.output, "\n{RULE}\n")?;
        Ok(line)
    }

    fn retry(&mut self, reason: &str) -> io::Result<()> {
        log::warn!("rejected input: {reason}");
        writeln!(self.output, "{reason}\n")
    }

    fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{RULE}\n{:^71}\n{RULE}", "SOLITAIRE CHESS")?;
        writeln!(
            self.output,
            "Solitaire Chess is a one-player game with chess pieces and a 4x4 board.\n"
        )?;

        loop {
            write!(self.output, "{}", render::render_menu())?;
            let Some(line) = self.prompt(
                "\nEnter the number of the level you'd like to play,\n\
                 \"t\" for the tutorial, \"r\" for a random level or \"q\" to quit: ",
            )?
            else {
                return Ok(());
            };

            let flow = match command::parse_menu_command(&line) {
                Some(MenuCommand::Level(level)) => self.play_level(level)?,
                Some(MenuCommand::Random) => {
                    let level = command::random_level(&mut rand::thread_rng());
                    writeln!(self.output, "Random pick: level {level}.\n")?;
                    self.play_level(level)?
                }
                Some(MenuCommand::Tutorial) => self.tutorial()?,
                Some(MenuCommand::Quit) => Flow::Quit,
                None => {
                    self.retry("Please try again.")?;
                    Flow::Menu
                }
            };

            if flow == Flow::Quit {
                log::info!("leaving shell");
                return Ok(());
            }
        }
    }

    fn play_level(&mut self, level: usize) -> io::Result<Flow> {
        let start = match Board::for_level(level) {
            Ok(board) => board,
            Err(e) => {
                self.retry(&format!("{e}. Please try again."))?;
                return Ok(Flow::Menu);
            }
        };
        log::info!("starting level {level}");

        let mut board = start.clone();
        let mut moved = false;

        loop {
            write!(self.output, "{}", render::render_board(&board))?;
            if board.is_stuck() {
                log::info!("level {level} is stuck");
                writeln!(
                    self.output,
                    "\nNo captures left. Restart (\"r\") or go back to the menu (\"b\")."
                )?;
            }

            let text = if moved {
                "\nEnter the square of the piece to move (e.g. \"1A\"),\n\
                 \"b\" to go back to the main menu, or \"r\" to restart: "
            } else {
                "\nEnter the square of the piece to move (e.g. \"1A\"),\n\
                 or \"b\" to go back to the main menu: "
            };
            let Some(line) = self.prompt(text)? else {
                return Ok(Flow::Quit);
            };

            let from = match command::parse_play_command(&line, moved) {
                Some(PlayCommand::Select(sq)) => sq,
                Some(PlayCommand::Back) => return Ok(Flow::Menu),
                Some(PlayCommand::Restart) => {
                    log::info!("restarting level {level}");
                    board = start.clone();
                    moved = false;
                    continue;
                }
                None => {
                    self.retry("Please try again.")?;
                    continue;
                }
            };

            match self.choose_capture(&board, from)? {
                Choice::Capture(capture) => {
                    if let Err(e) = board.try_capture(capture) {
                        self.retry(&e.to_string())?;
                        continue;
                    }
                    moved = true;
                    if board.is_solved() {
                        log::info!("level {level} solved");
                        write!(self.output, "{}", render::render_board(&board))?;
                        writeln!(self.output, "\nCongratulations! You beat this level!\n")?;
                        return Ok(Flow::Menu);
                    }
                    let name = board.piece_at(capture.to).map_or("piece", |p| p.name());
                    writeln!(self.output, "You moved your {name} to {}.\n", capture.to)?;
                }
                Choice::Cancel => {}
                Choice::Eof => return Ok(Flow::Quit),
            }
        }
    }

    /// Validate the selected square and ask for a destination.
    fn choose_capture(&mut self, board: &Board, from: Square) -> io::Result<Choice> {
        if !board.spot_occupied(from) {
            self.retry("Please try again with an occupied square on the board.")?;
            return Ok(Choice::Cancel);
        }

        let targets = match board.moves_from(from) {
            Ok(targets) if !targets.is_empty() => targets,
            Ok(_) => {
                self.retry(
                    "Sorry, the piece you selected cannot capture anything.\n\
                     Every move must be a capture; please pick a different piece.",
                )?;
                return Ok(Choice::Cancel);
            }
            Err(e) => {
                self.retry(&e.to_string())?;
                return Ok(Choice::Cancel);
            }
        };
        let name = board.piece_at(from).map_or("piece", |p| p.name());
        writeln!(self.output, "You selected the {name} on {from}.\n")?;

        loop {
            write!(self.output, "{}", render::render_board(board))?;
            writeln!(self.output, "\nCapture options for your {name}:\n")?;
            write!(self.output, "{}", render::render_destinations(targets))?;
            let Some(line) = self.prompt(
                "\nEnter the number above the square to capture on,\n\
                 or \"b\" to pick a different piece: ",
            )?
            else {
                return Ok(Choice::Eof);
            };

            match command::parse_move_choice(&line, targets.len()) {
                Some(MoveChoice::Destination(n)) => {
                    if let Some(to) = targets.iter().nth(n) {
                        return Ok(Choice::Capture(Capture::new(from, to)));
                    }
                }
                Some(MoveChoice::Back) => return Ok(Choice::Cancel),
                None => {}
            }
            self.retry("Please try again.")?;
        }
    }

    fn tutorial(&mut self) -> io::Result<Flow> {
        let frames = match Board::for_level(tutorial::TUTORIAL_LEVEL) {
            Ok(start) => tutorial::frames(&start).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        let frames = match frames {
            Ok(frames) => frames,
            Err(e) => {
                log::error!("tutorial unavailable: {e}");
                writeln!(self.output, "The tutorial is unavailable: {e}\n")?;
                return Ok(Flow::Menu);
            }
        };

        for frame in frames {
            writeln!(self.output, "{RULE}\nEXAMPLE BOARD:")?;
            write!(self.output, "{}", render::render_board(&frame.board))?;
            writeln!(self.output, "\n{}\n", frame.caption)?;
            if self.prompt("Press [ENTER] to continue. ")?.is_none() {
                return Ok(Flow::Quit);
            }
        }
        writeln!(self.output, "{RULE}\n{:^71}\n{RULE}\n", "END OF TUTORIAL")?;
        Ok(Flow::Menu)
    }
}

/// Result of the destination prompt.
enum Choice {
    Capture(Capture),
    Cancel,
    Eof,
}

/// Run the shell until the player quits or the input ends.
pub fn run_shell<R: BufRead, W: Write>(input: R, output: W) -> io::Result<()> {
    Shell { input, output }.run()
}

/// Run the shell on stdin and stdout.
pub fn run_shell_loop() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_shell(stdin.lock(), stdout.lock()) {
        log::error!("shell stopped: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> String {
        let mut output = Vec::new();
        run_shell(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_quit_from_menu() {
        let out = session("q\n");
        assert!(out.contains("LEVEL SELECT"));
        assert!(!out.contains("Congratulations"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let out = session("");
        assert!(out.contains("SOLITAIRE CHESS"));
    }

    #[test]
    fn test_solve_level_one() {
        let out = session("1\n3D\n1\n3B\n1\n2B\n1\nq\n");
        assert!(out.contains("You selected the Knight on 3D."));
        assert!(out.contains("You moved your Knight to 2B."));
        assert!(out.contains("Congratulations! You beat this level!"));
    }

    #[test]
    fn test_unknown_level_reprompts() {
        let out = session("42\nq\n");
        assert!(out.contains("No level numbered 42"));
        assert_eq!(out.matches("LEVEL SELECT").count(), 2);
    }

    #[test]
    fn test_empty_square_rejected() {
        let out = session("0\n1A\nb\nq\n");
        assert!(out.contains("occupied square"));
    }

    #[test]
    fn test_piece_without_captures() {
        // The rook on 4C has nothing to take at the start of level 0.
        let out = session("0\n4C\nb\nq\n");
        assert!(out.contains("cannot capture anything"));
    }

    #[test]
    fn test_restart_only_after_a_move() {
        let out = session("0\nr\n3A\n2\nr\nb\nq\n");
        assert_eq!(out.matches("Please try again.").count(), 1);
        assert!(out.contains("You moved your Queen to 2A."));
    }

    #[test]
    fn test_stuck_hint() {
        // On level 1 the rook takes the far knight, then the other knight takes
        // the rook, leaving knight and bishop with nothing to capture.
        let out = session("1\n3B\n1\n2B\n1\nb\nq\n");
        assert!(out.contains("No captures left"));
    }

    #[test]
    fn test_tutorial_runs_to_the_end() {
        let out = session(&format!("t\n{}q\n", "\n".repeat(tutorial::LESSONS.len())));
        assert!(out.contains("END OF TUTORIAL"));
        assert_eq!(out.matches("EXAMPLE BOARD:").count(), tutorial::LESSONS.len());
    }
}
