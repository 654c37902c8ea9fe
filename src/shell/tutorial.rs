//! Scripted walkthrough of the tutorial level.

use crate::board::{Board, Capture, MoveError, Square};

/// Level the tutorial is played on.
pub const TUTORIAL_LEVEL: usize = 0;

/// One step of the script.
#[derive(Debug, Clone, Copy)]
pub struct Lesson {
    /// Start again from the tutorial layout before this step
    pub restart: bool,
    pub capture: Option<Capture>,
    pub caption: &'static str,
}

/// A board snapshot with its caption.
#[derive(Debug, Clone)]
pub struct Frame {
    pub board: Board,
    pub caption: &'static str,
}

const fn step(from: Square, to: Square, caption: &'static str) -> Lesson {
    Lesson {
        restart: false,
        capture: Some(Capture::new(from, to)),
        caption,
    }
}

pub static LESSONS: [Lesson; 7] = [
    Lesson {
        restart: true,
        capture: None,
        caption: "Every piece moves as it does in ordinary chess.\n\n\
                  In Solitaire Chess, however, EVERY MOVE MUST BE A CAPTURE.\n\n\
                  Win by leaving exactly one piece on the board.",
    },
    step(
        Square(3, 1),
        Square(2, 1),
        "*queen captures knight on 2A*\n\n\
         Up is forward on this board, so pawns only ever move up.",
    ),
    step(
        Square(3, 2),
        Square(4, 3),
        "*pawn captures rook on 4C*\n\n\
         NOTE: a pawn always moves diagonally, since it is always capturing.",
    ),
    Lesson {
        restart: true,
        capture: None,
        caption: "Any piece may make any legal capture, so the same piece\n\
                  may also move several times in a row.",
    },
    step(Square(3, 1), Square(2, 1), "*queen captures knight on 2A*"),
    step(Square(2, 1), Square(3, 2), "*queen captures pawn on 3B*"),
    step(Square(3, 2), Square(4, 3), "*queen captures rook on 4C*"),
];

/// Play the script over `start`, which should be the tutorial layout.
///
/// Every scripted capture goes through [`Board::try_capture`], so a layout the
/// script does not fit is reported rather than drawn wrongly.
pub fn frames(start: &Board) -> Result<Vec<Frame>, MoveError> {
    let mut board = start.clone();
    let mut frames = Vec::with_capacity(LESSONS.len());

    for lesson in &LESSONS {
        if lesson.restart {
            board = start.clone();
        }
        if let Some(capture) = lesson.capture {
            board.try_capture(capture)?;
        }
        frames.push(Frame {
            board: board.clone(),
            caption: lesson.caption,
        });
    }
    Ok(frames)
}
