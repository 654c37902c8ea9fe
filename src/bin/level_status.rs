use std::env;
use std::process::ExitCode;

use solitaire_chess::board::Board;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(level_arg) = args.get(1) else {
        eprintln!("usage: level_status <level> <capture1> <capture2> ...");
        return ExitCode::FAILURE;
    };

    let level = match level_arg.parse::<usize>() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error: invalid level '{level_arg}': {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut board = match Board::for_level(level) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    for text in args.iter().skip(2) {
        let applied = match board.parse_capture(text) {
            Ok(capture) => board.try_capture(capture),
            Err(e) => Err(e),
        };
        if let Err(e) = applied {
            eprintln!("Error: capture '{text}': {e}");
            return ExitCode::FAILURE;
        }
    }

    let captures = board.all_captures();
    println!("level: {level}");
    println!("layout: {}", board.to_layout());
    println!("pieces: {}", board.piece_count());
    println!("status: {:?}", board.status());
    println!("captures: {}", captures.len());
    for capture in &captures {
        println!("{capture}");
    }
    ExitCode::SUCCESS
}
