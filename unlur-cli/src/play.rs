//! Play command - interactive two-player game in the terminal

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;

use unlur_core::{Game, GameError, Hex, MoveOutcome};

use crate::render;

#[derive(Args)]
pub struct PlayArgs {
    /// Board size (cells per side)
    #[arg(long, default_value = "5")]
    pub size: u8,
}

/// Run the interactive loop: read a command, drive the engine, redraw
pub fn run(args: PlayArgs) -> Result<()> {
    let mut game = Game::new(args.size)?;

    println!("Unlur on a size-{} board.", args.size);
    println!("Commands: `q r` places a stone, `stay` claims the black stones,");
    println!("`undo` takes back the last move, `quit` leaves.");
    println!("The opening stone must go on an interior cell.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", render::board_text(&game));
        println!("{}", render::phase_text(game.phase()));
        if game.phase().is_terminal() {
            print!("finished (undo/quit)> ");
        } else {
            print!("{} to move> ", render::name(game.current_mover()));
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Undo) => {
                if game.undo().is_none() {
                    println!("nothing to undo");
                }
            }
            Some(Command::Stay) => match game.choose_stay_black() {
                Ok(()) => println!("black stones claimed; Black moves again"),
                Err(err) => println!("{err}"),
            },
            Some(Command::Place(hex)) => match game.place_stone(hex) {
                Ok(outcome) => report_outcome(outcome),
                Err(err @ GameError::CellOccupied { .. }) => {
                    println!("{err}, pick another cell")
                }
                Err(err) => println!("{err}"),
            },
            None => println!("could not read that; try `q r`, `stay`, `undo` or `quit`"),
        }
        println!();
    }

    Ok(())
}

enum Command {
    Place(Hex),
    Stay,
    Undo,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        "stay" => return Some(Command::Stay),
        "undo" => return Some(Command::Undo),
        "quit" | "exit" => return Some(Command::Quit),
        _ => {}
    }
    let mut parts = line.split_whitespace();
    let q = parts.next()?.parse().ok()?;
    let r = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Place(Hex::new(q, r)))
}

fn report_outcome(outcome: MoveOutcome) {
    match outcome {
        MoveOutcome::Continued => {}
        MoveOutcome::ChoiceRequired => {
            println!("opening stone placed; `stay` claims the black stones")
        }
        MoveOutcome::Won(p) => println!("{} wins by connection", render::name(p)),
        MoveOutcome::Lost(p) => println!(
            "{} completed the opposing connection; {} wins",
            render::name(p),
            render::name(p.opponent())
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert!(matches!(parse_command("stay"), Some(Command::Stay)));
        assert!(matches!(parse_command(" undo "), Some(Command::Undo)));
        assert!(matches!(parse_command("quit"), Some(Command::Quit)));
        assert!(matches!(
            parse_command("2 -1"),
            Some(Command::Place(Hex { q: 2, r: -1 }))
        ));
        assert!(parse_command("2").is_none());
        assert!(parse_command("a b").is_none());
        assert!(parse_command("1 2 3").is_none());
        assert!(parse_command("").is_none());
    }
}
