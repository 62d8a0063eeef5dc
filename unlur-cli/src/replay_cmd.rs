//! Replay command - rebuild a saved game record

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use unlur_core::{Game, GameRecord, Move};

use crate::render;

#[derive(Args)]
pub struct ReplayArgs {
    /// Game record JSON file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the board after every move
    #[arg(long)]
    pub step: bool,
}

/// Load the record, re-apply the moves, show the position
pub fn run(args: ReplayArgs) -> Result<()> {
    let record = GameRecord::load(&args.file)
        .with_context(|| format!("Failed to load game record: {}", args.file.display()))?;

    tracing::info!(
        "Replaying {} moves on a size-{} board",
        record.moves.len(),
        record.size
    );

    let game = if args.step {
        replay_stepwise(&record)?
    } else {
        record.replay()?
    };

    print!("{}", render::board_text(&game));
    println!("{}", render::phase_text(game.phase()));
    Ok(())
}

/// Re-apply the moves one at a time, printing each position
fn replay_stepwise(record: &GameRecord) -> Result<Game> {
    let mut game = Game::new(record.size)?;
    for (i, &mv) in record.moves.iter().enumerate() {
        match mv {
            Move::Place(hex) => {
                game.place_stone(hex)?;
                let color = game.stone(hex).map(render::name).unwrap_or("?");
                println!("move {}: {} at ({}, {})", i + 1, color, hex.q, hex.r);
            }
            Move::StayBlack => println!("move {}: black stones claimed", i + 1),
        }
        print!("{}", render::board_text(&game));
        println!();
    }
    Ok(game)
}
