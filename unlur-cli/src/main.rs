//! Unlur CLI - terminal front end for the Unlur engine
//!
//! Commands:
//! - play: interactive two-player game in the terminal
//! - selfplay: seeded random games with aggregate statistics
//! - replay: rebuild a saved game record and show the result

use clap::{Parser, Subcommand};

mod play;
mod render;
mod replay_cmd;
mod selfplay;

#[derive(Parser)]
#[command(name = "unlur")]
#[command(about = "Unlur hexagonal connection game")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(play::PlayArgs),
    /// Play random games and report statistics
    Selfplay(selfplay::SelfplayArgs),
    /// Replay a saved game record
    Replay(replay_cmd::ReplayArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Selfplay(args) => selfplay::run(args),
        Commands::Replay(args) => replay_cmd::run(args),
    }
}
