//! Selfplay command - seeded random games with aggregate statistics
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_random_game(), compute_statistics(), report_results()
//! - Level 3: formatting and RNG utilities

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use unlur_core::{Game, GameRecord, Hex, Phase, Player};

use crate::render;

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct SelfplayArgs {
    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Board size (cells per side)
    #[arg(long, default_value = "5")]
    pub size: u8,

    /// Random seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability that the second player claims the black stones
    #[arg(long, default_value = "0.5")]
    pub claim_rate: f64,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Save the last game as a JSON record
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRow {
    game_number: usize,
    phase: Phase,
    moves: usize,
    claimed: bool,
}

/// Aggregated selfplay results
#[derive(Clone, Debug)]
struct SelfplayResults {
    games: Vec<GameRow>,
    black_wins: usize,
    white_wins: usize,
    unfinished: usize,
    avg_moves: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Play the games, aggregate, report, optionally save the last record
pub fn run(args: SelfplayArgs) -> Result<()> {
    ensure!(
        (0.0..=1.0).contains(&args.claim_rate),
        "claim-rate must be within 0.0..=1.0"
    );

    let mut rng = create_rng(args.seed);
    let mut games = Vec::with_capacity(args.games);
    let mut last_record = None;

    for game_number in 1..=args.games {
        let (row, record) = play_random_game(game_number, &args, &mut rng)?;
        tracing::info!(
            "Game {}: {} in {} moves{}",
            row.game_number,
            render::phase_text(row.phase),
            row.moves,
            if row.claimed { " (claimed)" } else { "" }
        );
        games.push(row);
        last_record = Some(record);
    }

    let results = compute_statistics(games);
    report_results(&results, args.json);

    if let (Some(path), Some(record)) = (&args.output, &last_record) {
        record
            .save(path)
            .with_context(|| format!("Failed to save game record: {}", path.display()))?;
        tracing::info!("Saved last game to {}", path.display());
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play one game with uniformly random legal placements
fn play_random_game(
    game_number: usize,
    args: &SelfplayArgs,
    rng: &mut ChaCha8Rng,
) -> Result<(GameRow, GameRecord)> {
    let mut game = Game::new(args.size)?;
    let mut claimed = false;

    while !game.phase().is_terminal() {
        if game.phase() == Phase::AwaitingChoice && rng.gen_bool(args.claim_rate) {
            game.choose_stay_black()?;
            claimed = true;
            continue;
        }
        let Some(hex) = pick_cell(&game, rng) else {
            break;
        };
        game.place_stone(hex)?;
    }

    let row = GameRow {
        game_number,
        phase: game.phase(),
        moves: game.history().len(),
        claimed,
    };
    Ok((row, GameRecord::from_game(&game)))
}

/// Aggregate game rows; a loss counts as a win for the other color
fn compute_statistics(games: Vec<GameRow>) -> SelfplayResults {
    let winner_count = |player: Player| {
        games
            .iter()
            .filter(|g| g.phase.winner() == Some(player))
            .count()
    };
    let black_wins = winner_count(Player::Black);
    let white_wins = winner_count(Player::White);
    let unfinished = games.len() - black_wins - white_wins;

    let total_moves: usize = games.iter().map(|g| g.moves).sum();
    let avg_moves = if games.is_empty() {
        0.0
    } else {
        total_moves as f32 / games.len() as f32
    };

    SelfplayResults {
        games,
        black_wins,
        white_wins,
        unfinished,
        avg_moves,
    }
}

fn report_results(results: &SelfplayResults, json: bool) {
    if json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

// ============================================================================
// LEVEL 3 - UTILITIES
// ============================================================================

/// Uniform choice over the legal cells, sorted for seed reproducibility
fn pick_cell(game: &Game, rng: &mut ChaCha8Rng) -> Option<Hex> {
    let mut cells: Vec<Hex> = game.legal_cells().into_iter().collect();
    if cells.is_empty() {
        return None;
    }
    cells.sort_by_key(|h| (h.r, h.q));
    Some(cells[rng.gen_range(0..cells.len())])
}

/// Create RNG from seed or entropy
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn print_json_results(results: &SelfplayResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        result: String,
        moves: usize,
        claimed: bool,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        black_wins: usize,
        white_wins: usize,
        unfinished: usize,
        avg_moves: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: results.games.len(),
        black_wins: results.black_wins,
        white_wins: results.white_wins,
        unfinished: results.unfinished,
        avg_moves: results.avg_moves,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                result: format!("{:?}", g.phase),
                moves: g.moves,
                claimed: g.claimed,
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

fn print_text_results(results: &SelfplayResults) {
    let total = results.games.len();

    println!("\n=== Selfplay Results ===");
    println!("Total games: {}", total);
    println!("Black wins:  {}", results.black_wins);
    println!("White wins:  {}", results.white_wins);
    println!("Unfinished:  {}", results.unfinished);
    println!("Avg moves:   {:.1}", results.avg_moves);

    println!("\nGame details:");
    for game in &results.games {
        println!(
            "  Game {}: {} in {} moves",
            game.game_number,
            render::phase_text(game.phase),
            game.moves
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(phase: Phase, moves: usize) -> GameRow {
        GameRow {
            game_number: 0,
            phase,
            moves,
            claimed: false,
        }
    }

    #[test]
    fn test_compute_statistics_empty() {
        let results = compute_statistics(vec![]);
        assert_eq!(results.black_wins, 0);
        assert_eq!(results.white_wins, 0);
        assert_eq!(results.unfinished, 0);
        assert_eq!(results.avg_moves, 0.0);
    }

    #[test]
    fn test_compute_statistics_counts_losses_for_the_other_color() {
        let games = vec![
            row(Phase::Won(Player::Black), 10),
            row(Phase::Lost(Player::Black), 20),
            row(Phase::Won(Player::White), 30),
            row(Phase::InProgress, 40),
        ];
        let results = compute_statistics(games);
        assert_eq!(results.black_wins, 1);
        assert_eq!(results.white_wins, 2);
        assert_eq!(results.unfinished, 1);
        assert_eq!(results.avg_moves, 25.0);
    }

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(Some(42));
        let mut rng2 = create_rng(Some(42));
        assert_eq!(rng1.gen::<u64>(), rng2.gen::<u64>());
    }

    #[test]
    fn test_random_games_reproducible() {
        let args = SelfplayArgs {
            games: 1,
            size: 4,
            seed: Some(7),
            claim_rate: 0.5,
            json: false,
            output: None,
        };
        let mut rng1 = create_rng(args.seed);
        let mut rng2 = create_rng(args.seed);
        let (row1, rec1) = play_random_game(1, &args, &mut rng1).unwrap();
        let (row2, rec2) = play_random_game(1, &args, &mut rng2).unwrap();
        assert_eq!(rec1, rec2);
        assert_eq!(row1.moves, row2.moves);
    }
}
