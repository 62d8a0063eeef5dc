//! Saved games: board size plus move history, replayable to the exact state

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::game::{Game, Move};

/// Persistence surface for a game; everything else is derived by replay
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub size: u8,
    pub moves: Vec<Move>,
}

impl GameRecord {
    pub fn from_game(game: &Game) -> Self {
        Self {
            size: game.size(),
            moves: game.history().to_vec(),
        }
    }

    /// Rebuild the game by re-applying every move through the engine.
    ///
    /// A record encoding an illegal sequence surfaces the engine error.
    pub fn replay(&self) -> Result<Game, GameError> {
        let mut game = Game::new(self.size)?;
        for &mv in &self.moves {
            match mv {
                Move::Place(hex) => {
                    game.place_stone(hex)?;
                }
                Move::StayBlack => game.choose_stay_black()?,
            }
        }
        Ok(game)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let record = serde_json::from_str(&content)?;
        Ok(record)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
