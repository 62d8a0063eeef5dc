//! Game state machine: turn order, pie-rule claim, undo, win determination

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Hex, Player};
use crate::connectivity::{self, Verdict};
use crate::error::GameError;

// ============================================================================
// CORE TYPES
// ============================================================================

/// A recorded move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// A stone placed by the mover of that turn
    Place(Hex),
    /// The second player claims the black stones instead of placing
    StayBlack,
}

/// Where the game stands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Stones are being placed
    InProgress,
    /// Exactly the opening stone is down; the claim window is open
    AwaitingChoice,
    /// The player connected the sides their color needs
    Won(Player),
    /// The player completed the opposing connection and lost
    Lost(Player),
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Lost(_))
    }

    /// The player who takes the game, if it is over
    pub fn winner(self) -> Option<Player> {
        match self {
            Phase::Won(p) => Some(p),
            Phase::Lost(p) => Some(p.opponent()),
            _ => None,
        }
    }
}

/// What a successful placement led to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Continued,
    /// The opening stone is down; the opponent may claim the black stones
    ChoiceRequired,
    Won(Player),
    Lost(Player),
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Full game state. `Clone` and `==` give cheap snapshots for undo checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
    to_move: Player,
    black_chosen: bool,
    phase: Phase,
}

impl Game {
    /// New game; Black opens, border cells are closed to the first stone
    pub fn new(size: u8) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(size)?,
            history: Vec::new(),
            to_move: Player::Black,
            black_chosen: false,
            phase: Phase::InProgress,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color of the stone at the coordinate; `None` when empty or off-board
    pub fn stone(&self, hex: Hex) -> Option<Player> {
        self.board.stone(hex)
    }

    pub fn current_mover(&self) -> Player {
        self.to_move
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whether the pie-rule claim has been made
    pub fn pie_rule_chosen(&self) -> bool {
        self.black_chosen
    }

    /// Cells a stone may go on right now; empty when the game is over
    pub fn legal_cells(&self) -> FxHashSet<Hex> {
        if self.phase.is_terminal() {
            return FxHashSet::default();
        }
        let opening = self.history.is_empty();
        self.board
            .hexes()
            .filter(|&h| self.board.stone(h).is_none())
            .filter(|&h| !opening || self.board.edge(h).is_none())
            .collect()
    }

    // ========================================================================
    // MOVE APPLICATION
    // ========================================================================

    /// Place a stone for the current mover
    pub fn place_stone(&mut self, hex: Hex) -> Result<MoveOutcome, GameError> {
        if self.phase.is_terminal() {
            return Err(GameError::GameAlreadyFinished);
        }
        if !self.board.contains(hex) {
            return Err(GameError::InvalidCoordinate { q: hex.q, r: hex.r });
        }
        if self.board.stone(hex).is_some() {
            return Err(GameError::CellOccupied { q: hex.q, r: hex.r });
        }
        if self.history.is_empty() && self.board.edge(hex).is_some() {
            return Err(GameError::OpeningOnEdge { q: hex.q, r: hex.r });
        }

        // all checks passed: board write and history append commit together
        let mover = self.to_move;
        self.board.place(hex, mover)?;
        self.history.push(Move::Place(hex));

        match connectivity::analyze(&self.board, hex) {
            Verdict::Win(p) => {
                self.phase = Phase::Won(p);
                Ok(MoveOutcome::Won(p))
            }
            Verdict::Loss(p) => {
                self.phase = Phase::Lost(p);
                Ok(MoveOutcome::Lost(p))
            }
            Verdict::NoWin => {
                if self.history.len() == 1 {
                    self.phase = Phase::AwaitingChoice;
                    Ok(MoveOutcome::ChoiceRequired)
                } else {
                    self.phase = Phase::InProgress;
                    // turns alternate only once the claim has been made
                    if self.black_chosen {
                        self.to_move = self.to_move.opponent();
                    }
                    Ok(MoveOutcome::Continued)
                }
            }
        }
    }

    /// The second player claims the black stones instead of placing.
    ///
    /// The opener stays Black and moves again; alternation starts after
    /// that stone.
    pub fn choose_stay_black(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::AwaitingChoice {
            return Err(GameError::IllegalPieRuleChoice);
        }
        self.black_chosen = true;
        self.phase = Phase::InProgress;
        self.history.push(Move::StayBlack);
        Ok(())
    }

    /// Take back the last move; `None` when there is nothing to undo.
    ///
    /// Undoing a terminating stone returns the game to active play.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        match mv {
            Move::StayBlack => {
                self.black_chosen = false;
                self.to_move = Player::Black;
                self.phase = Phase::AwaitingChoice;
            }
            Move::Place(hex) => {
                // a terminating placement never toggled the mover
                let ended = self.phase.is_terminal();
                self.board.remove(hex);
                if !ended && self.black_chosen {
                    self.to_move = self.to_move.opponent();
                }
                self.phase = if self.history.len() == 1 {
                    Phase::AwaitingChoice
                } else {
                    Phase::InProgress
                };
            }
        }
        Some(mv)
    }
}

// ============================================================================
// TESTS
// ============================================================================
