//! Engine error values

use thiserror::Error;

/// Errors surfaced by the engine to a front end.
///
/// All variants are local and non-fatal: a failed call leaves the board and
/// the move history untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("board size must be between 2 and 64, got {size}")]
    InvalidSize { size: u8 },

    #[error("coordinate ({q}, {r}) is outside the board")]
    InvalidCoordinate { q: i8, r: i8 },

    #[error("cell ({q}, {r}) is already occupied")]
    CellOccupied { q: i8, r: i8 },

    #[error("the game is already finished")]
    GameAlreadyFinished,

    #[error("claiming the black stones is only possible right after the opening stone")]
    IllegalPieRuleChoice,

    #[error("the opening stone cannot go on a border cell ({q}, {r})")]
    OpeningOnEdge { q: i8, r: i8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::CellOccupied { q: 2, r: -1 };
        assert_eq!(err.to_string(), "cell (2, -1) is already occupied");

        let err = GameError::InvalidSize { size: 1 };
        assert_eq!(err.to_string(), "board size must be between 2 and 64, got 1");
    }
}
