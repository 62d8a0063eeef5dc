//! Integration tests for the Unlur engine
//!
//! Drives the full stack through the public API: complete games, records,
//! undo chains and random playouts.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use unlur_core::{Game, GameError, GameRecord, Hex, MoveOutcome, Phase, Player};

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Opening stone plus claim: Black keeps the stones, alternation follows
fn claimed_game(size: u8) -> Game {
    let mut game = Game::new(size).unwrap();
    game.place_stone(Hex::new(0, 0)).unwrap();
    game.choose_stay_black().unwrap();
    game
}

// ============================================================================
// FULL GAME TESTS
// ============================================================================

#[test]
fn test_full_alternating_game_to_white_win() {
    let mut game = claimed_game(3);
    let moves = [
        (-2, 1),  // Black
        (-1, -1), // White
        (-2, 2),  // Black
        (0, -1),  // White
        (2, -2),  // Black
        (1, -1),  // White
        (-1, 2),  // Black
        (1, 0),   // White
        (2, -1),  // Black
    ];
    for &(q, r) in &moves {
        assert_eq!(
            game.place_stone(Hex::new(q, r)).unwrap(),
            MoveOutcome::Continued
        );
    }
    assert_eq!(
        game.place_stone(Hex::new(1, 1)).unwrap(),
        MoveOutcome::Won(Player::White)
    );
    assert_eq!(game.phase(), Phase::Won(Player::White));
    assert_eq!(game.phase().winner(), Some(Player::White));
}

#[test]
fn test_contract_game_without_claim_stays_black() {
    let mut game = Game::new(4).unwrap();
    game.place_stone(Hex::new(0, 0)).unwrap();
    for &(q, r) in &[(1, 0), (2, 0), (-1, 0), (-2, 0)] {
        game.place_stone(Hex::new(q, r)).unwrap();
    }
    // nobody claimed, so every stone is Black and Black is still to move
    for &(q, r) in &[(0, 0), (1, 0), (2, 0), (-1, 0), (-2, 0)] {
        assert_eq!(game.stone(Hex::new(q, r)), Some(Player::Black));
    }
    assert_eq!(game.current_mover(), Player::Black);
    assert!(!game.pie_rule_chosen());
}

// ============================================================================
// RECORD TESTS
// ============================================================================

#[test]
fn test_record_round_trip_preserves_the_game() {
    let mut game = claimed_game(4);
    for &(q, r) in &[(1, 0), (-1, 0), (0, 1), (0, -1), (2, 0)] {
        game.place_stone(Hex::new(q, r)).unwrap();
    }
    let record = GameRecord::from_game(&game);
    let json = serde_json::to_string(&record).unwrap();
    let parsed: GameRecord = serde_json::from_str(&json).unwrap();
    let replayed = parsed.replay().unwrap();
    assert_eq!(replayed, game);
    assert_eq!(replayed.phase(), game.phase());
    assert_eq!(replayed.current_mover(), game.current_mover());
}

// ============================================================================
// UNDO TESTS
// ============================================================================

#[test]
fn test_deep_undo_unwinds_to_the_start() {
    let mut game = claimed_game(3);
    for &(q, r) in &[(1, 0), (-1, 0), (0, 1)] {
        game.place_stone(Hex::new(q, r)).unwrap();
    }
    while game.undo().is_some() {}
    assert_eq!(game, Game::new(3).unwrap());
}

#[test]
fn test_errors_leave_state_untouched() {
    let mut game = claimed_game(3);
    let snapshot = game.clone();
    assert_eq!(
        game.place_stone(Hex::new(9, 9)),
        Err(GameError::InvalidCoordinate { q: 9, r: 9 })
    );
    assert_eq!(
        game.place_stone(Hex::new(0, 0)),
        Err(GameError::CellOccupied { q: 0, r: 0 })
    );
    assert_eq!(
        game.choose_stay_black(),
        Err(GameError::IllegalPieRuleChoice)
    );
    assert_eq!(game, snapshot);
}

// ============================================================================
// RANDOM PLAYOUT TESTS
// ============================================================================

#[test]
fn test_random_playouts_always_resolve() {
    // every seeded random game either terminates or exhausts the board,
    // and replaying its record reproduces the final state exactly
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    for _ in 0..20 {
        let mut game = Game::new(4).unwrap();
        while !game.phase().is_terminal() {
            if game.phase() == Phase::AwaitingChoice && rng.gen_bool(0.5) {
                game.choose_stay_black().unwrap();
                continue;
            }
            let mut cells: Vec<Hex> = game.legal_cells().into_iter().collect();
            if cells.is_empty() {
                break;
            }
            cells.sort_by_key(|h| (h.r, h.q));
            let hex = cells[rng.gen_range(0..cells.len())];
            game.place_stone(hex).unwrap();
        }
        let replayed = GameRecord::from_game(&game).replay().unwrap();
        assert_eq!(replayed, game);
    }
}
