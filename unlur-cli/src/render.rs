//! Text rendering of a board position

use unlur_core::{Game, Hex, Phase, Player};

/// Render the position as sheared axial rows: `X` Black, `O` White, `.` empty
pub fn board_text(game: &Game) -> String {
    let n = game.size() as i8 - 1;
    let mut out = String::new();
    for r in -n..=n {
        // shear each row by |r| so on-screen adjacency matches the grid
        out.push_str(&" ".repeat(r.unsigned_abs() as usize));
        let lo = (-n).max(-n - r);
        let hi = n.min(n - r);
        for q in lo..=hi {
            let glyph = match game.stone(Hex::new(q, r)) {
                Some(Player::Black) => 'X',
                Some(Player::White) => 'O',
                None => '.',
            };
            out.push(glyph);
            if q < hi {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

/// One-line summary of where the game stands
pub fn phase_text(phase: Phase) -> String {
    match phase {
        Phase::InProgress => "game in progress".to_string(),
        Phase::AwaitingChoice => {
            "opening stone is down; the opponent may claim the black stones".to_string()
        }
        Phase::Won(p) => format!("{} wins by connection", name(p)),
        Phase::Lost(p) => format!(
            "{} completed the opposing connection; {} wins",
            name(p),
            name(p.opponent())
        ),
    }
}

pub fn name(player: Player) -> &'static str {
    match player {
        Player::Black => "Black",
        Player::White => "White",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_text_shape() {
        let game = Game::new(3).unwrap();
        let text = board_text(&game);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].trim(), ". . .");
        assert_eq!(rows[2].trim(), ". . . . .");
        assert_eq!(rows[4].trim(), ". . .");
    }

    #[test]
    fn test_board_text_shows_stones() {
        let mut game = Game::new(3).unwrap();
        game.place_stone(Hex::new(0, 0)).unwrap();
        game.choose_stay_black().unwrap();
        game.place_stone(Hex::new(1, 0)).unwrap();
        game.place_stone(Hex::new(-1, 0)).unwrap();
        let text = board_text(&game);
        let middle = text.lines().nth(2).unwrap();
        assert_eq!(middle, ". O X X .");
    }
}
