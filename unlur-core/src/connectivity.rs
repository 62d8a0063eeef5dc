//! Win and loss detection by flood-fill connectivity
//!
//! A just-placed stone wins when its connected group touches the sides its
//! color needs, and loses when the group completes the opposing color's
//! connection instead.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Edge, Hex, Player};

/// Outcome of the connectivity check, relative to the placed stone's color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    NoWin,
    Win(Player),
    Loss(Player),
}

/// Which sides a group touches, with corners counting for both their sides
#[derive(Clone, Copy, Debug, Default)]
struct SideTouches {
    top: bool,
    bottom: bool,
    top_left: bool,
    top_right: bool,
    bottom_left: bool,
    bottom_right: bool,
}

impl SideTouches {
    /// Record the sides touched by one visited cell.
    ///
    /// A corner cell classifies as the first of its two sides; the second
    /// side is restored here from the corner coordinate.
    fn mark(&mut self, board: &Board, hex: Hex) {
        let n = board.size() as i8 - 1;
        match board.edge(hex) {
            Some(Edge::Bottom) => {
                self.bottom = true;
                if hex.q == 0 {
                    self.bottom_right = true;
                } else if hex.q == -n {
                    self.bottom_left = true;
                }
            }
            Some(Edge::Top) => {
                self.top = true;
                if hex.q == 0 {
                    self.top_left = true;
                } else if hex.q == n {
                    self.top_right = true;
                }
            }
            Some(Edge::BottomLeft) => {
                self.bottom_left = true;
                if hex.r == 0 {
                    self.top_left = true;
                }
            }
            Some(Edge::TopRight) => {
                self.top_right = true;
                if hex.r == 0 {
                    self.bottom_right = true;
                }
            }
            Some(Edge::BottomRight) => self.bottom_right = true,
            Some(Edge::TopLeft) => self.top_left = true,
            None => {}
        }
    }

    /// Black connects three alternating sides
    fn black_connected(&self) -> bool {
        (self.top && self.bottom_left && self.bottom_right)
            || (self.bottom && self.top_left && self.top_right)
    }

    /// White connects two opposite sides
    fn white_connected(&self) -> bool {
        (self.top && self.bottom)
            || (self.top_left && self.bottom_right)
            || (self.top_right && self.bottom_left)
    }
}

/// Flood-fill the same-colored group of the stone at `origin` and judge it.
///
/// The traversal is an explicit stack with a visited array, so call depth
/// stays constant for any board size, and cells are visited in a fixed
/// direction order. Runs in O(cells).
pub fn analyze(board: &Board, origin: Hex) -> Verdict {
    let Some(mover) = board.stone(origin) else {
        return Verdict::NoWin;
    };

    let mut visited = vec![false; board.slot_count()];
    let mut stack = vec![origin];
    visited[board.index(origin)] = true;
    let mut touches = SideTouches::default();

    while let Some(hex) = stack.pop() {
        touches.mark(board, hex);
        for neighbor in board.neighbors(hex) {
            let idx = board.index(neighbor);
            if !visited[idx] && board.stone(neighbor) == Some(mover) {
                visited[idx] = true;
                stack.push(neighbor);
            }
        }
    }

    let (mine, theirs) = match mover {
        Player::Black => (touches.black_connected(), touches.white_connected()),
        Player::White => (touches.white_connected(), touches.black_connected()),
    };

    if mine {
        Verdict::Win(mover)
    } else if theirs {
        Verdict::Loss(mover)
    } else {
        Verdict::NoWin
    }
}
