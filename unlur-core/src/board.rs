//! Hex board geometry and cell state with axial coordinates

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Smallest playable board: one interior cell plus the border ring
pub const MIN_SIZE: u8 = 2;
/// Largest supported board; keeps all axial arithmetic inside `i8`
pub const MAX_SIZE: u8 = 64;

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i8,
    pub r: i8,
}

impl Hex {
    pub const fn new(q: i8, r: i8) -> Self {
        Self { q, r }
    }
}

/// Direction vectors in axial coordinates (dq, dr)
pub const DIRECTIONS: [(i8, i8); 6] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
];

/// Stone color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// The six outer sides of the board.
///
/// Black wins by connecting {Top, BottomLeft, BottomRight} or
/// {Bottom, TopLeft, TopRight}; White by connecting any opposite pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Bottom,
    Top,
    BottomLeft,
    TopRight,
    BottomRight,
    TopLeft,
}

/// Cell grid for a hexagon with `size` cells per side.
///
/// Cells live in a (2N-1) x (2N-1) bounding box addressed by a computed
/// linear index; slots outside the hexagon are never read or written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u8,
    span: usize,
    cells: Vec<Option<Player>>,
}

impl Board {
    /// Create an empty board of the given size
    pub fn new(size: u8) -> Result<Self, GameError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(GameError::InvalidSize { size });
        }
        let span = 2 * size as usize - 1;
        Ok(Self {
            size,
            span,
            cells: vec![None; span * span],
        })
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Radius in cells (N - 1); the sides sit at coordinate +-radius
    fn radius(&self) -> i8 {
        self.size as i8 - 1
    }

    /// Number of valid cells: 3N^2 - 3N + 1
    pub fn cell_count(&self) -> usize {
        let n = self.size as usize;
        3 * n * n - 3 * n + 1
    }

    /// Check if the coordinate is a cell of this board
    pub fn contains(&self, hex: Hex) -> bool {
        // widened: i8::MIN in untrusted input would overflow abs()
        let n = i16::from(self.radius());
        let (q, r) = (i16::from(hex.q), i16::from(hex.r));
        q.abs() <= n && r.abs() <= n && (q + r).abs() <= n
    }

    /// Linear index into the bounding box; `hex` must be a cell of the board
    pub(crate) fn index(&self, hex: Hex) -> usize {
        let n = self.radius() as isize;
        let q = hex.q as isize + n;
        let r = hex.r as isize + n;
        (r * self.span as isize + q) as usize
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.cells.len()
    }

    /// Color of the stone at the coordinate; `None` when empty or off-board
    pub fn stone(&self, hex: Hex) -> Option<Player> {
        if !self.contains(hex) {
            return None;
        }
        self.cells[self.index(hex)]
    }

    /// Place a stone on an empty cell
    pub fn place(&mut self, hex: Hex, player: Player) -> Result<(), GameError> {
        if !self.contains(hex) {
            return Err(GameError::InvalidCoordinate { q: hex.q, r: hex.r });
        }
        let idx = self.index(hex);
        if self.cells[idx].is_some() {
            return Err(GameError::CellOccupied { q: hex.q, r: hex.r });
        }
        self.cells[idx] = Some(player);
        Ok(())
    }

    /// Clear a cell back to empty (the undo path)
    pub fn remove(&mut self, hex: Hex) {
        debug_assert!(self.contains(hex));
        let idx = self.index(hex);
        self.cells[idx] = None;
    }

    /// Valid neighbors of a cell in the six axial directions
    pub fn neighbors(&self, hex: Hex) -> impl Iterator<Item = Hex> + '_ {
        debug_assert!(self.contains(hex));
        DIRECTIONS
            .iter()
            .map(move |&(dq, dr)| Hex::new(hex.q + dq, hex.r + dr))
            .filter(|&h| self.contains(h))
    }

    /// Iterate all valid cell coordinates, top row to bottom row
    pub fn hexes(&self) -> impl Iterator<Item = Hex> + '_ {
        let n = self.radius();
        (-n..=n).flat_map(move |r| {
            let lo = (-n).max(-n - r);
            let hi = n.min(n - r);
            (lo..=hi).map(move |q| Hex::new(q, r))
        })
    }

    /// Which side the cell sits on, if any.
    ///
    /// Classification picks the FIRST matching side, so each of the six
    /// corner cells reports only one of its two sides; the connectivity
    /// flags restore the other. The corners are (0, N-1) Bottom+BottomRight,
    /// (-(N-1), N-1) Bottom+BottomLeft, (0, -(N-1)) Top+TopLeft,
    /// (N-1, -(N-1)) Top+TopRight, (-(N-1), 0) BottomLeft+TopLeft and
    /// (N-1, 0) TopRight+BottomRight.
    pub fn edge(&self, hex: Hex) -> Option<Edge> {
        let n = self.radius();
        if hex.r == n {
            Some(Edge::Bottom)
        } else if hex.r == -n {
            Some(Edge::Top)
        } else if hex.q == -n {
            Some(Edge::BottomLeft)
        } else if hex.q == n {
            Some(Edge::TopRight)
        } else if hex.q + hex.r == n {
            Some(Edge::BottomRight)
        } else if hex.q + hex.r == -n {
            Some(Edge::TopLeft)
        } else {
            None
        }
    }
}
