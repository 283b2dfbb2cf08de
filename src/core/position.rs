//! Grid geometry: positions and sliding directions.
//!
//! ## Coordinates
//!
//! A `Position` is a `(row, col)` pair. Rows grow downwards and columns grow
//! to the right, so `Direction::Up` decrements the row and
//! `Direction::Right` increments the column.
//!
//! Coordinates are signed so that stepping off the edge of the board yields
//! a representable (but out-of-bounds) position. Callers bounds-check with
//! `Board::in_bounds` before using a stepped position.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
///
/// ```
/// use abduct::core::{Direction, Position};
///
/// let p = Position::new(3, 8);
/// assert_eq!(p.step(Direction::Right), Position::new(3, 9));
/// assert_eq!(p.step(Direction::Up), Position::new(2, 8));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index (0 = top).
    pub row: i32,
    /// Column index (0 = left).
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The adjacent position one cell in `direction`.
    ///
    /// No wraparound: the result may lie outside the board.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// The eight surrounding positions (diagonals included), unfiltered.
    #[must_use]
    pub fn ring(self) -> [Position; 8] {
        RING_OFFSETS.map(|(dr, dc)| Position::new(self.row + dr, self.col + dc))
    }
}

/// Offsets of the 8-neighbourhood.
const RING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One of the four sliding directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in notation order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` delta of a single step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The notation token for this direction.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}
