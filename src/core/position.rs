//! Board coordinates and movement directions.
//!
//! ## Position
//!
//! A `(row, col)` pair on the 3x3 grid. Coordinates are signed so that a
//! step off the edge still produces a `Position` the validator can reject.
//!
//! ## Direction
//!
//! The four orthogonal steps. Each changes exactly one coordinate by one.
//! A direction may be flipped with `-` (`Neg`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use crate::error::MoveError;

/// Number of rows on the board.
pub const ROWS: i8 = 3;

/// Number of columns on the board.
pub const COLS: i8 = 3;

/// A cell coordinate, `(row, col)`, with row 0 at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    /// Create a new position. Does not check bounds.
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check if the position lies on the 3x3 board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < ROWS && self.col >= 0 && self.col < COLS
    }

    /// The position one step away in `direction`.
    ///
    /// The result may be off the board.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub const fn manhattan(self, other: Position) -> i32 {
        (self.row as i32 - other.row as i32).abs() + (self.col as i32 - other.col as i32).abs()
    }

    /// Flat index into a row-major 3x3 array.
    ///
    /// Only meaningful for in-bounds positions.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row * COLS + self.col) as usize
    }

    /// Iterate over every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i8, i8)> for Position {
    fn from((row, col): (i8, i8)) -> Self {
        Self::new(row, col)
    }
}

/// One orthogonal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order move generation tries them.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The vertical directions only.
    pub const VERTICAL: [Direction; 2] = [Direction::Up, Direction::Down];

    /// `(row, col)` offset of one step.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Lowercase token used in scripts and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(MoveError::UnknownDirection(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(Position::new(0, 0).in_bounds());
        assert!(Position::new(2, 2).in_bounds());
        assert!(!Position::new(-1, 0).in_bounds());
        assert!(!Position::new(0, 3).in_bounds());
    }

    #[test]
    fn test_step_and_negate() {
        let p = Position::new(1, 1);
        for dir in Direction::ALL {
            assert_ne!(p.step(dir), p);
            assert_eq!(p.step(dir).step(-dir), p);
        }
        assert_eq!(Position::new(0, 0).step(Direction::Up), Position::new(-1, 0));
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Position::new(2, 0).manhattan(Position::new(0, 2)), 4);
        assert_eq!(Position::new(1, 1).manhattan(Position::new(1, 1)), 0);
    }

    #[test]
    fn test_all_positions() {
        let cells: Vec<_> = Position::all().collect();
        assert_eq!(cells.len(), 9);
        for (i, p) in cells.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn test_direction_tokens() {
        for dir in Direction::ALL {
            assert_eq!(dir.as_str().parse::<Direction>().unwrap(), dir);
        }
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(MoveError::UnknownDirection("sideways".to_string()))
        );
    }
}
