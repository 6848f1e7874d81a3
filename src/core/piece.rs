//! Pieces and cell contents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two movable pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    /// The piece that must reach the exit.
    Red,
    /// The obstructing piece. Moves vertically only.
    Yellow,
}

impl Piece {
    /// Lowercase name used in scripts and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Piece::Red => "red",
            Piece::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The piece in this cell, if any.
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Piece::Red),
            Cell::Yellow => Some(Piece::Yellow),
        }
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::Red => Cell::Red,
            Piece::Yellow => Cell::Yellow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_piece_roundtrip() {
        assert_eq!(Cell::from(Piece::Red).piece(), Some(Piece::Red));
        assert_eq!(Cell::from(Piece::Yellow).piece(), Some(Piece::Yellow));
        assert_eq!(Cell::default().piece(), None);
    }

    #[test]
    fn test_piece_names() {
        assert_eq!(Piece::Red.to_string(), "red");
        assert_eq!(Piece::Yellow.as_str(), "yellow");
    }
}
