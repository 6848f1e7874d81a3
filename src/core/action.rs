//! Move representation.
//!
//! A move is a piece plus a direction. The `from`/`to` squares are resolved
//! against the board the move was generated on, so a `Move` can be replayed
//! and audited without the board at hand.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::piece::Piece;
use super::position::{Direction, Position};

/// A single-piece, single-step move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The piece that moves.
    pub piece: Piece,

    /// Direction of the step.
    pub direction: Direction,

    /// Square the piece leaves.
    pub from: Position,

    /// Square the piece lands on.
    pub to: Position,
}

impl Move {
    /// Create a move from `from` one step in `direction`.
    #[must_use]
    pub const fn new(piece: Piece, direction: Direction, from: Position) -> Self {
        Self {
            piece,
            direction,
            from,
            to: from.step(direction),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.piece, self.direction)
    }
}
