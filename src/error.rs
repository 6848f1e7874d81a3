//! Error types.
//!
//! None of these are fatal: a rejected move leaves the state untouched and
//! the caller decides whether to try something else.

use crate::core::{Piece, Position};

/// Why a move request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("unknown direction '{0}' (expected up, down, left or right)")]
    UnknownDirection(String),

    #[error("destination {to} is off the board")]
    OutOfBounds { to: Position },

    #[error("red cannot enter the exit while yellow holds it")]
    ExitBlocked,

    #[error("destination {to} is occupied by {occupant}")]
    Occupied { to: Position, occupant: Piece },

    #[error("no piece at {from} to move")]
    EmptyOrigin { from: Position },
}

/// Why a board layout could not be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("{piece} position {position} is off the board")]
    OutOfBounds { piece: Piece, position: Position },

    #[error("red and yellow cannot share {0}")]
    Overlap(Position),
}

/// Invalid search or solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
