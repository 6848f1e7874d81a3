//! Turn structure.
//!
//! A round is two red moves followed by one yellow move:
//!
//! ```text
//! RedFirstMove -> RedSecondMove -> YellowMove -> RedFirstMove -> ...
//! ```
//!
//! Search depth is counted in red/yellow exchanges, not plies: leaving
//! `RedSecondMove` or `YellowMove` costs one unit of depth, leaving
//! `RedFirstMove` costs none.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Piece;

/// Where in the round the game is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    #[default]
    RedFirstMove,
    RedSecondMove,
    YellowMove,
}

impl TurnPhase {
    /// The phase that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            TurnPhase::RedFirstMove => TurnPhase::RedSecondMove,
            TurnPhase::RedSecondMove => TurnPhase::YellowMove,
            TurnPhase::YellowMove => TurnPhase::RedFirstMove,
        }
    }

    /// The piece that acts in this phase.
    #[must_use]
    pub const fn mover(self) -> Piece {
        match self {
            TurnPhase::RedFirstMove | TurnPhase::RedSecondMove => Piece::Red,
            TurnPhase::YellowMove => Piece::Yellow,
        }
    }

    /// Red maximizes, yellow minimizes.
    #[must_use]
    pub const fn is_maximizing(self) -> bool {
        matches!(self.mover(), Piece::Red)
    }

    /// Whether leaving this phase uses up one unit of search depth.
    #[must_use]
    pub const fn consumes_depth(self) -> bool {
        !matches!(self, TurnPhase::RedFirstMove)
    }

    /// Remaining depth after leaving this phase.
    #[must_use]
    pub const fn child_depth(self, depth: u32) -> u32 {
        if self.consumes_depth() {
            depth.saturating_sub(1)
        } else {
            depth
        }
    }

    /// Phase a side starts in when it is to act.
    #[must_use]
    pub const fn entry(maximizing: bool) -> Self {
        if maximizing {
            TurnPhase::RedFirstMove
        } else {
            TurnPhase::YellowMove
        }
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TurnPhase::RedFirstMove => "red (first move)",
            TurnPhase::RedSecondMove => "red (second move)",
            TurnPhase::YellowMove => "yellow",
        })
    }
}
