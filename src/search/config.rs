//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::Piece;
use crate::error::ConfigError;

/// Search depth per side, in red/yellow exchanges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Depth used when choosing red's moves (default: 4).
    pub red_depth: u32,

    /// Depth used when choosing yellow's move (default: 3).
    pub yellow_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            red_depth: 4,
            yellow_depth: 3,
        }
    }
}

impl SearchConfig {
    /// Set the depth for red's decisions.
    pub fn with_red_depth(mut self, depth: u32) -> Self {
        self.red_depth = depth;
        self
    }

    /// Set the depth for yellow's decisions.
    pub fn with_yellow_depth(mut self, depth: u32) -> Self {
        self.yellow_depth = depth;
        self
    }

    /// Depth used when `piece` is to move.
    #[must_use]
    pub fn depth_for(&self, piece: Piece) -> u32 {
        match piece {
            Piece::Red => self.red_depth,
            Piece::Yellow => self.yellow_depth,
        }
    }

    /// A depth of zero would never pick a move.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.red_depth == 0 {
            return Err(ConfigError::Validation("red_depth must be > 0".into()));
        }
        if self.yellow_depth == 0 {
            return Err(ConfigError::Validation("yellow_depth must be > 0".into()));
        }
        Ok(())
    }
}
