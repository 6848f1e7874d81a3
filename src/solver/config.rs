//! Solver configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::search::SearchConfig;

/// How the solver picks moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Follow the known solution while it applies, then search.
    #[default]
    Scripted,
    /// Search every move.
    Search,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Scripted => "scripted",
            Strategy::Search => "search",
        })
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scripted" => Ok(Strategy::Scripted),
            "search" => Ok(Strategy::Search),
            other => Err(ConfigError::Validation(format!(
                "unknown strategy '{other}' (expected 'scripted' or 'search')"
            ))),
        }
    }
}

/// Solver configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Stop after this many applied moves (default: 20).
    pub max_moves: u32,

    /// Move selection strategy.
    pub strategy: Strategy,

    /// Search depths used whenever the solver searches.
    pub search: SearchConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_moves: 20,
            strategy: Strategy::default(),
            search: SearchConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Set the move limit.
    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = max_moves;
        self
    }

    /// Set the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the search depths.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_moves == 0 {
            return Err(ConfigError::Validation("max_moves must be > 0".into()));
        }
        self.search.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.max_moves, 20);
        assert_eq!(config.strategy, Strategy::Scripted);
        assert_eq!(config.search, SearchConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(SolverConfig::default().with_max_moves(0).validate().is_err());

        let shallow = SearchConfig::default().with_red_depth(0);
        assert!(SolverConfig::default().with_search(shallow).validate().is_err());
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("search".parse::<Strategy>(), Ok(Strategy::Search));
        assert_eq!(Strategy::Scripted.to_string().parse::<Strategy>(), Ok(Strategy::Scripted));
        assert!("random".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SolverConfig = serde_json::from_str(r#"{"max_moves": 8}"#).unwrap();
        assert_eq!(config.max_moves, 8);
        assert_eq!(config.strategy, Strategy::Scripted);
        assert_eq!(config.search.red_depth, 4);
    }
}
