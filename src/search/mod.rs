//! Adversarial search for the escape puzzle.
//!
//! ## Overview
//!
//! Minimax with alpha-beta pruning, driven by the `TurnPhase` machine so
//! that red's double move and yellow's single reply are modelled directly.
//! Scores are always from red's point of view.
//!
//! ## Usage
//!
//! ```rust
//! use escape_puzzle::core::Board;
//! use escape_puzzle::rules::TurnPhase;
//! use escape_puzzle::search::{AlphaBeta, SearchConfig};
//!
//! let mut searcher = AlphaBeta::new(SearchConfig::default());
//! let result = searcher.choose(&Board::new(), TurnPhase::RedFirstMove);
//!
//! if let Some(mv) = result.best_move {
//!     println!("{mv} (score {})", result.score);
//! }
//! ```

pub mod alphabeta;
pub mod config;
pub mod stats;

pub use alphabeta::{search, AlphaBeta, SearchResult};
pub use config::SearchConfig;
pub use stats::SearchStats;
