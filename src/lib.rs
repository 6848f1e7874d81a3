//! # escape-puzzle
//!
//! A two-piece sliding puzzle on a fixed 3x3 board, with an adversarial
//! solver.
//!
//! ## Rules
//!
//! 1. **Goal**: the red piece must reach the exit at (0, 2).
//!
//! 2. **Turns**: red moves twice, then yellow moves once.
//!
//! 3. **Movement**: one orthogonal step onto an empty cell. Yellow may only
//!    move up or down. Red may not enter the exit while yellow holds it.
//!
//! ## Architecture
//!
//! - **Make/Unmake Search**: the searcher mutates a single `Copy` board in
//!   place and restores it on the way back up, so no branch ever sees a
//!   sibling's move.
//!
//! - **Explicit Turn Phases**: the red-red-yellow cycle is a `TurnPhase`
//!   state machine consumed by the search, not nested branching.
//!
//! - **Pure Core**: the library never prints or sleeps. The `escape` binary
//!   renders boards and paces output.
//!
//! ## Modules
//!
//! - `core`: positions, pieces, board, moves, game state
//! - `rules`: move generation, evaluation, turn phases
//! - `search`: minimax with alpha-beta pruning
//! - `solver`: turn sequencing, scripted line, search fallback
//! - `error`: error types

pub mod core;
pub mod error;
pub mod rules;
pub mod search;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Direction, GameState, Move, Piece, Position, Undo, EXIT};

pub use crate::error::{BoardError, ConfigError, MoveError};

pub use crate::rules::{evaluate, legal_moves, TurnPhase, LOSS_SCORE, WIN_SCORE};

pub use crate::search::{AlphaBeta, SearchConfig, SearchResult, SearchStats};

pub use crate::solver::{
    MoveSource, Outcome, SolveReport, Solver, SolverConfig, Strategy, TurnRecord, KNOWN_SOLUTION,
};
