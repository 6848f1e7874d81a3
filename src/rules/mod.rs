//! Puzzle rules layered on top of the board.
//!
//! - `movegen`: which moves each piece may make
//! - `eval`: static evaluation for red
//! - `phase`: the red-red-yellow turn cycle

pub mod movegen;
pub mod eval;
pub mod phase;

pub use eval::{blocking_penalty, evaluate, LOSS_SCORE, WIN_SCORE};
pub use movegen::{allowed_directions, has_legal_move, legal_moves, MoveList};
pub use phase::TurnPhase;
