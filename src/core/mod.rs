//! Core puzzle types: positions, pieces, board, moves, game state.
//!
//! Everything here is independent of search. Rules that depend on whose
//! turn it is live in `rules`.

pub mod position;
pub mod piece;
pub mod action;
pub mod board;
pub mod state;

pub use position::{Direction, Position, COLS, ROWS};
pub use piece::{Cell, Piece};
pub use action::Move;
pub use board::{Board, Undo, EXIT, RED_START, YELLOW_START};
pub use state::GameState;
