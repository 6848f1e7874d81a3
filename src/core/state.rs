//! Authoritative game state.
//!
//! ## GameState
//!
//! The live game:
//! - Current board
//! - Move counter
//! - Snapshot history (initial board included)
//!
//! `GameState::apply_move` is the only mutator. Search never touches a
//! `GameState`; it works on a copy of the current `Board`.
//!
//! History uses an `im` persistent vector so cloning a game (for replay or
//! what-if analysis) is O(1).

use im::Vector;
use log::trace;
use serde::{Deserialize, Serialize};

use super::action::Move;
use super::board::Board;
use super::piece::Piece;
use super::position::{Direction, Position};
use crate::error::MoveError;

/// The live game: board, move count and append-only history.
///
/// `history.len() == move_count + 1` at all times.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    move_count: u32,
    history: Vector<Board>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Start a game from the canonical layout.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Start a game from an arbitrary board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let mut history = Vector::new();
        history.push_back(board);
        Self {
            board,
            move_count: 0,
            history,
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Every board seen so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Board> {
        &self.history
    }

    #[must_use]
    pub fn red_position(&self) -> Position {
        self.board.red()
    }

    #[must_use]
    pub fn yellow_position(&self) -> Position {
        self.board.yellow()
    }

    #[must_use]
    pub fn exit_position(&self) -> Position {
        self.board.exit()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    // === Mutation ===

    /// Move `piece` one step in `direction`.
    ///
    /// On success the move counter is incremented and a snapshot appended to
    /// history. On error nothing changes.
    pub fn apply_move(&mut self, piece: Piece, direction: Direction) -> Result<Move, MoveError> {
        let from = self.board.position_of(piece);
        if let Err(err) = self.board.make_move(piece, direction) {
            trace!("rejected {piece} {direction} from {from}: {err}");
            return Err(err);
        }

        self.move_count += 1;
        self.history.push_back(self.board);
        Ok(Move::new(piece, direction, from))
    }

    /// Apply a move given as a direction token (`"up"`, `"down"`, ...).
    pub fn apply_token(&mut self, piece: Piece, token: &str) -> Result<Move, MoveError> {
        let direction: Direction = token.parse()?;
        self.apply_move(piece, direction)
    }
}
