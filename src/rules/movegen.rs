//! Move enumeration.
//!
//! Red may try all four directions; yellow is limited to up and down.
//! Candidates are generated in a fixed order (up, down, left, right) and
//! filtered through `Board::validate_move`, so the first-best tie-break in
//! search is stable.

use smallvec::SmallVec;

use crate::core::{Board, Direction, Move, Piece};

/// Legal moves for one piece. At most four, so never heap-allocated.
pub type MoveList = SmallVec<[Move; 4]>;

/// Directions a piece is allowed to try.
#[must_use]
pub fn allowed_directions(piece: Piece) -> &'static [Direction] {
    match piece {
        Piece::Red => &Direction::ALL,
        Piece::Yellow => &Direction::VERTICAL,
    }
}

/// All legal moves for `piece` on `board`.
#[must_use]
pub fn legal_moves(board: &Board, piece: Piece) -> MoveList {
    let from = board.position_of(piece);
    allowed_directions(piece)
        .iter()
        .map(|&direction| Move::new(piece, direction, from))
        .filter(|mv| board.is_valid_move(mv.from, mv.to))
        .collect()
}

/// Whether `piece` has at least one legal move.
#[must_use]
pub fn has_legal_move(board: &Board, piece: Piece) -> bool {
    let from = board.position_of(piece);
    allowed_directions(piece)
        .iter()
        .any(|&direction| board.is_valid_move(from, from.step(direction)))
}
