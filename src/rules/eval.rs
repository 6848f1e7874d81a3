//! Static evaluation from red's point of view.
//!
//! Higher is better for red. Terminal boards score `WIN_SCORE` (red on the
//! exit) or `LOSS_SCORE` (red cannot move). Everything else is a hand-tuned
//! blend of distance to the exit, distance from yellow, forward progress and
//! a penalty when yellow sits on the exit or one of its two approaches.

use crate::core::{Board, Piece, Position};

use super::movegen::has_legal_move;

/// Score of a board where red stands on the exit.
pub const WIN_SCORE: i32 = 10_000;

/// Score of a board where red has no legal move.
pub const LOSS_SCORE: i32 = -10_000;

const BASE: i32 = 1000;
const EXIT_DISTANCE_WEIGHT: i32 = 100;
const SEPARATION_WEIGHT: i32 = 5;
const ROW_PROGRESS_WEIGHT: i32 = 15;
const COL_PROGRESS_WEIGHT: i32 = 10;
const EXIT_BLOCK_PENALTY: i32 = 50;
const APPROACH_BLOCK_PENALTY: i32 = 30;

/// Cells next to the exit that red must pass through.
const EXIT_APPROACHES: [Position; 2] = [Position::new(0, 1), Position::new(1, 2)];

/// Evaluate `board` for red.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    if board.is_won() {
        return WIN_SCORE;
    }
    if !has_legal_move(board, Piece::Red) {
        return LOSS_SCORE;
    }

    let red = board.red();
    let exit = board.exit();

    let to_exit = red.manhattan(exit);
    let separation = red.manhattan(board.yellow());
    let progress = (3 - red.row as i32) * ROW_PROGRESS_WEIGHT + red.col as i32 * COL_PROGRESS_WEIGHT;

    BASE - to_exit * EXIT_DISTANCE_WEIGHT + separation * SEPARATION_WEIGHT + progress
        - blocking_penalty(board)
}

/// Penalty for yellow sitting on the exit or one of its approaches.
#[must_use]
pub fn blocking_penalty(board: &Board) -> i32 {
    let yellow = board.yellow();
    if yellow == board.exit() {
        EXIT_BLOCK_PENALTY
    } else if EXIT_APPROACHES.contains(&yellow) {
        APPROACH_BLOCK_PENALTY
    } else {
        0
    }
}
