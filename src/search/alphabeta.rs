//! Minimax with alpha-beta pruning over the red-red-yellow turn cycle.
//!
//! The search walks the `TurnPhase` machine instead of alternating sides
//! every ply. Red's two moves are consecutive maximizing nodes; a red move
//! that lands on the exit ends the branch at once with `WIN_SCORE`. A side
//! other than red's opening move that cannot act forfeits its turn, the
//! same rule the solver plays by.
//!
//! The board is searched in place with make/unmake, so no node ever sees a
//! sibling's speculative move.

use std::time::Instant;

use log::debug;

use crate::core::{Board, Move};
use crate::rules::{evaluate, legal_moves, TurnPhase, LOSS_SCORE, WIN_SCORE};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Score and chosen move of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Score from red's point of view.
    pub score: i32,

    /// Best move for the side to act, `None` at terminal or depth-0 nodes.
    pub best_move: Option<Move>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self { score, best_move: None }
    }
}

/// Alpha-beta searcher.
///
/// Owns its configuration and the statistics of the last search.
#[derive(Clone, Debug, Default)]
pub struct AlphaBeta {
    config: SearchConfig,
    stats: SearchStats,
}

impl AlphaBeta {
    /// Create a searcher with the given depths.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent `best_move` call.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick a move for the side acting in `phase`, at that side's configured depth.
    pub fn choose(&mut self, board: &Board, phase: TurnPhase) -> SearchResult {
        let depth = self.config.depth_for(phase.mover());
        self.best_move(board, phase, depth)
    }

    /// Like [`choose`](Self::choose), but red takes the shallowest forced win.
    ///
    /// Every win scores a flat `WIN_SCORE`, so a deep search cannot tell a
    /// one-round escape from a five-round one. Red deepens one exchange at a
    /// time and stops at the first depth that wins; yellow searches at its
    /// full depth.
    pub fn choose_fastest(&mut self, board: &Board, phase: TurnPhase) -> SearchResult {
        let depth = self.config.depth_for(phase.mover());

        if phase.is_maximizing() {
            for shallow in 1..depth {
                let result = self.best_move(board, phase, shallow);
                if result.score == WIN_SCORE && result.best_move.is_some() {
                    debug!("forced win found at depth {shallow}");
                    return result;
                }
            }
        }

        self.best_move(board, phase, depth)
    }

    /// Full-window search from `board` at the given depth.
    ///
    /// Works on a private copy; `board` is never modified.
    pub fn best_move(&mut self, board: &Board, phase: TurnPhase, depth: u32) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();

        let mut scratch = *board;
        let result = self.search(&mut scratch, depth, phase, i32::MIN, i32::MAX);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "search {phase} depth {depth}: score {} move {:?} ({} nodes, {} cutoffs, {:.0} nodes/s)",
            result.score,
            result.best_move.map(|mv| mv.to_string()),
            self.stats.nodes,
            self.stats.cutoffs,
            self.stats.nodes_per_second(),
        );

        result
    }

    /// Search `board` with the window `[alpha, beta]`.
    ///
    /// `board` is restored before returning.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u32,
        phase: TurnPhase,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if board.is_won() {
            return SearchResult::leaf(WIN_SCORE);
        }
        if depth == 0 {
            self.stats.evaluations += 1;
            return SearchResult::leaf(evaluate(board));
        }

        let moves = legal_moves(board, phase.mover());
        if moves.is_empty() {
            return match phase {
                TurnPhase::RedFirstMove => SearchResult::leaf(LOSS_SCORE),
                // The side forfeits its turn and the next phase plays on.
                TurnPhase::RedSecondMove | TurnPhase::YellowMove => {
                    let reply = self.search(board, phase.child_depth(depth), phase.next(), alpha, beta);
                    SearchResult::leaf(reply.score)
                }
            };
        }

        let maximizing = phase.is_maximizing();
        let mut best = SearchResult::leaf(if maximizing { i32::MIN } else { i32::MAX });

        for mv in moves {
            let Ok(undo) = board.play(mv) else {
                continue;
            };

            if maximizing && board.is_won() {
                board.unmake_move(undo);
                return SearchResult { score: WIN_SCORE, best_move: Some(mv) };
            }

            let score = self
                .search(board, phase.child_depth(depth), phase.next(), alpha, beta)
                .score;
            board.unmake_move(undo);

            if maximizing {
                if score > best.score {
                    best = SearchResult { score, best_move: Some(mv) };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult { score, best_move: Some(mv) };
                }
                beta = beta.min(best.score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// One-shot search from the side given by `maximizing`.
///
/// `maximizing == true` starts a red double move, `false` a yellow move.
/// Returns `(score, chosen move)`.
pub fn search(board: &Board, depth: u32, maximizing: bool, alpha: i32, beta: i32) -> (i32, Option<Move>) {
    let mut scratch = *board;
    let mut searcher = AlphaBeta::default();
    let result = searcher.search(&mut scratch, depth, TurnPhase::entry(maximizing), alpha, beta);
    (result.score, result.best_move)
}
