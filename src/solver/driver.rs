//! Turn sequencing.
//!
//! The solver owns the authoritative `GameState` and is the only thing that
//! mutates it. Each turn it asks the script (while the script still applies)
//! or the searcher for one move, applies it, and advances the `TurnPhase`.
//! Rendering and pacing are left to the caller through `solve_with`.
//!
//! Red's second move and yellow's move are forfeited when that side has no
//! legal move; only red failing to open a round ends the game.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move, Piece};
use crate::error::ConfigError;
use crate::rules::{has_legal_move, TurnPhase};
use crate::search::AlphaBeta;

use super::config::{SolverConfig, Strategy};
use super::script::KNOWN_SOLUTION;

/// Where a move came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveSource {
    Script,
    Search,
}

/// One applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based move number.
    pub number: u32,

    /// Phase the move was played in.
    pub phase: TurnPhase,

    /// The move.
    pub mv: Move,

    pub source: MoveSource,

    /// Search score, when the move was searched.
    pub score: Option<i32>,

    /// Phase that acts next, after any forfeited turns.
    pub next_phase: TurnPhase,
}

/// How a solve ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Red reached the exit.
    Escaped,
    /// The move limit ran out first.
    MoveLimit,
    /// The given piece had to open a round and could not.
    Stuck(Piece),
}

impl Outcome {
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Escaped)
    }
}

/// Result of a solve.
#[derive(Clone, Debug)]
pub struct SolveReport {
    pub outcome: Outcome,

    /// Moves applied, in order.
    pub turns: Vec<TurnRecord>,

    /// Game state at the end.
    pub state: GameState,
}

impl SolveReport {
    /// Total moves in the final game state.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.state.move_count()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

/// Drives a game to completion.
pub struct Solver {
    config: SolverConfig,
    searcher: AlphaBeta,
    state: GameState,
    phase: TurnPhase,
    /// Next script entry, `None` once the script has been abandoned.
    script_cursor: Option<usize>,
}

impl Solver {
    /// Solver for a fresh game from the canonical layout.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        Self::from_state(config, GameState::new())
    }

    /// Solver for an existing game, starting with red's first move.
    pub fn from_state(config: SolverConfig, state: GameState) -> Result<Self, ConfigError> {
        config.validate()?;

        let script_cursor = match config.strategy {
            Strategy::Scripted => Some(0),
            Strategy::Search => None,
        };

        Ok(Self {
            searcher: AlphaBeta::new(config.search.clone()),
            config,
            state,
            phase: TurnPhase::RedFirstMove,
            script_cursor,
        })
    }

    /// Start in a different phase of the round.
    pub fn with_phase(mut self, phase: TurnPhase) -> Self {
        self.phase = phase;
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Phase of the side to act next.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Play until red escapes, the move limit is hit, or red is stuck.
    pub fn solve(self) -> SolveReport {
        self.solve_with(|_, _| {})
    }

    /// Like [`solve`](Self::solve), calling `observer` after every applied move.
    pub fn solve_with(mut self, mut observer: impl FnMut(&GameState, &TurnRecord)) -> SolveReport {
        info!(
            "solving with {} strategy (limit {} moves)",
            self.config.strategy, self.config.max_moves
        );

        let mut turns = Vec::new();
        let outcome = loop {
            match self.step() {
                Ok(record) => {
                    observer(&self.state, &record);
                    turns.push(record);
                }
                Err(outcome) => break outcome,
            }
        };

        match outcome {
            Outcome::Escaped => info!("red escaped after {} moves", self.state.move_count()),
            Outcome::MoveLimit => warn!("move limit of {} reached", self.config.max_moves),
            Outcome::Stuck(piece) => warn!("{piece} has no legal move; stopping"),
        }

        SolveReport {
            outcome,
            turns,
            state: self.state,
        }
    }

    /// Play one move.
    ///
    /// `Err(outcome)` once the game is over.
    fn step(&mut self) -> Result<TurnRecord, Outcome> {
        if self.state.is_won() {
            return Err(Outcome::Escaped);
        }
        if self.state.move_count() >= self.config.max_moves {
            return Err(Outcome::MoveLimit);
        }

        self.skip_forfeited();
        let piece = self.phase.mover();
        if !has_legal_move(self.state.board(), piece) {
            return Err(Outcome::Stuck(piece));
        }

        let (mv, source, score) = match self.next_scripted() {
            Some(mv) => (mv, MoveSource::Script, None),
            None => {
                let result = self.searcher.choose_fastest(self.state.board(), self.phase);
                let Some(mv) = result.best_move else {
                    return Err(Outcome::Stuck(piece));
                };
                (mv, MoveSource::Search, Some(result.score))
            }
        };

        if let Err(err) = self.state.apply_move(mv.piece, mv.direction) {
            warn!("chosen move {mv} was rejected: {err}");
            return Err(Outcome::Stuck(piece));
        }

        let phase = self.phase;
        self.phase = phase.next();
        self.skip_forfeited();

        Ok(TurnRecord {
            number: self.state.move_count(),
            phase,
            mv,
            source,
            score,
            next_phase: self.phase,
        })
    }

    /// Pass over red's second move and yellow's move while that side cannot act.
    fn skip_forfeited(&mut self) {
        let board = self.state.board();
        while !board.is_won()
            && self.phase != TurnPhase::RedFirstMove
            && !has_legal_move(board, self.phase.mover())
        {
            debug!("{} has no legal move; turn forfeited", self.phase);
            self.phase = self.phase.next();
        }
    }

    /// Next script move if it is the acting side's and still legal.
    ///
    /// Abandons the script for the rest of the game the first time it does
    /// not apply.
    fn next_scripted(&mut self) -> Option<Move> {
        let cursor = self.script_cursor?;
        let board = self.state.board();

        let applicable = KNOWN_SOLUTION.get(cursor).and_then(|&(piece, direction)| {
            let mv = Move::new(piece, direction, board.position_of(piece));
            (piece == self.phase.mover() && board.is_valid_move(mv.from, mv.to)).then_some(mv)
        });

        match applicable {
            Some(mv) => {
                self.script_cursor = Some(cursor + 1);
                Some(mv)
            }
            None => {
                info!("script step {} does not apply; switching to search", cursor + 1);
                self.script_cursor = None;
                None
            }
        }
    }
}
