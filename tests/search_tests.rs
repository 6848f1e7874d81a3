//! Alpha-beta search integration tests.

use escape_puzzle::core::{Board, Direction, Piece, Position};
use escape_puzzle::rules::{evaluate, legal_moves, TurnPhase, LOSS_SCORE, WIN_SCORE};
use escape_puzzle::search::{search, AlphaBeta, SearchConfig};

fn board(red: (i8, i8), yellow: (i8, i8)) -> Board {
    Board::from_positions(red.into(), yellow.into()).unwrap()
}

fn all_boards() -> impl Iterator<Item = Board> {
    Position::all().flat_map(|red| {
        Position::all()
            .filter(move |&yellow| yellow != red)
            .map(move |yellow| Board::from_positions(red, yellow).unwrap())
    })
}

const PHASES: [TurnPhase; 3] = [
    TurnPhase::RedFirstMove,
    TurnPhase::RedSecondMove,
    TurnPhase::YellowMove,
];

/// Plain minimax over the same turn cycle, no pruning.
fn minimax(board: &Board, depth: u32, phase: TurnPhase) -> i32 {
    if board.is_won() {
        return WIN_SCORE;
    }
    if depth == 0 {
        return evaluate(board);
    }

    let moves = legal_moves(board, phase.mover());
    if moves.is_empty() {
        return match phase {
            TurnPhase::RedFirstMove => LOSS_SCORE,
            TurnPhase::RedSecondMove | TurnPhase::YellowMove => {
                minimax(board, phase.child_depth(depth), phase.next())
            }
        };
    }

    let scores = moves.iter().map(|&mv| {
        let mut child = *board;
        child.play(mv).unwrap();
        minimax(&child, phase.child_depth(depth), phase.next())
    });

    if phase.is_maximizing() {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}

// =============================================================================
// Contract
// =============================================================================

#[test]
fn test_depth_zero_matches_evaluator_everywhere() {
    for b in all_boards() {
        for maximizing in [true, false] {
            let (score, mv) = search(&b, 0, maximizing, i32::MIN, i32::MAX);
            assert_eq!(score, evaluate(&b));
            assert!(mv.is_none());
        }
    }
}

#[test]
fn test_chosen_moves_are_legal() {
    for b in all_boards() {
        for phase in PHASES {
            for depth in 1..=4 {
                let mut searcher = AlphaBeta::default();
                let result = searcher.best_move(&b, phase, depth);

                if let Some(mv) = result.best_move {
                    assert_eq!(mv.piece, phase.mover());
                    assert_eq!(mv.from, b.position_of(mv.piece));
                    assert!(b.is_valid_move(mv.from, mv.to), "{b:?} {phase:?} {mv:?}");
                }
            }
        }
    }
}

#[test]
fn test_pruning_preserves_minimax_value() {
    for b in all_boards() {
        for phase in PHASES {
            for depth in 0..=4 {
                let mut searcher = AlphaBeta::default();
                let result = searcher.best_move(&b, phase, depth);
                assert_eq!(result.score, minimax(&b, depth, phase), "{b:?} {phase:?} depth {depth}");
            }
        }
    }
}

#[test]
fn test_red_always_has_a_move() {
    // Two pieces on nine cells never box red in, so the loss score is
    // only reachable through the evaluator's guard.
    for b in all_boards() {
        assert!(!legal_moves(&b, Piece::Red).is_empty());
        for depth in 0..=3 {
            let (score, _) = search(&b, depth, true, i32::MIN, i32::MAX);
            assert_ne!(score, LOSS_SCORE);
        }
    }
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn test_initial_position_is_a_forced_win() {
    let mut searcher = AlphaBeta::new(SearchConfig::default());
    let result = searcher.choose(&Board::new(), TurnPhase::RedFirstMove);

    assert_eq!(result.score, WIN_SCORE);
    let mv = result.best_move.unwrap();
    assert_eq!(mv.piece, Piece::Red);
    assert_eq!(mv.direction, Direction::Up);
}

#[test]
fn test_initial_position_shallow() {
    // One exchange deep the search cannot see the win yet.
    let (score, mv) = search(&Board::new(), 1, true, i32::MIN, i32::MAX);
    assert_eq!(score, 805);
    assert_eq!(mv.unwrap().to, Position::new(1, 0));
}

#[test]
fn test_yellow_returns_to_exit() {
    let mut searcher = AlphaBeta::new(SearchConfig::default());
    let result = searcher.choose(&board((1, 1), (1, 2)), TurnPhase::YellowMove);

    assert_eq!(result.score, 830);
    let mv = result.best_move.unwrap();
    assert_eq!(mv.direction, Direction::Up);
    assert_eq!(mv.to, Position::new(0, 2));
}

#[test]
fn test_boxed_in_yellow_is_not_a_win() {
    // Yellow on the exit with red directly below: yellow passes and red
    // plays on, so the score is whatever red's next round is worth.
    let b = board((1, 2), (0, 2));
    assert!(legal_moves(&b, Piece::Yellow).is_empty());

    for depth in 1..=3 {
        let (score, mv) = search(&b, depth, false, i32::MIN, i32::MAX);
        assert!(mv.is_none());
        assert_eq!(score, search(&b, depth - 1, true, i32::MIN, i32::MAX).0);
    }
    assert_ne!(search(&b, 1, false, i32::MIN, i32::MAX).0, WIN_SCORE);
}

#[test]
fn test_narrow_window_cuts_off() {
    let mut searcher = AlphaBeta::default();
    let mut b = Board::new();
    searcher.search(&mut b, 3, TurnPhase::RedFirstMove, 0, 1);

    assert!(searcher.stats().cutoffs > 0);
    assert_eq!(b, Board::new());
}
