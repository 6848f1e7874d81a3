//! Property tests over random layouts and move sequences.

use proptest::prelude::*;

use escape_puzzle::core::{Board, Direction, GameState, Piece, Position};
use escape_puzzle::rules::{evaluate, legal_moves, TurnPhase, LOSS_SCORE};
use escape_puzzle::search::{search, AlphaBeta};

fn position() -> impl Strategy<Value = Position> {
    (0i8..3, 0i8..3).prop_map(|(row, col)| Position::new(row, col))
}

fn board() -> impl Strategy<Value = Board> {
    (position(), position())
        .prop_filter("pieces must not overlap", |(red, yellow)| red != yellow)
        .prop_map(|(red, yellow)| Board::from_positions(red, yellow).unwrap())
}

fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![Just(Piece::Red), Just(Piece::Yellow)]
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn phase() -> impl Strategy<Value = TurnPhase> {
    prop_oneof![
        Just(TurnPhase::RedFirstMove),
        Just(TurnPhase::RedSecondMove),
        Just(TurnPhase::YellowMove),
    ]
}

proptest! {
    #[test]
    fn random_moves_keep_state_consistent(
        start in board(),
        moves in prop::collection::vec((piece(), direction()), 0..40),
    ) {
        let mut game = GameState::from_board(start);
        let exit = game.exit_position();

        for (piece, direction) in moves {
            let before = *game.board();
            let count = game.move_count();

            match game.apply_move(piece, direction) {
                Ok(mv) => {
                    prop_assert_eq!(game.move_count(), count + 1);
                    prop_assert_eq!(game.board().position_of(piece), mv.to);
                }
                Err(_) => {
                    prop_assert_eq!(*game.board(), before);
                    prop_assert_eq!(game.move_count(), count);
                }
            }

            prop_assert!(game.board().is_consistent());
            prop_assert_ne!(game.red_position(), game.yellow_position());
            prop_assert_eq!(game.exit_position(), exit);
            prop_assert_eq!(game.history().len() as u32, game.move_count() + 1);
        }
    }

    #[test]
    fn make_unmake_restores(b in board(), piece in piece(), direction in direction()) {
        let mut scratch = b;
        if let Ok(undo) = scratch.make_move(piece, direction) {
            prop_assert!(scratch.is_consistent());
            scratch.unmake_move(undo);
        }
        prop_assert_eq!(scratch, b);
    }

    #[test]
    fn depth_zero_is_evaluation(b in board(), maximizing in any::<bool>()) {
        prop_assert_eq!(search(&b, 0, maximizing, i32::MIN, i32::MAX), (evaluate(&b), None));
    }

    #[test]
    fn searched_move_replays(b in board(), phase in phase(), depth in 1u32..5) {
        let mut searcher = AlphaBeta::default();
        let result = searcher.best_move(&b, phase, depth);

        if let Some(mv) = result.best_move {
            let mut replay = GameState::from_board(b);
            prop_assert!(replay.apply_move(mv.piece, mv.direction).is_ok());
        }
    }

    #[test]
    fn red_without_moves_loses(b in board(), depth in 0u32..5) {
        if legal_moves(&b, Piece::Red).is_empty() && !b.is_won() {
            let (score, _) = search(&b, depth, true, i32::MIN, i32::MAX);
            prop_assert_eq!(score, LOSS_SCORE);
        }
    }
}
