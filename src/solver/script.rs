//! The known optimal line from the canonical start.

use crate::core::{Direction, Piece};

/// Five moves that free red from the starting layout:
/// red right, red up, yellow down, red up, red right.
pub const KNOWN_SOLUTION: [(Piece, Direction); 5] = [
    (Piece::Red, Direction::Right),   // (2,0) -> (2,1)
    (Piece::Red, Direction::Up),      // (2,1) -> (1,1)
    (Piece::Yellow, Direction::Down), // (0,2) -> (1,2)
    (Piece::Red, Direction::Up),      // (1,1) -> (0,1)
    (Piece::Red, Direction::Right),   // (0,1) -> (0,2)
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, Position};

    #[test]
    fn test_known_solution_escapes() {
        let mut state = GameState::new();

        for (piece, direction) in KNOWN_SOLUTION {
            assert!(state.apply_move(piece, direction).is_ok(), "{piece} {direction} failed");
        }

        assert!(state.is_won());
        assert_eq!(state.red_position(), Position::new(0, 2));
        assert_eq!(state.move_count(), 5);
    }
}
