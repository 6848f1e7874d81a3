//! The 3x3 board: grid contents plus tracked piece positions.
//!
//! `Board` is a small `Copy` value and the unit the search works on. Search
//! never clones per branch: it calls `make_move`, recurses, then
//! `unmake_move` with the returned `Undo`, which restores the board exactly.
//!
//! ## Invariants
//!
//! - Exactly one cell holds `Cell::Red` and exactly one holds `Cell::Yellow`.
//! - `grid[red] == Cell::Red` and `grid[yellow] == Cell::Yellow`.
//! - `red != yellow`.
//! - `exit` never changes after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::action::Move;
use super::piece::{Cell, Piece};
use super::position::{Direction, Position, COLS, ROWS};
use crate::error::{BoardError, MoveError};

/// The fixed exit cell.
pub const EXIT: Position = Position::new(0, 2);

/// Red's starting cell.
pub const RED_START: Position = Position::new(2, 0);

/// Yellow's starting cell.
pub const YELLOW_START: Position = Position::new(0, 2);

/// Information needed to undo a move made with [`Board::make_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Undo {
    pub piece: Piece,
    pub from: Position,
    pub to: Position,
}

/// Grid contents plus piece positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
    red: Position,
    yellow: Position,
    exit: Position,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The canonical starting layout: red at (2,0), yellow on the exit.
    #[must_use]
    pub fn new() -> Self {
        Self::place(RED_START, YELLOW_START)
    }

    /// Build a board with pieces at arbitrary distinct cells.
    pub fn from_positions(red: Position, yellow: Position) -> Result<Self, BoardError> {
        if !red.in_bounds() {
            return Err(BoardError::OutOfBounds { piece: Piece::Red, position: red });
        }
        if !yellow.in_bounds() {
            return Err(BoardError::OutOfBounds { piece: Piece::Yellow, position: yellow });
        }
        if red == yellow {
            return Err(BoardError::Overlap(red));
        }
        Ok(Self::place(red, yellow))
    }

    fn place(red: Position, yellow: Position) -> Self {
        let mut cells = [Cell::Empty; 9];
        cells[red.index()] = Cell::Red;
        cells[yellow.index()] = Cell::Yellow;
        Self { cells, red, yellow, exit: EXIT }
    }

    // === Queries ===

    /// Contents of a cell. Off-board positions read as empty.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        if pos.in_bounds() {
            self.cells[pos.index()]
        } else {
            Cell::Empty
        }
    }

    #[must_use]
    pub fn red(&self) -> Position {
        self.red
    }

    #[must_use]
    pub fn yellow(&self) -> Position {
        self.yellow
    }

    #[must_use]
    pub fn exit(&self) -> Position {
        self.exit
    }

    /// Current position of a piece.
    #[must_use]
    pub fn position_of(&self, piece: Piece) -> Position {
        match piece {
            Piece::Red => self.red,
            Piece::Yellow => self.yellow,
        }
    }

    /// Red has reached the exit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.red == self.exit
    }

    /// Check the grid agrees with the tracked positions.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let reds = self.cells.iter().filter(|&&c| c == Cell::Red).count();
        let yellows = self.cells.iter().filter(|&&c| c == Cell::Yellow).count();
        reds == 1
            && yellows == 1
            && self.red != self.yellow
            && self.cell(self.red) == Cell::Red
            && self.cell(self.yellow) == Cell::Yellow
    }

    // === Validation ===

    /// Check whether the piece on `from` may step to `to`.
    ///
    /// Rules, in order: `to` must be on the board; red may not enter the
    /// exit while yellow holds it; `to` must be empty.
    pub fn validate_move(&self, from: Position, to: Position) -> Result<(), MoveError> {
        if !to.in_bounds() {
            return Err(MoveError::OutOfBounds { to });
        }

        let piece = self.cell(from).piece().ok_or(MoveError::EmptyOrigin { from })?;

        if piece == Piece::Red && to == self.exit && self.cell(self.exit) == Cell::Yellow {
            return Err(MoveError::ExitBlocked);
        }

        if let Some(occupant) = self.cell(to).piece() {
            return Err(MoveError::Occupied { to, occupant });
        }

        Ok(())
    }

    /// Boolean form of [`validate_move`](Self::validate_move).
    #[must_use]
    pub fn is_valid_move(&self, from: Position, to: Position) -> bool {
        self.validate_move(from, to).is_ok()
    }

    // === Make / Unmake ===

    /// Move `piece` one step in `direction`.
    ///
    /// On error the board is unchanged.
    pub fn make_move(&mut self, piece: Piece, direction: Direction) -> Result<Undo, MoveError> {
        let from = self.position_of(piece);
        let to = from.step(direction);
        self.validate_move(from, to)?;
        self.relocate(piece, from, to);
        Ok(Undo { piece, from, to })
    }

    /// Play a move generated against this board.
    pub fn play(&mut self, mv: Move) -> Result<Undo, MoveError> {
        self.make_move(mv.piece, mv.direction)
    }

    /// Restore the board to its state before the move that produced `undo`.
    pub fn unmake_move(&mut self, undo: Undo) {
        self.relocate(undo.piece, undo.to, undo.from);
    }

    fn relocate(&mut self, piece: Piece, from: Position, to: Position) {
        self.cells[from.index()] = Cell::Empty;
        self.cells[to.index()] = Cell::from(piece);
        match piece {
            Piece::Red => self.red = to,
            Piece::Yellow => self.yellow = to,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2")?;
        writeln!(f, " ┌─────┐")?;
        for row in 0..ROWS {
            write!(f, "{row}│")?;
            for col in 0..COLS {
                let pos = Position::new(row, col);
                let glyph = match (pos == self.exit, self.cell(pos)) {
                    (true, Cell::Empty) => "🟩",
                    (true, Cell::Red) => "🏆",
                    (_, Cell::Empty) => "⬜",
                    (_, Cell::Red) => "🔴",
                    (_, Cell::Yellow) => "🟡",
                };
                f.write_str(glyph)?;
            }
            writeln!(f, "│")?;
        }
        write!(f, " └─────┘")
    }
}
