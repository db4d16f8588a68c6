//! Session state for the popup game, free of any DOM handles.

use popdoku_core::{check_win, Board, Generator, GivenMask, NewGame, Position, WinStatus};
use serde::{Deserialize, Serialize};

/// Serializable session record: the playable grid with the player's entries,
/// the solved reference grid, the clue mask, and the cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSession {
    pub puzzle: Board,
    pub solution: Board,
    pub given: GivenMask,
    pub cursor_row: usize,
    pub cursor_col: usize,
}

/// Live state of the popup game
pub struct Session {
    board: Board,
    given: GivenMask,
    solution: Board,
    cursor: Position,
    status: WinStatus,
}

impl Session {
    /// Start a fresh game
    pub fn new_game() -> Self {
        let mut generator = Generator::new();
        let NewGame {
            puzzle,
            given,
            solution,
        } = generator.new_game();

        Self {
            board: puzzle,
            given,
            solution,
            cursor: Position::new(0, 0),
            status: WinStatus::Incomplete,
        }
    }

    /// Route a key press. Returns `true` when the session changed and the
    /// shell should re-render and persist.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowUp" => self.move_cursor(-1, 0),
            "ArrowDown" => self.move_cursor(1, 0),
            "ArrowLeft" => self.move_cursor(0, -1),
            "ArrowRight" => self.move_cursor(0, 1),

            "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
                let digit = key.parse::<u8>().unwrap();
                self.enter_digit(digit)
            }

            "0" | "Delete" | "Backspace" => self.clear_cell(),

            _ => false,
        }
    }

    /// Clamped cursor movement; the core never clamps, the popup may
    fn move_cursor(&mut self, row_delta: i32, col_delta: i32) -> bool {
        let row = (self.cursor.row as i32 + row_delta).clamp(0, 8) as usize;
        let col = (self.cursor.col as i32 + col_delta).clamp(0, 8) as usize;
        let moved = row != self.cursor.row || col != self.cursor.col;
        self.cursor = Position::new(row, col);
        moved
    }

    /// Select a cell (mouse click)
    pub fn select(&mut self, pos: Position) {
        self.cursor = pos;
    }

    /// Type a digit into the selected cell. Given cells stay untouched.
    pub fn enter_digit(&mut self, digit: u8) -> bool {
        if self.given.is_given(self.cursor) {
            return false;
        }
        self.board.set(self.cursor, digit);
        self.status = check_win(&self.board, &self.solution);
        true
    }

    /// Blank the selected cell if it holds a player entry
    pub fn clear_cell(&mut self) -> bool {
        if self.given.is_given(self.cursor) || self.board.get(self.cursor) == 0 {
            return false;
        }
        self.board.clear(self.cursor);
        self.status = check_win(&self.board, &self.solution);
        true
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn given(&self) -> &GivenMask {
        &self.given
    }
    pub fn solution(&self) -> &Board {
        &self.solution
    }
    pub fn cursor(&self) -> Position {
        self.cursor
    }
    pub fn status(&self) -> WinStatus {
        self.status
    }

    /// Convert to the persisted record
    pub fn to_saved(&self) -> SavedSession {
        SavedSession {
            puzzle: self.board,
            solution: self.solution,
            given: self.given,
            cursor_row: self.cursor.row,
            cursor_col: self.cursor.col,
        }
    }

    /// Rebuild a session from a persisted record. Returns `None` for records
    /// the core must never see: out-of-range cursors, digits outside 0..=9,
    /// or a solution grid that is not actually solved.
    pub fn from_saved(saved: SavedSession) -> Option<Self> {
        let cursor = Position::try_new(saved.cursor_row, saved.cursor_col).ok()?;
        if !saved.puzzle.is_well_formed() || !saved.solution.is_valid_solution() {
            return None;
        }
        let status = check_win(&saved.puzzle, &saved.solution);
        Some(Self {
            board: saved.puzzle,
            given: saved.given,
            solution: saved.solution,
            cursor,
            status,
        })
    }
}
