//! Win detection: the player's grid against the stored solution.

use crate::board::{Board, Position};
use serde::{Deserialize, Serialize};

/// Outcome of comparing the player's grid against the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinStatus {
    /// At least one cell is still empty
    Incomplete,
    /// Every cell is filled and matches the solution
    Won,
    /// Every cell is filled but at least one differs from the solution
    Incorrect,
}

/// Compare the player's grid against the stored solution. An empty cell
/// anywhere means [`WinStatus::Incomplete`], regardless of mismatches.
pub fn check_win(puzzle: &Board, solution: &Board) -> WinStatus {
    let mut all_match = true;
    for pos in Position::all() {
        let value = puzzle.get(pos);
        if value == 0 {
            return WinStatus::Incomplete;
        }
        if value != solution.get(pos) {
            all_match = false;
        }
    }
    if all_match {
        WinStatus::Won
    } else {
        WinStatus::Incorrect
    }
}
