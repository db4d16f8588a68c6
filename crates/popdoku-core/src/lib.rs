//! Core Sudoku engine for the popdoku popup game.
//!
//! Plain data in, plain data out: a [`Board`] is a 9x9 matrix of digits
//! (0 = empty), a [`GivenMask`] marks the fixed clues, and the engine's
//! entry points are [`Generator::new_game`] (backtracking fill plus clue
//! carving), [`Board::is_legal_placement`] (row/column/box checks), and
//! [`check_win`]. Rendering, input, and persistence live in the popup
//! crate; nothing here touches the DOM.

mod board;
mod generator;
mod win;

pub use board::{Board, Error, GivenMask, Position};
pub use generator::{Generator, GeneratorConfig, NewGame};
pub use win::{check_win, WinStatus};
