//! Browser-extension popup build of the popdoku Sudoku mini-game.
//!
//! The popup JS constructs a [`SudokuPopup`] against the grid container and
//! forwards click/keyboard events into it; state, rendering, and
//! persistence all live on this side of the boundary.

use popdoku_core::{Position, WinStatus};
use wasm_bindgen::prelude::*;
use web_sys::{Element, KeyboardEvent};

pub mod game;
mod render;
pub mod storage;

pub use game::{SavedSession, Session};

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// The popup game controller
#[wasm_bindgen]
pub struct SudokuPopup {
    session: Session,
    cells: Vec<Element>,
}

#[wasm_bindgen]
impl SudokuPopup {
    /// Attach to the popup DOM, restore the saved game (or start fresh),
    /// and render.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str) -> Result<SudokuPopup, JsValue> {
        let document = web_sys::window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or("Grid container not found")?;

        let cells = render::build_grid(&document, &container)?;
        // malformed or missing saved state falls back to a fresh game
        let session = storage::load().unwrap_or_else(Session::new_game);

        let popup = SudokuPopup { session, cells };
        storage::save(&popup.session);
        popup.render();
        Ok(popup)
    }

    /// Start a new game
    #[wasm_bindgen]
    pub fn new_game(&mut self) {
        self.session = Session::new_game();
        storage::save(&self.session);
        self.render();
    }

    /// Select a cell from a click
    #[wasm_bindgen]
    pub fn select_cell(&mut self, row: usize, col: usize) -> Result<(), JsValue> {
        let pos = Position::try_new(row, col).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.session.select(pos);
        self.render();
        Ok(())
    }

    /// Route a keyboard event. Returns `true` when the event changed the
    /// session (the popup JS uses this to decide on `preventDefault`).
    #[wasm_bindgen]
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> bool {
        let consumed = self.session.handle_key(&event.key());
        if consumed {
            storage::save(&self.session);
            self.render();
        }
        consumed
    }

    /// Current win status: "incomplete", "won", or "incorrect"
    #[wasm_bindgen]
    pub fn status(&self) -> String {
        match self.session.status() {
            WinStatus::Incomplete => "incomplete",
            WinStatus::Won => "won",
            WinStatus::Incorrect => "incorrect",
        }
        .to_string()
    }

    fn render(&self) {
        render::render(&self.cells, &self.session);
    }
}
