//! Session persistence through `window.localStorage`.
//!
//! Storage failures are logged to the browser console and otherwise
//! swallowed: a popup that cannot save still plays, and anything malformed
//! on load is discarded so the caller starts a fresh game.

use crate::game::{SavedSession, Session};
use wasm_bindgen::JsValue;
use web_sys::{console, Storage};

/// Storage key for the persisted session
pub const STORAGE_KEY: &str = "popdoku.session";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Persist the session, best effort
pub fn save(session: &Session) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(&session.to_saved()) {
        Ok(json) => {
            if storage.set_item(STORAGE_KEY, &json).is_err() {
                console::warn_1(&JsValue::from_str("popdoku: failed to write saved game"));
            }
        }
        Err(err) => {
            console::warn_1(&JsValue::from_str(&format!(
                "popdoku: failed to encode saved game: {err}"
            )));
        }
    }
}

/// Restore the previous session, if a well-formed one exists
pub fn load() -> Option<Session> {
    let storage = local_storage()?;
    let json = storage.get_item(STORAGE_KEY).ok()??;
    match serde_json::from_str::<SavedSession>(&json) {
        Ok(saved) => {
            let session = Session::from_saved(saved);
            if session.is_none() {
                console::warn_1(&JsValue::from_str(
                    "popdoku: discarding inconsistent saved game",
                ));
            }
            session
        }
        Err(err) => {
            console::warn_1(&JsValue::from_str(&format!(
                "popdoku: discarding malformed saved game: {err}"
            )));
            None
        }
    }
}
