//! Browser-side tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use popdoku_wasm::{storage, Session};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear_storage() {
    let ls = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap();
    ls.remove_item(storage::STORAGE_KEY).unwrap();
}

#[wasm_bindgen_test]
fn load_without_saved_game_is_none() {
    clear_storage();
    assert!(storage::load().is_none());
}

#[wasm_bindgen_test]
fn session_round_trips_through_local_storage() {
    clear_storage();
    let session = Session::new_game();
    storage::save(&session);

    let restored = storage::load().expect("saved game should load back");
    assert_eq!(restored.board(), session.board());
    assert_eq!(restored.solution(), session.solution());
    assert_eq!(restored.given(), session.given());
    assert_eq!(restored.cursor(), session.cursor());
}

#[wasm_bindgen_test]
fn malformed_saved_game_is_discarded() {
    clear_storage();
    let ls = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap();
    ls.set_item(storage::STORAGE_KEY, "{not json").unwrap();
    assert!(storage::load().is_none());
}
