//! DOM rendering for the popup grid.

use crate::game::Session;
use popdoku_core::{Position, WinStatus};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// Cycled across cells during the win celebration
const RAINBOW_COLORS: &[&str] = &[
    "#e53935", "#fb8c00", "#fdd835", "#43a047", "#1e88e5", "#3949ab", "#8e24aa",
];

/// Build the 81-cell grid under the container. Cells are returned in
/// row-major order with `data-row`/`data-col` attributes for the click glue.
pub fn build_grid(document: &Document, container: &Element) -> Result<Vec<Element>, JsValue> {
    container.set_inner_html("");
    let mut cells = Vec::with_capacity(81);
    for pos in Position::all() {
        let cell = document.create_element("div")?;
        cell.set_class_name("cell");
        cell.set_attribute("data-row", &pos.row.to_string())?;
        cell.set_attribute("data-col", &pos.col.to_string())?;
        container.append_child(&cell)?;
        cells.push(cell);
    }
    Ok(cells)
}

/// Redraw every cell from the session state
pub fn render(cells: &[Element], session: &Session) {
    let won = session.status() == WinStatus::Won;

    for (idx, pos) in Position::all().enumerate() {
        let cell = &cells[idx];
        let value = session.board().get(pos);

        if value == 0 {
            cell.set_text_content(None);
        } else {
            cell.set_text_content(Some(&value.to_string()));
        }

        let mut classes = String::from("cell");
        if value != 0 {
            if session.given().is_given(pos) {
                classes.push_str(" given");
            } else {
                classes.push_str(" user-input");
                if session.board().has_conflict(pos) {
                    classes.push_str(" error");
                }
            }
        }
        if pos == session.cursor() {
            classes.push_str(" selected");
        }
        if won {
            classes.push_str(" won");
        }
        cell.set_class_name(&classes);

        if let Some(html) = cell.dyn_ref::<HtmlElement>() {
            if won {
                let color = RAINBOW_COLORS[idx % RAINBOW_COLORS.len()];
                let _ = html.style().set_property("color", color);
            } else {
                let _ = html.style().remove_property("color");
            }
        }
    }
}
