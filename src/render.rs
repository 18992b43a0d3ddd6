//! Rendering: builds the tile grid DOM under the board root.
//!
//! This module is the only place that creates elements through
//! [`web_sys::Document`]. It receives a read-only view of the item list and
//! produces DOM; it does not mutate any board state. Click behaviour is
//! supplied by the caller as closure factories, invoked once per tile, so
//! the board wiring stays out of this module.
//!
//! All fallible DOM calls propagate errors via `Result<_, JsValue>`. The
//! top-level caller ([`crate::board::Board`]) handles the result.

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event};

use crate::item::Item;
use crate::markup::{
    DATA_ID_ATTR, GRID_CLASS, ICON_CLASS, LABEL_CLASS, REMOVE_CLASS, REMOVE_MARKER, SPEAK_CLASS,
    TILE_CLASS, remove_label,
};

/// Callback for one tile control. Boxed so the factories can close over
/// per-tile data.
pub type TileCallback = Box<dyn FnMut(&Event)>;

/// Tear down and rebuild the grid under `root`.
///
/// Returns the listener handles keeping the new controls live; dropping
/// them detaches the handlers again.
///
/// # Errors
///
/// Returns `Err` if any DOM call fails (e.g. the root belongs to no
/// document).
pub fn draw(
    root: &Element,
    items: &[Item],
    editable: bool,
    make_speak: &dyn Fn(&Item) -> TileCallback,
    make_remove: &dyn Fn(&Item) -> TileCallback,
) -> Result<Vec<EventListener>, JsValue> {
    let document = root
        .owner_document()
        .ok_or_else(|| JsValue::from_str("board root has no owner document"))?;

    // Full teardown, no incremental diffing.
    root.set_inner_html("");

    let grid = make_div(&document, GRID_CLASS)?;
    let mut listeners = Vec::new();

    for item in items {
        let tile = make_div(&document, TILE_CLASS)?;
        tile.set_attribute(DATA_ID_ATTR, item.data_id())?;

        // The tile itself is a div, so the controls below are never nested
        // buttons.
        let speak = make_button(&document, SPEAK_CLASS)?;
        let icon = make_div(&document, ICON_CLASS)?;
        icon.set_text_content(Some(&item.icon));
        let label = make_div(&document, LABEL_CLASS)?;
        label.set_text_content(Some(&item.word));
        speak.append_child(&icon)?;
        speak.append_child(&label)?;
        listeners.push(EventListener::new(&speak, "click", make_speak(item)));
        tile.append_child(&speak)?;

        if editable {
            let remove = make_button(&document, REMOVE_CLASS)?;
            remove.set_attribute("aria-label", &remove_label(&item.word))?;
            remove.set_text_content(Some(REMOVE_MARKER));
            // gloo listeners are passive by default; the remove handler
            // calls prevent_default, so opt in explicitly.
            listeners.push(EventListener::new_with_options(
                &remove,
                "click",
                EventListenerOptions::enable_prevent_default(),
                make_remove(item),
            ));
            tile.append_child(&remove)?;
        }

        grid.append_child(&tile)?;
    }

    root.append_child(&grid)?;
    Ok(listeners)
}

// =============================================================
// Helpers
// =============================================================

/// Create a `div` carrying the given class.
fn make_div(document: &Document, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element("div")?;
    el.set_class_name(class);
    Ok(el)
}

/// Create a `button` carrying the given class. Typed explicitly so a board
/// inside a form never submits it.
fn make_button(document: &Document, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element("button")?;
    el.set_class_name(class);
    el.set_attribute("type", "button")?;
    Ok(el)
}
