//! JavaScript surface: the `WordBoard` class exported through wasm-bindgen.
//!
//! This wrapper mirrors the Rust [`Board`] API with JSON-shaped values at
//! the boundary. Item lists and option bags cross as plain JS values and
//! are normalized leniently; only an unusable root is a hard error.

use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::board::{Board, InitError};
use crate::config::{BoardConfig, ChangeHandler};
use crate::item::{self, Item};

/// Picture/word board exported to JavaScript.
#[wasm_bindgen]
pub struct WordBoard {
    board: Board,
}

#[wasm_bindgen]
impl WordBoard {
    /// Create a board under `root`, which is either a container element or
    /// a CSS selector string.
    ///
    /// `items` is an array of `{id?, word, icon}` objects; any other value
    /// starts the board empty. `options` recognizes `locale`, `editable`
    /// and `onChange`; unknown keys are ignored.
    #[wasm_bindgen(constructor)]
    pub fn new(root: &JsValue, items: &JsValue, options: &JsValue) -> Result<WordBoard, JsError> {
        init_once();
        let items = item::items_from_value(&js_to_json(items));
        let config = parse_config(options);

        if let Some(element) = root.dyn_ref::<Element>() {
            return Ok(WordBoard { board: Board::new(element.clone(), items, config) });
        }
        if let Some(selector) = root.as_string() {
            let board = Board::mount(&selector, items, config)?;
            return Ok(WordBoard { board });
        }
        Err(InitError::InvalidRoot.into())
    }

    /// Replace the board contents and redraw. Non-array input clears the
    /// board. The `onChange` callback is not invoked.
    #[wasm_bindgen(js_name = setItems)]
    pub fn set_items(&self, items: &JsValue) {
        self.board.set_items(item::items_from_value(&js_to_json(items)));
    }

    /// The current items as a fresh array of plain objects.
    #[wasm_bindgen(js_name = getItems)]
    #[must_use]
    pub fn get_items(&self) -> JsValue {
        items_to_js(&self.board.items())
    }

    /// Speak `text` in the configured locale, cancelling anything already
    /// playing. Blank or missing text is a no-op.
    pub fn speak(&self, text: Option<String>) {
        self.board.speak(text.as_deref().unwrap_or(""));
    }

    /// Remove every item with the given id, then notify `onChange` and
    /// redraw if anything was removed.
    #[wasm_bindgen(js_name = removeById)]
    pub fn remove_by_id(&self, id: &str) {
        self.board.remove_by_id(id);
    }

    /// Starter vocabulary for a basic-needs board.
    #[wasm_bindgen(js_name = starterItems)]
    #[must_use]
    pub fn starter_items() -> JsValue {
        items_to_js(&item::starter_items())
    }
}

// =============================================================
// Boundary helpers
// =============================================================

/// Install the panic hook and console logger the first time a board is
/// constructed.
fn init_once() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// Convert an arbitrary JS value to JSON. Values JSON cannot represent
/// (functions, cycles, `undefined`) come back as `Null`.
fn js_to_json(value: &JsValue) -> serde_json::Value {
    let Ok(text) = js_sys::JSON::stringify(value) else {
        return serde_json::Value::Null;
    };
    text.as_string()
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or(serde_json::Value::Null)
}

/// Convert items to a fresh array of plain JS objects.
fn items_to_js(items: &[Item]) -> JsValue {
    serde_json::to_string(items)
        .ok()
        .and_then(|json| js_sys::JSON::parse(&json).ok())
        .unwrap_or(JsValue::NULL)
}

/// Read `locale` and `editable` from the options bag, then attach the
/// `onChange` function if one is present. A malformed bag yields defaults.
fn parse_config(options: &JsValue) -> BoardConfig {
    let mut config: BoardConfig =
        serde_json::from_value(js_to_json(options)).unwrap_or_default();
    config.on_change = change_handler_from(options);
    config
}

/// Wrap the bag's `onChange` function, if any, as a [`ChangeHandler`].
/// The function is looked up on the live JS object because stringifying
/// drops function properties.
fn change_handler_from(options: &JsValue) -> Option<ChangeHandler> {
    if !options.is_object() {
        return None;
    }
    let on_change = js_sys::Reflect::get(options, &JsValue::from_str("onChange")).ok()?;
    let function = on_change.dyn_into::<Function>().ok()?;
    Some(Rc::new(move |items: Vec<Item>| {
        if let Err(err) = function.call1(&JsValue::NULL, &items_to_js(&items)) {
            log::warn!("board change callback failed: {err:?}");
        }
    }))
}
