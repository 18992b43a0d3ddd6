//! Board widget: item state, speech behaviour, and event wiring.
//!
//! DESIGN
//! ======
//! `BoardCore` owns the item list and decides what gets spoken and what a
//! removal changes. It is plain Rust, separated from `Board` so it can be
//! tested without WASM/browser dependencies.
//!
//! `Board` shares the core with the DOM event listeners through an
//! `Rc<RefCell<..>>` cell and redraws after every mutation. Listeners hold
//! only a `Weak` reference back to the cell, so dropping the last `Board`
//! handle leaves whatever DOM remains inert instead of keeping the board
//! state alive through its own click handlers.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use web_sys::Element;

use crate::config::{BoardConfig, ChangeHandler};
use crate::item::Item;
use crate::render;
use crate::speech::{SpeechEngine, WebSpeech};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("board root element not found: {0}")]
    RootNotFound(String),
    #[error("board root must be an element or a selector string")]
    InvalidRoot,
    #[error("no document available to resolve the board root")]
    NoDocument,
}

/// Core board state: the item list, options, and speech decisions.
///
/// Separated from `Board` so it can be tested without WASM/browser dependencies.
pub struct BoardCore {
    items: Vec<Item>,
    config: BoardConfig,
    speech: Option<Box<dyn SpeechEngine>>,
}

impl BoardCore {
    #[must_use]
    pub fn new(items: Vec<Item>, config: BoardConfig, speech: Option<Box<dyn SpeechEngine>>) -> Self {
        Self { items, config, speech }
    }

    // --- Items ---

    /// Replace the whole item list. The change observer is never notified
    /// here; callers already know what they set.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// A fresh copy of the current items, in display order.
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Drop every item whose id matches. Items without an id never match.
    /// Returns whether anything was removed.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id.as_deref() != Some(id));
        self.items.len() != before
    }

    // --- Options ---

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The attached change observer, if any, cloned out of the config so it
    /// can be invoked without a borrow of the board outstanding.
    #[must_use]
    pub fn change_handler(&self) -> Option<ChangeHandler> {
        self.config.on_change.clone()
    }

    // --- Speech ---

    /// Speak `text` in the configured locale. Blank input and boards
    /// without a speech engine are silent no-ops.
    pub fn speak(&self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        if let Some(engine) = &self.speech {
            // Preempt the current utterance so taps always feel immediate.
            engine.cancel_all();
            engine.speak(trimmed, &self.config.locale);
        }
    }
}

// =============================================================================
// BOARD
// =============================================================================

/// Shared state behind a live board: the bound root element, the core, and
/// the listeners keeping the current DOM wired up.
struct BoardCell {
    root: Element,
    core: BoardCore,
    listeners: Vec<EventListener>,
}

/// A word board bound to a container element. Construction renders
/// immediately; every mutation redraws.
pub struct Board {
    cell: Rc<RefCell<BoardCell>>,
}

impl Board {
    // --- Construction ---

    /// Bind a board to `root` and render the initial items. Speech uses the
    /// host's `speechSynthesis` when available; without it the board still
    /// works, it just stays silent.
    #[must_use]
    pub fn new(root: Element, items: Vec<Item>, config: BoardConfig) -> Self {
        let speech = WebSpeech::acquire().map(|engine| Box::new(engine) as Box<dyn SpeechEngine>);
        Self::with_engine(root, items, config, speech)
    }

    /// Bind a board to the first element matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no document or nothing matches the
    /// selector. Nothing is rendered on failure.
    pub fn mount(selector: &str, items: Vec<Item>, config: BoardConfig) -> Result<Self, InitError> {
        let document = web_sys::window().and_then(|window| window.document()).ok_or(InitError::NoDocument)?;
        let root = document
            .query_selector(selector)
            .map_err(|_| InitError::RootNotFound(selector.to_owned()))?
            .ok_or_else(|| InitError::RootNotFound(selector.to_owned()))?;
        Ok(Self::new(root, items, config))
    }

    /// Bind a board with an explicit speech engine (or none). Tests use
    /// this to substitute a recording fake.
    #[must_use]
    pub fn with_engine(
        root: Element,
        items: Vec<Item>,
        config: BoardConfig,
        speech: Option<Box<dyn SpeechEngine>>,
    ) -> Self {
        let cell = Rc::new(RefCell::new(BoardCell {
            root,
            core: BoardCore::new(items, config, speech),
            listeners: Vec::new(),
        }));
        Self::render_cell(&cell);
        Self { cell }
    }

    // --- Operations ---

    /// Replace the board contents and redraw. Never notifies the change
    /// observer.
    pub fn set_items(&self, items: Vec<Item>) {
        self.cell.borrow_mut().core.set_items(items);
        Self::render_cell(&self.cell);
    }

    /// A fresh copy of the current items, in display order.
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        self.cell.borrow().core.items()
    }

    /// Speak `text` in the configured locale, cancelling anything already
    /// playing first.
    pub fn speak(&self, text: &str) {
        self.cell.borrow().core.speak(text);
    }

    /// Remove every item with the given id. When something was actually
    /// removed, notifies the change observer and redraws; otherwise the
    /// board is untouched.
    pub fn remove_by_id(&self, id: &str) {
        Self::remove_on_cell(&self.cell, id);
    }

    // --- Internals ---

    /// Removal through the shared cell, from the public method or a remove
    /// control. The observer runs with the borrow released, so a callback
    /// that re-enters the board cannot trip the `RefCell`.
    fn remove_on_cell(cell: &Rc<RefCell<BoardCell>>, id: &str) {
        let notify = {
            let mut guard = cell.borrow_mut();
            guard.core.remove_by_id(id).then(|| (guard.core.change_handler(), guard.core.items()))
        };
        let Some((handler, items)) = notify else {
            return;
        };
        if let Some(handler) = handler {
            handler(items);
        }
        Self::render_cell(cell);
    }

    /// Rebuild the DOM under the root and swap in the new listener set.
    fn render_cell(cell: &Rc<RefCell<BoardCell>>) {
        let weak = Rc::downgrade(cell);
        let mut guard = cell.borrow_mut();
        let BoardCell { root, core, listeners } = &mut *guard;
        // Old listeners detach when dropped; the elements they were bound
        // to are about to be cleared anyway.
        listeners.clear();

        let make_speak = |item: &Item| -> render::TileCallback {
            let cell = Weak::clone(&weak);
            let word = item.word.clone();
            Box::new(move |_event| {
                if let Some(cell) = cell.upgrade() {
                    cell.borrow().core.speak(&word);
                }
            })
        };

        let make_remove = |item: &Item| -> render::TileCallback {
            let cell = Weak::clone(&weak);
            let id = item.id.clone();
            Box::new(move |event| {
                event.prevent_default();
                // Removing a tile must never speak it.
                event.stop_propagation();
                let Some(id) = &id else { return };
                if let Some(cell) = cell.upgrade() {
                    Self::remove_on_cell(&cell, id);
                }
            })
        };

        match render::draw(root, &core.items, core.config.editable, &make_speak, &make_remove) {
            Ok(handles) => *listeners = handles,
            Err(err) => log::warn!("board render failed: {err:?}"),
        }
    }
}
