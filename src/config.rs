//! Construction-time board options.
//!
//! A [`BoardConfig`] is fixed when the board is created and never changes
//! afterwards. Only `locale` and `editable` travel as JSON; the change
//! callback is attached programmatically (from Rust, or extracted from the
//! options object at the JavaScript boundary).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;
use std::rc::Rc;

use serde::Deserialize;

use crate::item::Item;

/// Observer invoked with a fresh copy of the item list after board-initiated
/// mutation (removal). Held behind `Rc` so the shell can clone the handler
/// out of the board cell and invoke it without a borrow outstanding.
pub type ChangeHandler = Rc<dyn Fn(Vec<Item>)>;

/// Board options, applied at construction and immutable thereafter.
///
/// Unknown keys in the source JSON are ignored; missing keys fall back to
/// the defaults below.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// BCP 47 language tag attached to every utterance.
    pub locale: String,
    /// Whether tiles carry a remove control.
    pub editable: bool,
    /// Change observer; fires only for board-initiated mutation, never for
    /// caller-driven replacement via `set_items`.
    #[serde(skip)]
    pub on_change: Option<ChangeHandler>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            locale: "en-GB".to_owned(),
            editable: false,
            on_change: None,
        }
    }
}

impl fmt::Debug for BoardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardConfig")
            .field("locale", &self.locale)
            .field("editable", &self.editable)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
