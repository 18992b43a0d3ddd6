//! Item model: the word/icon units displayed as tiles.
//!
//! An [`Item`] is what one tile renders: a spoken/display word, a display
//! glyph, and an optional caller-assigned id used for removal. Items arrive
//! either as typed Rust values or as loose JSON from the JavaScript boundary;
//! [`items_from_value`] normalizes the loose form, degrading malformed input
//! to defaults instead of failing.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use serde::{Deserialize, Serialize};

/// One word/icon unit displayed as a tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Caller-assigned identifier targeted by removal. Items without an id
    /// can never be matched by `remove_by_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The spoken and displayed text.
    #[serde(default)]
    pub word: String,
    /// Display glyph or short token; treated as opaque renderable content.
    #[serde(default)]
    pub icon: String,
}

impl Item {
    /// An item without an id.
    #[must_use]
    pub fn new(word: impl Into<String>, icon: impl Into<String>) -> Self {
        Self { id: None, word: word.into(), icon: icon.into() }
    }

    /// An item with an id.
    #[must_use]
    pub fn with_id(id: impl Into<String>, word: impl Into<String>, icon: impl Into<String>) -> Self {
        Self { id: Some(id.into()), word: word.into(), icon: icon.into() }
    }

    /// The `data-id` value rendered on this item's tile: the id, or `""`
    /// when absent.
    #[must_use]
    pub fn data_id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}

/// Normalize a loose JSON value into an item list.
///
/// Anything that is not an array becomes the empty list. Array entries that
/// are not objects are dropped. Missing or mistyped fields fall back to
/// defaults: `id` absent, `word`/`icon` empty.
#[must_use]
pub fn items_from_value(value: &serde_json::Value) -> Vec<Item> {
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };
    entries.iter().filter_map(item_from_entry).collect()
}

fn item_from_entry(entry: &serde_json::Value) -> Option<Item> {
    if !entry.is_object() {
        return None;
    }
    let text = |key: &str| {
        entry
            .get(key)
            .and_then(serde_json::Value::as_str)
            .unwrap_or("")
            .to_owned()
    };
    Some(Item {
        id: entry
            .get("id")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned),
        word: text("word"),
        icon: text("icon"),
    })
}

/// Starter vocabulary for a basic-needs board: the words a host page can
/// seed a new board with before the caller supplies its own set.
#[must_use]
pub fn starter_items() -> Vec<Item> {
    [
        ("Drink", "🥤"),
        ("Hungry", "🍗"),
        ("Toilet", "🚽"),
        ("Help", "🆘"),
        ("More", "➕"),
        ("Stop", "🛑"),
        ("Yes", "✅"),
        ("No", "❌"),
    ]
    .into_iter()
    .map(|(word, icon)| Item::new(word, icon))
    .collect()
}
