//! Class names and attribute values that make up the board's DOM contract.
//!
//! Host pages style the board against these hooks, so they are part of the
//! public surface and must stay stable.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

// ── Classes ─────────────────────────────────────────────────────

/// Grid container appended under the board root.
pub const GRID_CLASS: &str = "pb-grid";

/// One tile per item.
pub const TILE_CLASS: &str = "pb-tile";

/// Primary button covering the tile face; clicking it speaks the word.
pub const SPEAK_CLASS: &str = "pb-speak";

/// Icon glyph inside the speak button.
pub const ICON_CLASS: &str = "pb-icon";

/// Word caption inside the speak button.
pub const LABEL_CLASS: &str = "pb-label";

/// Remove control, present only on editable boards.
pub const REMOVE_CLASS: &str = "pb-remove";

// ── Attributes ──────────────────────────────────────────────────

/// Tile attribute carrying the item id ("" for id-less items).
pub const DATA_ID_ATTR: &str = "data-id";

/// Visible text of the remove control.
pub const REMOVE_MARKER: &str = "×";

/// Accessible name for the remove control on the tile for `word`.
pub fn remove_label(word: &str) -> String {
    format!("Remove {word}")
}
