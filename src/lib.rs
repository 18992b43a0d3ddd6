//! Picture/word board widget for AAC-style communication pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the full lifecycle of a board bound to a container element: rendering a
//! grid of picture+word tiles, speaking a tile's word through the host's
//! speech synthesis when tapped, and removing tiles through an optional
//! edit affordance. The host page is responsible only for providing the
//! container, the item list, and (optionally) a change callback to persist
//! removals.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`board`] | The board itself and its testable [`board::BoardCore`] |
//! | [`item`] | Item model, lenient JSON normalization, starter vocabulary |
//! | [`config`] | Construction-time options and the change callback type |
//! | [`speech`] | [`speech::SpeechEngine`] trait and the Web Speech backend |
//! | [`render`] | DOM construction for the tile grid |
//! | [`markup`] | Class names and attributes host stylesheets rely on |
//! | [`bindings`] | The `WordBoard` class exported to JavaScript |

pub mod bindings;
pub mod board;
pub mod config;
pub mod item;
pub mod markup;
pub mod render;
pub mod speech;
