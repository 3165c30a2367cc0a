//! Terminal output module.
//!
//! A small layer between the game and the terminal: it owns raw-mode
//! switching and writes text blocks with the right line endings. The driver
//! only sees the [`Screen`] trait.

pub mod renderer;

pub use tui_2048_types as types;

pub use renderer::{encode_text_into, Screen, TerminalRenderer};
