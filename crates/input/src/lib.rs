//! Terminal input module.
//!
//! This crate turns raw terminal key events into [`crate::types::InputEvent`]
//! values. Decoding of escape sequences is left to `crossterm`; this crate only
//! decides which keys mean something and hides the blocking read behind the
//! [`InputSource`] trait so the driver can be fed from a script in tests.

pub mod map;
pub mod source;

pub use tui_2048_types as types;

pub use map::{map_key_event, should_quit};
pub use source::{first_input, key_press_input, InputSource, ScriptedInput, TerminalInput};
