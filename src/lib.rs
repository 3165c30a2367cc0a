//! TUI 2048 (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_2048::{core,input,session,term,types}` and adds the
//! process-level pieces: environment configuration and file logging.

pub mod config;
pub mod logging;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_session as session;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
