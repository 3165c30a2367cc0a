//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the sliding-tile rules and the game state. It has no
//! dependencies on terminals or I/O.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size tile matrix with row-major storage and rotations
//! - [`row`]: the rightward merge and push primitives for a single row
//! - [`moves`]: all four directions built from the rightward move by rotation
//! - [`spawn`]: uniform placement of new `2` tiles on empty cells
//! - [`render`]: plain text projection of a grid
//! - [`engine`]: [`GameEngine`], the turn state machine
//!
//! # Rules
//!
//! - A move merges each row (or column) in one pass, then packs it
//! - A merged tile never merges again in the same move
//! - After every move, even one that changes nothing, one `2` is spawned
//! - The game ends as soon as the board is full
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameConfig, GameEngine};
//! use tui_2048_core::types::{Direction, MoveOutcome};
//!
//! let mut game = GameEngine::new(GameConfig::default(), 12345);
//! assert_eq!(game.grid().non_empty_count(), 1);
//!
//! let outcome = game.apply_move(Direction::Left);
//! assert_eq!(outcome, MoveOutcome::Continued);
//! assert_eq!(game.grid().non_empty_count(), 2);
//!
//! print!("{}", game.render());
//! ```

pub mod engine;
pub mod grid;
pub mod moves;
pub mod render;
pub mod row;
pub mod spawn;

pub use tui_2048_types as types;

pub use engine::{GameConfig, GameEngine, Phase};
pub use grid::Grid;
pub use moves::{shift, shift_right};
pub use render::render;
pub use row::{merge_and_push, merge_row, push_row};
pub use spawn::spawn_tile;
