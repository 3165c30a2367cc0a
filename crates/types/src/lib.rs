//! Core types module - shared data structures and constants
//!
//! This module defines the value types passed between the input layer, the
//! game engine and the terminal front end. All types are plain data with no
//! external dependencies.
//!
//! # Board Dimensions
//!
//! The reference configuration is a 4x4 grid:
//!
//! - **Rows**: 4 (indexed 0-3, top to bottom)
//! - **Columns**: 4 (indexed 0-3, left to right)
//! - **Spawned tile**: always `2`
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, InputEvent, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//!
//! // Events carry the name printed by the driver
//! assert_eq!(InputEvent::Move(dir).as_str(), "UP");
//! assert_eq!(InputEvent::Quit.as_str(), "QUIT");
//!
//! assert_eq!(DEFAULT_ROWS, 4);
//! assert_eq!(DEFAULT_COLS, 4);
//! ```

/// A single grid cell value. `0` is empty, anything else is a power of two.
pub type Tile = u32;

/// Empty cell marker
pub const EMPTY: Tile = 0;

/// Value of every newly spawned tile
pub const SPAWN_VALUE: Tile = 2;

/// Largest tile a `Tile` can hold (2^31). Two of them never merge, since
/// their sum does not fit.
pub const MAX_TILE: Tile = 1 << 31;

/// True for the values a cell may hold: empty, or a power of two from
/// [`SPAWN_VALUE`] up to [`MAX_TILE`].
pub const fn is_valid_tile(tile: Tile) -> bool {
    tile == EMPTY || (tile >= SPAWN_VALUE && tile.is_power_of_two())
}

/// Default grid height (4 rows)
pub const DEFAULT_ROWS: usize = 4;

/// Default grid width (4 columns)
pub const DEFAULT_COLS: usize = 4;

/// Banner printed once when a session starts.
pub const BANNER: &str = "Arrow keys to move. CTRL-C to quit";

/// Message printed after the final grid when the board fills up.
pub const GAME_OVER_MESSAGE: &str = "GAME OVER";

/// The four slide directions
///
/// A direction is input-only: it selects which way tiles slide for one move
/// and is never stored in the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to the upper-case event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

/// A discrete user intent produced by an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Slide the tiles in a direction
    Move(Direction),
    /// Leave the game immediately
    Quit,
}

impl InputEvent {
    /// Event name, as echoed by the driver on quit
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::Move(dir) => dir.as_str(),
            InputEvent::Quit => "QUIT",
        }
    }
}

impl From<Direction> for InputEvent {
    fn from(dir: Direction) -> Self {
        InputEvent::Move(dir)
    }
}

/// Result of applying one move to the engine
///
/// There is no "invalid move" variant: a move that changes nothing still
/// continues the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continued,
    GameOver,
}

impl MoveOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, MoveOutcome::GameOver)
    }
}
