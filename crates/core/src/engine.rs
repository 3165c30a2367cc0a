//! Game engine module - owns the grid and runs the turn state machine
//!
//! Each move replaces the grid with the shifted one, spawns a tile and then
//! checks whether the board is full. A full board ends the game even when
//! neighbouring tiles could still merge, and a move that changes nothing
//! still spawns.

use rand::{rngs::StdRng, SeedableRng};

use crate::grid::Grid;
use crate::moves::shift;
use crate::render::render;
use crate::spawn;
use crate::types::{Direction, MoveOutcome, DEFAULT_COLS, DEFAULT_ROWS};

/// Construction-time settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// When false the engine never places tiles. Used to check moves exactly.
    pub spawn_tiles: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            spawn_tiles: true,
        }
    }
}

impl GameConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn without_spawning(mut self) -> Self {
        self.spawn_tiles = false;
        self
    }
}

/// Turn state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Terminal: further moves are ignored.
    GameOver,
}

/// Complete game: the grid plus the RNG that feeds spawns
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    config: GameConfig,
    phase: Phase,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game with the given RNG seed and spawn the first tile.
    ///
    /// # Panics
    ///
    /// Panics if `config` has a zero dimension.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut engine = Self {
            grid: Grid::new(config.rows, config.cols),
            config,
            phase: Phase::Playing,
            rng: StdRng::seed_from_u64(seed),
        };
        engine.spawn_tile();
        engine
    }

    /// Resume from an existing grid. Nothing is spawned and the game starts
    /// in [`Phase::Playing`]; the grid's shape overrides `config`.
    pub fn from_grid(grid: Grid, config: GameConfig, seed: u64) -> Self {
        let config = GameConfig {
            rows: grid.rows(),
            cols: grid.cols(),
            ..config
        };
        Self {
            grid,
            config,
            phase: Phase::Playing,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Spawn a `2` on a random empty cell.
    ///
    /// Returns the flat index used, or `None` if the board is full or
    /// spawning is disabled. Never changes the phase.
    pub fn spawn_tile(&mut self) -> Option<usize> {
        if !self.config.spawn_tiles {
            return None;
        }
        let idx = spawn::spawn_tile(&mut self.grid, &mut self.rng);
        if let Some(idx) = idx {
            tracing::trace!(index = idx, "spawned tile");
        }
        idx
    }

    /// Play one move: shift, spawn, then check for a full board.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.phase == Phase::GameOver {
            return MoveOutcome::GameOver;
        }

        self.grid = shift(&self.grid, direction);
        self.spawn_tile();

        if self.grid.is_full() {
            self.phase = Phase::GameOver;
            tracing::debug!(direction = direction.as_str(), "board full");
            return MoveOutcome::GameOver;
        }
        MoveOutcome::Continued
    }

    /// Text projection of the current grid
    pub fn render(&self) -> String {
        render(&self.grid)
    }
}
