//! Tile spawning
//!
//! A new tile always has value [`SPAWN_VALUE`] and lands on an empty cell
//! chosen uniformly among the empty cells (not among all cells).

use rand::Rng;

use crate::grid::Grid;
use crate::types::SPAWN_VALUE;

/// Place one new tile on a random empty cell.
///
/// Returns the flat index of the new tile, or `None` (leaving the grid
/// untouched) when the grid is already full.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<usize> {
    let empty = grid.empty_count();
    if empty == 0 {
        return None;
    }

    let target = rng.gen_range(0..empty);
    let idx = grid.empty_indices().nth(target)?;
    grid.cells_mut()[idx] = SPAWN_VALUE;
    Some(idx)
}
