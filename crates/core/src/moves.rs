//! Directional moves
//!
//! Only the rightward move is implemented directly. The other three rotate the
//! grid so the requested direction points right, apply it, and rotate back.

use crate::grid::Grid;
use crate::row::merge_and_push;
use crate::types::Direction;

/// Slide and merge every row toward the right edge.
pub fn shift_right(grid: &Grid) -> Grid {
    let cols = grid.cols();
    let mut out = grid.clone();
    for (r, row) in grid.iter_rows().enumerate() {
        out.cells_mut()[r * cols..(r + 1) * cols].copy_from_slice(&merge_and_push(row));
    }
    out
}

/// Apply one move in `direction` without spawning.
///
/// ```
/// use tui_2048_core::{shift, Grid};
/// use tui_2048_core::types::Direction;
///
/// let grid = Grid::from_rows(&[[2, 0], [2, 4]]).unwrap();
/// let up = shift(&grid, Direction::Up);
/// assert_eq!(up.cells(), &[4, 4, 0, 0]);
/// ```
pub fn shift(grid: &Grid, direction: Direction) -> Grid {
    match direction {
        Direction::Right => shift_right(grid),
        Direction::Left => shift_right(&grid.rotate_180()).rotate_180(),
        Direction::Up => shift_right(&grid.rotate_clockwise()).rotate_counter_clockwise(),
        Direction::Down => shift_right(&grid.rotate_counter_clockwise()).rotate_clockwise(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: [[u32; 4]; 4]) -> Grid {
        Grid::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_single_tile_slides_right() {
        let start = grid([[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 2, 0], [0, 0, 0, 0]]);
        let expected = grid([[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2], [0, 0, 0, 0]]);
        assert_eq!(shift(&start, Direction::Right), expected);
    }

    #[test]
    fn test_left_mirrors_right() {
        let start = grid([[2, 2, 0, 4], [0, 0, 0, 0], [8, 0, 8, 8], [2, 4, 8, 16]]);
        // Conjugating by a half turn pairs tiles from the right edge.
        let expected = grid([[4, 4, 0, 0], [0, 0, 0, 0], [8, 16, 0, 0], [2, 4, 8, 16]]);
        assert_eq!(shift(&start, Direction::Left), expected);
    }

    #[test]
    fn test_up_and_down_act_on_columns() {
        let start = grid([[2, 0, 0, 0], [2, 0, 4, 0], [0, 0, 0, 0], [4, 0, 4, 2]]);
        let up = grid([[4, 0, 8, 2], [4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let down = grid([[0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0], [4, 0, 8, 2]]);
        assert_eq!(shift(&start, Direction::Up), up);
        assert_eq!(shift(&start, Direction::Down), down);
    }

    #[test]
    fn test_moves_keep_dimensions() {
        let start = Grid::from_rows(&[[2, 0, 2], [0, 4, 4]]).unwrap();
        for dir in Direction::ALL {
            let moved = shift(&start, dir);
            assert_eq!((moved.rows(), moved.cols()), (2, 3), "{:?}", dir);
        }
        assert_eq!(shift(&start, Direction::Up).cells(), &[2, 4, 2, 0, 0, 4]);
    }

    #[test]
    fn test_packed_row_is_unchanged() {
        let start = grid([[0, 0, 2, 4], [0, 0, 0, 8], [0, 0, 0, 0], [2, 4, 8, 16]]);
        assert_eq!(shift(&start, Direction::Right), start);
    }
}
