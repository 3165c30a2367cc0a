//! Text rendering of a grid.

use crate::grid::Grid;

/// Render the grid as text: one line per row with space-separated values,
/// followed by a blank line.
pub fn render(grid: &Grid) -> String {
    let mut out = grid.to_string();
    out.push('\n');
    out
}
