//! Grid module - the fixed-size tile matrix
//!
//! The grid is a `rows x cols` matrix of tiles stored as a flat vector in
//! row-major order (`r * cols + c`). Dimensions are fixed at construction.
//! Rotations return new grids and swap dimensions for non-square input.

use std::fmt;

use crate::types::{is_valid_tile, Tile, EMPTY};

/// Fixed-dimension tile matrix using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (r * cols + c)
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "grid dimensions must be positive, got {}x{}",
            rows,
            cols
        );
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    /// Build a grid from a slice of equally sized rows.
    ///
    /// Returns `None` for empty input, empty rows, ragged rows, or a tile
    /// that is neither empty nor a power of two.
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[[2, 0], [0, 4]]).unwrap();
    /// assert_eq!(grid.get(1, 1), Some(4));
    /// assert!(Grid::from_rows(&[vec![2, 0], vec![4]]).is_none());
    /// assert!(Grid::from_rows(&[[2, 3]]).is_none());
    /// ```
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Option<Self> {
        let cols = rows.first()?.as_ref().len();
        let well_formed = |row: &R| {
            let row = row.as_ref();
            row.len() == cols && row.iter().all(|&tile| is_valid_tile(tile))
        };
        if cols == 0 || !rows.iter().all(well_formed) {
            return None;
        }

        let mut cells = vec![EMPTY; rows.len() * cols];
        for (r, row) in rows.iter().enumerate() {
            cells[r * cols..(r + 1) * cols].copy_from_slice(row.as_ref());
        }

        Some(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Build a grid from flat row-major cells.
    ///
    /// Returns `None` if a dimension is zero, `cells.len() != rows * cols`,
    /// or a tile is neither empty nor a power of two.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Tile>) -> Option<Self> {
        if rows == 0
            || cols == 0
            || cells.len() != rows * cols
            || !cells.iter().all(|&tile| is_valid_tile(tile))
        {
            return None;
        }
        Some(Self { rows, cols, cells })
    }

    #[inline(always)]
    fn index(&self, r: usize, c: usize) -> Option<usize> {
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(r * self.cols + c)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the tile at (row, col), or `None` if out of bounds
    pub fn get(&self, r: usize, c: usize) -> Option<Tile> {
        self.index(r, c).map(|idx| self.cells[idx])
    }

    /// Set the tile at (row, col)
    /// Returns false if out of bounds or `tile` is not a valid tile value
    pub fn set(&mut self, r: usize, c: usize, tile: Tile) -> bool {
        if !is_valid_tile(tile) {
            return false;
        }
        match self.index(r, c) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Tile] {
        &mut self.cells
    }

    /// A single row, or `None` if out of bounds
    pub fn row(&self, r: usize) -> Option<&[Tile]> {
        if r >= self.rows {
            return None;
        }
        let start = r * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterate rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Flat indices of empty cells, in row-major order
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile == EMPTY)
            .map(|(idx, _)| idx)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&tile| tile == EMPTY).count()
    }

    pub fn non_empty_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    /// True when no empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&tile| tile != EMPTY)
    }

    /// Rotate 90° clockwise.
    ///
    /// Destination (r, c) takes source (src_rows - 1 - c, r); the result is
    /// `cols x rows`.
    pub fn rotate_clockwise(&self) -> Grid {
        let (rows, cols) = (self.cols, self.rows);
        let mut cells = vec![EMPTY; rows * cols];
        for r in 0..rows {
            for c in 0..cols {
                cells[r * cols + c] = self.cells[(self.rows - 1 - c) * self.cols + r];
            }
        }
        Grid { rows, cols, cells }
    }

    /// Rotate 90° counter-clockwise.
    ///
    /// Destination (r, c) takes source (c, src_cols - 1 - r).
    pub fn rotate_counter_clockwise(&self) -> Grid {
        let (rows, cols) = (self.cols, self.rows);
        let mut cells = vec![EMPTY; rows * cols];
        for r in 0..rows {
            for c in 0..cols {
                cells[r * cols + c] = self.cells[c * self.cols + (self.cols - 1 - r)];
            }
        }
        Grid { rows, cols, cells }
    }

    /// Rotate 180° (two counter-clockwise turns)
    pub fn rotate_180(&self) -> Grid {
        self.rotate_counter_clockwise().rotate_counter_clockwise()
    }
}

/// One line per row, tiles separated by single spaces.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for (c, tile) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", tile)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
