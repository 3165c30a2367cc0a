//! Grid tests - storage, rotation and row primitives

use tui_2048::core::{merge_and_push, merge_row, push_row, Grid};
use tui_2048::types::{DEFAULT_COLS, DEFAULT_ROWS};

fn sample() -> Grid {
    Grid::from_rows(&[
        [2, 0, 4, 8],
        [0, 16, 0, 2],
        [32, 0, 0, 0],
        [0, 64, 128, 2],
    ])
    .unwrap()
}

#[test]
fn test_default_grid_dimensions() {
    let grid = Grid::new(DEFAULT_ROWS, DEFAULT_COLS);
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.cols(), 4);
    assert_eq!(grid.cells().len(), 16);
    for r in 0..4 {
        for c in 0..4 {
            assert_eq!(grid.get(r, c), Some(0), "cell ({}, {}) should be empty", r, c);
        }
    }
}

#[test]
fn test_flat_index_is_row_major() {
    let grid = sample();
    for r in 0..4 {
        for c in 0..4 {
            assert_eq!(grid.get(r, c), Some(grid.cells()[r * 4 + c]));
        }
    }
}

#[test]
fn test_rotation_round_trip() {
    let grid = sample();
    assert_eq!(grid.rotate_clockwise().rotate_counter_clockwise(), grid);
}

#[test]
fn test_four_rotations_each_way() {
    let grid = sample();
    let mut cw = grid.clone();
    let mut ccw = grid.clone();
    for _ in 0..4 {
        cw = cw.rotate_clockwise();
        ccw = ccw.rotate_counter_clockwise();
    }
    assert_eq!(cw, grid);
    assert_eq!(ccw, grid);
}

#[test]
fn test_clockwise_moves_left_column_to_top_row() {
    let rotated = sample().rotate_clockwise();
    // Left column read bottom to top.
    assert_eq!(rotated.row(0), Some(&[0, 32, 0, 2][..]));
}

#[test]
fn test_rotation_of_tall_grid() {
    let tall = Grid::from_rows(&[[2], [4], [8]]).unwrap();
    let cw = tall.rotate_clockwise();
    assert_eq!((cw.rows(), cw.cols()), (1, 3));
    assert_eq!(cw.cells(), &[8, 4, 2]);
    let ccw = tall.rotate_counter_clockwise();
    assert_eq!(ccw.cells(), &[2, 4, 8]);
    assert_eq!(cw.rotate_counter_clockwise(), tall);
}

#[test]
fn test_merge_and_push_examples() {
    assert_eq!(merge_and_push(&[2, 2, 2, 2]), vec![0, 0, 4, 4]);
    assert_eq!(merge_and_push(&[2, 0, 2, 4]), vec![0, 0, 4, 4]);
    assert_eq!(merge_and_push(&[2, 2, 2, 0]), vec![0, 0, 4, 2]);
}

#[test]
fn test_merge_keeps_length() {
    for row in [&[2, 2][..], &[0, 0, 0][..], &[4, 4, 4, 4, 4][..]] {
        assert_eq!(merge_row(row).len(), row.len());
        assert_eq!(push_row(row).len(), row.len());
    }
}

#[test]
fn test_merge_never_changes_the_tile_sum() {
    let rows: [[u32; 4]; 4] = [[2, 2, 4, 8], [8, 8, 8, 0], [0, 2, 0, 2], [16, 0, 16, 16]];
    for row in rows {
        let before: u32 = row.iter().sum();
        let after: u32 = merge_and_push(&row).iter().sum();
        assert_eq!(before, after, "{:?}", row);
    }
}
