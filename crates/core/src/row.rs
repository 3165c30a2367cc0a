//! Row primitives - merge and push toward the right edge
//!
//! Every move is built from these: a row is first merged (one left-to-right
//! pass over its non-empty tiles) and then pushed flush against the right
//! edge. Other directions reuse them through grid rotation.

use crate::types::{Tile, EMPTY};

/// Merge adjacent equal tiles in a single left-to-right pass.
///
/// Empty cells are dropped first. When two neighbours are equal the left one
/// becomes empty and the right one doubles; the doubled tile is not compared
/// again, so `[2, 2, 2]` merges only the leftmost pair. A pair of
/// [`MAX_TILE`](crate::types::MAX_TILE)s is left unmerged. The output has
/// the same length as the input, with the compacted tiles first and trailing
/// zeros after them. Call [`push_row`] to pack it.
pub fn merge_row(row: &[Tile]) -> Vec<Tile> {
    let mut out = Vec::with_capacity(row.len());
    out.extend(row.iter().copied().filter(|&tile| tile != EMPTY));

    let mut i = 0;
    while i + 1 < out.len() {
        match out[i].checked_mul(2) {
            Some(doubled) if out[i] == out[i + 1] => {
                out[i] = EMPTY;
                out[i + 1] = doubled;
                i += 2;
            }
            _ => i += 1,
        }
    }

    out.resize(row.len(), EMPTY);
    out
}

/// Pack non-empty tiles against the right edge, preserving their order.
pub fn push_row(row: &[Tile]) -> Vec<Tile> {
    let mut out = vec![EMPTY; row.len()];
    let mut dst = row.len();
    for &tile in row.iter().rev().filter(|&&tile| tile != EMPTY) {
        dst -= 1;
        out[dst] = tile;
    }
    out
}

/// The canonical rightward move for one row.
pub fn merge_and_push(row: &[Tile]) -> Vec<Tile> {
    push_row(&merge_row(row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_TILE;

    #[test]
    fn test_merge_single_pass_pairs() {
        assert_eq!(merge_row(&[2, 2, 2, 2]), vec![0, 4, 0, 4]);
        assert_eq!(merge_and_push(&[2, 2, 2, 2]), vec![0, 0, 4, 4]);
    }

    #[test]
    fn test_merge_drops_gaps_before_comparing() {
        assert_eq!(merge_row(&[2, 0, 2, 4]), vec![0, 4, 4, 0]);
        assert_eq!(merge_and_push(&[2, 0, 2, 4]), vec![0, 0, 4, 4]);
    }

    #[test]
    fn test_merged_tile_does_not_cascade() {
        // The new 4 is not re-compared with the 4 to its right.
        assert_eq!(merge_and_push(&[2, 2, 4, 0]), vec![0, 0, 4, 4]);
        assert_eq!(merge_and_push(&[4, 4, 8, 16]), vec![0, 8, 8, 16]);
    }

    #[test]
    fn test_three_equal_merges_leftmost_pair() {
        assert_eq!(merge_row(&[2, 2, 2, 0]), vec![0, 4, 2, 0]);
        assert_eq!(merge_and_push(&[2, 2, 2, 0]), vec![0, 0, 4, 2]);
    }

    #[test]
    fn test_largest_tile_never_merges() {
        assert_eq!(merge_and_push(&[MAX_TILE, MAX_TILE]), vec![MAX_TILE, MAX_TILE]);
        assert_eq!(
            merge_and_push(&[MAX_TILE, 0, MAX_TILE, 0]),
            vec![0, 0, MAX_TILE, MAX_TILE]
        );
        // The pair just below the cap still merges into it.
        assert_eq!(merge_and_push(&[0, 1 << 30, 1 << 30]), vec![0, 0, MAX_TILE]);
        assert_eq!(
            merge_and_push(&[MAX_TILE, MAX_TILE, 4, 4]),
            vec![0, MAX_TILE, MAX_TILE, 8]
        );
    }

    #[test]
    fn test_no_equal_neighbours_is_only_a_push() {
        assert_eq!(merge_and_push(&[2, 0, 4, 0]), vec![0, 0, 2, 4]);
        assert_eq!(merge_and_push(&[0, 0, 0, 2]), vec![0, 0, 0, 2]);
    }

    #[test]
    fn test_push_preserves_order_and_count() {
        let rows: [&[Tile]; 5] = [
            &[0, 0, 0, 0],
            &[2, 0, 0, 0],
            &[4, 0, 2, 8],
            &[2, 4, 8, 16],
            &[0, 32, 0, 0, 64, 0],
        ];
        for row in rows {
            let pushed = push_row(row);
            let before: Vec<Tile> = row.iter().copied().filter(|&t| t != 0).collect();
            let after: Vec<Tile> = pushed.iter().copied().filter(|&t| t != 0).collect();
            assert_eq!(pushed.len(), row.len());
            assert_eq!(before, after);
            // Zeros only on the left.
            let first_tile = pushed.iter().position(|&t| t != 0).unwrap_or(pushed.len());
            assert!(pushed[..first_tile].iter().all(|&t| t == 0));
            assert!(pushed[first_tile..].iter().all(|&t| t != 0));
        }
    }

    #[test]
    fn test_empty_row() {
        assert_eq!(merge_and_push(&[]), Vec::<Tile>::new());
        assert_eq!(merge_and_push(&[0, 0, 0]), vec![0, 0, 0]);
    }
}
