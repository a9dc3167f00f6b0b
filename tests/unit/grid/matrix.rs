//! Tests for the boolean stitch matrix

#[cfg(test)]
mod tests {
    use filetgrid::grid::{GridDimensions, StitchGrid};

    fn dims(width: usize, height: usize) -> GridDimensions {
        let Ok(dims) = GridDimensions::new(width, height) else {
            unreachable!("{width} x {height} is a valid chart size");
        };
        dims
    }

    // Tests that a new grid is entirely open
    // Verified by initializing cells to true
    #[test]
    fn test_new_grid_is_open() {
        let grid = StitchGrid::new(dims(10, 8));
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 8);
        assert_eq!(grid.count_filled(), 0);
        assert_eq!(grid.as_array().dim(), (8, 10));
    }

    // Tests that from_fn receives (row, col)
    // Verified by swapping the closure arguments
    #[test]
    fn test_from_fn_uses_row_col_order() {
        let grid = StitchGrid::from_fn(dims(10, 8), |row, col| row == 0 && col == 9);
        assert!(grid.get(0, 9));
        assert!(!grid.get(9, 0));
        assert_eq!(grid.count_filled(), 1);
    }

    // Tests out-of-range reads and writes
    // Verified by panicking on out-of-range access
    #[test]
    fn test_out_of_range_access_is_ignored() {
        let mut grid = StitchGrid::new(dims(8, 8));
        grid.set(8, 0, true);
        grid.set(0, 100, true);
        assert!(!grid.get(8, 0));
        assert_eq!(grid.count_filled(), 0);
    }

    // Tests that merge never clears a filled cell
    // Verified by assigning instead of OR-ing
    #[test]
    fn test_merge_is_or() {
        let mut grid = StitchGrid::new(dims(8, 8));
        grid.merge(2, 3, true);
        grid.merge(2, 3, false);
        assert!(grid.get(2, 3));

        grid.set(2, 3, false);
        assert!(!grid.get(2, 3));
    }

    // Tests merging whole grids
    // Verified by overwriting open cells from the other grid
    #[test]
    fn test_merge_grid_unions_cells() {
        let mut left = StitchGrid::from_fn(dims(8, 8), |_, col| col < 2);
        let right = StitchGrid::from_fn(dims(8, 8), |row, _| row < 1);
        left.merge_grid(&right);

        assert!(left.get(0, 7));
        assert!(left.get(7, 0));
        assert!(!left.get(7, 7));
        assert_eq!(left.count_filled(), 8 * 2 + 6);
    }

    // Tests row-major iteration and nested row export
    // Verified by iterating column-major
    #[test]
    fn test_iter_and_rows() {
        let grid = StitchGrid::from_fn(dims(8, 9), |row, col| row == col);
        let first: Vec<_> = grid.iter().take(2).collect();
        assert_eq!(first, vec![(0, 0, true), (0, 1, false)]);

        let rows = grid.to_rows();
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|row| row.len() == 8));
        assert_eq!(rows.get(3).and_then(|row| row.get(3)), Some(&true));
        assert_eq!(rows.get(8).map(|row| row.iter().any(|&c| c)), Some(false));
    }
}
