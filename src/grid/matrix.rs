use ndarray::Array2;

use crate::grid::GridDimensions;

/// Boolean fill state of every cell, indexed `(row, col)`
///
/// Values are never edited in place by callers; a compositor pass builds a
/// fresh grid and hands it out by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StitchGrid {
    cells: Array2<bool>,
    dimensions: GridDimensions,
}

impl StitchGrid {
    /// Create an all-open grid
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            cells: Array2::from_elem((dimensions.height(), dimensions.width()), false),
            dimensions,
        }
    }

    /// Build a grid by evaluating `fill` for every cell
    pub fn from_fn(dimensions: GridDimensions, mut fill: impl FnMut(usize, usize) -> bool) -> Self {
        Self {
            cells: Array2::from_shape_fn((dimensions.height(), dimensions.width()), |(row, col)| {
                fill(row, col)
            }),
            dimensions,
        }
    }

    /// Grid size in cells
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.dimensions.width()
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.dimensions.height()
    }

    /// Fill state of a cell; cells outside the grid read as open
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells.get((row, col)).copied().unwrap_or(false)
    }

    /// Overwrite a cell; writes outside the grid are ignored
    pub fn set(&mut self, row: usize, col: usize, filled: bool) {
        if let Some(cell) = self.cells.get_mut((row, col)) {
            *cell = filled;
        }
    }

    /// OR a contribution into a cell; a filled cell is never cleared
    pub fn merge(&mut self, row: usize, col: usize, filled: bool) {
        if let Some(cell) = self.cells.get_mut((row, col)) {
            *cell = *cell || filled;
        }
    }

    /// OR every cell of `other` into this grid
    ///
    /// Grids of different sizes merge over their overlapping region.
    pub fn merge_grid(&mut self, other: &Self) {
        for ((row, col), &filled) in other.cells.indexed_iter() {
            if filled {
                self.merge(row, col, true);
            }
        }
    }

    /// Number of filled cells
    pub fn count_filled(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Iterate over `(row, col, filled)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &filled)| (row, col, filled))
    }

    /// Copy the grid out as nested rows (`grid[row][col]`)
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Borrow the underlying array
    pub const fn as_array(&self) -> &Array2<bool> {
        &self.cells
    }
}
