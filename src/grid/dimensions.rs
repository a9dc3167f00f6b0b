use num_traits::ToPrimitive;
use serde::Serialize;
use std::ops::RangeInclusive;

use crate::io::configuration::{
    CELL_HEIGHT_CM, CELL_WIDTH_CM, MAX_GRID_CELLS, MAX_HEIGHT_CM, MAX_WIDTH_CM, MIN_GRID_CELLS,
    MIN_HEIGHT_CM, MIN_WIDTH_CM,
};
use crate::io::error::{Result, invalid_dimension};

/// Size of a chart in grid cells
///
/// Only constructed through the validating constructors, so every value in
/// circulation lies within the bounds it was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridDimensions {
    width: usize,
    height: usize,
}

impl GridDimensions {
    /// Create dimensions validated against the default cell range
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension falls outside `8..=200` cells
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_bounds(width, height, MIN_GRID_CELLS..=MAX_GRID_CELLS)
    }

    /// Create dimensions validated against caller-supplied bounds
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension falls outside `bounds`
    pub fn with_bounds(width: usize, height: usize, bounds: RangeInclusive<usize>) -> Result<Self> {
        for (axis, value) in [("width", width), ("height", height)] {
            if !bounds.contains(&value) {
                return Err(invalid_dimension(
                    axis,
                    value as f64,
                    *bounds.start() as f64,
                    *bounds.end() as f64,
                ));
            }
        }
        Ok(Self { width, height })
    }

    /// Convert a physical size into cell counts
    ///
    /// Columns are 1.0 cm wide and rows 0.9 cm tall, so a 30 x 31.5 cm chart
    /// becomes 30 x 35 cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the width is outside 8-200 cm or the height is
    /// outside 7.2-180 cm
    pub fn from_centimeters(width_cm: f64, height_cm: f64) -> Result<Self> {
        let width = cells_for("width", width_cm, CELL_WIDTH_CM, MIN_WIDTH_CM, MAX_WIDTH_CM)?;
        let height = cells_for(
            "height",
            height_cm,
            CELL_HEIGHT_CM,
            MIN_HEIGHT_CM,
            MAX_HEIGHT_CM,
        )?;
        Ok(Self { width, height })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Physical width of the worked chart in centimeters
    pub fn width_cm(&self) -> f64 {
        self.width as f64 * CELL_WIDTH_CM
    }

    /// Physical height of the worked chart in centimeters
    pub fn height_cm(&self) -> f64 {
        self.height as f64 * CELL_HEIGHT_CM
    }

    /// Check whether a cell lies inside the grid
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Check whether signed grid coordinates land inside the grid
    pub const fn contains_signed(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }
}

fn cells_for(axis: &'static str, value_cm: f64, cell_cm: f64, min: f64, max: f64) -> Result<usize> {
    if !value_cm.is_finite() || value_cm < min || value_cm > max {
        return Err(invalid_dimension(axis, value_cm, min, max));
    }
    (value_cm / cell_cm)
        .round()
        .to_usize()
        .ok_or_else(|| invalid_dimension(axis, value_cm, min, max))
}
