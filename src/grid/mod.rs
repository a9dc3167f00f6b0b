//! Grid model shared by every layer of the chart
//!
//! Coordinates are `(row, col)` with the origin at the top-left cell. The
//! stored fill of a cell is always derived; nothing in this module decides
//! whether a cell is filled.

/// Sides and canonical cell keys
pub mod cell;
/// Cell counts and centimeter conversion
pub mod dimensions;
/// Boolean stitch matrix
pub mod matrix;

pub use cell::{CellKey, Side};
pub use dimensions::GridDimensions;
pub use matrix::StitchGrid;
