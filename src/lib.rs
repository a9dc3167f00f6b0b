//! Filet crochet chart composition engine
//!
//! Places raster motifs, a geometric border and hand-painted cells onto a
//! two-sided grid of filled/open squares, then derives stitch counts and the
//! yarn needed to work the chart.

#![forbid(unsafe_code)]

/// Perimeter fill predicates selected by pattern id
pub mod border;
/// Layer compositing into an emitted pattern
pub mod compose;
/// Grid coordinates, dimensions and the boolean stitch matrix
pub mod grid;
/// Bounded undo/redo over motif and manual-fill state
pub mod history;
/// Input/output operations, configuration and error handling
pub mod io;
/// Placed motifs and the per-side motif lists
pub mod motif;
/// Per-cell color overrides painted by hand
pub mod overlay;
/// Motif image decoding and threshold rasterization
pub mod raster;
/// Editable chart state, debounced regeneration and generation tagging
pub mod session;
/// Yarn mass and skein estimates
pub mod yarn;

pub use io::error::{ChartError, Result};
