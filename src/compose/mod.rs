//! Layer compositing
//!
//! A pass rasterizes every motif of one side, ORs in the border and applies
//! the manual overlay, then emits an immutable [`Pattern`].

/// Composition pass and the canonical effective-cell rule
pub mod compositor;
/// Display-time reading of filled cells
pub mod interpretation;
/// Emitted pattern snapshot and stitch counts
pub mod pattern;

pub use compositor::{ChartExport, CompositionInput, ImageLookup, effective_cell, generate};
pub use interpretation::StitchInterpretation;
pub use pattern::{Pattern, PatternSummary, StitchCounts};
