//! Motifs placed on the chart

/// Ordered motif list for one side
pub mod layer;
/// A single placed motif and its clamped parameters
pub mod placed;

pub use layer::MotifLayer;
pub use placed::{FlipAxis, ImageSource, PlacedMotif};
