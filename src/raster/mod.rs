//! Motif image decoding and rasterization onto the grid
//!
//! A motif is decoded once, sampled into a square ink mask (its footprint)
//! and OR-stamped into a grid buffer around its grid-space center.

/// Image decoding with generation-tagged completions
pub mod decode;
/// Threshold sampling of decoded images into ink masks
pub mod footprint;
/// OR-stamping of footprints into a grid
pub mod stamp;

pub use decode::{DecodeCompletion, DecodeQueue, Generation};
pub use footprint::Footprint;
