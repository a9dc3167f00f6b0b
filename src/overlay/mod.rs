//! Hand-painted cell overrides

/// Per-side manual fill maps
pub mod manual;

pub use manual::{FillColor, ManualFills};
