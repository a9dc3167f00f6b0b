//! Yarn requirement estimates

/// Mass and skein count from physical size and grid density
pub mod calculator;

pub use calculator::{GridType, YarnEstimate, calculate, estimate_for};
