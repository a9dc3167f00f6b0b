//! Geometric border patterns
//!
//! A border is a pure predicate over a cell coordinate. It is re-evaluated on
//! every composition pass and never cached.

/// Border pattern identifiers
pub mod pattern;
/// Per-cell border predicates
pub mod predicate;
/// Serpentine border geometry
pub mod snake;

pub use pattern::BorderPattern;
pub use predicate::{border_mask, is_edge_cell};
