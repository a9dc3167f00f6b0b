//! Undo and redo over the editable chart state

/// Bounded snapshot stacks
pub mod manager;

pub use manager::{HistoryManager, HistorySnapshot};
