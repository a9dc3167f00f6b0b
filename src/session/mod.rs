//! Editable chart state and regeneration scheduling

/// Coalescing of rapid edits into one regeneration
pub mod debounce;
/// The editing session
pub mod state;

pub use debounce::RegenerationDebouncer;
pub use state::Session;
