//! Input/output operations and ambient services

/// Command-line interface for batch chart composition
pub mod cli;
/// Engine constants and defaults
pub mod configuration;
/// Error types shared by the whole crate
pub mod error;
/// PNG rendering of composed charts
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Progress display for batch runs
pub mod progress;
/// JSON project files describing a chart
pub mod project;
