//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Default verbosity for a run
pub const fn default_level(quiet: bool) -> LevelFilter {
    if quiet { LevelFilter::WARN } else { LevelFilter::INFO }
}

/// Build the log filter, honouring `RUST_LOG` when it is set
pub fn build_filter(quiet: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level(quiet).into())
        .from_env_lossy()
}

/// Install a stderr logger
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one keeps running.
pub fn init_logging(quiet: bool) -> bool {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(build_filter(quiet))
        .with(fmt_layer)
        .try_init()
        .is_ok()
}
