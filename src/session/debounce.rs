use std::time::{Duration, Instant};

use crate::io::configuration::REGENERATION_DEBOUNCE_MS;

/// Trailing-edge debounce for regeneration requests
///
/// Each request replaces the pending deadline, so only the last edit in a
/// burst triggers a pass. Requests are superseded, never queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegenerationDebouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Default for RegenerationDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(REGENERATION_DEBOUNCE_MS))
    }
}

impl RegenerationDebouncer {
    /// Create a debouncer with the given quiet period
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Quiet period required before firing
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Request a regeneration, cancelling any pending one
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Fire once the quiet period has elapsed
    ///
    /// Returns `true` exactly once per burst of requests.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Check whether a request is waiting
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the pending request will fire
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drop the pending request
    pub const fn cancel(&mut self) {
        self.deadline = None;
    }
}
