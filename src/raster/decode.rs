use image::RgbaImage;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::io::error::{ChartError, Result};
use crate::motif::ImageSource;

/// Monotonic counter identifying one regeneration pass
///
/// Decodes carry the generation that requested them, so a result for a source
/// that has since been re-requested can be told apart from the current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// The generation before any pass has run
    pub const fn initial() -> Self {
        Self(0)
    }

    /// The generation that follows this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Raw counter value
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Check whether work tagged with `self` is older than `current`
    pub const fn is_stale(self, current: Self) -> bool {
        self.0 < current.0
    }
}

/// Decode a motif image into RGBA pixels
///
/// # Errors
///
/// Returns an error if the file cannot be read or the data is not a
/// supported image format
pub fn decode(source: &ImageSource) -> Result<RgbaImage> {
    match source {
        ImageSource::Encoded(bytes) => image::load_from_memory(bytes)
            .map(|image| image.to_rgba8())
            .map_err(|e| ChartError::ImageDecode {
                source_name: "<memory>".to_string(),
                source: e,
            }),
        ImageSource::File(path) => image::open(path)
            .map(|image| image.to_rgba8())
            .map_err(|e| ChartError::ImageDecode {
                source_name: path.display().to_string(),
                source: e,
            }),
    }
}

/// Result of one background decode
#[derive(Debug)]
pub struct DecodeCompletion {
    /// Generation the decode was requested for
    pub generation: Generation,
    /// Cache key of the decoded image (the source motif id)
    pub key: String,
    /// Decoded pixels or the reason decoding failed
    pub result: Result<RgbaImage>,
}

/// Runs decodes on the rayon pool and collects tagged completions
///
/// Every completion is handed back with its tag; deciding whether it is still
/// wanted is left to the owner, which knows the latest request per source.
pub struct DecodeQueue {
    sender: Sender<DecodeCompletion>,
    receiver: Receiver<DecodeCompletion>,
    in_flight: usize,
}

impl Default for DecodeQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeQueue {
    /// Create an idle queue
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            in_flight: 0,
        }
    }

    /// Start decoding `source` in the background
    pub fn submit(&mut self, generation: Generation, key: impl Into<String>, source: ImageSource) {
        let key = key.into();
        let sender = self.sender.clone();
        debug!(key = %key, generation = generation.value(), "Submitting motif decode");
        rayon::spawn(move || {
            let result = decode(&source);
            // The receiver lives as long as the queue; a send error means the
            // queue was dropped and nobody wants the result
            let _ = sender.send(DecodeCompletion {
                generation,
                key,
                result,
            });
        });
        self.in_flight += 1;
    }

    /// Number of decodes submitted but not yet received
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Collect every completion that has already arrived
    pub fn drain(&mut self) -> Vec<DecodeCompletion> {
        let mut completions = Vec::new();
        while let Ok(completion) = self.receiver.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            completions.push(completion);
        }
        completions
    }

    /// Block until every submitted decode has completed or `timeout` elapses
    pub fn wait(&mut self, timeout: Duration) -> Vec<DecodeCompletion> {
        let deadline = Instant::now() + timeout;
        let mut completions = self.drain();
        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                debug!(pending = self.in_flight, "Stopped waiting for motif decodes");
                break;
            }
            match self.receiver.recv_timeout(remaining) {
                Ok(completion) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    completions.push(completion);
                }
                Err(_) => break,
            }
        }
        completions
    }
}
