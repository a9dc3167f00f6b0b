use num_traits::ToPrimitive;
use std::path::PathBuf;
use std::sync::Arc;

use crate::grid::GridDimensions;
use crate::io::configuration::{
    DEFAULT_MOTIF_SIZE, DEFAULT_THRESHOLD, MAX_MOTIF_SIZE, MAX_POSITION_PERCENT, MIN_MOTIF_SIZE,
    MIN_POSITION_PERCENT,
};

/// Where a motif's raster image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Encoded image bytes (PNG, JPEG, ...) held in memory
    Encoded(Arc<[u8]>),
    /// Image file on disk
    File(PathBuf),
}

/// Mirror axis for flip operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAxis {
    /// Mirror left-right
    Horizontal,
    /// Mirror top-bottom
    Vertical,
}

/// A motif placed on one side of the chart
///
/// `id` identifies the placement; several placements may share a `motif_id`.
/// Size, threshold and position are clamped on every write.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMotif {
    /// Placement identity
    pub id: u64,
    /// Identity of the source motif; also keys the decoded-image cache
    pub motif_id: String,
    /// Display name
    pub name: String,
    x: f64,
    y: f64,
    size: f64,
    threshold: u8,
    /// Mirror the image left-right before sampling
    pub flip_horizontal: bool,
    /// Mirror the image top-bottom before sampling
    pub flip_vertical: bool,
    /// Uploaded by the user rather than taken from the library
    pub is_custom: bool,
    /// Source image
    pub image: ImageSource,
}

impl PlacedMotif {
    /// Place a motif centered on the grid with default size and threshold
    pub fn new(
        id: u64,
        motif_id: impl Into<String>,
        name: impl Into<String>,
        image: ImageSource,
    ) -> Self {
        Self {
            id,
            motif_id: motif_id.into(),
            name: name.into(),
            x: 50.0,
            y: 50.0,
            size: DEFAULT_MOTIF_SIZE,
            threshold: DEFAULT_THRESHOLD,
            flip_horizontal: false,
            flip_vertical: false,
            is_custom: false,
            image,
        }
    }

    /// Builder-style position setter
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.set_position(x, y);
        self
    }

    /// Builder-style size setter
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.set_size(size);
        self
    }

    /// Builder-style threshold setter
    #[must_use]
    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.set_threshold(threshold);
        self
    }

    /// Horizontal position as a percentage of grid width
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical position as a percentage of grid height
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Size multiplier in `[0.1, 1.2]`
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// Luminance threshold below which a pixel counts as ink
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Move the motif; both coordinates are clamped to `[-50, 150]` percent
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = clamp_finite(x, MIN_POSITION_PERCENT, MAX_POSITION_PERCENT, 50.0);
        self.y = clamp_finite(y, MIN_POSITION_PERCENT, MAX_POSITION_PERCENT, 50.0);
    }

    /// Resize the motif; the multiplier is clamped to `[0.1, 1.2]`
    pub fn set_size(&mut self, size: f64) {
        self.size = clamp_finite(size, MIN_MOTIF_SIZE, MAX_MOTIF_SIZE, DEFAULT_MOTIF_SIZE);
    }

    /// Set the ink threshold, clamped to `[0, 255]`
    pub fn set_threshold(&mut self, threshold: i64) {
        self.threshold = threshold.clamp(0, 255).to_u8().unwrap_or(DEFAULT_THRESHOLD);
    }

    /// Toggle mirroring along one axis
    pub const fn flip(&mut self, axis: FlipAxis) {
        match axis {
            FlipAxis::Horizontal => self.flip_horizontal = !self.flip_horizontal,
            FlipAxis::Vertical => self.flip_vertical = !self.flip_vertical,
        }
    }

    /// Grid cell under the motif's center as `(col, row)`
    ///
    /// May lie outside the grid; only the visible part of the footprint is
    /// stamped.
    pub fn grid_center(&self, dimensions: GridDimensions) -> (i64, i64) {
        let col = (self.x / 100.0 * dimensions.width() as f64).floor();
        let row = (self.y / 100.0 * dimensions.height() as f64).floor();
        (col.to_i64().unwrap_or(0), row.to_i64().unwrap_or(0))
    }
}

fn clamp_finite(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}
