//! JSON project files describing a chart
//!
//! A project lists the physical size, the settings and, per side, the motifs
//! (with image paths relative to the project file) and the manual overrides
//! keyed by `"row,col"`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::border::BorderPattern;
use crate::compose::StitchInterpretation;
use crate::grid::{CellKey, Side};
use crate::io::configuration::{DEFAULT_MOTIF_SIZE, DEFAULT_THRESHOLD};
use crate::io::error::{Result, WithPath};
use crate::motif::{ImageSource, MotifLayer, PlacedMotif};
use crate::overlay::{FillColor, ManualFills};
use crate::session::Session;
use crate::yarn::GridType;

/// Top-level project document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Optional project title
    #[serde(default)]
    pub name: Option<String>,
    /// Finished width in centimeters
    pub width_cm: f64,
    /// Finished height in centimeters
    pub height_cm: f64,
    /// Grid density
    #[serde(default)]
    pub grid_type: GridType,
    /// Border pattern id
    #[serde(default)]
    pub border_pattern: BorderPattern,
    /// Display reading of filled cells
    #[serde(default)]
    pub stitch_interpretation: StitchInterpretation,
    /// Front-side content
    #[serde(default)]
    pub front: SideFile,
    /// Back-side content
    #[serde(default)]
    pub back: SideFile,
}

/// Content of one side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SideFile {
    /// Placed motifs
    #[serde(default)]
    pub motifs: Vec<MotifFile>,
    /// Manual overrides keyed by `"row,col"`
    #[serde(default)]
    pub manual_fills: BTreeMap<String, FillColor>,
}

/// One placed motif as written in a project file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotifFile {
    /// Source motif id; motifs sharing an id share one decoded image
    pub motif_id: String,
    /// Display name (defaults to the motif id)
    #[serde(default)]
    pub name: Option<String>,
    /// Image path, relative to the project file
    pub image: PathBuf,
    /// Horizontal center as a percentage of grid width
    #[serde(default = "default_position")]
    pub x: f64,
    /// Vertical center as a percentage of grid height
    #[serde(default = "default_position")]
    pub y: f64,
    /// Size multiplier
    #[serde(default = "default_size")]
    pub size: f64,
    /// Ink threshold
    #[serde(default = "default_threshold")]
    pub threshold: i64,
    /// Mirror left-right
    #[serde(default)]
    pub flip_horizontal: bool,
    /// Mirror top-bottom
    #[serde(default)]
    pub flip_vertical: bool,
    /// Uploaded rather than from the library
    #[serde(default)]
    pub is_custom: bool,
}

const fn default_position() -> f64 {
    50.0
}

const fn default_size() -> f64 {
    DEFAULT_MOTIF_SIZE
}

const fn default_threshold() -> i64 {
    DEFAULT_THRESHOLD as i64
}

impl ProjectFile {
    /// Read and parse a project file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid project
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_path(path)?;
        Self::parse(&text).with_path(path)
    }

    /// Parse a project from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid project
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build an editing session from the project
    ///
    /// Relative image paths are resolved against `base_dir`. Placement ids
    /// are assigned in file order, front side first.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is out of range or a manual-fill key is
    /// malformed
    pub fn into_session(self, base_dir: &Path) -> Result<Session> {
        let mut session = Session::from_centimeters(self.width_cm, self.height_cm)?;
        session.set_border(self.border_pattern);
        session.set_grid_type(self.grid_type);
        session.set_interpretation(self.stitch_interpretation);

        let mut next_id = 1;
        let front = build_layer(&self.front, base_dir, &mut next_id);
        let back = build_layer(&self.back, base_dir, &mut next_id);

        let mut manual_fills = ManualFills::new();
        for (side, file) in [(Side::Front, &self.front), (Side::Back, &self.back)] {
            for (key, color) in &file.manual_fills {
                let cell: CellKey = key.parse()?;
                manual_fills.set(cell.row, cell.col, side, *color);
            }
        }

        session.load_state(front, back, manual_fills);
        Ok(session)
    }
}

fn build_layer(side: &SideFile, base_dir: &Path, next_id: &mut u64) -> MotifLayer {
    let mut layer = MotifLayer::new();
    for entry in &side.motifs {
        let path = if entry.image.is_absolute() {
            entry.image.clone()
        } else {
            base_dir.join(&entry.image)
        };
        let mut motif = PlacedMotif::new(
            *next_id,
            entry.motif_id.clone(),
            entry.name.clone().unwrap_or_else(|| entry.motif_id.clone()),
            ImageSource::File(path),
        )
        .at(entry.x, entry.y)
        .with_size(entry.size)
        .with_threshold(entry.threshold);
        motif.flip_horizontal = entry.flip_horizontal;
        motif.flip_vertical = entry.flip_vertical;
        motif.is_custom = entry.is_custom;
        layer.push(motif);
        *next_id += 1;
    }
    layer
}
