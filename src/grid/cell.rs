use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::io::error::{ChartError, invalid_parameter};

/// One face of the work; each side carries its own motifs and manual fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The side facing the viewer
    Front,
    /// The reverse side
    Back,
}

impl Side {
    /// Both sides in display order
    pub const ALL: [Self; 2] = [Self::Front, Self::Back];

    /// The other side of the work
    pub const fn opposite(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => write!(f, "front"),
            Self::Back => write!(f, "back"),
        }
    }
}

impl FromStr for Side {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            other => Err(invalid_parameter("side", &other, &"expected 'front' or 'back'")),
        }
    }
}

/// Canonical address of a grid cell
///
/// The textual form is always `"row,col"`. Parsing also accepts `"row-col"`
/// so keys written by older tools still resolve to the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    /// Zero-based row, counted from the top
    pub row: usize,
    /// Zero-based column, counted from the left
    pub col: usize,
}

impl CellKey {
    /// Create a key for the given cell
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for CellKey {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .or_else(|| s.split_once('-'))
            .ok_or_else(|| invalid_parameter("cell", &s, &"expected 'row,col'"))?;

        let row = row
            .trim()
            .parse::<usize>()
            .map_err(|e| invalid_parameter("cell", &s, &e))?;
        let col = col
            .trim()
            .parse::<usize>()
            .map_err(|e| invalid_parameter("cell", &s, &e))?;

        Ok(Self { row, col })
    }
}
