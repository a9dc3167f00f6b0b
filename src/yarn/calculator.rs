use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::grid::GridDimensions;
use crate::io::configuration::{DENSE_GRAMS_PER_CM2, OPEN_GRAMS_PER_CM2, SKEIN_GRAMS};
use crate::io::error::{ChartError, invalid_parameter};

/// Grid density, which selects the yarn consumption rate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridType {
    /// Dense grid ("tett")
    #[default]
    #[serde(rename = "tett")]
    Tett,
    /// Open grid ("åpent")
    #[serde(rename = "åpent", alias = "apent")]
    Apent,
}

impl GridType {
    /// Grams of yarn consumed per square centimeter of finished work
    pub const fn grams_per_cm2(self) -> f64 {
        match self {
            Self::Tett => DENSE_GRAMS_PER_CM2,
            Self::Apent => OPEN_GRAMS_PER_CM2,
        }
    }
}

impl fmt::Display for GridType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tett => "tett",
            Self::Apent => "åpent",
        })
    }
}

impl FromStr for GridType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tett" => Ok(Self::Tett),
            "åpent" | "apent" => Ok(Self::Apent),
            other => Err(invalid_parameter("grid_type", &other, &"expected 'tett' or 'åpent'")),
        }
    }
}

/// Yarn needed for a piece of work
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YarnEstimate {
    /// Total yarn mass in grams
    pub grams: f64,
    /// Whole 50 g skeins needed
    pub skeins_needed: u32,
}

/// Estimate yarn from physical size and grid density
///
/// `grams = width_cm * height_cm * rate` and `skeins = ceil(grams / 50)`.
pub fn calculate(width_cm: f64, height_cm: f64, grid_type: GridType) -> YarnEstimate {
    let area = width_cm * height_cm;
    let grams = area * grid_type.grams_per_cm2();
    let skeins_needed = (grams / SKEIN_GRAMS).ceil().to_u32().unwrap_or(0);
    YarnEstimate {
        grams,
        skeins_needed,
    }
}

/// Estimate yarn for a chart of the given cell dimensions
pub fn estimate_for(dimensions: GridDimensions, grid_type: GridType) -> YarnEstimate {
    calculate(dimensions.width_cm(), dimensions.height_cm(), grid_type)
}
