use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::io::error::{ChartError, invalid_parameter};

/// How a filled cell is read when the chart is displayed
///
/// Only affects rendering; the stored grid and every count are unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StitchInterpretation {
    /// Filled cells are drawn black (solid stitches)
    #[default]
    BlackFilled,
    /// Filled cells are drawn white; open mesh is drawn black
    BlackOpen,
}

impl StitchInterpretation {
    /// Whether a cell with the given fill state is drawn black
    pub const fn renders_black(self, filled: bool) -> bool {
        match self {
            Self::BlackFilled => filled,
            Self::BlackOpen => !filled,
        }
    }
}

impl fmt::Display for StitchInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BlackFilled => "black_filled",
            Self::BlackOpen => "black_open",
        })
    }
}

impl FromStr for StitchInterpretation {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black_filled" => Ok(Self::BlackFilled),
            "black_open" => Ok(Self::BlackOpen),
            other => Err(invalid_parameter(
                "stitch_interpretation",
                &other,
                &"expected 'black_filled' or 'black_open'",
            )),
        }
    }
}
