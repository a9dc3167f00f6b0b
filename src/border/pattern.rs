use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::io::error::{ChartError, invalid_parameter};

/// Selectable border pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderPattern {
    /// No border
    #[default]
    None,
    /// Outermost ring
    #[serde(rename = "border-1")]
    Border1,
    /// Outermost two rings
    #[serde(rename = "border-2")]
    Border2,
    /// Triangular wedges in the four corners
    CornerTriangles,
    /// Checkerboard in a three-cell band
    CheckerboardEdges,
    /// Serpentine band with solid corner blocks
    SnakePattern,
    /// Outer ring plus a second ring two cells in
    SteppedBorder,
    /// Checkerboard in a two-cell band
    #[serde(rename = "checkerboard-2row")]
    Checkerboard2Row,
}

impl BorderPattern {
    /// Every pattern in menu order
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::Border1,
        Self::Border2,
        Self::CornerTriangles,
        Self::CheckerboardEdges,
        Self::SnakePattern,
        Self::SteppedBorder,
        Self::Checkerboard2Row,
    ];

    /// Stable textual id of the pattern
    pub const fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Border1 => "border-1",
            Self::Border2 => "border-2",
            Self::CornerTriangles => "corner-triangles",
            Self::CheckerboardEdges => "checkerboard-edges",
            Self::SnakePattern => "snake-pattern",
            Self::SteppedBorder => "stepped-border",
            Self::Checkerboard2Row => "checkerboard-2row",
        }
    }
}

impl fmt::Display for BorderPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BorderPattern {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.id() == s)
            .ok_or_else(|| invalid_parameter("border_pattern", &s, &"unknown border pattern"))
    }
}
