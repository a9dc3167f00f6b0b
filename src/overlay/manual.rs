use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::grid::{CellKey, Side};
use crate::io::error::{ChartError, invalid_parameter};

/// Color painted onto a cell
///
/// Any color other than `White` marks the cell filled. `White` is an explicit
/// erase: the cell is open even if a motif or the border would fill it. An
/// absent entry means no override at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillColor {
    /// Forced open
    White,
    /// Filled, shown red
    Red,
    /// Filled, shown green
    Green,
    /// Filled, shown blue
    Blue,
}

impl FillColor {
    /// Whether a cell painted with this color counts as filled
    pub fn is_filled(self) -> bool {
        self != Self::White
    }

    /// Display color as RGB
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::White => [255, 255, 255],
            Self::Red => [220, 38, 38],
            Self::Green => [22, 163, 74],
            Self::Blue => [37, 99, 235],
        }
    }
}

impl fmt::Display for FillColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::White => "white",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        })
    }
}

impl FromStr for FillColor {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Self::White),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            other => Err(invalid_parameter("color", &other, &"unknown fill color")),
        }
    }
}

/// Manual overrides for both sides, keyed by [`CellKey`]
///
/// Only touched cells have entries; an empty map means no overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualFills {
    front: BTreeMap<CellKey, FillColor>,
    back: BTreeMap<CellKey, FillColor>,
}

impl ManualFills {
    /// Create an overlay with no overrides
    pub const fn new() -> Self {
        Self {
            front: BTreeMap::new(),
            back: BTreeMap::new(),
        }
    }

    /// Override painted on a cell, if any
    pub fn get(&self, row: usize, col: usize, side: Side) -> Option<FillColor> {
        self.side(side).get(&CellKey::new(row, col)).copied()
    }

    /// Paint a cell with `color`, replacing any previous override
    pub fn set(&mut self, row: usize, col: usize, side: Side, color: FillColor) {
        self.side_mut(side).insert(CellKey::new(row, col), color);
    }

    /// Drop the override on a cell, returning what was there
    pub fn clear(&mut self, row: usize, col: usize, side: Side) -> Option<FillColor> {
        self.side_mut(side).remove(&CellKey::new(row, col))
    }

    /// Brush stroke with toggle semantics
    ///
    /// Painting the color a cell already has removes the override; any other
    /// color replaces it. Returns the override left on the cell.
    pub fn paint(&mut self, row: usize, col: usize, side: Side, color: FillColor) -> Option<FillColor> {
        if self.get(row, col, side) == Some(color) {
            self.clear(row, col, side);
            None
        } else {
            self.set(row, col, side, color);
            Some(color)
        }
    }

    /// Force a cell open regardless of motifs or border
    pub fn erase(&mut self, row: usize, col: usize, side: Side) {
        self.set(row, col, side, FillColor::White);
    }

    /// Fill state imposed by the override: `Some(true)` filled, `Some(false)`
    /// forced open, `None` when the cell is untouched
    pub fn override_for(&self, row: usize, col: usize, side: Side) -> Option<bool> {
        self.get(row, col, side).map(FillColor::is_filled)
    }

    /// All overrides of one side
    pub const fn side(&self, side: Side) -> &BTreeMap<CellKey, FillColor> {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }

    const fn side_mut(&mut self, side: Side) -> &mut BTreeMap<CellKey, FillColor> {
        match side {
            Side::Front => &mut self.front,
            Side::Back => &mut self.back,
        }
    }

    /// Remove every override on one side
    pub fn clear_side(&mut self, side: Side) {
        self.side_mut(side).clear();
    }

    /// Remove every override on both sides
    pub fn clear_all(&mut self) {
        self.front.clear();
        self.back.clear();
    }

    /// Number of overrides on one side
    pub fn len(&self, side: Side) -> usize {
        self.side(side).len()
    }

    /// Check whether neither side has overrides
    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }
}
