use serde::Serialize;

use crate::border::BorderPattern;
use crate::grid::{GridDimensions, Side, StitchGrid};
use crate::motif::PlacedMotif;
use crate::yarn::YarnEstimate;

/// Square and stitch tallies for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StitchCounts {
    /// Cells in the grid
    pub total_squares: usize,
    /// Filled cells
    pub filled_squares: usize,
    /// Open cells
    pub open_squares: usize,
    /// Foundation chain: one stitch per grid line crossing, `(w + 1) * (h + 1)`
    pub foundation_stitches: usize,
    /// One extra stitch per filled square
    pub filled_stitches: usize,
    /// Foundation plus filled stitches
    pub total_stitches: usize,
}

impl StitchCounts {
    /// Tally a composed grid
    pub fn from_grid(grid: &StitchGrid) -> Self {
        let dimensions = grid.dimensions();
        let total_squares = dimensions.cell_count();
        let filled_squares = grid.count_filled();
        let foundation_stitches = (dimensions.width() + 1) * (dimensions.height() + 1);
        Self {
            total_squares,
            filled_squares,
            open_squares: total_squares - filled_squares,
            foundation_stitches,
            filled_stitches: filled_squares,
            total_stitches: foundation_stitches + filled_squares,
        }
    }
}

/// Immutable result of one composition pass for one side
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    side: Side,
    border: BorderPattern,
    grid: StitchGrid,
    motif_grid: StitchGrid,
    counts: StitchCounts,
    yarn: YarnEstimate,
    grid_motifs: Vec<PlacedMotif>,
}

impl Pattern {
    pub(crate) fn new(
        side: Side,
        border: BorderPattern,
        grid: StitchGrid,
        motif_grid: StitchGrid,
        yarn: YarnEstimate,
        grid_motifs: Vec<PlacedMotif>,
    ) -> Self {
        let counts = StitchCounts::from_grid(&grid);
        Self {
            side,
            border,
            grid,
            motif_grid,
            counts,
            yarn,
            grid_motifs,
        }
    }

    /// Side this pattern was composed for
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Border pattern applied
    pub const fn border(&self) -> BorderPattern {
        self.border
    }

    /// Grid size in cells
    pub const fn dimensions(&self) -> GridDimensions {
        self.grid.dimensions()
    }

    /// Effective fill of every cell (motifs and border, then manual overrides)
    pub const fn grid(&self) -> &StitchGrid {
        &self.grid
    }

    /// Motif contributions alone, before border and overrides
    pub const fn motif_grid(&self) -> &StitchGrid {
        &self.motif_grid
    }

    /// Square and stitch tallies
    pub const fn counts(&self) -> StitchCounts {
        self.counts
    }

    /// Yarn estimate for the chart's physical size
    pub const fn yarn(&self) -> YarnEstimate {
        self.yarn
    }

    /// Total yarn in grams
    pub const fn yarn_grams(&self) -> f64 {
        self.yarn.grams
    }

    /// Whole skeins needed
    pub const fn skeins_needed(&self) -> u32 {
        self.yarn.skeins_needed
    }

    /// Motifs that were composed into this pattern
    pub fn grid_motifs(&self) -> &[PlacedMotif] {
        &self.grid_motifs
    }

    /// Serializable digest of the pattern
    pub fn summary(&self) -> PatternSummary {
        PatternSummary {
            side: self.side,
            border: self.border,
            width: self.dimensions().width(),
            height: self.dimensions().height(),
            counts: self.counts,
            yarn: self.yarn,
            motifs: self.grid_motifs.iter().map(|motif| motif.name.clone()).collect(),
            rows: self
                .grid
                .to_rows()
                .iter()
                .map(|row| row.iter().map(|&filled| if filled { '#' } else { '.' }).collect())
                .collect(),
        }
    }
}

/// Serializable digest of a [`Pattern`], rows drawn with `#` (filled) and `.` (open)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternSummary {
    /// Side composed
    pub side: Side,
    /// Border applied
    pub border: BorderPattern,
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
    /// Square and stitch tallies
    #[serde(flatten)]
    pub counts: StitchCounts,
    /// Yarn estimate
    pub yarn: YarnEstimate,
    /// Names of the composed motifs
    pub motifs: Vec<String>,
    /// Chart rows, top to bottom
    pub rows: Vec<String>,
}
