use image::RgbaImage;
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::border::{BorderPattern, is_edge_cell};
use crate::compose::{Pattern, StitchInterpretation};
use crate::grid::{GridDimensions, Side, StitchGrid};
use crate::motif::PlacedMotif;
use crate::overlay::ManualFills;
use crate::raster::stamp::stamp;
use crate::raster::{Footprint, Generation};
use crate::yarn::{GridType, YarnEstimate, estimate_for};

/// Source of decoded motif images for a composition pass
///
/// Returning `None` means the image is missing or failed to decode; the motif
/// then contributes nothing.
pub trait ImageLookup: Sync {
    /// Decoded pixels for a placed motif
    fn image(&self, motif: &PlacedMotif) -> Option<&RgbaImage>;
}

impl ImageLookup for HashMap<String, RgbaImage> {
    fn image(&self, motif: &PlacedMotif) -> Option<&RgbaImage> {
        self.get(&motif.motif_id)
    }
}

impl ImageLookup for HashMap<String, Arc<RgbaImage>> {
    fn image(&self, motif: &PlacedMotif) -> Option<&RgbaImage> {
        self.get(&motif.motif_id).map(AsRef::as_ref)
    }
}

/// Everything one composition pass reads
#[derive(Debug, Clone, Copy)]
pub struct CompositionInput<'a> {
    /// Side being composed
    pub side: Side,
    /// Motifs placed on that side
    pub motifs: &'a [PlacedMotif],
    /// Grid size in cells
    pub dimensions: GridDimensions,
    /// Border pattern to OR in
    pub border: BorderPattern,
    /// Manual overrides (only `side` is read)
    pub manual_fills: &'a ManualFills,
    /// Grid density for the yarn estimate
    pub grid_type: GridType,
}

/// Fill of one cell after all layers are applied
///
/// Motif and border fills are OR-ed; a manual override, when present, wins
/// unconditionally. Every consumer of cell state goes through this rule.
pub const fn effective_cell(motif_fill: bool, border_fill: bool, manual: Option<bool>) -> bool {
    match manual {
        Some(filled) => filled,
        None => motif_fill || border_fill,
    }
}

/// Compose one side into a pattern
pub fn generate(input: &CompositionInput<'_>, images: &impl ImageLookup) -> Pattern {
    generate_tagged(input, images, Generation::initial())
}

/// Compose one side into a pattern, logging it under the given regeneration pass
pub fn generate_tagged(
    input: &CompositionInput<'_>,
    images: &impl ImageLookup,
    generation: Generation,
) -> Pattern {
    let dimensions = input.dimensions;
    let motif_grid = rasterize_motifs(input.motifs, dimensions, images);
    let grid = apply_layers(&motif_grid, input.border, input.side, input.manual_fills);
    let yarn = estimate_for(dimensions, input.grid_type);

    let pattern = Pattern::new(
        input.side,
        input.border,
        grid,
        motif_grid,
        yarn,
        input.motifs.to_vec(),
    );

    info!(
        side = %input.side,
        generation = generation.value(),
        width = dimensions.width(),
        height = dimensions.height(),
        filled = pattern.counts().filled_squares,
        total_stitches = pattern.counts().total_stitches,
        "Composed pattern"
    );
    pattern
}

/// Rasterize every motif of a side into one OR-merged grid
///
/// Footprints are sampled in parallel; merge order does not matter because
/// stamping only ever sets cells.
pub fn rasterize_motifs(
    motifs: &[PlacedMotif],
    dimensions: GridDimensions,
    images: &impl ImageLookup,
) -> StitchGrid {
    let footprints: Vec<(Footprint, (i64, i64))> = motifs
        .par_iter()
        .filter_map(|motif| {
            let Some(image) = images.image(motif) else {
                debug!(
                    id = motif.id,
                    motif = %motif.motif_id,
                    "No decoded image, motif contributes nothing"
                );
                return None;
            };
            Some((
                Footprint::for_motif(image, motif),
                motif.grid_center(dimensions),
            ))
        })
        .collect();

    let mut grid = StitchGrid::new(dimensions);
    for (footprint, center) in &footprints {
        stamp(&mut grid, footprint, *center);
    }
    grid
}

/// Apply border and manual overrides on top of a motif grid
pub fn apply_layers(
    motif_grid: &StitchGrid,
    border: BorderPattern,
    side: Side,
    manual_fills: &ManualFills,
) -> StitchGrid {
    let dimensions = motif_grid.dimensions();
    StitchGrid::from_fn(dimensions, |row, col| {
        effective_cell(
            motif_grid.get(row, col),
            is_edge_cell(
                col,
                row,
                dimensions.width(),
                dimensions.height(),
                border,
                side,
            ),
            manual_fills.override_for(row, col, side),
        )
    })
}

/// Both sides of a chart plus the settings an export needs
#[derive(Debug, Clone, PartialEq)]
pub struct ChartExport {
    /// Front-side pattern
    pub front: Pattern,
    /// Back-side pattern
    pub back: Pattern,
    /// Display reading of filled cells
    pub interpretation: StitchInterpretation,
    /// Border pattern applied to both sides
    pub border: BorderPattern,
    /// Grid density used for the yarn estimate
    pub grid_type: GridType,
}

impl ChartExport {
    /// Pattern for one side
    pub const fn pattern(&self, side: Side) -> &Pattern {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }

    /// Yarn estimate for the chart (both sides share one physical piece)
    pub const fn yarn(&self) -> YarnEstimate {
        self.front.yarn()
    }
}
