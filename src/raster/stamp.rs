use crate::grid::StitchGrid;
use crate::raster::Footprint;

/// OR a footprint into `grid`, centered on `(center_col, center_row)`
///
/// Pixel `(px, py)` lands on column `center_col - edge/2 + px` and row
/// `center_row - edge/2 + py`. Pixels that fall outside the grid are dropped,
/// which lets a motif hang partly off the chart.
pub fn stamp(grid: &mut StitchGrid, footprint: &Footprint, center: (i64, i64)) {
    let dimensions = grid.dimensions();
    let half = i64::from(footprint.edge() / 2);
    let (center_col, center_row) = center;

    for (px, py) in footprint.ink_pixels() {
        let col = center_col - half + i64::from(px);
        let row = center_row - half + i64::from(py);
        if dimensions.contains_signed(row, col) {
            grid.merge(row as usize, col as usize, true);
        }
    }
}
