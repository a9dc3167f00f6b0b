use crate::border::BorderPattern;
use crate::border::snake::is_snake_cell;
use crate::grid::{GridDimensions, Side, StitchGrid};

/// Depth of the band used by `checkerboard-edges`
const CHECKERBOARD_BAND: usize = 3;
/// Depth of the band used by `checkerboard-2row`
const CHECKERBOARD_2ROW_BAND: usize = 2;
/// Corner cells closer than this (Manhattan) belong to a corner triangle
const CORNER_TRIANGLE_REACH: usize = 5;

/// Check whether the border pattern fills a cell
///
/// Pure function of its inputs; `side` only matters for
/// `checkerboard-edges`, whose parity flips on the back of odd-width charts
/// so the pattern stays symmetric when the work is turned over. Cells outside
/// the grid are never part of the border.
pub fn is_edge_cell(
    col: usize,
    row: usize,
    grid_width: usize,
    grid_height: usize,
    pattern: BorderPattern,
    side: Side,
) -> bool {
    if col >= grid_width || row >= grid_height {
        return false;
    }

    let depth = edge_distance(col, row, grid_width, grid_height);
    let even = (row + col) % 2 == 0;

    match pattern {
        BorderPattern::None => false,
        BorderPattern::Border1 => depth == 0,
        BorderPattern::Border2 => depth < 2,
        BorderPattern::CornerTriangles => {
            corner_distance(col, row, grid_width, grid_height) < CORNER_TRIANGLE_REACH
        }
        BorderPattern::CheckerboardEdges => {
            let invert = grid_width % 2 == 1 && side == Side::Back;
            depth < CHECKERBOARD_BAND && (even != invert)
        }
        BorderPattern::SnakePattern => is_snake_cell(col, row, grid_width, grid_height),
        BorderPattern::SteppedBorder => depth == 0 || depth == 2,
        BorderPattern::Checkerboard2Row => depth < CHECKERBOARD_2ROW_BAND && even,
    }
}

/// Evaluate the border pattern over a whole grid
pub fn border_mask(dimensions: GridDimensions, pattern: BorderPattern, side: Side) -> StitchGrid {
    StitchGrid::from_fn(dimensions, |row, col| {
        is_edge_cell(
            col,
            row,
            dimensions.width(),
            dimensions.height(),
            pattern,
            side,
        )
    })
}

/// Distance in cells from the nearest edge (0 on the outermost ring)
const fn edge_distance(col: usize, row: usize, width: usize, height: usize) -> usize {
    let horizontal = min(col, width - 1 - col);
    let vertical = min(row, height - 1 - row);
    min(horizontal, vertical)
}

/// Manhattan distance to the nearest of the four corners
const fn corner_distance(col: usize, row: usize, width: usize, height: usize) -> usize {
    let horizontal = min(col, width - 1 - col);
    let vertical = min(row, height - 1 - row);
    horizontal + vertical
}

const fn min(a: usize, b: usize) -> usize {
    if a < b { a } else { b }
}
