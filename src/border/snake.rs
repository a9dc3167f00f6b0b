//! Serpentine border
//!
//! The outer three-cell band is split into four corner blocks and four edge
//! bands. Corner blocks are solid 3 x 3 squares without their center. Edge
//! bands repeat an eight-cell unit along their length: three solid cross
//! sections, a lone cell on the outer line, three solid cross sections, a lone
//! cell on the inner line. The result reads as a thick line winding back and
//! forth inside the band.

/// Depth of the serpentine band
pub const SNAKE_BAND: usize = 3;
/// Length of one repeat along an edge band
pub const SNAKE_PERIOD: usize = 8;

/// Check whether the serpentine border fills a cell
pub const fn is_snake_cell(col: usize, row: usize, width: usize, height: usize) -> bool {
    if col >= width || row >= height {
        return false;
    }

    let in_left = col < SNAKE_BAND;
    let in_right = col + SNAKE_BAND >= width;
    let in_top = row < SNAKE_BAND;
    let in_bottom = row + SNAKE_BAND >= height;

    // Corners are claimed before the band logic so no cell is handled twice
    if (in_left || in_right) && (in_top || in_bottom) {
        return !is_corner_center(col, row, width, height);
    }

    if in_top || in_bottom {
        // Horizontal band: the unit runs along columns, the lone cell picks a row
        let local = if in_top {
            row
        } else {
            row + SNAKE_BAND - height
        };
        return unit_fills((col - SNAKE_BAND) % SNAKE_PERIOD, outward(local, in_top));
    }

    if in_left || in_right {
        // Vertical band: the unit runs along rows, the lone cell picks a column
        let local = if in_left {
            col
        } else {
            col + SNAKE_BAND - width
        };
        return unit_fills((row - SNAKE_BAND) % SNAKE_PERIOD, outward(local, in_left));
    }

    false
}

/// Position across the band measured from the outer edge (0 = outermost line)
const fn outward(local: usize, measured_from_outer: bool) -> usize {
    if measured_from_outer {
        local
    } else {
        SNAKE_BAND - 1 - local
    }
}

/// Whether a cell at `pos_in_pattern` along the band and `depth` across it is filled
const fn unit_fills(pos_in_pattern: usize, depth: usize) -> bool {
    match pos_in_pattern {
        3 => depth == 0,
        7 => depth == SNAKE_BAND - 1,
        _ => true,
    }
}

/// Check whether a cell is the middle of one of the four corner blocks
const fn is_corner_center(col: usize, row: usize, width: usize, height: usize) -> bool {
    let center_col = col == 1 || col + 2 == width;
    let center_row = row == 1 || row + 2 == height;
    center_col && center_row
}
