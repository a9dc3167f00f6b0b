//! PNG rendering of composed charts

use image::{ImageBuffer, Rgba, RgbaImage};
use num_traits::ToPrimitive;
use std::path::Path;

use crate::compose::{Pattern, StitchInterpretation};
use crate::io::error::{ChartError, Result, invalid_parameter};
use crate::overlay::ManualFills;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const GRID_LINE: Rgba<u8> = Rgba([160, 160, 160, 255]);

/// Render a pattern as an image, one `cell_pixels` square per cell
///
/// Filled cells are drawn black or white according to `interpretation`;
/// cells carrying a colored manual override are drawn in that color. A
/// one-pixel gray line separates cells and frames the chart.
///
/// # Errors
///
/// Returns an error if `cell_pixels` is zero or the image would be too large
pub fn render_pattern(
    pattern: &Pattern,
    manual_fills: &ManualFills,
    interpretation: StitchInterpretation,
    cell_pixels: u32,
) -> Result<RgbaImage> {
    if cell_pixels == 0 {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"must be positive",
        ));
    }

    let dimensions = pattern.dimensions();
    let stride = cell_pixels + 1;
    let image_width = image_extent(dimensions.width(), stride)?;
    let image_height = image_extent(dimensions.height(), stride)?;
    let grid = pattern.grid();
    let side = pattern.side();

    let img = ImageBuffer::from_fn(image_width, image_height, |x, y| {
        if x % stride == 0 || y % stride == 0 {
            return GRID_LINE;
        }
        let col = (x / stride) as usize;
        let row = (y / stride) as usize;
        let filled = grid.get(row, col);

        match manual_fills.get(row, col, side) {
            Some(color) if color.is_filled() => {
                let [r, g, b] = color.rgb();
                Rgba([r, g, b, 255])
            }
            _ if interpretation.renders_black(filled) => BLACK,
            _ => WHITE,
        }
    });

    Ok(img)
}

/// Render a pattern and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - `cell_pixels` is zero or the image would be too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_pattern_png(
    pattern: &Pattern,
    manual_fills: &ManualFills,
    interpretation: StitchInterpretation,
    cell_pixels: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_pattern(pattern, manual_fills, interpretation, cell_pixels)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ChartError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| ChartError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

fn image_extent(cells: usize, stride: u32) -> Result<u32> {
    cells
        .to_u32()
        .and_then(|cells| cells.checked_mul(stride))
        .and_then(|pixels| pixels.checked_add(1))
        .ok_or_else(|| invalid_parameter("cell_pixels", &stride, &"chart image too large"))
}
