use bitvec::prelude::*;
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgba, Rgba32FImage, RgbaImage};
use num_traits::ToPrimitive;

use crate::io::configuration::{
    ALPHA_CUTOFF, LUMINANCE_WEIGHTS, MAX_RASTER_SIZE, MIN_RASTER_SIZE, RASTER_PIXELS_PER_SIZE,
};
use crate::motif::PlacedMotif;

/// Edge length in pixels (and grid cells) of a motif's square footprint
///
/// A size of 1.0 samples the image at 25 x 25; the edge is kept within 5..=100.
pub fn raster_size(size: f64) -> u32 {
    (size * RASTER_PIXELS_PER_SIZE)
        .round()
        .to_u32()
        .unwrap_or(MIN_RASTER_SIZE)
        .clamp(MIN_RASTER_SIZE, MAX_RASTER_SIZE)
}

/// Rec. 601 luma of a pixel
pub fn luminance(pixel: Rgba<u8>) -> f64 {
    let [r, g, b, _] = pixel.0;
    let [wr, wg, wb] = LUMINANCE_WEIGHTS;
    wb.mul_add(
        f64::from(b),
        wr.mul_add(f64::from(r), wg * f64::from(g)),
    )
}

/// Check whether a sampled pixel counts as ink
///
/// Pixels with alpha below 128 are transparent and never ink; opaque pixels
/// are ink when their luma is strictly below `threshold`.
pub fn is_ink(pixel: Rgba<u8>, threshold: u8) -> bool {
    let [_, _, _, alpha] = pixel.0;
    alpha >= ALPHA_CUTOFF && luminance(pixel) < f64::from(threshold)
}

/// Square ink mask sampled from a motif image
///
/// Bit `py * edge + px` is set when pixel `(px, py)` of the resampled image
/// is ink. Flips are applied to the pixels before sampling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Footprint {
    edge: u32,
    bits: BitVec,
}

impl Footprint {
    /// A footprint with no ink
    pub fn empty(edge: u32) -> Self {
        Self {
            edge,
            bits: bitvec![0; (edge as usize) * (edge as usize)],
        }
    }

    /// Resample `image` to `edge x edge`, mirror it, then threshold every pixel
    pub fn sample(
        image: &RgbaImage,
        edge: u32,
        threshold: u8,
        flip_horizontal: bool,
        flip_vertical: bool,
    ) -> Self {
        let mut footprint = Self::empty(edge);
        if image.width() == 0 || image.height() == 0 || edge == 0 {
            return footprint;
        }

        // The whole image is stretched onto the square, matching a canvas draw
        let mut canvas = resample(image, edge);
        if flip_horizontal {
            imageops::flip_horizontal_in_place(&mut canvas);
        }
        if flip_vertical {
            imageops::flip_vertical_in_place(&mut canvas);
        }

        for (px, py, pixel) in canvas.enumerate_pixels() {
            if is_ink(*pixel, threshold) {
                footprint.set(px, py, true);
            }
        }
        footprint
    }

    /// Sample the footprint of a placed motif from its decoded image
    pub fn for_motif(image: &RgbaImage, motif: &PlacedMotif) -> Self {
        Self::sample(
            image,
            raster_size(motif.size()),
            motif.threshold(),
            motif.flip_horizontal,
            motif.flip_vertical,
        )
    }

    /// Edge length in pixels
    pub const fn edge(&self) -> u32 {
        self.edge
    }

    /// Check whether pixel `(px, py)` is ink; out-of-range pixels are not
    pub fn is_ink(&self, px: u32, py: u32) -> bool {
        if px >= self.edge || py >= self.edge {
            return false;
        }
        self.bits.get(self.index(px, py)).as_deref() == Some(&true)
    }

    /// Number of ink pixels
    pub fn ink_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate over ink pixels as `(px, py)`
    pub fn ink_pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let edge = self.edge.max(1) as usize;
        self.bits
            .iter_ones()
            .map(move |index| ((index % edge) as u32, (index / edge) as u32))
    }

    fn set(&mut self, px: u32, py: u32, ink: bool) {
        if px < self.edge && py < self.edge {
            let index = self.index(px, py);
            self.bits.set(index, ink);
        }
    }

    const fn index(&self, px: u32, py: u32) -> usize {
        (py as usize) * (self.edge as usize) + (px as usize)
    }
}

/// Stretch `image` onto an `edge x edge` square
///
/// Filtering happens on premultiplied color, so the RGB of a fully transparent
/// pixel never bleeds into its opaque neighbours.
fn resample(image: &RgbaImage, edge: u32) -> RgbaImage {
    let premultiplied: Rgba32FImage = ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = f32::from(a) / 255.0;
        let scale = |channel: u8| f32::from(channel) / 255.0 * alpha;
        Rgba([scale(r), scale(g), scale(b), alpha])
    });

    let resized = imageops::resize(&premultiplied, edge, edge, FilterType::Triangle);

    ImageBuffer::from_fn(edge, edge, |x, y| {
        let [r, g, b, alpha] = resized.get_pixel(x, y).0;
        let unscale = |channel: f32| {
            if alpha > 0.0 {
                to_channel(channel / alpha)
            } else {
                0
            }
        };
        Rgba([unscale(r), unscale(g), unscale(b), to_channel(alpha)])
    })
}

fn to_channel(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0).to_u8().unwrap_or(0)
}
