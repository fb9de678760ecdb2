//! Fixed-weight luminance reduction.

use super::Canvas;
use crate::grid::IntensityGrid;

const RED_WEIGHT: f32 = 0.3;
const GREEN_WEIGHT: f32 = 0.59;
const BLUE_WEIGHT: f32 = 0.11;

/// Luminance of one pixel, rounded to the nearest integer.
#[inline]
pub fn luminance([r, g, b]: [u8; 3]) -> u8 {
    let value = RED_WEIGHT * f32::from(r) + GREEN_WEIGHT * f32::from(g) + BLUE_WEIGHT * f32::from(b);
    value.round().clamp(0.0, 255.0) as u8
}

/// Grey canvas with every channel set to the pixel's luminance.
pub fn to_grayscale(canvas: &Canvas) -> Canvas {
    canvas.map_pixels(|pixel| {
        let l = luminance(pixel);
        [l, l, l]
    })
}

/// Per-pixel luminance as an intensity grid, ready for binning.
pub fn intensity_grid(canvas: &Canvas) -> IntensityGrid {
    let cells = canvas.pixels().iter().map(|&p| luminance(p)).collect();
    IntensityGrid::new(canvas.side(), canvas.side(), cells)
}
