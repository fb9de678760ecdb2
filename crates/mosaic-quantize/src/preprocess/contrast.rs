//! Contrast adjustment around mid-grey.

use super::Canvas;

const MIDPOINT: f32 = 0.5;

/// Scale factor for a contrast level: `((100 + level) / 100)^2`.
///
/// Level 0 is neutral, negative levels flatten toward mid-grey and
/// -100 collapses everything onto it.
#[inline]
pub fn contrast_factor(level: i32) -> f32 {
    let factor = (100.0 + level as f32) / 100.0;
    factor * factor
}

/// Apply a contrast factor to one channel value.
///
/// The stretched value is truncated toward zero, not rounded.
#[inline]
pub fn adjust_channel(value: u8, factor: f32) -> u8 {
    let normalized = f32::from(value) / 255.0;
    let stretched = (((normalized - MIDPOINT) * factor) + MIDPOINT).clamp(0.0, 1.0) * 255.0;
    (stretched as i32).clamp(0, 255) as u8
}

/// Contrast-adjusted copy of `canvas`, applied independently per channel.
pub fn adjust_contrast(canvas: &Canvas, level: i32) -> Canvas {
    let factor = contrast_factor(level);
    canvas.map_pixels(|[r, g, b]| {
        [
            adjust_channel(r, factor),
            adjust_channel(g, factor),
            adjust_channel(b, factor),
        ]
    })
}
