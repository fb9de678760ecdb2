//! Square RGB canvas the rest of the pipeline samples from.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView};

/// A square buffer of RGB pixels in row-major order.
///
/// Canvases are request-scoped: one is built per conversion from the decoded
/// image, every variant is derived from it, and it is dropped with the
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    side: usize,
    pixels: Vec<[u8; 3]>,
}

impl Canvas {
    /// Wrap raw RGB pixels.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == side * side`.
    pub fn from_rgb(side: usize, pixels: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            side * side,
            "pixel count ({}) must match side * side ({}x{})",
            pixels.len(),
            side,
            side,
        );
        Self { side, pixels }
    }

    /// A canvas where every pixel has the same color.
    pub fn filled(side: usize, rgb: [u8; 3]) -> Self {
        Self {
            side,
            pixels: vec![rgb; side * side],
        }
    }

    /// Stretch a decoded image onto a `side` x `side` canvas.
    ///
    /// The source aspect ratio is not preserved. A non-square source is
    /// reported with a warning and resized anyway. Alpha is discarded.
    pub fn from_image(image: &DynamicImage, side: u32) -> Self {
        let (width, height) = image.dimensions();
        if width != height {
            tracing::warn!(
                width,
                height,
                min = width.min(height),
                "Image has different dimensions, stretching onto square canvas"
            );
        }

        let rgb = image.to_rgb8();
        let resized = imageops::resize(&rgb, side, side, FilterType::CatmullRom);
        let pixels = resized.pixels().map(|p| p.0).collect();

        Self::from_rgb(side as usize, pixels)
    }

    /// Side length in pixels.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Build a new canvas by transforming every pixel.
    pub fn map_pixels(&self, f: impl Fn([u8; 3]) -> [u8; 3]) -> Self {
        Self {
            side: self.side,
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    /// Resampling a flat color may drift by one step from filter rounding
    fn near(a: [u8; 3], b: [u8; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(&x, &y)| x.abs_diff(y) <= 1)
    }

    #[test]
    fn test_from_image_square_resize() {
        let source = RgbImage::from_pixel(40, 40, Rgb([10, 20, 30]));
        let canvas = Canvas::from_image(&DynamicImage::ImageRgb8(source), 8);

        assert_eq!(canvas.side(), 8);
        assert_eq!(canvas.pixels().len(), 64);
        assert!(canvas.pixels().iter().all(|&p| near(p, [10, 20, 30])));
    }

    #[test]
    fn test_from_image_non_square_still_resized() {
        let source = RgbImage::from_pixel(30, 12, Rgb([200, 200, 200]));
        let canvas = Canvas::from_image(&DynamicImage::ImageRgb8(source), 6);

        assert_eq!(canvas.side(), 6);
        assert_eq!(canvas.pixels().len(), 36);
        assert!(canvas.pixels().iter().all(|&p| near(p, [200, 200, 200])));
    }

    #[test]
    fn test_map_pixels_leaves_source_untouched() {
        let canvas = Canvas::filled(2, [1, 2, 3]);
        let mapped = canvas.map_pixels(|[r, g, b]| [b, g, r]);

        assert_eq!(mapped.pixels()[0], [3, 2, 1]);
        assert_eq!(canvas.pixels()[0], [1, 2, 3]);
    }
}
