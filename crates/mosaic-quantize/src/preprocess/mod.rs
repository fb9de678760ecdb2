//! Canvas preparation before binning.
//!
//! The pipeline works on a small square canvas of raw RGB channel values:
//!
//! 1. **Resize** (Catmull-Rom) - the decoded image is stretched onto an S x S canvas
//! 2. **Grayscale** - fixed luminance weights `0.3 R + 0.59 G + 0.11 B`
//! 3. **Contrast** (optional, per variant) - `((100 + c) / 100)^2` scaling around mid-grey
//!
//! All transforms are plain per-pixel arithmetic and return new buffers; the
//! input canvas is never modified.
//!
//! # Example
//!
//! ```
//! use mosaic_quantize::preprocess::{adjust_contrast, intensity_grid, to_grayscale, Canvas};
//!
//! let canvas = Canvas::filled(2, [200, 100, 50]);
//! let gray = to_grayscale(&canvas);
//! let punchy = to_grayscale(&adjust_contrast(&gray, 40));
//!
//! let grid = intensity_grid(&punchy);
//! assert_eq!(grid.width(), 2);
//! assert_eq!(grid.height(), 2);
//! ```

mod canvas;
mod contrast;
mod grayscale;

pub use canvas::Canvas;
pub use contrast::{adjust_channel, adjust_contrast, contrast_factor};
pub use grayscale::{intensity_grid, luminance, to_grayscale};
