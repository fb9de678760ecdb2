//! mosaic-quantize: brightness binning and brick inventory balancing
//!
//! This library turns a photo into a grid of discrete brick colors for a
//! physical mosaic, under a hard per-color supply cap.
//!
//! # Quick Start
//!
//! The [`MosaicQuantizer`] builder is the primary entry point:
//!
//! ```
//! use mosaic_quantize::{BinningTable, Canvas, MosaicQuantizer};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let table = BinningTable::new(vec![51, 102, 153, 204], vec![0, 1, 2, 3, 4]).unwrap();
//! let quantizer = MosaicQuantizer::new(table)
//!     .contrast_levels(vec![20, 40])
//!     .budget(8);
//!
//! let canvas = Canvas::filled(4, [128, 128, 128]);
//! let mut rng = StdRng::seed_from_u64(7);
//! let variants = quantizer.quantize(&canvas, -1, &mut rng).unwrap();
//!
//! // baseline + two contrast levels + two combined blends
//! assert_eq!(variants.len(), 5);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! decoded image
//!     |
//!     v
//! Canvas (S x S, Catmull-Rom resample)
//!     |
//!     v
//! grayscale (0.3 R + 0.59 G + 0.11 B) ---------------------+
//!     |                                                     |
//!     +---> contrast(level) ---> grayscale                  |
//!     |           |                                         |
//!     |           +---> combine(baseline, contrasted) <-----+
//!     v           v               |
//! block downsample + binning table lookup
//!     |
//!     v
//! inventory balancing (per-color budget)
//!     |
//!     v
//! Variant { grid, contrast, combined, counts }
//! ```
//!
//! # Inventory Balancing
//!
//! Every bin may hold at most `budget` pixels. Bins over budget hand their
//! excess to the nearest bins with spare capacity, alternating upward then
//! downward in bin distance. Pixels to recolor are drawn uniformly at
//! random without replacement, from a caller-supplied [`rand::Rng`], so
//! results are reproducible under a seeded generator. When no donor capacity
//! remains the bin simply stays over budget.

pub mod api;
pub mod binning;
pub mod grid;
pub mod inventory;
pub mod preprocess;
pub mod variant;


pub use api::{MosaicQuantizer, QuantizeError};
pub use binning::{BinMatch, BinningError, BinningTable};
pub use grid::{downsample, Grid, IntensityGrid, PixelGrid};
pub use inventory::{balance, BalanceReport, ColorInventory};
pub use preprocess::Canvas;
pub use variant::{combine, Variant, VariantKind, VariantSelection};
