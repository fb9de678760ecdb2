use mosaic_quantize::{BinningTable, Variant};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::SizeClass;

/// Result of one conversion, ready to serialize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MosaicReport {
    /// Random hex identifier for this conversion
    pub name: String,
    pub size: SizeClass,
    /// Canvas side the image was resized to
    pub canvas: u32,
    pub variants: Vec<VariantReport>,
    /// Directory holding the preview PNGs, when they were written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_dir: Option<PathBuf>,
}

/// One variant's grid with its tags and brick counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantReport {
    /// Contrast level, 0 for the baseline
    pub contrast: i32,
    pub combined: bool,
    pub width: usize,
    pub height: usize,
    /// Bin indices, one row per entry
    pub rows: Vec<Vec<u8>>,
    /// Bin indices, row-major
    pub pixels: Vec<u8>,
    /// Weight tags, row-major
    pub weights: Vec<i32>,
    /// Bricks per bin after balancing
    pub counts: Vec<usize>,
}

impl VariantReport {
    pub fn from_variant(variant: &Variant, table: &BinningTable) -> Self {
        let grid = variant.grid();
        Self {
            contrast: variant.contrast(),
            combined: variant.is_combined(),
            width: grid.width(),
            height: grid.height(),
            rows: grid.to_rows(),
            pixels: grid.to_flat(),
            weights: variant.weight_grid(table).to_flat(),
            counts: variant.counts().to_vec(),
        }
    }
}
