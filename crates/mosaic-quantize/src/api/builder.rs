//! MosaicQuantizer builder, the primary entry point for the crate.
//!
//! [`MosaicQuantizer`] wraps the full pipeline (grayscale, contrast
//! variants, binning, downsampling, balancing) behind a fluent builder.

use rand::Rng;

use super::QuantizeError;
use crate::binning::BinningTable;
use crate::grid::{downsample, IntensityGrid};
use crate::inventory::{balance, ColorInventory};
use crate::preprocess::{adjust_contrast, intensity_grid, to_grayscale, Canvas};
use crate::variant::{combine, Variant, VariantKind, VariantSelection};

/// High-level quantizer turning a canvas into balanced brick-color grids.
///
/// - Constructor requires a [`BinningTable`] (validated up front)
/// - Configuration methods consume and return `self`
/// - [`quantize()`](Self::quantize) takes `&self`, so one quantizer serves
///   any number of canvases
///
/// Defaults: no contrast levels, 1x1 blocks, no budget (balancing skipped).
///
/// # Example
///
/// ```
/// use mosaic_quantize::{BinningTable, Canvas, MosaicQuantizer, VariantKind};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let quantizer = MosaicQuantizer::new(BinningTable::five_tone())
///     .block_size(2, 2)
///     .budget(4);
///
/// let canvas = Canvas::filled(4, [10, 10, 10]);
/// let variants = quantizer
///     .quantize(&canvas, 0, &mut StdRng::seed_from_u64(1))
///     .unwrap();
///
/// assert_eq!(variants.len(), 1);
/// assert_eq!(variants[0].kind(), VariantKind::Baseline);
/// assert_eq!(variants[0].grid().width(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MosaicQuantizer {
    table: BinningTable,
    contrast_levels: Vec<i32>,
    block_x: usize,
    block_y: usize,
    budget: Option<usize>,
}

impl MosaicQuantizer {
    /// Create a quantizer for `table` with default settings.
    pub fn new(table: BinningTable) -> Self {
        Self {
            table,
            contrast_levels: Vec::new(),
            block_x: 1,
            block_y: 1,
            budget: None,
        }
    }

    /// Contrast levels for the contrast and combined variants, in output order.
    #[inline]
    pub fn contrast_levels(mut self, levels: Vec<i32>) -> Self {
        self.contrast_levels = levels;
        self
    }

    /// Downsampling block. Zero dimensions are rejected by `quantize`.
    #[inline]
    pub fn block_size(mut self, block_x: usize, block_y: usize) -> Self {
        self.block_x = block_x;
        self.block_y = block_y;
        self
    }

    /// Per-bin pixel cap enforced by the balancer.
    #[inline]
    pub fn budget(mut self, budget: usize) -> Self {
        self.budget = Some(budget);
        self
    }

    #[inline]
    pub fn table(&self) -> &BinningTable {
        &self.table
    }

    #[inline]
    pub fn levels(&self) -> &[i32] {
        &self.contrast_levels
    }

    /// Number of variants `selector` would produce, or the selector error.
    pub fn variant_count(&self, selector: i32) -> Result<usize, QuantizeError> {
        let levels = self.contrast_levels.len();
        Ok(VariantSelection::from_selector(selector, levels)?.variant_count(levels))
    }

    /// Run the pipeline on `canvas` and return the selected variants.
    ///
    /// 1. Grayscale the canvas into the baseline intensities
    /// 2. Derive contrast / combined intensities as the selector asks
    /// 3. Downsample and bin each one
    /// 4. Balance against the budget, if one is set
    ///
    /// `rng` drives the balancer's pixel picks; a seeded generator makes the
    /// output reproducible.
    pub fn quantize<R: Rng + ?Sized>(
        &self,
        canvas: &Canvas,
        selector: i32,
        rng: &mut R,
    ) -> Result<Vec<Variant>, QuantizeError> {
        let selection = VariantSelection::from_selector(selector, self.contrast_levels.len())?;
        if self.block_x == 0 || self.block_y == 0 {
            return Err(QuantizeError::ZeroBlockSize {
                width: self.block_x,
                height: self.block_y,
            });
        }

        let gray = to_grayscale(canvas);
        let baseline = intensity_grid(&gray);

        selection
            .plan(&self.contrast_levels)
            .into_iter()
            .map(|kind| {
                let intensities = match kind {
                    VariantKind::Baseline => baseline.clone(),
                    VariantKind::Contrast(level) => contrasted(&gray, level),
                    VariantKind::Combined(level) => combine(&baseline, &contrasted(&gray, level))?,
                };
                self.finish(kind, &intensities, rng)
            })
            .collect()
    }

    fn finish<R: Rng + ?Sized>(
        &self,
        kind: VariantKind,
        intensities: &IntensityGrid,
        rng: &mut R,
    ) -> Result<Variant, QuantizeError> {
        let bins = self.table.bin_count();
        let mut grid = downsample(intensities, self.block_x, self.block_y, &self.table)?;

        if let Some(budget) = self.budget {
            let before = ColorInventory::tally(&grid, bins, budget);
            let report = balance(&mut grid, bins, budget, rng);
            let after = ColorInventory::tally(&grid, bins, budget);
            tracing::debug!(
                ?kind,
                before = ?before.counts(),
                after = ?after.counts(),
                moved = report.moved,
                "Balanced variant"
            );
            return Ok(Variant::new(kind, grid, after.into_counts()));
        }

        let counts = ColorInventory::tally(&grid, bins, usize::MAX).into_counts();
        Ok(Variant::new(kind, grid, counts))
    }
}

fn contrasted(gray: &Canvas, level: i32) -> IntensityGrid {
    intensity_grid(&to_grayscale(&adjust_contrast(gray, level)))
}
