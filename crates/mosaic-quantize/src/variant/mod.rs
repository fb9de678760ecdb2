//! Variants: one finished grid per contrast setting.
//!
//! A conversion can produce a plain baseline, pure contrast variants, and
//! combined variants that blend the baseline with a contrast variant. The
//! [`VariantSelection`] decides which of them a call materializes.

mod combine;
mod selector;

pub use combine::combine;
pub use selector::VariantSelection;

use crate::binning::BinningTable;
use crate::grid::{Grid, PixelGrid};

/// How a variant's intensities were derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    /// Grayscale only
    Baseline,
    /// Grayscale after contrast adjustment at the given level
    Contrast(i32),
    /// Per-cell blend of the baseline and the contrast variant at the given level
    Combined(i32),
}

impl VariantKind {
    /// Contrast level, 0 for the baseline.
    #[inline]
    pub fn contrast(self) -> i32 {
        match self {
            VariantKind::Baseline => 0,
            VariantKind::Contrast(level) | VariantKind::Combined(level) => level,
        }
    }

    #[inline]
    pub fn is_combined(self) -> bool {
        matches!(self, VariantKind::Combined(_))
    }
}

/// A finished, balanced grid of bin indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    kind: VariantKind,
    grid: PixelGrid,
    counts: Vec<usize>,
}

impl Variant {
    /// Wrap a balanced grid with its per-bin pixel counts.
    pub fn new(kind: VariantKind, grid: PixelGrid, counts: Vec<usize>) -> Self {
        Self { kind, grid, counts }
    }

    #[inline]
    pub fn kind(&self) -> VariantKind {
        self.kind
    }

    /// Contrast level, 0 for the baseline.
    #[inline]
    pub fn contrast(&self) -> i32 {
        self.kind.contrast()
    }

    #[inline]
    pub fn is_combined(&self) -> bool {
        self.kind.is_combined()
    }

    /// Bin indices.
    #[inline]
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Pixels per bin after balancing.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// The grid mapped through the table's weight tags.
    pub fn weight_grid(&self, table: &BinningTable) -> Grid<i32> {
        self.grid.map(|&index| table.weight(index))
    }

    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }
}
