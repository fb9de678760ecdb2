//! Which variants a conversion materializes.

use super::VariantKind;
use crate::api::QuantizeError;

/// Parsed variant selector.
///
/// Callers pass an integer selector; with `L` configured contrast levels the
/// valid domain is:
///
/// | selector    | selection                                   |
/// |-------------|---------------------------------------------|
/// | `0`         | baseline only                               |
/// | `-1`        | baseline, then `L` contrast, then `L` combined |
/// | `1..=L`     | contrast variant for level `selector - 1`   |
/// | `L+1..=2L`  | combined variant for level `selector - L - 1` |
///
/// With no contrast levels only `0` is accepted.
///
/// # Example
///
/// ```
/// use mosaic_quantize::{VariantKind, VariantSelection};
///
/// let levels = [20, 40];
/// let selection = VariantSelection::from_selector(4, levels.len()).unwrap();
///
/// assert_eq!(selection, VariantSelection::Combined(1));
/// assert_eq!(selection.plan(&levels), vec![VariantKind::Combined(40)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantSelection {
    Baseline,
    All,
    /// Index into the configured contrast levels
    Contrast(usize),
    /// Index into the configured contrast levels
    Combined(usize),
}

impl VariantSelection {
    /// Parse `selector` against `level_count` configured contrast levels.
    pub fn from_selector(selector: i32, level_count: usize) -> Result<Self, QuantizeError> {
        let invalid = QuantizeError::InvalidSelector {
            selector,
            levels: level_count,
        };

        if selector == 0 {
            return Ok(VariantSelection::Baseline);
        }
        if level_count == 0 {
            return Err(invalid);
        }
        if selector == -1 {
            return Ok(VariantSelection::All);
        }

        let Ok(position) = usize::try_from(selector) else {
            return Err(invalid);
        };
        if position <= level_count {
            Ok(VariantSelection::Contrast(position - 1))
        } else if position <= 2 * level_count {
            Ok(VariantSelection::Combined(position - level_count - 1))
        } else {
            Err(invalid)
        }
    }

    /// Number of variants this selection produces.
    pub fn variant_count(self, level_count: usize) -> usize {
        match self {
            VariantSelection::All => 1 + 2 * level_count,
            _ => 1,
        }
    }

    /// Variants to build, in output order.
    ///
    /// # Panics
    ///
    /// Panics if a `Contrast`/`Combined` index is out of range for
    /// `levels`. Selections from [`from_selector`](Self::from_selector) with
    /// the same level count are always in range.
    pub fn plan(self, levels: &[i32]) -> Vec<VariantKind> {
        match self {
            VariantSelection::Baseline => vec![VariantKind::Baseline],
            VariantSelection::All => std::iter::once(VariantKind::Baseline)
                .chain(levels.iter().map(|&l| VariantKind::Contrast(l)))
                .chain(levels.iter().map(|&l| VariantKind::Combined(l)))
                .collect(),
            VariantSelection::Contrast(index) => vec![VariantKind::Contrast(levels[index])],
            VariantSelection::Combined(index) => vec![VariantKind::Combined(levels[index])],
        }
    }
}
