//! Validated threshold table and its lookup.

use super::BinningError;

/// Largest supported number of bins; indices are stored as `u8`.
pub const MAX_BINS: usize = 256;

const MAX_INTENSITY: i32 = 255;

/// Result of looking up one intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinMatch {
    /// Opaque tag associated with the bin (used by renderers only).
    pub weight: i32,
    /// Bin index in `0..bin_count`. Authoritative for grid operations.
    pub index: u8,
}

/// Ordered brightness thresholds partitioning `0..=255` into bins.
///
/// Bin `i` covers `low_i <= v < high_i`, where `low_0 = 0`,
/// `high_i = limits[i]` and the last bin ends at 255. Intensity 255 always
/// lands in the last bin.
///
/// # Example
///
/// ```
/// use mosaic_quantize::BinningTable;
///
/// let table = BinningTable::new(vec![51, 102, 153, 204], vec![0, 1, 2, 3, 4]).unwrap();
///
/// assert_eq!(table.lookup(0).index, 0);
/// assert_eq!(table.lookup(51).index, 1);
/// assert_eq!(table.lookup(255).index, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinningTable {
    limits: Vec<u8>,
    weights: Vec<i32>,
}

impl BinningTable {
    /// Validate and build a table.
    ///
    /// Requires `limits.len() == weights.len() - 1`, at most [`MAX_BINS`]
    /// weights, and limits strictly ascending from above zero so that no
    /// bin is empty.
    pub fn new(limits: Vec<u8>, weights: Vec<i32>) -> Result<Self, BinningError> {
        if weights.is_empty() {
            return Err(BinningError::Empty);
        }
        if weights.len() > MAX_BINS {
            return Err(BinningError::TooManyBins {
                bins: weights.len(),
                max: MAX_BINS,
            });
        }
        if limits.len() != weights.len() - 1 {
            return Err(BinningError::LengthMismatch {
                limits: limits.len(),
                weights: weights.len(),
            });
        }

        let mut previous = 0u8;
        for (index, &value) in limits.iter().enumerate() {
            if value <= previous {
                return Err(BinningError::NotAscending { index, value });
            }
            previous = value;
        }

        Ok(Self { limits, weights })
    }

    /// Five even brightness bands tagged 0 through 4.
    pub fn five_tone() -> Self {
        Self {
            limits: vec![51, 102, 153, 204],
            weights: vec![0, 1, 2, 3, 4],
        }
    }

    /// Number of bins `K`.
    #[inline]
    pub fn bin_count(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn limits(&self) -> &[u8] {
        &self.limits
    }

    #[inline]
    pub fn weights(&self) -> &[i32] {
        &self.weights
    }

    /// Weight tag for a bin index, 0 for indices outside the table.
    #[inline]
    pub fn weight(&self, index: u8) -> i32 {
        self.weights.get(index as usize).copied().unwrap_or(0)
    }

    /// Map an intensity to its bin.
    ///
    /// Values outside `0..=255` return bin 0 with weight 0 instead of an
    /// error; intensities are clamped before they reach the table.
    pub fn lookup(&self, value: i32) -> BinMatch {
        if !(0..=MAX_INTENSITY).contains(&value) {
            return BinMatch { weight: 0, index: 0 };
        }

        let last = self.weights.len() - 1;
        let index = if value == MAX_INTENSITY {
            last
        } else {
            self.limits
                .iter()
                .position(|&limit| value < i32::from(limit))
                .unwrap_or(last)
        };

        BinMatch {
            weight: self.weights[index],
            index: index as u8,
        }
    }
}

impl Default for BinningTable {
    fn default() -> Self {
        Self::five_tone()
    }
}
