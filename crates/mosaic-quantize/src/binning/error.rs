//! Error type for binning table validation.

use thiserror::Error;

/// Returned when a binning table configuration is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BinningError {
    /// No weights were provided, so there is no bin to map to
    #[error("binning table needs at least one weight")]
    Empty,

    /// `limits` must have exactly one entry fewer than `weights`
    #[error("binning table length mismatch: {limits} limits for {weights} weights (expected {expected})", expected = .weights.saturating_sub(1))]
    LengthMismatch { limits: usize, weights: usize },

    /// Limits must be strictly ascending and start above zero
    #[error("binning limit {value} at index {index} is not above the previous limit")]
    NotAscending { index: usize, value: u8 },

    /// Grids store bin indices as bytes
    #[error("binning table has {bins} bins (max {max})")]
    TooManyBins { bins: usize, max: usize },
}
