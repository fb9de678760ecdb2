//! Unified error type for the mosaic-quantize public API.
//!
//! [`QuantizeError`] wraps every failure the engine can report so callers
//! can propagate with `?`.

use crate::binning::BinningError;
use thiserror::Error;

/// Unified error type for the mosaic-quantize public API.
///
/// # Example
///
/// ```
/// use mosaic_quantize::{BinningTable, QuantizeError};
///
/// fn build_table() -> Result<BinningTable, QuantizeError> {
///     let table = BinningTable::new(vec![64, 128, 192], vec![0, 1, 2, 3])?;
///     Ok(table)
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantizeError {
    /// Binning table validation failed
    #[error("binning table error: {0}")]
    Binning(#[from] BinningError),

    /// Selector outside `-1..=2L` for `L` configured contrast levels
    #[error("invalid variant selector {selector} for {levels} contrast levels")]
    InvalidSelector { selector: i32, levels: usize },

    /// Downsampling block with a zero dimension
    #[error("block size must be non-zero, got {width}x{height}")]
    ZeroBlockSize { width: usize, height: usize },

    /// Two grids that must be combined differ in shape
    #[error("grid shape mismatch: {left_width}x{left_height} vs {right_width}x{right_height}")]
    ShapeMismatch {
        left_width: usize,
        left_height: usize,
        right_width: usize,
        right_height: usize,
    },

    /// Flat pixel array does not fill the requested grid
    #[error("flat pixel array has {len} cells, expected {width}x{height}")]
    FlatLength {
        len: usize,
        width: usize,
        height: usize,
    },
}
