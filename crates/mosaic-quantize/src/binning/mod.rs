//! Brightness-to-color binning.
//!
//! A [`BinningTable`] partitions the intensity range `0..=255` into `K`
//! contiguous bins using `K - 1` ascending limits. Each bin carries an opaque
//! weight tag that downstream renderers use to pick a brick image; the bin
//! index itself is what every grid operation works with.

mod error;
mod table;

pub use error::BinningError;
pub use table::{BinMatch, BinningTable, MAX_BINS};
