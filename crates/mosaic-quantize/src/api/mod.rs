//! Public API for the mosaic-quantize crate.
//!
//! This module provides the high-level API: [`MosaicQuantizer`] builder and
//! [`QuantizeError`] unified error type.

mod builder;
mod error;

pub use builder::MosaicQuantizer;
pub use error::QuantizeError;
