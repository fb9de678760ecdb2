//! Brickify - photo to brick mosaic
//!
//! Turns photos into capacity-constrained brick-color grids.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
