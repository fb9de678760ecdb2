//! Row-major 2D grids of intensities or bin indices.

mod downsample;

pub use downsample::downsample;

use crate::api::QuantizeError;

/// A `width` x `height` grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Pre-binning intensities in `0..=255`.
pub type IntensityGrid = Grid<u8>;

/// Bin indices in `0..bin_count`.
pub type PixelGrid = Grid<u8>;

impl<T> Grid<T> {
    /// Wrap row-major cells.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `cells.len() == width * height`. Use
    /// [`Grid::from_flat`] for data from outside the pipeline.
    pub fn new(width: usize, height: usize, cells: Vec<T>) -> Self {
        debug_assert_eq!(
            cells.len(),
            width * height,
            "cells length ({}) must match width * height ({}x{}={})",
            cells.len(),
            width,
            height,
            width * height,
        );
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a grid from a flat row-major array, checking its length.
    pub fn from_flat(cells: Vec<T>, width: usize, height: usize) -> Result<Self, QuantizeError> {
        if cells.len() != width * height {
            return Err(QuantizeError::FlatLength {
                len: cells.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Cell at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    #[inline]
    pub fn same_shape<U>(&self, other: &Grid<U>) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() panics on zero; an empty grid simply has no rows
        self.cells.chunks(self.width.max(1))
    }

    /// Transform every cell, keeping the shape.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Grid<T> {
    /// A grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    /// Row-major copy of the cells.
    pub fn to_flat(&self) -> Vec<T> {
        self.cells.clone()
    }

    /// Rows as owned vectors, for serialization.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}
