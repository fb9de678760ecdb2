//! Per-cell blend of two intensity grids.

use crate::api::QuantizeError;
use crate::grid::{Grid, IntensityGrid};

/// Average two same-shape intensity grids cell by cell.
///
/// Each cell is `round((a + b) / 2)` with exact halves rounded to the even
/// neighbor, so `combine(a, b) == combine(b, a)`.
pub fn combine(a: &IntensityGrid, b: &IntensityGrid) -> Result<IntensityGrid, QuantizeError> {
    if !a.same_shape(b) {
        return Err(QuantizeError::ShapeMismatch {
            left_width: a.width(),
            left_height: a.height(),
            right_width: b.width(),
            right_height: b.height(),
        });
    }

    let cells = a
        .cells()
        .iter()
        .zip(b.cells())
        .map(|(&x, &y)| midpoint_half_even(x, y))
        .collect();

    Ok(Grid::new(a.width(), a.height(), cells))
}

#[inline]
fn midpoint_half_even(a: u8, b: u8) -> u8 {
    let sum = u16::from(a) + u16::from(b);
    let half = sum / 2;
    // odd sum means an exact .5: bump odd halves up to the even neighbor
    if sum % 2 == 1 && half % 2 == 1 {
        (half + 1) as u8
    } else {
        half as u8
    }
}
