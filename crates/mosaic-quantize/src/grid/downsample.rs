//! Block averaging followed by binning.

use super::{Grid, IntensityGrid, PixelGrid};
use crate::api::QuantizeError;
use crate::binning::BinningTable;

/// Reduce `grid` by `block_x` x `block_y` and bin each block's average.
///
/// The output is `ceil(width / block_x)` x `ceil(height / block_y)`. Partial
/// blocks at the right and bottom edges average only their in-bounds cells.
/// Averages use integer division. A 1x1 block bins every cell directly.
///
/// The input may hold raw intensities or bin indices that are binned again;
/// both use the same arithmetic.
pub fn downsample(
    grid: &IntensityGrid,
    block_x: usize,
    block_y: usize,
    table: &BinningTable,
) -> Result<PixelGrid, QuantizeError> {
    if block_x == 0 || block_y == 0 {
        return Err(QuantizeError::ZeroBlockSize {
            width: block_x,
            height: block_y,
        });
    }

    if block_x == 1 && block_y == 1 {
        return Ok(grid.map(|&v| table.lookup(i32::from(v)).index));
    }

    let out_width = grid.width().div_ceil(block_x);
    let out_height = grid.height().div_ceil(block_y);
    let mut cells = Vec::with_capacity(out_width * out_height);

    for by in 0..out_height {
        let y0 = by * block_y;
        let y1 = (y0 + block_y).min(grid.height());
        for bx in 0..out_width {
            let x0 = bx * block_x;
            let x1 = (x0 + block_x).min(grid.width());

            let mut sum = 0u32;
            for row in grid.rows().skip(y0).take(y1 - y0) {
                sum += row[x0..x1].iter().map(|&v| u32::from(v)).sum::<u32>();
            }
            let count = ((x1 - x0) * (y1 - y0)) as u32;

            cells.push(table.lookup((sum / count) as i32).index);
        }
    }

    Ok(Grid::new(out_width, out_height, cells))
}
