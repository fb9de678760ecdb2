//! Redistribution of over-budget colors to neighboring bins.
//!
//! Bins are visited in ascending order. A bin holding more pixels than the
//! budget looks for donors (bins with spare capacity) at increasing index
//! distance, trying the brighter neighbor before the darker one at each
//! distance, and repaints randomly chosen pixels into them until its excess
//! is gone or the donors run out. The total pixel count never changes.

use rand::seq::SliceRandom;
use rand::Rng;

use super::ColorInventory;
use crate::grid::PixelGrid;

/// Summary of one balancing pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BalanceReport {
    /// Pixels repainted into another bin.
    pub moved: usize,
    /// Bins still over budget once every donor was drained.
    pub residual: Vec<usize>,
}

/// Enforce `budget` pixels per bin on `grid`, in place.
///
/// Never fails: when spare capacity runs out the affected bins keep their
/// remaining excess and are listed in [`BalanceReport::residual`]. A grid
/// already within budget is left untouched and `rng` is not consumed.
pub fn balance<R: Rng + ?Sized>(
    grid: &mut PixelGrid,
    bin_count: usize,
    budget: usize,
    rng: &mut R,
) -> BalanceReport {
    let inventory = ColorInventory::tally(grid, bin_count, budget);
    let mut free: Vec<i64> = (0..bin_count).map(|bin| inventory.free_amount(bin)).collect();
    let mut report = BalanceReport::default();

    for bin in 0..bin_count {
        if free[bin] >= 0 {
            continue;
        }

        for donor in donor_order(bin, &free) {
            let deficit = -free[bin];
            let amount = deficit.min(free[donor]);
            repaint_random(grid, bin as u8, donor as u8, amount as usize, rng);

            free[donor] -= amount;
            free[bin] += amount;
            report.moved += amount as usize;

            if free[bin] == 0 {
                break;
            }
        }

        if free[bin] < 0 {
            tracing::debug!(
                bin,
                excess = -free[bin],
                budget,
                "No spare capacity left, bin stays over budget"
            );
            report.residual.push(bin);
        }
    }

    report
}

/// Bins with spare capacity, nearest first.
///
/// For each distance `1..len`, `bin + distance` is tried before
/// `bin - distance`; only bins with positive free amount are listed.
pub fn donor_order(bin: usize, free: &[i64]) -> Vec<usize> {
    let mut donors = Vec::new();
    for distance in 1..free.len() {
        let above = bin + distance;
        if above < free.len() && free[above] > 0 {
            donors.push(above);
        }
        if let Some(below) = bin.checked_sub(distance) {
            if free[below] > 0 {
                donors.push(below);
            }
        }
    }
    donors
}

/// Repaint `amount` cells currently holding `from` as `to`, chosen uniformly
/// at random without replacement.
fn repaint_random<R: Rng + ?Sized>(
    grid: &mut PixelGrid,
    from: u8,
    to: u8,
    amount: usize,
    rng: &mut R,
) {
    let mut positions: Vec<usize> = grid
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &index)| index == from)
        .map(|(position, _)| position)
        .collect();

    let amount = amount.min(positions.len());
    let (chosen, _) = positions.partial_shuffle(rng, amount);

    let cells = grid.cells_mut();
    for &position in chosen.iter() {
        cells[position] = to;
    }
}
