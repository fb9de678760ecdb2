//! Per-color pixel counts against a brick budget.

mod balancer;

pub use balancer::{balance, donor_order, BalanceReport};

use crate::grid::PixelGrid;

/// Pixel counts per bin for one grid, with the uniform per-bin budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorInventory {
    counts: Vec<usize>,
    budget: usize,
}

impl ColorInventory {
    /// Count every cell of `grid` into `bin_count` bins.
    ///
    /// Cells holding an index outside `0..bin_count` are not counted.
    pub fn tally(grid: &PixelGrid, bin_count: usize, budget: usize) -> Self {
        let mut counts = vec![0usize; bin_count];
        for &index in grid.cells() {
            if let Some(slot) = counts.get_mut(index as usize) {
                *slot += 1;
            }
        }
        Self { counts, budget }
    }

    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    #[inline]
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `budget - count`; negative when the bin is over budget.
    pub fn free_amount(&self, bin: usize) -> i64 {
        self.budget as i64 - self.counts[bin] as i64
    }

    /// Bins holding more pixels than the budget allows.
    pub fn over_budget(&self) -> Vec<usize> {
        (0..self.counts.len())
            .filter(|&bin| self.free_amount(bin) < 0)
            .collect()
    }

    pub fn is_within_budget(&self) -> bool {
        self.counts.iter().all(|&count| count <= self.budget)
    }

    pub fn into_counts(self) -> Vec<usize> {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tally_counts_and_free() {
        let grid = PixelGrid::from_flat(vec![0, 0, 0, 1, 2, 2], 3, 2).unwrap();
        let inventory = ColorInventory::tally(&grid, 4, 2);

        assert_eq!(inventory.counts(), &[3, 1, 2, 0]);
        assert_eq!(inventory.total(), 6);
        assert_eq!(inventory.free_amount(0), -1);
        assert_eq!(inventory.free_amount(3), 2);
        assert_eq!(inventory.over_budget(), vec![0]);
        assert!(!inventory.is_within_budget());
    }

    #[test]
    fn test_out_of_table_indices_ignored() {
        let grid = PixelGrid::from_flat(vec![0, 9], 2, 1).unwrap();
        let inventory = ColorInventory::tally(&grid, 2, 5);

        assert_eq!(inventory.counts(), &[1, 0]);
        assert!(inventory.is_within_budget());
    }
}
