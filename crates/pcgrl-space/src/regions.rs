//! Connected-region counting.

use pcgrl_core::Grid;

use crate::grid2d::neighbours4;
use crate::solvability::Analyzer;

impl Analyzer {
    /// Number of 4-connected components of passable (non-WALL) cells.
    ///
    /// Shares the analyzer's visitation buffer; an all-WALL grid has zero
    /// regions.
    pub fn count_regions(&mut self, grid: &Grid) -> usize {
        let (width, height) = (grid.width(), grid.height());
        let cells = grid.cells();
        self.begin(cells.len());
        let mut stack = std::mem::take(&mut self.stack);
        let mut regions = 0;

        for seed in 0..cells.len() {
            if !cells[seed].is_passable() || !self.visit(seed) {
                continue;
            }
            regions += 1;
            stack.clear();
            stack.push(seed);
            while let Some(i) = stack.pop() {
                for n in neighbours4(i, width, height) {
                    if cells[n].is_passable() && self.visit(n) {
                        stack.push(n);
                    }
                }
            }
        }

        self.stack = stack;
        regions
    }
}

/// One-shot region count with a throwaway [`Analyzer`].
pub fn count_regions(grid: &Grid) -> usize {
    Analyzer::new().count_regions(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcgrl_test_utils::grid_from_ascii;

    #[test]
    fn open_grid_is_one_region() {
        assert_eq!(count_regions(&grid_from_ascii(&["S..", "...", "..E"])), 1);
    }

    #[test]
    fn wall_row_splits_in_two() {
        assert_eq!(count_regions(&grid_from_ascii(&["S..", "###", "..E"])), 2);
    }

    #[test]
    fn all_wall_has_none() {
        assert_eq!(count_regions(&grid_from_ascii(&["##", "##"])), 0);
    }

    #[test]
    fn diagonal_cells_are_separate() {
        assert_eq!(count_regions(&grid_from_ascii(&[".#", "#."])), 2);
    }

    #[test]
    fn shares_buffers_with_solvability() {
        let mut a = Analyzer::new();
        let g = grid_from_ascii(&["S.#", "###", "#.E"]);
        assert!(!a.analyze(&g).solvable);
        assert_eq!(a.count_regions(&g), 2);
        assert!(!a.analyze(&g).solvable);
    }
}
