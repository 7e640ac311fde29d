//! Breadth-first maze solvability.
//!
//! A grid is solvable when it holds exactly one START, exactly one END,
//! and END is reachable from START through 4-connected non-WALL cells.
//! Missing or duplicated endpoints short-circuit to
//! [`Solvability::UNSOLVABLE`] without searching.

use std::collections::VecDeque;

use pcgrl_core::{Grid, TileKind};

use crate::grid2d::neighbours4;

/// Result of one solvability analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solvability {
    /// Whether END is reachable from START.
    pub solvable: bool,
    /// Edges on the shortest START→END path, `-1` when unsolvable.
    pub path_length: i64,
}

impl Solvability {
    /// The result for any grid without a START→END path.
    pub const UNSOLVABLE: Self = Self {
        solvable: false,
        path_length: -1,
    };

    fn reached(steps: u32) -> Self {
        Self {
            solvable: true,
            path_length: i64::from(steps),
        }
    }
}

/// Reusable breadth-first search state.
///
/// Visitation is tracked with epoch stamps: a cell is visited in the
/// current search iff its stamp equals the current epoch. Starting a new
/// search bumps the epoch instead of clearing the buffer, so repeated
/// calls on same-sized grids allocate nothing.
#[derive(Debug, Default)]
pub struct Analyzer {
    pub(crate) stamps: Vec<u32>,
    pub(crate) epoch: u32,
    queue: VecDeque<(usize, u32)>,
    pub(crate) stack: Vec<usize>,
}

impl Analyzer {
    /// An analyzer with empty buffers; they grow on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh visitation epoch sized for `cells` cells.
    pub(crate) fn begin(&mut self, cells: usize) {
        if self.stamps.len() != cells {
            self.stamps.clear();
            self.stamps.resize(cells, 0);
            self.epoch = 0;
        }
        self.epoch = self.epoch.wrapping_add(1);
        if self.epoch == 0 {
            // Wrapped: stale stamps could alias the new epoch.
            self.stamps.fill(0);
            self.epoch = 1;
        }
    }

    pub(crate) fn visit(&mut self, index: usize) -> bool {
        if self.stamps[index] == self.epoch {
            return false;
        }
        self.stamps[index] = self.epoch;
        true
    }

    /// Whether `grid` is solvable and, if so, its shortest path length.
    pub fn analyze(&mut self, grid: &Grid) -> Solvability {
        let Some((start, end)) = endpoints(grid) else {
            return Solvability::UNSOLVABLE;
        };

        let (width, height) = (grid.width(), grid.height());
        let cells = grid.cells();
        self.begin(cells.len());
        self.queue.clear();
        self.visit(start);
        self.queue.push_back((start, 0));

        while let Some((index, steps)) = self.queue.pop_front() {
            if index == end {
                return Solvability::reached(steps);
            }
            for n in neighbours4(index, width, height) {
                if cells[n].is_passable() && self.visit(n) {
                    self.queue.push_back((n, steps + 1));
                }
            }
        }
        Solvability::UNSOLVABLE
    }
}

/// One-shot analysis with a throwaway [`Analyzer`].
pub fn analyze(grid: &Grid) -> Solvability {
    Analyzer::new().analyze(grid)
}

/// Flat indices of the unique START and END, or `None` if either is
/// missing or duplicated.
fn endpoints(grid: &Grid) -> Option<(usize, usize)> {
    let mut start = None;
    let mut end = None;
    for (i, &tile) in grid.cells().iter().enumerate() {
        let slot = match tile {
            TileKind::Start => &mut start,
            TileKind::End => &mut end,
            _ => continue,
        };
        if slot.replace(i).is_some() {
            return None;
        }
    }
    start.zip(end)
}
