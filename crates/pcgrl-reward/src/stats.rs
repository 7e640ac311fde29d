//! Evaluation of [`StatKind`]s against a grid.

use pcgrl_core::{Grid, StatKind, StatValue, TileKind};
use pcgrl_space::{Analyzer, Solvability};

/// Evaluates statistics of one grid, sharing expensive work between them.
///
/// `is_grid_solvable` and `path_length` come from the same search; the
/// evaluator runs it at most once per grid.
pub struct StatEvaluator<'a> {
    grid: &'a Grid,
    analyzer: &'a mut Analyzer,
    solvability: Option<Solvability>,
}

impl<'a> StatEvaluator<'a> {
    /// An evaluator for `grid` borrowing `analyzer`'s buffers.
    pub fn new(grid: &'a Grid, analyzer: &'a mut Analyzer) -> Self {
        Self {
            grid,
            analyzer,
            solvability: None,
        }
    }

    fn solvability(&mut self) -> Solvability {
        match self.solvability {
            Some(s) => s,
            None => {
                let s = self.analyzer.analyze(self.grid);
                self.solvability = Some(s);
                s
            }
        }
    }

    fn count(&self, tile: TileKind) -> StatValue {
        self.grid.count(tile).into()
    }

    /// Value of `kind` for this grid.
    pub fn evaluate(&mut self, kind: StatKind) -> StatValue {
        match kind {
            StatKind::NumEmpty => self.count(TileKind::Empty),
            StatKind::NumWall => self.count(TileKind::Wall),
            StatKind::NumStart => self.count(TileKind::Start),
            StatKind::NumEnd => self.count(TileKind::End),
            StatKind::IsSolvable => self.solvability().solvable.into(),
            StatKind::PathLength => self.solvability().path_length.into(),
            StatKind::NumRegions => self.analyzer.count_regions(self.grid).into(),
        }
    }
}

/// One-shot evaluation of a single statistic.
pub fn evaluate_stat(kind: StatKind, grid: &Grid) -> StatValue {
    let mut analyzer = Analyzer::new();
    StatEvaluator::new(grid, &mut analyzer).evaluate(kind)
}
