//! Test utilities for pcgrl development.
//!
//! Provides ASCII grid fixtures and a [`RecordingObserver`] that captures
//! every event so tests can assert on what the core reported.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::{Arc, Mutex};

use pcgrl_core::{EditEvent, Grid, Observer, StatKind, Stats, TileKind};

/// Build a grid from rows of tile symbols: `.` EMPTY, `#` WALL,
/// `S` START, `E` END.
///
/// Panics on ragged rows or unknown symbols; fixtures are static.
pub fn grid_from_ascii(rows: &[&str]) -> Grid {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut cells = Vec::with_capacity(height * width);
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), width, "row {y} is ragged");
        for c in row.chars() {
            cells.push(TileKind::from_symbol(c).unwrap_or_else(|| panic!("bad symbol {c:?}")));
        }
    }
    Grid::from_cells(height, width, cells).expect("fixture grid must be non-empty")
}

/// Everything a [`RecordingObserver`] saw.
#[derive(Clone, Debug, PartialEq)]
pub enum Recorded {
    Reset(Stats),
    Edit(EditEvent),
    RewardTerm {
        stat: StatKind,
        raw: f64,
        weighted: f64,
    },
    RewardTotal(f64),
    EpisodeEnd {
        terminated: bool,
        truncated: bool,
    },
}

/// Observer that appends every event to a shared log.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events so far.
    pub fn events(&self) -> Vec<Recorded> {
        self.events.lock().unwrap().clone()
    }

    /// Only the edit events.
    pub fn edits(&self) -> Vec<EditEvent> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Recorded::Edit(edit) => Some(edit),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn push(&self, event: Recorded) {
        self.events.lock().unwrap().push(event);
    }
}

impl Observer for RecordingObserver {
    fn on_reset(&self, stats: &Stats) {
        self.push(Recorded::Reset(stats.clone()));
    }

    fn on_edit(&self, event: &EditEvent) {
        self.push(Recorded::Edit(*event));
    }

    fn on_reward_term(&self, stat: StatKind, raw: f64, weighted: f64) {
        self.push(Recorded::RewardTerm { stat, raw, weighted });
    }

    fn on_reward_total(&self, total: f64) {
        self.push(Recorded::RewardTotal(total));
    }

    fn on_episode_end(&self, terminated: bool, truncated: bool, _stats: &Stats) {
        self.push(Recorded::EpisodeEnd {
            terminated,
            truncated,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_fixture_layout() {
        let g = grid_from_ascii(&["S#", ".E"]);
        assert_eq!(g.get(0, 0), Some(TileKind::Start));
        assert_eq!(g.get(1, 0), Some(TileKind::Wall));
        assert_eq!(g.get(1, 1), Some(TileKind::End));
    }

    #[test]
    fn recorder_collects_in_order() {
        let rec = RecordingObserver::new();
        rec.on_reward_total(1.5);
        rec.on_episode_end(true, false, &Stats::new());
        assert_eq!(
            rec.events(),
            vec![
                Recorded::RewardTotal(1.5),
                Recorded::EpisodeEnd {
                    terminated: true,
                    truncated: false
                }
            ]
        );
    }
}
