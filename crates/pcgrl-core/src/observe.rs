//! Injected observability hooks.
//!
//! Every component that wants to report what it is doing takes a
//! [`SharedObserver`] at construction time instead of printing. The
//! default is [`NoopObserver`]; [`LogObserver`] forwards to the `log`
//! facade so any `log`-compatible backend can pick the events up.

use std::sync::Arc;

use crate::stat::{StatKind, Stats};
use crate::tile::TileKind;

/// One attempted cell edit, as seen by a representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditEvent {
    /// Column of the edited cell.
    pub x: usize,
    /// Row of the edited cell.
    pub y: usize,
    /// Tile held before the edit.
    pub previous: TileKind,
    /// Tile the action asked for.
    pub requested: TileKind,
    /// Whether the cell now holds a different tile.
    pub changed: bool,
    /// Whether the edit was refused because the cell is protected.
    pub suppressed: bool,
}

/// Receives events from the simulation core.
///
/// All hooks default to doing nothing, so implementors override only
/// what they care about. Hooks run synchronously on the caller's thread
/// and must not panic.
pub trait Observer: Send + Sync {
    /// A new episode started with these initial statistics.
    fn on_reset(&self, _stats: &Stats) {}

    /// A representation applied (or refused) an edit.
    fn on_edit(&self, _event: &EditEvent) {}

    /// One reward term was evaluated.
    fn on_reward_term(&self, _stat: StatKind, _raw: f64, _weighted: f64) {}

    /// The weighted reward sum for one step.
    fn on_reward_total(&self, _total: f64) {}

    /// An episode ended, either terminated or truncated.
    fn on_episode_end(&self, _terminated: bool, _truncated: bool, _stats: &Stats) {}
}

/// Shared handle to an observer.
pub type SharedObserver = Arc<dyn Observer>;

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// A fresh [`NoopObserver`] handle, the default for every constructor.
pub fn noop_observer() -> SharedObserver {
    Arc::new(NoopObserver)
}

/// Observer that forwards events to the `log` facade.
///
/// Per-edit and per-term events go to `trace`, per-step and per-episode
/// summaries to `debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn on_reset(&self, stats: &Stats) {
        log::debug!("reset: {stats}");
    }

    fn on_edit(&self, e: &EditEvent) {
        if e.suppressed {
            log::trace!("edit ({}, {}) suppressed: {} is protected", e.x, e.y, e.previous);
        } else {
            log::trace!(
                "edit ({}, {}) {} -> {} changed={}",
                e.x,
                e.y,
                e.previous,
                e.requested,
                e.changed
            );
        }
    }

    fn on_reward_term(&self, stat: StatKind, raw: f64, weighted: f64) {
        log::trace!("reward {stat}: raw={raw} weighted={weighted}");
    }

    fn on_reward_total(&self, total: f64) {
        log::debug!("total weighted reward: {total}");
    }

    fn on_episode_end(&self, terminated: bool, truncated: bool, stats: &Stats) {
        log::debug!("episode over (terminated={terminated}, truncated={truncated}): {stats}");
    }
}
