//! The reward strategy registry.

use std::fmt;

use indexmap::IndexMap;
use pcgrl_core::{noop_observer, Grid, SharedObserver, StatKind, Stats};
use pcgrl_space::Analyzer;

use crate::stats::StatEvaluator;

/// A reward function attached to one statistic.
///
/// The calling convention is fixed when the function is attached, not
/// inspected per call.
pub enum RewardFn {
    /// Scores the new state alone.
    Unary(Box<dyn Fn(&Stats) -> f64 + Send + Sync>),
    /// Scores the transition from old to new state.
    Binary(Box<dyn Fn(&Stats, &Stats) -> f64 + Send + Sync>),
}

impl RewardFn {
    /// Wrap a function of the new statistics.
    pub fn unary(f: impl Fn(&Stats) -> f64 + Send + Sync + 'static) -> Self {
        RewardFn::Unary(Box::new(f))
    }

    /// Wrap a function of `(new, old)` statistics.
    pub fn binary(f: impl Fn(&Stats, &Stats) -> f64 + Send + Sync + 'static) -> Self {
        RewardFn::Binary(Box::new(f))
    }

    /// Call with whichever arguments this function takes.
    pub fn evaluate(&self, new: &Stats, old: &Stats) -> f64 {
        match self {
            RewardFn::Unary(f) => f(new),
            RewardFn::Binary(f) => f(new, old),
        }
    }
}

impl fmt::Debug for RewardFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewardFn::Unary(_) => f.write_str("RewardFn::Unary"),
            RewardFn::Binary(_) => f.write_str("RewardFn::Binary"),
        }
    }
}

/// A termination predicate over the new statistics.
pub type Termination = Box<dyn Fn(&Stats) -> bool + Send + Sync>;

/// Anything that names a statistic: a [`StatKind`] or its string name.
pub trait StatKey {
    /// The statistic named, or `None` if the name is unknown.
    fn stat_kind(&self) -> Option<StatKind>;
}

impl StatKey for StatKind {
    fn stat_kind(&self) -> Option<StatKind> {
        Some(*self)
    }
}

impl StatKey for &str {
    fn stat_kind(&self) -> Option<StatKind> {
        StatKind::from_name(self)
    }
}

impl StatKey for String {
    fn stat_kind(&self) -> Option<StatKind> {
        StatKind::from_name(self)
    }
}

#[derive(Default)]
struct StatEntry {
    reward: Option<RewardFn>,
    weight: Option<f64>,
    termination: Option<Termination>,
}

/// Default weight of a reward term with no weight set.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Maps registered statistics to weighted rewards and termination
/// predicates.
///
/// Setup methods return `false` instead of failing so configuration code
/// can probe registrations idempotently: registering an unknown or
/// already-registered statistic, or attaching anything to a statistic
/// that is not registered, is refused and leaves the strategy unchanged.
///
/// Entries keep registration order, which fixes the order statistics are
/// computed and reward terms summed.
pub struct RewardStrategy {
    entries: IndexMap<StatKind, StatEntry>,
    observer: SharedObserver,
}

impl RewardStrategy {
    /// An empty strategy reporting to a no-op observer.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            observer: noop_observer(),
        }
    }

    /// Report reward terms and totals to `observer`.
    pub fn with_observer(mut self, observer: SharedObserver) -> Self {
        self.observer = observer;
        self
    }

    // ── Setup ───────────────────────────────────────────────────

    /// Register a statistic so it is computed every step.
    ///
    /// Returns `false` if the name is unknown or already registered.
    pub fn register_stat(&mut self, key: impl StatKey) -> bool {
        let Some(kind) = key.stat_kind() else {
            return false;
        };
        if self.entries.contains_key(&kind) {
            return false;
        }
        self.entries.insert(kind, StatEntry::default());
        true
    }

    fn entry_mut(&mut self, key: impl StatKey) -> Option<&mut StatEntry> {
        key.stat_kind().and_then(|k| self.entries.get_mut(&k))
    }

    /// Attach (or replace) the reward function of a registered statistic.
    pub fn set_reward(&mut self, key: impl StatKey, reward: RewardFn) -> bool {
        match self.entry_mut(key) {
            Some(entry) => {
                entry.reward = Some(reward);
                true
            }
            None => false,
        }
    }

    /// Set the weight of a registered statistic's reward term.
    pub fn set_weight(&mut self, key: impl StatKey, weight: f64) -> bool {
        match self.entry_mut(key) {
            Some(entry) => {
                entry.weight = Some(weight);
                true
            }
            None => false,
        }
    }

    /// Attach (or replace) the termination predicate of a registered
    /// statistic.
    pub fn set_termination(
        &mut self,
        key: impl StatKey,
        predicate: impl Fn(&Stats) -> bool + Send + Sync + 'static,
    ) -> bool {
        match self.entry_mut(key) {
            Some(entry) => {
                entry.termination = Some(Box::new(predicate));
                true
            }
            None => false,
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Whether `key` names a registered statistic.
    pub fn is_registered(&self, key: impl StatKey) -> bool {
        key.stat_kind()
            .is_some_and(|k| self.entries.contains_key(&k))
    }

    /// Registered statistics in registration order.
    pub fn registered(&self) -> impl Iterator<Item = StatKind> + '_ {
        self.entries.keys().copied()
    }

    /// Effective weight of a registered statistic, `None` if unregistered.
    pub fn weight(&self, key: impl StatKey) -> Option<f64> {
        let kind = key.stat_kind()?;
        self.entries
            .get(&kind)
            .map(|e| e.weight.unwrap_or(DEFAULT_WEIGHT))
    }

    /// Number of attached termination predicates.
    pub fn termination_count(&self) -> usize {
        self.entries
            .values()
            .filter(|e| e.termination.is_some())
            .count()
    }

    // ── Per-step evaluation ─────────────────────────────────────

    /// Evaluate every registered statistic on `grid`.
    pub fn compute_stats(&self, grid: &Grid) -> Stats {
        self.compute_stats_with(grid, &mut Analyzer::new())
    }

    /// [`compute_stats`](Self::compute_stats) reusing `analyzer`'s buffers.
    pub fn compute_stats_with(&self, grid: &Grid, analyzer: &mut Analyzer) -> Stats {
        let mut evaluator = StatEvaluator::new(grid, analyzer);
        self.entries
            .keys()
            .map(|&kind| (kind, evaluator.evaluate(kind)))
            .collect()
    }

    /// Weighted sum of every attached reward function.
    ///
    /// Statistics registered without a reward function contribute nothing.
    pub fn get_reward(&self, new: &Stats, old: &Stats) -> f64 {
        let mut total = 0.0;
        for (&kind, entry) in &self.entries {
            let Some(reward) = &entry.reward else {
                continue;
            };
            let raw = reward.evaluate(new, old);
            let weighted = raw * entry.weight.unwrap_or(DEFAULT_WEIGHT);
            self.observer.on_reward_term(kind, raw, weighted);
            total += weighted;
        }
        self.observer.on_reward_total(total);
        total
    }

    /// Whether every attached termination predicate holds on `new`.
    ///
    /// With no predicates attached this is vacuously `true`.
    pub fn get_episode_over(&self, new: &Stats, _old: &Stats) -> bool {
        self.entries
            .values()
            .filter_map(|e| e.termination.as_ref())
            .all(|predicate| predicate(new))
    }
}

impl Default for RewardStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RewardStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for (kind, entry) in &self.entries {
            list.entry(&format_args!(
                "{kind}(reward={}, weight={:?}, termination={})",
                entry.reward.is_some(),
                entry.weight,
                entry.termination.is_some()
            ));
        }
        list.finish()
    }
}
