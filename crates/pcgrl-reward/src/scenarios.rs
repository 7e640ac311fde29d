//! Preset maze reward scenarios.
//!
//! Each preset returns a fully wired [`RewardStrategy`]. Range rewards
//! with an infinite window reward any growth of the statistic and charge
//! `-1` for standing still.

use pcgrl_core::StatKind;

use crate::range::range_reward;
use crate::strategy::{RewardFn, RewardStrategy};

/// Default target of [`RewardScenario::TargetPathLength`].
pub const DEFAULT_TARGET_PATH_LENGTH: i64 = 11;

/// Default threshold of [`RewardScenario::LongPath`].
pub const DEFAULT_LONG_PATH_LENGTH: i64 = 15;

/// A named, parameterized reward preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardScenario {
    /// Drive the shortest path to exactly `target` while growing walls;
    /// over once the path reaches `target` and there are at least 5 walls.
    TargetPathLength(i64),
    /// Grow path and walls while keeping exactly one START and one END;
    /// over at path length `>= threshold`, 10 walls, one START, one END.
    LongPath(i64),
    /// Only fix the endpoint counts at exactly one each.
    SingleStartEnd,
}

impl Default for RewardScenario {
    fn default() -> Self {
        RewardScenario::TargetPathLength(DEFAULT_TARGET_PATH_LENGTH)
    }
}

impl RewardScenario {
    /// Build a fresh strategy for this preset.
    pub fn build(self) -> RewardStrategy {
        let mut strategy = RewardStrategy::new();
        match self {
            RewardScenario::TargetPathLength(target) => {
                let t = target as f64;
                wire_range(&mut strategy, StatKind::PathLength, t, t);
                strategy.set_termination(StatKind::PathLength, move |s| {
                    s.value(StatKind::PathLength) >= t
                });
                wire_range(&mut strategy, StatKind::NumWall, f64::INFINITY, f64::INFINITY);
                strategy.set_termination(StatKind::NumWall, |s| s.value(StatKind::NumWall) >= 5.0);
            }
            RewardScenario::LongPath(threshold) => {
                let t = threshold as f64;
                wire_range(&mut strategy, StatKind::PathLength, f64::INFINITY, f64::INFINITY);
                strategy.set_termination(StatKind::PathLength, move |s| {
                    s.value(StatKind::PathLength) >= t
                });
                wire_range(&mut strategy, StatKind::NumWall, f64::INFINITY, f64::INFINITY);
                strategy.set_termination(StatKind::NumWall, |s| s.value(StatKind::NumWall) >= 10.0);
                wire_exactly_one(&mut strategy, StatKind::NumStart);
                wire_exactly_one(&mut strategy, StatKind::NumEnd);
            }
            RewardScenario::SingleStartEnd => {
                wire_exactly_one(&mut strategy, StatKind::NumStart);
                wire_exactly_one(&mut strategy, StatKind::NumEnd);
            }
        }
        strategy
    }
}

/// Register `kind` with a unit-weight range reward over `[low, high]`.
fn wire_range(strategy: &mut RewardStrategy, kind: StatKind, low: f64, high: f64) {
    strategy.register_stat(kind);
    strategy.set_reward(
        kind,
        RewardFn::binary(move |new, old| range_reward(new.value(kind), old.value(kind), low, high)),
    );
    strategy.set_weight(kind, 1.0);
}

fn wire_exactly_one(strategy: &mut RewardStrategy, kind: StatKind) {
    wire_range(strategy, kind, 1.0, 1.0);
    strategy.set_termination(kind, move |s| s.value(kind) == 1.0);
}
