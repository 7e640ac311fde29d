//! Stat-driven reward shaping for pcgrl.
//!
//! A [`RewardStrategy`] is wired once per scenario: register the
//! statistics it needs, then attach to each an optional reward function,
//! weight, and termination predicate. Every step the orchestrator asks it
//! to [`compute_stats`](RewardStrategy::compute_stats) on the new grid,
//! then to score the transition and decide whether the episode is over.
//!
//! # Wiring a strategy
//!
//! ```
//! use pcgrl_core::StatKind;
//! use pcgrl_reward::{range_reward, RewardFn, RewardStrategy};
//! use pcgrl_test_utils::grid_from_ascii;
//!
//! let mut strategy = RewardStrategy::new();
//! assert!(strategy.register_stat("path_length"));
//! assert!(strategy.set_reward(
//!     "path_length",
//!     RewardFn::binary(|new, old| {
//!         range_reward(new.value(StatKind::PathLength), old.value(StatKind::PathLength), 6.0, 6.0)
//!     }),
//! ));
//! assert!(strategy.set_termination("path_length", |s| s.value(StatKind::PathLength) >= 6.0));
//!
//! let old = strategy.compute_stats(&grid_from_ascii(&["S..", "...", "..E"]));
//! let new = strategy.compute_stats(&grid_from_ascii(&["S..", "##.", "E.."]));
//! assert_eq!(new.value(StatKind::PathLength), 6.0);
//! assert_eq!(strategy.get_reward(&new, &old), -1.0);
//! assert!(strategy.get_episode_over(&new, &old));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod range;
pub mod scenarios;
pub mod stats;
pub mod strategy;

pub use range::{clamped_range_reward, range_reward};
pub use scenarios::RewardScenario;
pub use stats::{evaluate_stat, StatEvaluator};
pub use strategy::{RewardFn, RewardStrategy, StatKey, Termination};
