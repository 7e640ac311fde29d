//! Episode orchestration for pcgrl.
//!
//! [`PcgEnv`] wires a generator, a representation and a shared
//! [`RewardStrategy`](pcgrl_reward::RewardStrategy) into the familiar
//! `reset` / `step` loop, and keeps the per-episode bookkeeping: change
//! and iteration budgets, the edit heatmap, and timing metrics.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod env;
pub mod error;
pub mod metrics;

pub use config::{ConfigError, EnvConfig};
pub use env::{EnvAction, EnvObservation, PcgEnv, ResetOutcome, StepInfo, StepOutcome};
pub use error::EnvError;
pub use metrics::StepMetrics;
