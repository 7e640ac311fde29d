//! pcgrl: grid-editing environments for procedural content generation
//! via reinforcement learning.
//!
//! This is the top-level facade crate that re-exports the public API from
//! every pcgrl sub-crate. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use pcgrl::prelude::*;
//!
//! // Reward walls until there are at least four of them.
//! let mut strategy = RewardStrategy::new();
//! strategy.register_stat(StatKind::NumWall);
//! strategy.set_reward(
//!     StatKind::NumWall,
//!     RewardFn::binary(|new, old| {
//!         range_reward(
//!             new.value(StatKind::NumWall),
//!             old.value(StatKind::NumWall),
//!             4.0,
//!             f64::INFINITY,
//!         )
//!     }),
//! );
//! strategy.set_termination(StatKind::NumWall, |s| s.value(StatKind::NumWall) >= 4.0);
//!
//! let config = EnvConfig {
//!     height: 4,
//!     width: 4,
//!     generation: GenerationParams::for_strategy(GenerationStrategy::Empty),
//!     cursor: CursorPolicy::Sequential,
//!     change_rate: 0.5,
//!     ..EnvConfig::default()
//! };
//! let mut env = PcgEnv::new(config, Arc::new(strategy)).unwrap();
//! env.reset(Some(0)).unwrap();
//!
//! // Action index 1 is WALL in the default alphabet.
//! let mut outcome = env.step(EnvAction::Narrow(1)).unwrap();
//! while !outcome.terminated && !outcome.truncated {
//!     outcome = env.step(EnvAction::Narrow(1)).unwrap();
//! }
//! assert!(outcome.terminated);
//! assert_eq!(env.grid().unwrap().to_string(), "####\n....\n....\n....");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `pcgrl-core` | Tiles, statistics, `Grid`, error types, observers |
//! | [`space`] | `pcgrl-space` | Neighbourhoods, solvability analysis, region counting |
//! | [`generation`] | `pcgrl-gen` | Initial grid generators and their parameters |
//! | [`reward`] | `pcgrl-reward` | Reward strategy engine, range shaping, presets |
//! | [`repr`] | `pcgrl-repr` | Narrow and wide representations, space descriptors |
//! | [`env`] | `pcgrl-env` | `PcgEnv`, configuration, step metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`pcgrl-core`).
///
/// [`types::TileKind`], [`types::StatKind`], [`types::Grid`] and the
/// [`types::Observer`] hooks.
pub use pcgrl_core as types;

/// Grid topology and path analysis (`pcgrl-space`).
///
/// [`space::Analyzer`] keeps its buffers between calls; the free
/// functions allocate per call.
pub use pcgrl_space as space;

/// Initial grid generation (`pcgrl-gen`).
pub use pcgrl_gen as generation;

/// Reward strategy engine (`pcgrl-reward`).
///
/// Register statistics on a [`reward::RewardStrategy`], attach reward and
/// termination functions, or start from a [`reward::RewardScenario`].
pub use pcgrl_reward as reward;

/// Action representations (`pcgrl-repr`).
pub use pcgrl_repr as repr;

/// Episode orchestration (`pcgrl-env`).
///
/// [`env::PcgEnv`] runs the reset/step loop.
pub use pcgrl_env as env;

/// Common imports for typical pcgrl usage.
///
/// ```rust
/// use pcgrl::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use pcgrl_core::{
        GenerationStrategy, Grid, LogObserver, Observer, SharedObserver, StatKind, StatValue,
        Stats, TileKind,
    };

    // Errors
    pub use pcgrl_core::{GenerateError, GridError, ReprError};
    pub use pcgrl_env::{ConfigError, EnvError};

    // Generation
    pub use pcgrl_gen::{GenerationParams, TileProbabilities};

    // Rewards
    pub use pcgrl_reward::{
        clamped_range_reward, range_reward, RewardFn, RewardScenario, RewardStrategy,
    };

    // Representations
    pub use pcgrl_repr::{ActionSpace, CursorPolicy, ObservationSpace, RepresentationKind};

    // Environment
    pub use pcgrl_env::{EnvAction, EnvConfig, PcgEnv, StepMetrics, StepOutcome};
}
