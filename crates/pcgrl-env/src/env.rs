//! The reset/step orchestrator.
//!
//! # Ownership model
//!
//! [`PcgEnv`] owns its RNG, representation, grid and analyzer scratch
//! buffers. The reward strategy is read-only after setup and sits behind
//! an [`Arc`] so several environments can share one configuration. All
//! mutating methods take `&mut self`; the env is [`Send`] so it can be
//! moved into a worker, one env per worker.

use std::sync::Arc;
use std::time::Instant;

use pcgrl_core::{noop_observer, Grid, SharedObserver, Stats, TileKind, NUM_TILE_KINDS};
use pcgrl_gen::generate;
use pcgrl_repr::{Action, ActionSpace, ObservationSpace, Representation, Update};
use pcgrl_reward::RewardStrategy;
use pcgrl_space::Analyzer;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, EnvConfig};
use crate::error::EnvError;
use crate::metrics::StepMetrics;

const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<PcgEnv>();
    }
};

// ── Actions and results ─────────────────────────────────────────

/// An external action, in action-index space.
///
/// Tile indices select from [`EnvConfig::action_tiles`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvAction {
    /// Narrow encoding: a tile index.
    Narrow(usize),
    /// Wide encoding: coordinates and a tile index.
    Wide {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
        /// Index into the action tiles.
        tile: usize,
    },
}

/// What the agent sees: the representation's view plus the heatmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvObservation {
    /// Copy of the grid.
    pub grid: Grid,
    /// Narrow cursor, if any.
    pub cursor: Option<(usize, usize)>,
    /// Changes per cell this episode, row-major.
    pub heatmap: Vec<u32>,
}

/// Returned by [`PcgEnv::reset`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResetOutcome {
    /// Initial observation.
    pub observation: EnvObservation,
    /// Statistics of the initial grid.
    pub stats: Stats,
}

/// Episode bookkeeping attached to every step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepInfo {
    /// Statistics after the step.
    pub stats: Stats,
    /// Steps taken this episode.
    pub iterations: u32,
    /// Steps that changed a cell this episode.
    pub changes: u32,
    /// Iteration budget.
    pub max_iterations: u32,
    /// Change budget.
    pub max_changes: u32,
    /// The edit as the representation applied it.
    pub update: Update,
}

/// Returned by [`PcgEnv::step`].
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutcome {
    /// Observation after the edit.
    pub observation: EnvObservation,
    /// Weighted reward for the transition.
    pub reward: f64,
    /// Every registered termination condition holds.
    pub terminated: bool,
    /// A change or iteration budget ran out.
    pub truncated: bool,
    /// Counters and statistics.
    pub info: StepInfo,
    /// Timings for this step.
    pub metrics: StepMetrics,
}

// ── PcgEnv ──────────────────────────────────────────────────────

/// Single-episode grid editing environment.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use pcgrl_env::{EnvAction, EnvConfig, PcgEnv};
/// use pcgrl_reward::RewardScenario;
///
/// let strategy = Arc::new(RewardScenario::SingleStartEnd.build());
/// let mut env = PcgEnv::new(EnvConfig::default(), strategy).unwrap();
/// env.reset(Some(3)).unwrap();
/// let outcome = env.step(EnvAction::Narrow(1)).unwrap();
/// assert_eq!(outcome.info.iterations, 1);
/// ```
pub struct PcgEnv {
    config: EnvConfig,
    reward: Arc<RewardStrategy>,
    representation: Box<dyn Representation>,
    rng: ChaCha8Rng,
    analyzer: Analyzer,
    observer: SharedObserver,
    stats: Option<Stats>,
    heatmap: Vec<u32>,
    iterations: u32,
    changes: u32,
    max_changes: u32,
    max_iterations: u32,
    last_metrics: StepMetrics,
}

impl PcgEnv {
    /// Validate `config` and build an environment that still needs a
    /// [`reset`](Self::reset).
    pub fn new(config: EnvConfig, reward: Arc<RewardStrategy>) -> Result<Self, ConfigError> {
        config.validate()?;
        let observer = noop_observer();
        let representation = config
            .representation
            .build(config.cursor, Arc::clone(&observer));
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            heatmap: vec![0; config.height * config.width],
            max_changes: config.max_changes(),
            max_iterations: config.max_iterations(),
            config,
            reward,
            representation,
            analyzer: Analyzer::new(),
            observer,
            stats: None,
            iterations: 0,
            changes: 0,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Report episode and edit events to `observer`.
    ///
    /// Rebuilds the representation, so the env must be reset afterwards.
    pub fn with_observer(mut self, observer: SharedObserver) -> Self {
        self.representation = self
            .config
            .representation
            .build(self.config.cursor, Arc::clone(&observer));
        self.observer = observer;
        self.stats = None;
        self
    }

    /// Start a new episode.
    ///
    /// `Some(seed)` reseeds the RNG first; `None` continues the current
    /// stream, so consecutive episodes differ.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<ResetOutcome, EnvError> {
        if let Some(seed) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }
        let grid = generate(
            &self.config.generation,
            self.config.height,
            self.config.width,
            &mut self.rng,
        )?;
        let stats = self.reward.compute_stats_with(&grid, &mut self.analyzer);
        self.representation.reset(grid, &mut self.rng);

        self.heatmap.fill(0);
        self.iterations = 0;
        self.changes = 0;
        self.last_metrics = StepMetrics::default();
        self.observer.on_reset(&stats);
        self.stats = Some(stats.clone());

        Ok(ResetOutcome {
            observation: self.observation()?,
            stats,
        })
    }

    /// Apply one action and score the transition.
    ///
    /// A failed step leaves the grid and every counter untouched.
    pub fn step(&mut self, action: EnvAction) -> Result<StepOutcome, EnvError> {
        let step_start = Instant::now();
        let old_stats = self.stats.clone().ok_or(EnvError::NotReset)?;
        let action = self.resolve(action)?;

        let update = self.representation.update(
            action,
            self.config.action_tiles.len(),
            &mut self.rng,
        )?;
        self.iterations += 1;

        let mut stats_us = 0;
        if update.changed {
            self.changes += update.change_count();
            self.heatmap[update.y * self.config.width + update.x] += 1;
            let stats_start = Instant::now();
            let grid = self.representation.grid().ok_or(EnvError::NotReset)?;
            self.stats = Some(self.reward.compute_stats_with(grid, &mut self.analyzer));
            stats_us = stats_start.elapsed().as_micros() as u64;
        }
        let stats = self.stats.clone().ok_or(EnvError::NotReset)?;

        let reward = self.reward.get_reward(&stats, &old_stats);
        let terminated = self.reward.get_episode_over(&stats, &old_stats);
        let truncated =
            self.changes >= self.max_changes || self.iterations >= self.max_iterations;
        if terminated || truncated {
            self.observer.on_episode_end(terminated, truncated, &stats);
        }

        let observation = self.observation()?;
        let metrics = StepMetrics {
            total_us: step_start.elapsed().as_micros() as u64,
            stats_us,
        };
        self.last_metrics = metrics;

        Ok(StepOutcome {
            observation,
            reward,
            terminated,
            truncated,
            info: StepInfo {
                stats,
                iterations: self.iterations,
                changes: self.changes,
                max_iterations: self.max_iterations,
                max_changes: self.max_changes,
                update,
            },
            metrics,
        })
    }

    /// Current observation.
    pub fn observation(&self) -> Result<EnvObservation, EnvError> {
        let obs = self.representation.observation()?;
        Ok(EnvObservation {
            grid: obs.grid,
            cursor: obs.cursor,
            heatmap: self.heatmap.clone(),
        })
    }

    /// Action indices this env accepts.
    pub fn action_space(&self) -> ActionSpace {
        self.representation.action_space(
            self.config.height,
            self.config.width,
            self.config.action_tiles.len(),
        )
    }

    /// Observation layout, heatmap included.
    pub fn observation_space(&self) -> ObservationSpace {
        self.representation
            .observation_space(self.config.height, self.config.width, NUM_TILE_KINDS)
            .with_heatmap(self.max_changes)
    }

    /// The configuration this env was built from.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// The shared reward strategy.
    pub fn reward_strategy(&self) -> &Arc<RewardStrategy> {
        &self.reward
    }

    /// Current grid, once reset.
    pub fn grid(&self) -> Option<&Grid> {
        self.representation.grid()
    }

    /// Statistics of the current grid, once reset.
    pub fn stats(&self) -> Option<&Stats> {
        self.stats.as_ref()
    }

    /// Per-cell change counts, row-major.
    pub fn heatmap(&self) -> &[u32] {
        &self.heatmap
    }

    /// Steps taken this episode.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Changing steps this episode.
    pub fn changes(&self) -> u32 {
        self.changes
    }

    /// Change budget.
    pub fn max_changes(&self) -> u32 {
        self.max_changes
    }

    /// Iteration budget.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Timings from the most recent successful step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    fn action_tile(&self, index: usize) -> Result<TileKind, EnvError> {
        self.config
            .action_tiles
            .get(index)
            .copied()
            .ok_or(EnvError::UnknownActionTile {
                index,
                available: self.config.action_tiles.len(),
            })
    }

    fn resolve(&self, action: EnvAction) -> Result<Action, EnvError> {
        Ok(match action {
            EnvAction::Narrow(index) => Action::Tile(self.action_tile(index)?),
            EnvAction::Wide { x, y, tile } => Action::Place {
                x,
                y,
                tile: self.action_tile(tile)?,
            },
        })
    }
}

impl std::fmt::Debug for PcgEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PcgEnv")
            .field("representation", &self.config.representation)
            .field("height", &self.config.height)
            .field("width", &self.config.width)
            .field("iterations", &self.iterations)
            .field("changes", &self.changes)
            .field("reset", &self.stats.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcgrl_core::{GenerationStrategy, StatKind};
    use pcgrl_gen::GenerationParams;
    use pcgrl_repr::{CursorPolicy, RepresentationKind};
    use pcgrl_reward::{range_reward, RewardFn};
    use pcgrl_test_utils::{Recorded, RecordingObserver};

    fn wall_strategy() -> Arc<RewardStrategy> {
        let mut s = RewardStrategy::new();
        s.register_stat(StatKind::NumWall);
        s.set_reward(
            StatKind::NumWall,
            RewardFn::binary(|new, old| {
                range_reward(
                    new.value(StatKind::NumWall),
                    old.value(StatKind::NumWall),
                    3.0,
                    f64::INFINITY,
                )
            }),
        );
        s.set_termination(StatKind::NumWall, |s| s.value(StatKind::NumWall) >= 3.0);
        Arc::new(s)
    }

    fn sequential_empty(height: usize, width: usize) -> EnvConfig {
        EnvConfig {
            height,
            width,
            generation: GenerationParams::for_strategy(GenerationStrategy::Empty),
            representation: RepresentationKind::Narrow,
            cursor: CursorPolicy::Sequential,
            action_tiles: vec![TileKind::Empty, TileKind::Wall],
            change_rate: 1.0,
            ..EnvConfig::default()
        }
    }

    // ── Lifecycle ───────────────────────────────────────────────

    #[test]
    fn step_before_reset_fails() {
        let mut env = PcgEnv::new(EnvConfig::default(), wall_strategy()).unwrap();
        assert_eq!(env.step(EnvAction::Narrow(0)).unwrap_err(), EnvError::NotReset);
        assert_eq!(env.observation().unwrap_err(), EnvError::NotReset);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = EnvConfig {
            action_tiles: Vec::new(),
            ..EnvConfig::default()
        };
        assert!(matches!(
            PcgEnv::new(config, wall_strategy()),
            Err(ConfigError::NoActionTiles)
        ));
    }

    #[test]
    fn reset_reports_initial_stats() {
        let mut env = PcgEnv::new(sequential_empty(2, 3), wall_strategy()).unwrap();
        let reset = env.reset(Some(0)).unwrap();
        assert_eq!(reset.stats.value(StatKind::NumWall), 0.0);
        assert_eq!(reset.observation.heatmap, vec![0; 6]);
        assert_eq!(reset.observation.cursor, Some((0, 0)));
        assert_eq!(env.iterations(), 0);
    }

    // ── Stepping ────────────────────────────────────────────────

    #[test]
    fn changing_step_updates_counters_and_heatmap() {
        let mut env = PcgEnv::new(sequential_empty(2, 3), wall_strategy()).unwrap();
        env.reset(Some(0)).unwrap();

        let out = env.step(EnvAction::Narrow(1)).unwrap();
        assert!(out.info.update.changed);
        assert_eq!((out.info.iterations, out.info.changes), (1, 1));
        // Charged to the edited cell while the cursor has moved on.
        assert_eq!((out.info.update.x, out.info.update.y), (0, 0));
        assert_eq!(out.observation.cursor, Some((1, 0)));
        assert_eq!(out.observation.heatmap, vec![1, 0, 0, 0, 0, 0]);
        assert_eq!(out.info.stats.value(StatKind::NumWall), 1.0);
        // 0 -> 1 walls, both below the window.
        assert_eq!(out.reward, 1.0);
        assert!(!out.terminated);
    }

    #[test]
    fn unchanged_step_keeps_stats() {
        let mut env = PcgEnv::new(sequential_empty(2, 3), wall_strategy()).unwrap();
        env.reset(Some(0)).unwrap();

        let out = env.step(EnvAction::Narrow(0)).unwrap();
        assert!(!out.info.update.changed);
        assert_eq!((out.info.iterations, out.info.changes), (1, 0));
        assert_eq!(out.info.stats, *env.stats().unwrap());
        // Standing still below the window is penalised.
        assert_eq!(out.reward, -1.0);
        assert_eq!(out.metrics.stats_us, 0);
        assert!(out.observation.heatmap.iter().all(|&c| c == 0));
    }

    #[test]
    fn termination_after_three_walls() {
        let mut env = PcgEnv::new(sequential_empty(2, 3), wall_strategy()).unwrap();
        env.reset(Some(0)).unwrap();
        let mut last = None;
        for _ in 0..3 {
            last = Some(env.step(EnvAction::Narrow(1)).unwrap());
        }
        let last = last.unwrap();
        assert!(last.terminated);
        assert!(!last.truncated);
        assert_eq!(env.grid().unwrap().to_string(), "###\n...");
    }

    #[test]
    fn change_budget_truncates() {
        let config = EnvConfig {
            change_rate: 0.2,
            ..sequential_empty(2, 3)
        };
        // floor(0.2 * 6) = 1
        let mut env = PcgEnv::new(config, wall_strategy()).unwrap();
        env.reset(Some(0)).unwrap();
        assert_eq!(env.max_changes(), 1);
        let out = env.step(EnvAction::Narrow(1)).unwrap();
        assert!(out.truncated);
        assert_eq!(out.info.max_iterations, 6);
    }

    #[test]
    fn iteration_budget_truncates() {
        let config = EnvConfig {
            change_rate: 0.2,
            ..sequential_empty(2, 3)
        };
        let mut env = PcgEnv::new(config, wall_strategy()).unwrap();
        env.reset(Some(0)).unwrap();
        for i in 1..=6 {
            let out = env.step(EnvAction::Narrow(0)).unwrap();
            assert_eq!(out.truncated, i == 6);
        }
    }

    #[test]
    fn unknown_tile_index_leaves_state_untouched() {
        let mut env = PcgEnv::new(sequential_empty(2, 3), wall_strategy()).unwrap();
        env.reset(Some(0)).unwrap();
        let err = env.step(EnvAction::Narrow(2)).unwrap_err();
        assert_eq!(
            err,
            EnvError::UnknownActionTile {
                index: 2,
                available: 2
            }
        );
        assert_eq!(env.iterations(), 0);
    }

    #[test]
    fn wrong_encoding_is_a_repr_error() {
        let mut env = PcgEnv::new(sequential_empty(2, 3), wall_strategy()).unwrap();
        env.reset(Some(0)).unwrap();
        let err = env
            .step(EnvAction::Wide {
                x: 0,
                y: 0,
                tile: 1,
            })
            .unwrap_err();
        assert!(matches!(err, EnvError::Repr(_)));
    }

    #[test]
    fn wide_env_edits_named_cell() {
        let config = EnvConfig {
            representation: RepresentationKind::Wide,
            ..sequential_empty(2, 3)
        };
        let mut env = PcgEnv::new(config, wall_strategy()).unwrap();
        env.reset(Some(0)).unwrap();
        let out = env
            .step(EnvAction::Wide {
                x: 2,
                y: 1,
                tile: 1,
            })
            .unwrap();
        assert_eq!(out.observation.heatmap, vec![0, 0, 0, 0, 0, 1]);
        assert!(out.observation.cursor.is_none());
        assert_eq!(env.action_space(), ActionSpace::MultiDiscrete([3, 2, 2].into()));
    }

    // ── Spaces and observers ────────────────────────────────────

    #[test]
    fn observation_space_includes_heatmap() {
        let env = PcgEnv::new(EnvConfig::default(), wall_strategy()).unwrap();
        let space = env.observation_space();
        assert_eq!(space.grid.high, (NUM_TILE_KINDS - 1) as u32);
        let heatmap = space.heatmap.unwrap();
        assert_eq!(heatmap.high, 7);
        assert_eq!(env.action_space(), ActionSpace::Discrete(4));
    }

    #[test]
    fn observer_sees_reset_edits_and_episode_end() {
        let recorder = RecordingObserver::new();
        let mut env = PcgEnv::new(sequential_empty(1, 3), wall_strategy())
            .unwrap()
            .with_observer(Arc::new(recorder.clone()));
        env.reset(Some(0)).unwrap();
        for _ in 0..3 {
            env.step(EnvAction::Narrow(1)).unwrap();
        }
        let events = recorder.events();
        assert!(matches!(events.first(), Some(Recorded::Reset(_))));
        assert_eq!(recorder.edits().len(), 3);
        assert!(events.iter().any(|e| matches!(
            e,
            Recorded::EpisodeEnd {
                terminated: true,
                ..
            }
        )));
    }
}
