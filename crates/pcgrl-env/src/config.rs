//! Environment configuration, validation, and error types.
//!
//! [`EnvConfig`] is plain data with public fields; [`PcgEnv::new`]
//! calls [`validate()`](EnvConfig::validate) before building anything.
//!
//! [`PcgEnv::new`]: crate::PcgEnv::new

use std::error::Error;
use std::fmt;

use pcgrl_core::{GenerateError, GenerationStrategy, TileKind};
use pcgrl_gen::GenerationParams;
use pcgrl_repr::{CursorPolicy, RepresentationKind};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`EnvConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Height or width is zero.
    ZeroDimension {
        /// Configured height.
        height: usize,
        /// Configured width.
        width: usize,
    },
    /// `change_rate` is not a finite value in `(0, 1]`.
    InvalidChangeRate {
        /// The invalid value.
        value: f64,
    },
    /// `width * height` does not fit the `u32` episode counters.
    GridTooLarge {
        /// Configured height.
        height: usize,
        /// Configured width.
        width: usize,
    },
    /// `action_tiles` is empty.
    NoActionTiles,
    /// A two-tile alphabet selects binary mode, which edits only EMPTY
    /// and WALL.
    BinaryAlphabet {
        /// The configured pair.
        tiles: [TileKind; 2],
    },
    /// A tile appears twice in `action_tiles`.
    DuplicateActionTile {
        /// The repeated tile.
        tile: TileKind,
    },
    /// Generation parameters are inconsistent with each other or the grid.
    Generation(GenerateError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { height, width } => {
                write!(f, "grid dimensions must be positive, got {height}x{width}")
            }
            Self::InvalidChangeRate { value } => {
                write!(f, "change_rate must be in (0, 1], got {value}")
            }
            Self::GridTooLarge { height, width } => {
                write!(f, "grid {height}x{width} has more than u32::MAX cells")
            }
            Self::NoActionTiles => write!(f, "action_tiles must not be empty"),
            Self::BinaryAlphabet { tiles } => write!(
                f,
                "a two-tile alphabet must be EMPTY and WALL, got {} and {}",
                tiles[0], tiles[1]
            ),
            Self::DuplicateActionTile { tile } => {
                write!(f, "action tile {tile} listed more than once")
            }
            Self::Generation(e) => write!(f, "generation: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Generation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GenerateError> for ConfigError {
    fn from(e: GenerateError) -> Self {
        Self::Generation(e)
    }
}

// ── EnvConfig ──────────────────────────────────────────────────────

/// Complete configuration for a [`PcgEnv`](crate::PcgEnv).
#[derive(Clone, Debug, PartialEq)]
pub struct EnvConfig {
    /// Grid rows. Default: 6.
    pub height: usize,
    /// Grid columns. Default: 6.
    pub width: usize,
    /// How `reset` builds the initial grid. Default: random fill.
    pub generation: GenerationParams,
    /// Action encoding. Default: narrow.
    pub representation: RepresentationKind,
    /// Cursor movement for the narrow encoding. Default: random.
    pub cursor: CursorPolicy,
    /// Fraction of cells that may change before truncation. Default: 0.2.
    pub change_rate: f64,
    /// Tiles selectable by action index, in index order. Default: all four.
    pub action_tiles: Vec<TileKind>,
    /// Seed used at construction and by `reset(None)` on a fresh env.
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            height: 6,
            width: 6,
            generation: GenerationParams::default(),
            representation: RepresentationKind::default(),
            cursor: CursorPolicy::default(),
            change_rate: 0.2,
            action_tiles: TileKind::ALL.to_vec(),
            seed: 0,
        }
    }
}

impl EnvConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.width == 0 {
            return Err(ConfigError::ZeroDimension {
                height: self.height,
                width: self.width,
            });
        }
        if self.cell_count_u32().is_none() {
            return Err(ConfigError::GridTooLarge {
                height: self.height,
                width: self.width,
            });
        }
        if !self.change_rate.is_finite() || self.change_rate <= 0.0 || self.change_rate > 1.0 {
            return Err(ConfigError::InvalidChangeRate {
                value: self.change_rate,
            });
        }
        if self.action_tiles.is_empty() {
            return Err(ConfigError::NoActionTiles);
        }
        for (i, tile) in self.action_tiles.iter().enumerate() {
            if self.action_tiles[..i].contains(tile) {
                return Err(ConfigError::DuplicateActionTile { tile: *tile });
            }
        }
        if let [a, b] = self.action_tiles[..] {
            let binary = [TileKind::Empty, TileKind::Wall];
            if !(binary.contains(&a) && binary.contains(&b)) {
                return Err(ConfigError::BinaryAlphabet { tiles: [a, b] });
            }
        }
        self.generation.validate()?;
        let cells = self.height * self.width;
        if self.generation.strategy == GenerationStrategy::RandomCorners && cells < 2 {
            return Err(GenerateError::TooFewCells { cells }.into());
        }
        Ok(())
    }

    /// `max(floor(change_rate * width * height), 1)`.
    pub fn max_changes(&self) -> u32 {
        let cells = self.height.saturating_mul(self.width) as f64;
        ((self.change_rate * cells).floor() as u32).max(1)
    }

    /// `max_changes * width * height`, saturating at `u32::MAX`.
    pub fn max_iterations(&self) -> u32 {
        self.max_changes()
            .saturating_mul(self.cell_count_u32().unwrap_or(u32::MAX))
    }

    fn cell_count_u32(&self) -> Option<u32> {
        self.height
            .checked_mul(self.width)
            .and_then(|cells| u32::try_from(cells).ok())
    }
}
