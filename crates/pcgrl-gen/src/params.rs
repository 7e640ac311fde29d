//! Generation parameters and their validation.

use pcgrl_core::{GenerateError, GenerationStrategy, TileKind, NUM_TILE_KINDS};

/// Allowed deviation of a probability table's sum from 1.0.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Per-tile sampling probabilities for [`GenerationStrategy::Random`].
///
/// Indexed by [`TileKind::index`]. Tiles not mentioned have probability 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileProbabilities([f64; NUM_TILE_KINDS]);

impl TileProbabilities {
    /// Build a table from `(tile, probability)` pairs. Later pairs for the
    /// same tile overwrite earlier ones. Not validated until
    /// [`validate`](Self::validate).
    pub fn new(pairs: &[(TileKind, f64)]) -> Self {
        let mut table = [0.0; NUM_TILE_KINDS];
        for &(tile, p) in pairs {
            table[tile.index()] = p;
        }
        Self(table)
    }

    /// Probability of `tile`.
    pub fn get(&self, tile: TileKind) -> f64 {
        self.0[tile.index()]
    }

    /// Sum over all tiles.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Every entry finite and non-negative, sum within
    /// [`PROBABILITY_TOLERANCE`] of 1.
    pub fn validate(&self) -> Result<(), GenerateError> {
        for tile in TileKind::ALL {
            let value = self.get(tile);
            if !value.is_finite() || value < 0.0 {
                return Err(GenerateError::InvalidProbability { tile, value });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() >= PROBABILITY_TOLERANCE {
            return Err(GenerateError::ProbabilitySum { sum });
        }
        Ok(())
    }

    /// Map a uniform draw in `[0, 1)` to a tile by inverse CDF.
    ///
    /// Draws that land past the (possibly slightly short) total fall to
    /// the last tile with non-zero probability.
    pub(crate) fn pick(&self, u: f64) -> TileKind {
        let mut cumulative = 0.0;
        let mut last = TileKind::Empty;
        for tile in TileKind::ALL {
            let p = self.get(tile);
            if p <= 0.0 {
                continue;
            }
            cumulative += p;
            last = tile;
            if u < cumulative {
                return tile;
            }
        }
        last
    }
}

impl Default for TileProbabilities {
    /// EMPTY 0.7, WALL 0.2, START 0.05, END 0.05.
    fn default() -> Self {
        Self::new(&[
            (TileKind::Empty, 0.7),
            (TileKind::Wall, 0.2),
            (TileKind::Start, 0.05),
            (TileKind::End, 0.05),
        ])
    }
}

/// Everything [`generate`](crate::generate) needs besides dimensions and RNG.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationParams {
    /// Which generator runs.
    pub strategy: GenerationStrategy,
    /// Tile used by [`GenerationStrategy::Full`].
    pub fill_tile: TileKind,
    /// Table used by [`GenerationStrategy::Random`].
    pub probabilities: TileProbabilities,
}

impl GenerationParams {
    /// Create a new builder, defaulting to RANDOM with the default table.
    pub fn builder() -> GenerationParamsBuilder {
        GenerationParamsBuilder {
            strategy: GenerationStrategy::Random,
            fill_tile: TileKind::Wall,
            probabilities: TileProbabilities::default(),
        }
    }

    /// Parameters for `strategy` with every other setting at its default.
    pub fn for_strategy(strategy: GenerationStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Check the settings the chosen strategy actually reads.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.strategy == GenerationStrategy::Random {
            self.probabilities.validate()?;
        }
        Ok(())
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            strategy: GenerationStrategy::Random,
            fill_tile: TileKind::Wall,
            probabilities: TileProbabilities::default(),
        }
    }
}

/// Builder for [`GenerationParams`].
pub struct GenerationParamsBuilder {
    strategy: GenerationStrategy,
    fill_tile: TileKind,
    probabilities: TileProbabilities,
}

impl GenerationParamsBuilder {
    /// Set the strategy (default: RANDOM).
    pub fn strategy(mut self, strategy: GenerationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the FULL fill tile (default: WALL).
    pub fn fill_tile(mut self, tile: TileKind) -> Self {
        self.fill_tile = tile;
        self
    }

    /// Set the RANDOM probability table.
    pub fn probabilities(mut self, probabilities: TileProbabilities) -> Self {
        self.probabilities = probabilities;
        self
    }

    /// Build the parameters, validating them.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the strategy is RANDOM and the table has a
    /// negative or non-finite entry, or does not sum to 1.
    pub fn build(self) -> Result<GenerationParams, GenerateError> {
        let params = GenerationParams {
            strategy: self.strategy,
            fill_tile: self.fill_tile,
            probabilities: self.probabilities,
        };
        params.validate()?;
        Ok(params)
    }
}
