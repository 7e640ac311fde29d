//! The five grid generators.

use pcgrl_core::{GenerateError, GenerationStrategy, Grid, TileKind};
use rand::Rng;

use crate::params::{GenerationParams, TileProbabilities};

/// Upper bound on END re-draws in [`random_corners`].
///
/// On any grid with at least two cells the chance of exhausting this is
/// below `2^-4096`; the cap exists so a misuse fails instead of spinning.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 4096;

/// Build the initial grid for `params.strategy`.
///
/// # Errors
///
/// Returns `Err` if either dimension is zero, if the parameters fail
/// [`GenerationParams::validate`], or if random corner placement is asked
/// for on a grid with fewer than two cells.
///
/// # Examples
///
/// ```
/// use pcgrl_core::{GenerationStrategy, TileKind};
/// use pcgrl_gen::{generate, GenerationParams};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let params = GenerationParams::for_strategy(GenerationStrategy::FixedCorners);
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let grid = generate(&params, 3, 3, &mut rng).unwrap();
/// assert_eq!(grid.get(0, 0), Some(TileKind::Start));
/// assert_eq!(grid.get(2, 2), Some(TileKind::End));
/// ```
pub fn generate<R: Rng + ?Sized>(
    params: &GenerationParams,
    height: usize,
    width: usize,
    rng: &mut R,
) -> Result<Grid, GenerateError> {
    check_dimensions(height, width)?;
    params.validate()?;
    match params.strategy {
        GenerationStrategy::Empty => empty(height, width),
        GenerationStrategy::Full => filled(height, width, params.fill_tile),
        GenerationStrategy::Random => random(height, width, &params.probabilities, rng),
        GenerationStrategy::FixedCorners => fixed_corners(height, width),
        GenerationStrategy::RandomCorners => random_corners(height, width, rng),
    }
}

fn check_dimensions(height: usize, width: usize) -> Result<(), GenerateError> {
    if height == 0 || width == 0 {
        return Err(GenerateError::ZeroDimension { height, width });
    }
    Ok(())
}

/// Every cell EMPTY.
pub fn empty(height: usize, width: usize) -> Result<Grid, GenerateError> {
    filled(height, width, TileKind::Empty)
}

/// Every cell `tile`.
pub fn filled(height: usize, width: usize, tile: TileKind) -> Result<Grid, GenerateError> {
    check_dimensions(height, width)?;
    Ok(Grid::filled(height, width, tile)?)
}

/// Each cell drawn independently from `probabilities`, row-major order.
pub fn random<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    probabilities: &TileProbabilities,
    rng: &mut R,
) -> Result<Grid, GenerateError> {
    check_dimensions(height, width)?;
    probabilities.validate()?;
    let cells = (0..height * width)
        .map(|_| probabilities.pick(rng.random::<f64>()))
        .collect();
    Ok(Grid::from_cells(height, width, cells)?)
}

/// EMPTY grid with START at the top-left and END at the bottom-right.
///
/// On a 1×1 grid both land on the same cell and END, written second, wins.
pub fn fixed_corners(height: usize, width: usize) -> Result<Grid, GenerateError> {
    let mut grid = empty(height, width)?;
    grid.set(0, 0, TileKind::Start)?;
    grid.set(width - 1, height - 1, TileKind::End)?;
    Ok(grid)
}

/// EMPTY grid with START at a uniformly random cell and END at a
/// different uniformly random cell.
///
/// END is re-drawn until it misses START, at most
/// [`MAX_PLACEMENT_ATTEMPTS`] times.
pub fn random_corners<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    rng: &mut R,
) -> Result<Grid, GenerateError> {
    let mut grid = empty(height, width)?;
    let cells = grid.cell_count();
    if cells < 2 {
        return Err(GenerateError::TooFewCells { cells });
    }

    let start = (rng.random_range(0..width), rng.random_range(0..height));
    grid.set(start.0, start.1, TileKind::Start)?;

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let end = (rng.random_range(0..width), rng.random_range(0..height));
        if end != start {
            grid.set(end.0, end.1, TileKind::End)?;
            return Ok(grid);
        }
    }
    Err(GenerateError::PlacementExhausted {
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn arb_strategy() -> impl Strategy<Value = GenerationStrategy> {
        prop_oneof![
            Just(GenerationStrategy::Empty),
            Just(GenerationStrategy::Full),
            Just(GenerationStrategy::Random),
            Just(GenerationStrategy::FixedCorners),
            Just(GenerationStrategy::RandomCorners),
        ]
    }

    // ── Dimension and parameter validation ──────────────────────

    #[test]
    fn zero_dimensions_rejected_for_every_strategy() {
        for code in [0u8, 1, 2, 100, 101] {
            let params =
                GenerationParams::for_strategy(GenerationStrategy::try_from(code).unwrap());
            assert_eq!(
                generate(&params, 0, 4, &mut rng(0)),
                Err(GenerateError::ZeroDimension {
                    height: 0,
                    width: 4
                })
            );
            assert!(generate(&params, 4, 0, &mut rng(0)).is_err());
        }
    }

    #[test]
    fn bad_probability_table_rejected() {
        let params = GenerationParams {
            probabilities: TileProbabilities::new(&[(TileKind::Wall, 0.3)]),
            ..GenerationParams::default()
        };
        assert!(matches!(
            generate(&params, 3, 3, &mut rng(0)),
            Err(GenerateError::ProbabilitySum { .. })
        ));
    }

    // ── Individual strategies ───────────────────────────────────

    #[test]
    fn full_uses_fill_tile() {
        let params = GenerationParams::builder()
            .strategy(GenerationStrategy::Full)
            .fill_tile(TileKind::End)
            .build()
            .unwrap();
        let g = generate(&params, 2, 5, &mut rng(0)).unwrap();
        assert_eq!(g.count(TileKind::End), 10);
    }

    #[test]
    fn full_defaults_to_wall() {
        let g = generate(
            &GenerationParams::for_strategy(GenerationStrategy::Full),
            3,
            3,
            &mut rng(0),
        )
        .unwrap();
        assert_eq!(g.count(TileKind::Wall), 9);
    }

    #[test]
    fn fixed_corners_3x3() {
        let g = fixed_corners(3, 3).unwrap();
        assert_eq!(g.get(0, 0), Some(TileKind::Start));
        assert_eq!(g.get(2, 2), Some(TileKind::End));
        assert_eq!(g.count(TileKind::Empty), 7);
    }

    #[test]
    fn fixed_corners_non_square_uses_bottom_right() {
        let g = fixed_corners(2, 4).unwrap();
        assert_eq!(g.get(3, 1), Some(TileKind::End));
    }

    #[test]
    fn fixed_corners_single_cell_end_wins() {
        let g = fixed_corners(1, 1).unwrap();
        assert_eq!(g.get(0, 0), Some(TileKind::End));
        assert_eq!(g.count(TileKind::Start), 0);
    }

    #[test]
    fn random_corners_single_cell_rejected() {
        assert_eq!(
            random_corners(1, 1, &mut rng(3)),
            Err(GenerateError::TooFewCells { cells: 1 })
        );
    }

    #[test]
    fn random_corners_two_cells_uses_both() {
        for seed in 0..20 {
            let g = random_corners(1, 2, &mut rng(seed)).unwrap();
            assert_eq!(g.count(TileKind::Start), 1);
            assert_eq!(g.count(TileKind::End), 1);
        }
    }

    #[test]
    fn random_respects_zero_probabilities() {
        let table = TileProbabilities::new(&[(TileKind::Empty, 0.5), (TileKind::Wall, 0.5)]);
        let g = random(10, 10, &table, &mut rng(11)).unwrap();
        assert_eq!(g.count(TileKind::Start) + g.count(TileKind::End), 0);
        assert!(g.count(TileKind::Empty) > 0);
        assert!(g.count(TileKind::Wall) > 0);
    }

    #[test]
    fn random_is_reproducible_under_fixed_seed() {
        let table = TileProbabilities::default();
        let a = random(8, 8, &table, &mut rng(42)).unwrap();
        let b = random(8, 8, &table, &mut rng(42)).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn shape_and_range_hold(
            strategy in arb_strategy(),
            h in 1usize..12,
            w in 1usize..12,
            seed in any::<u64>(),
        ) {
            prop_assume!(!(strategy == GenerationStrategy::RandomCorners && h * w < 2));
            let params = GenerationParams::for_strategy(strategy);
            let g = generate(&params, h, w, &mut rng(seed)).unwrap();
            prop_assert_eq!(g.height(), h);
            prop_assert_eq!(g.width(), w);
            prop_assert_eq!(g.cell_count(), h * w);
            prop_assert!(g.to_codes().iter().all(|&c| (c as usize) < pcgrl_core::NUM_TILE_KINDS));
        }

        #[test]
        fn random_corners_places_one_of_each(h in 1usize..10, w in 1usize..10, seed in any::<u64>()) {
            prop_assume!(h * w >= 2);
            let g = random_corners(h, w, &mut rng(seed)).unwrap();
            prop_assert_eq!(g.count(TileKind::Start), 1);
            prop_assert_eq!(g.count(TileKind::End), 1);
        }
    }
}
