//! Benchmark profiles and fixtures for pcgrl.
//!
//! - [`reference_config`]: 16x16 narrow environment, random fill
//! - [`stress_config`]: 64x64 wide environment
//! - [`snake_grid`]: worst-case serpentine maze for the analyzer

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use pcgrl_core::{GenerationStrategy, Grid, GridError, TileKind};
use pcgrl_env::EnvConfig;
use pcgrl_gen::GenerationParams;
use pcgrl_repr::{CursorPolicy, RepresentationKind};

/// 16x16 narrow env with a random cursor over the full alphabet.
pub fn reference_config(seed: u64) -> EnvConfig {
    EnvConfig {
        height: 16,
        width: 16,
        generation: GenerationParams::for_strategy(GenerationStrategy::Random),
        representation: RepresentationKind::Narrow,
        cursor: CursorPolicy::Random,
        seed,
        ..EnvConfig::default()
    }
}

/// 64x64 wide env starting from fixed corners.
pub fn stress_config(seed: u64) -> EnvConfig {
    EnvConfig {
        height: 64,
        width: 64,
        generation: GenerationParams::for_strategy(GenerationStrategy::FixedCorners),
        representation: RepresentationKind::Wide,
        seed,
        ..EnvConfig::default()
    }
}

/// A serpentine maze: open even rows joined by single gaps that
/// alternate between the right and left edge.
///
/// START sits at `(0, 0)`, END at the far end of the last open row, so
/// the only path visits every open cell.
pub fn snake_grid(height: usize, width: usize) -> Result<Grid, GridError> {
    let mut grid = Grid::filled(height, width, TileKind::Empty)?;
    for y in (1..height).step_by(2) {
        let gap = if (y / 2) % 2 == 0 { width - 1 } else { 0 };
        for x in (0..width).filter(|&x| x != gap) {
            grid.set(x, y, TileKind::Wall)?;
        }
    }
    let last_open = if (height - 1) % 2 == 0 { height - 1 } else { height - 2 };
    let end_x = if (last_open / 2) % 2 == 0 { width - 1 } else { 0 };
    grid.set(0, 0, TileKind::Start)?;
    grid.set(end_x, last_open, TileKind::End)?;
    Ok(grid)
}

/// Path length through [`snake_grid`] of the same size.
pub fn snake_path_length(height: usize, width: usize) -> usize {
    let last_open = if (height - 1) % 2 == 0 { height - 1 } else { height - 2 };
    let rows = last_open / 2 + 1;
    rows * (width - 1) + (rows - 1) * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        reference_config(42).validate().unwrap();
        stress_config(42).validate().unwrap();
    }

    #[test]
    fn small_snake_layout() {
        let grid = snake_grid(3, 3).unwrap();
        assert_eq!(grid.to_string(), "S..\n##.\nE..");
        assert_eq!(snake_path_length(3, 3), 6);
    }

    #[test]
    fn even_height_ends_on_last_open_row() {
        let grid = snake_grid(4, 3).unwrap();
        assert_eq!(grid.to_string(), "S..\n##.\nE..\n.##");
    }
}
