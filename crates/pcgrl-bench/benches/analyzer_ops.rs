//! Criterion micro-benchmarks for path and region analysis.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pcgrl_bench::{snake_grid, snake_path_length};
use pcgrl_core::{GenerationStrategy, Grid, StatKind, TileKind};
use pcgrl_gen::{generate, GenerationParams};
use pcgrl_reward::RewardStrategy;
use pcgrl_space::Analyzer;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn open_grid(size: usize) -> Grid {
    let mut grid = Grid::filled(size, size, TileKind::Empty).unwrap();
    grid.set(0, 0, TileKind::Start).unwrap();
    grid.set(size - 1, size - 1, TileKind::End).unwrap();
    grid
}

/// Benchmark: BFS across an open 64x64 grid, buffers reused.
fn bench_analyze_open_64(c: &mut Criterion) {
    let grid = open_grid(64);
    let mut analyzer = Analyzer::new();

    c.bench_function("analyze_open_64", |b| {
        b.iter(|| black_box(analyzer.analyze(black_box(&grid))));
    });
}

/// Benchmark: BFS through a 63x64 serpentine maze (longest possible path).
fn bench_analyze_snake_64(c: &mut Criterion) {
    let grid = snake_grid(63, 64).unwrap();
    let expected = snake_path_length(63, 64) as i64;
    let mut analyzer = Analyzer::new();
    assert_eq!(analyzer.analyze(&grid).path_length, expected);

    c.bench_function("analyze_snake_64", |b| {
        b.iter(|| black_box(analyzer.analyze(black_box(&grid))));
    });
}

/// Benchmark: flood-fill region count on a random 64x64 grid.
fn bench_count_regions_random_64(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let params = GenerationParams::for_strategy(GenerationStrategy::Random);
    let grid = generate(&params, 64, 64, &mut rng).unwrap();
    let mut analyzer = Analyzer::new();

    c.bench_function("count_regions_random_64", |b| {
        b.iter(|| black_box(analyzer.count_regions(black_box(&grid))));
    });
}

/// Benchmark: every registered statistic on a 32x32 random grid.
fn bench_compute_stats_all_32(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let params = GenerationParams::for_strategy(GenerationStrategy::Random);
    let grid = generate(&params, 32, 32, &mut rng).unwrap();
    let mut strategy = RewardStrategy::new();
    for kind in StatKind::ALL {
        strategy.register_stat(kind);
    }
    let mut analyzer = Analyzer::new();

    c.bench_function("compute_stats_all_32", |b| {
        b.iter(|| black_box(strategy.compute_stats_with(black_box(&grid), &mut analyzer)));
    });
}

criterion_group!(
    benches,
    bench_analyze_open_64,
    bench_analyze_snake_64,
    bench_count_regions_random_64,
    bench_compute_stats_all_32
);
criterion_main!(benches);
