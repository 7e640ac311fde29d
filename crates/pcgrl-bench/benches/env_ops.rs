//! Criterion benchmarks for whole environment steps.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use pcgrl_bench::{reference_config, stress_config};
use pcgrl_env::{EnvAction, PcgEnv};
use pcgrl_reward::RewardScenario;

/// Benchmark: 100 narrow steps on the reference profile, reset included.
fn bench_narrow_episode_16(c: &mut Criterion) {
    let strategy = Arc::new(RewardScenario::default().build());
    let mut env = PcgEnv::new(reference_config(42), strategy).unwrap();

    c.bench_function("narrow_episode_16", |b| {
        b.iter(|| {
            env.reset(None).unwrap();
            for i in 0..100 {
                let outcome = env.step(EnvAction::Narrow(i % 4)).unwrap();
                black_box(&outcome);
                if outcome.terminated || outcome.truncated {
                    break;
                }
            }
        });
    });
}

/// Benchmark: one wide step on the 64x64 stress profile, cycling cells.
fn bench_wide_step_64(c: &mut Criterion) {
    let strategy = Arc::new(RewardScenario::LongPath(100).build());
    let mut env = PcgEnv::new(stress_config(42), strategy).unwrap();
    env.reset(Some(42)).unwrap();
    let mut i = 0usize;

    c.bench_function("wide_step_64", |b| {
        b.iter(|| {
            let cell = i % (64 * 64);
            let action = EnvAction::Wide {
                x: cell % 64,
                y: cell / 64,
                tile: i % 2,
            };
            i = i.wrapping_add(7919);
            black_box(env.step(action).unwrap())
        });
    });
}

/// Benchmark: reset alone (generation plus initial statistics).
fn bench_reset_16(c: &mut Criterion) {
    let strategy = Arc::new(RewardScenario::SingleStartEnd.build());
    let mut env = PcgEnv::new(reference_config(1), strategy).unwrap();

    c.bench_function("reset_16", |b| {
        b.iter(|| black_box(env.reset(None).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_narrow_episode_16,
    bench_wide_step_64,
    bench_reset_16
);
criterion_main!(benches);
