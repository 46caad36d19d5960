//! Criterion benchmarks for stepping and paint draining.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use turmite_bench::{drain_into, reference_profile, swarm_profile};
use turmite_core::RuleSet;
use turmite_engine::{Ant, AntSimulation};
use turmite_grid::GridState;

/// Benchmark: one ant visit on a 512x512 torus, no paint buffering.
fn bench_ant_visit(c: &mut Criterion) {
    let mut grid = GridState::new(512, 512).unwrap();
    let rules = RuleSet::parse("RL").unwrap();
    let (x, y) = grid.center();
    let mut ant = Ant::new(x, y);

    c.bench_function("ant_visit_512", |b| {
        b.iter(|| black_box(ant.visit(&mut grid, &rules)));
    });
}

/// Benchmark: 1000 steps of the reference profile, draining each step.
fn bench_reference_1000_steps(c: &mut Criterion) {
    let mut sim = AntSimulation::new(reference_profile(42)).unwrap();
    let mut pixels = vec![0u32; 512 * 512];
    drain_into(&mut sim, &mut pixels);

    c.bench_function("reference_1000_steps", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(sim.step());
                drain_into(&mut sim, &mut pixels);
            }
        });
    });
}

/// Benchmark: one 64-ant swarm step.
fn bench_swarm_step(c: &mut Criterion) {
    let mut sim = AntSimulation::new(swarm_profile(42)).unwrap();
    let mut pixels = vec![0u32; 256 * 256];

    c.bench_function("swarm_step_64_ants", |b| {
        b.iter(|| {
            black_box(sim.step());
            drain_into(&mut sim, &mut pixels);
        });
    });
}

/// Benchmark: reconfigure a dirty 512x512 world.
fn bench_reconfigure(c: &mut Criterion) {
    c.bench_function("reconfigure_512", |b| {
        b.iter_batched(
            || {
                let mut sim = AntSimulation::new(reference_profile(42)).unwrap();
                for _ in 0..10_000 {
                    sim.step();
                }
                sim
            },
            |mut sim| {
                sim.configure("LLRR", 4).unwrap();
                black_box(sim)
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_ant_visit,
    bench_reference_1000_steps,
    bench_swarm_step,
    bench_reconfigure
);
criterion_main!(benches);
