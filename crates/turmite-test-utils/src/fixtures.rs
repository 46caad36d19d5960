//! Reusable simulation configs.

use turmite_engine::{AntSimulation, SimConfig, StepMetrics};

/// Palette seed used by every fixture, so failures reproduce exactly.
pub const FIXTURE_SEED: u64 = 0x5eed;

/// A config with a fixed palette seed and one step per tick.
pub fn config(width: u32, height: u32, rules: &str, ant_count: i64) -> SimConfig {
    SimConfig {
        width,
        height,
        rules: rules.to_string(),
        ant_count,
        steps_per_tick: 1,
        palette_seed: Some(FIXTURE_SEED),
    }
}

/// The classic `"RL"` ant on an 8×8 torus.
pub fn langton_8x8() -> AntSimulation {
    AntSimulation::new(config(8, 8, "RL", 1)).expect("fixture config is valid")
}

/// Step `sim` `n` times and return merged metrics.
pub fn run(sim: &mut AntSimulation, n: usize) -> StepMetrics {
    let mut total = StepMetrics::default();
    for _ in 0..n {
        total.merge(&sim.step());
    }
    total
}
