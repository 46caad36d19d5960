//! Benchmark profiles for the Turmite ant engine.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarks and examples:
//!
//! - [`reference_profile`]: the default 512x512 canvas with one classic ant
//! - [`swarm_profile`]: 256x256 with 64 ants on a 12-state rule
//! - [`drain_into`]: consume pending paint the way a renderer would

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use turmite_core::PaintEvent;
use turmite_engine::{AntSimulation, SimConfig};

/// The default canvas: 512x512, rule `"RL"`, one ant.
pub fn reference_profile(seed: u64) -> SimConfig {
    SimConfig {
        palette_seed: Some(seed),
        ..SimConfig::default()
    }
}

/// Many ants on a 12-state rule over a 256x256 torus.
///
/// Every ant shares the centre start cell, so the first few hundred steps
/// are dominated by contention on the same cells.
pub fn swarm_profile(seed: u64) -> SimConfig {
    SimConfig {
        width: 256,
        height: 256,
        rules: "RRLLLRLLLRRR".into(),
        ant_count: 64,
        steps_per_tick: 1,
        palette_seed: Some(seed),
    }
}

/// Drain pending paint into `pixels` (row-major, one color index per cell).
///
/// Returns the number of events consumed.
pub fn drain_into(sim: &mut AntSimulation, pixels: &mut [u32]) -> usize {
    let width = sim.grid().width() as usize;
    let mut n = 0;
    for event in sim.drain_paint() {
        match event {
            PaintEvent::Clear { color_index } => pixels.fill(color_index),
            PaintEvent::Cell(c) => pixels[c.y as usize * width + c.x as usize] = c.color_index,
        }
        n += 1;
    }
    n
}
