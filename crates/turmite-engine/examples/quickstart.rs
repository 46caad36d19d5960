//! Turmite Quickstart: a headless host driving a simulation.
//!
//! Demonstrates:
//!   1. Building a SimConfig and an AntSimulation
//!   2. Pacing steps with a Cadence and a speed setting
//!   3. Draining paint events into a framebuffer, as a renderer would
//!   4. Reconfiguring from text input, including a rejected request
//!
//! Run with:
//!   RUST_LOG=info cargo run --example quickstart

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use turmite_core::{PaintEvent, Rgba};
use turmite_engine::{state_hash, AntSimulation, Cadence, SimConfig};

// ─── Canvas parameters ──────────────────────────────────────────

const WIDTH: u32 = 48;
const HEIGHT: u32 = 24;
const FRAME: Duration = Duration::from_millis(16);
const FRAMES: usize = 120;

// ─── A minimal framebuffer ──────────────────────────────────────
//
// Stands in for a texture: it only ever learns about the simulation
// through paint events, resolved through the current palette.

struct Framebuffer {
    pixels: Vec<Rgba>,
}

impl Framebuffer {
    fn new() -> Self {
        Self {
            pixels: vec![Rgba::WHITE; (WIDTH * HEIGHT) as usize],
        }
    }

    fn apply(&mut self, sim: &mut AntSimulation) -> usize {
        let palette = sim.palette().clone();
        let mut painted = 0;
        for event in sim.drain_paint() {
            match event {
                PaintEvent::Clear { color_index } => {
                    let color = palette.get(color_index).unwrap_or(Rgba::WHITE);
                    self.pixels.fill(color);
                }
                PaintEvent::Cell(c) => {
                    let color = palette.get(c.color_index).unwrap_or(Rgba::WHITE);
                    self.pixels[(c.y as u32 * WIDTH + c.x as u32) as usize] = color;
                }
            }
            painted += 1;
        }
        painted
    }

    fn print(&self) {
        // Row HEIGHT-1 first so +Y points up on screen.
        for y in (0..HEIGHT).rev() {
            let row: String = (0..WIDTH)
                .map(|x| {
                    let p = self.pixels[(y * WIDTH + x) as usize];
                    if p == Rgba::WHITE {
                        '.'
                    } else if p == Rgba::BLACK {
                        '#'
                    } else {
                        'o'
                    }
                })
                .collect();
            println!("{row}");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // ─── Build ──────────────────────────────────────────────────

    let mut sim = AntSimulation::new(SimConfig {
        width: WIDTH,
        height: HEIGHT,
        rules: "RL".into(),
        ant_count: 1,
        steps_per_tick: 4,
        palette_seed: Some(2024),
    })
    .expect("valid config");

    let mut fb = Framebuffer::new();
    let mut cadence = Cadence::new(FRAME);

    // ─── Run the classic ant ────────────────────────────────────

    for _ in 0..FRAMES {
        cadence.drive(&mut sim, FRAME);
        fb.apply(&mut sim);
    }
    println!("RL after {} steps:", sim.current_tick());
    fb.print();

    // ─── Speed up, then switch to a multi-state swarm ───────────

    sim.set_steps_per_tick(32);
    if let Err(e) = sim.configure_text("LLRR", "many") {
        println!("rejected: {e}");
    }
    sim.configure_text("RRLLLRLLLRRR", "3").expect("valid rules");

    for _ in 0..FRAMES {
        cadence.drive(&mut sim, FRAME);
        fb.apply(&mut sim);
    }
    println!();
    println!(
        "RRLLLRLLLRRR x{} after {} steps (digest {:016x}):",
        sim.ants().len(),
        sim.current_tick(),
        state_hash(&sim)
    );
    fb.print();
}
