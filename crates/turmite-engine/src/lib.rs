//! Simulation engine for multi-state, multi-ant Langton's Ant automata.
//!
//! [`AntSimulation`] owns the grid, the rule set, the palette and the
//! ants, and advances them one tick per [`step()`](AntSimulation::step).
//! Every cell it repaints is reported as a [`PaintEvent`] that the host
//! drains with [`drain_paint()`](AntSimulation::drain_paint).
//!
//! The engine is single-threaded and synchronous. Pacing is the host's
//! business; [`Cadence`] implements the usual fixed-interval policy for
//! hosts that want it.
//!
//! [`PaintEvent`]: turmite_core::PaintEvent

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ant;
pub mod cadence;
pub mod config;
pub mod hash;
pub mod metrics;
pub mod paint_buffer;
pub mod palette;
pub mod simulation;

pub use ant::Ant;
pub use cadence::Cadence;
pub use config::{ConfigError, SimConfig};
pub use hash::state_hash;
pub use metrics::StepMetrics;
pub use paint_buffer::PaintBuffer;
pub use palette::Palette;
pub use simulation::AntSimulation;
