//! Turmite: multi-state, multi-ant Langton's Ant on a toroidal grid.
//!
//! This is the facade crate that re-exports the public API from the
//! Turmite sub-crates. Most hosts only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use turmite::prelude::*;
//!
//! let mut sim = AntSimulation::new(SimConfig {
//!     width: 64,
//!     height: 64,
//!     rules: "LLRR".into(),
//!     ant_count: 2,
//!     steps_per_tick: 1,
//!     palette_seed: Some(7),
//! })
//! .unwrap();
//!
//! // The first batch of paint is always a full clear.
//! let first: Vec<PaintEvent> = sim.drain_paint().collect();
//! assert_eq!(first, vec![PaintEvent::Clear { color_index: 0 }]);
//!
//! sim.step();
//! assert_eq!(sim.drain_paint().count(), 2);
//! assert_eq!(sim.current_tick(), turmite::types::TickId(1));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `turmite-core` | Headings, rule strings, colors, paint events |
//! | [`grid`] | `turmite-grid` | The toroidal cell-state grid |
//! | [`engine`] | `turmite-engine` | The simulation, palette, and host cadence |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`turmite-core`).
///
/// [`types::RuleSet`] parses rule strings; [`types::PaintEvent`] is what
/// the engine hands a renderer.
pub use turmite_core as types;

/// Toroidal grid storage (`turmite-grid`).
pub use turmite_grid as grid;

/// The simulation engine (`turmite-engine`).
///
/// [`engine::AntSimulation`] for stepping, [`engine::Cadence`] for
/// fixed-interval pacing, [`engine::state_hash`] for determinism checks.
pub use turmite_engine as engine;

/// Common imports for typical Turmite usage.
///
/// ```rust
/// use turmite::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use turmite_core::{CellChange, Heading, PaintEvent, Rgba, RuleError, RuleSet, Turn};

    // Grid
    pub use turmite_grid::{GridError, GridState};

    // Engine
    pub use turmite_engine::{
        state_hash, Ant, AntSimulation, Cadence, ConfigError, Palette, SimConfig, StepMetrics,
    };
}
