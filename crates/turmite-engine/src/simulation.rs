//! The synchronous ant simulation.
//!
//! [`AntSimulation`] is the primary user-facing API. Each call to
//! [`step()`](AntSimulation::step) moves every ant exactly once, in
//! collection order, and queues one paint event per visited cell.
//!
//! # Ownership model
//!
//! `AntSimulation` is [`Send`] but offers no internal locking. All
//! mutating methods take `&mut self`, so `step()` and `configure()` can
//! never interleave; a host that shares the simulation across threads
//! wraps it in its own mutex.
//!
//! # Reconfiguration
//!
//! [`configure()`](AntSimulation::configure) validates its inputs before
//! touching anything. A rejected call leaves rules, palette, grid, ants,
//! tick counter and pending paint events exactly as they were.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use turmite_core::{PaintEvent, RuleSet, TickId};
use turmite_grid::GridState;

use crate::ant::Ant;
use crate::config::{check_ant_count, parse_ant_count, parse_rules, ConfigError, SimConfig};
use crate::metrics::StepMetrics;
use crate::paint_buffer::PaintBuffer;
use crate::palette::Palette;

// Compile-time assertion: AntSimulation can be moved to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<AntSimulation>();
    }
};

/// A multi-state, multi-ant Langton's Ant on a toroidal grid.
///
/// Created from a [`SimConfig`] via [`new()`](AntSimulation::new), which
/// applies the initial configuration; there is no unconfigured state.
///
/// # Example
///
/// ```
/// use turmite_engine::{AntSimulation, SimConfig};
///
/// let mut sim = AntSimulation::new(SimConfig {
///     width: 8,
///     height: 8,
///     palette_seed: Some(1),
///     ..SimConfig::default()
/// })
/// .unwrap();
///
/// sim.step();
/// assert_eq!(sim.grid().get(4, 4), 1);
/// assert_eq!(sim.ants()[0].position(), (5, 4));
/// ```
pub struct AntSimulation {
    grid: GridState,
    rules: RuleSet,
    palette: Palette,
    palette_rng: ChaCha8Rng,
    palette_seed: u64,
    ants: Vec<Ant>,
    paint: PaintBuffer,
    tick: TickId,
    steps_per_tick: u32,
    last_metrics: StepMetrics,
}

impl AntSimulation {
    /// Create a simulation from a [`SimConfig`].
    ///
    /// Validates the configuration, allocates the grid, builds the palette,
    /// and places the ants. The paint buffer starts with a full repaint.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = GridState::new(config.width, config.height)?;
        let rules = parse_rules(&config.rules)?;
        let ant_count = check_ant_count(config.ant_count)?;

        let palette_seed = config
            .palette_seed
            .unwrap_or_else(|| rand::thread_rng().gen());
        let mut palette_rng = ChaCha8Rng::seed_from_u64(palette_seed);
        let palette = Palette::generate(rules.state_count(), &mut palette_rng);

        let mut sim = Self {
            grid,
            rules,
            palette,
            palette_rng,
            palette_seed,
            ants: Vec::new(),
            paint: PaintBuffer::new(),
            tick: TickId(0),
            steps_per_tick: config.steps_per_tick,
            last_metrics: StepMetrics::default(),
        };
        sim.reset_world(ant_count);

        tracing::info!(
            width = config.width,
            height = config.height,
            rules = %sim.rules,
            ants = ant_count,
            palette_seed,
            "simulation created"
        );
        Ok(sim)
    }

    /// Replace the rules and ants and restart from a blank grid.
    ///
    /// `rules` must be non-empty; `ant_count` must be in
    /// `0..=`[`SimConfig::MAX_ANTS`] (zero is a legal, idle simulation). On success: the rule set and palette
    /// are rebuilt, every cell returns to state 0, pending paint events are
    /// replaced by a single [`PaintEvent::Clear`], `ant_count` ants are
    /// placed at the grid center facing up, and the tick counter resets.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidRuleString`], [`ConfigError::InvalidAntCount`]
    /// or [`ConfigError::TooManyAnts`]. Nothing changes on error.
    pub fn configure(&mut self, rules: &str, ant_count: i64) -> Result<(), ConfigError> {
        let validated =
            parse_rules(rules).and_then(|r| check_ant_count(ant_count).map(|n| (r, n)));
        let (rules, ant_count) = match validated {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "configure rejected, keeping previous simulation");
                return Err(e);
            }
        };

        self.palette = Palette::generate(rules.state_count(), &mut self.palette_rng);
        self.rules = rules;
        self.reset_world(ant_count);

        tracing::info!(
            rules = %self.rules,
            states = self.rules.state_count(),
            ants = ant_count,
            "simulation configured"
        );
        Ok(())
    }

    /// Like [`configure()`](Self::configure), but takes the ant count as
    /// text, the way a settings form supplies it.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnparsableAntCount`] if `ant_count` is not an
    /// integer, plus everything `configure()` can return.
    pub fn configure_text(&mut self, rules: &str, ant_count: &str) -> Result<(), ConfigError> {
        let count = parse_ant_count(ant_count).inspect_err(|e| {
            tracing::warn!(error = %e, "configure rejected, keeping previous simulation");
        })?;
        self.configure(rules, count)
    }

    fn reset_world(&mut self, ant_count: usize) {
        self.grid.reset();
        self.paint.clear_canvas(0);
        let (cx, cy) = self.grid.center();
        self.ants = vec![Ant::new(cx, cy); ant_count];
        self.tick = TickId(0);
        self.last_metrics = StepMetrics::default();
    }

    /// Advance every ant by one move.
    ///
    /// Ants move in collection order, so later ants see cells already
    /// changed by earlier ants in the same step. Each move queues one
    /// [`PaintEvent::Cell`]. With no ants, nothing changes except the
    /// tick counter.
    ///
    /// Queued events stay in memory until the host calls
    /// [`drain_paint()`](Self::drain_paint); a host that never drains
    /// grows the buffer by one event per ant per step.
    pub fn step(&mut self) -> StepMetrics {
        let start = Instant::now();

        for ant in self.ants.iter_mut() {
            let change = ant.visit(&mut self.grid, &self.rules);
            self.paint.push_cell(change);
        }
        self.tick = self.tick.next();

        let moved = self.ants.len() as u64;
        let metrics = StepMetrics {
            steps: 1,
            ants_stepped: moved,
            cells_painted: moved,
            total_us: start.elapsed().as_micros() as u64,
        };
        tracing::trace!(tick = %self.tick, ants = moved, "step");
        self.last_metrics = metrics.clone();
        metrics
    }

    /// Run [`steps_per_tick()`](Self::steps_per_tick) steps and return
    /// their merged metrics.
    pub fn run_tick(&mut self) -> StepMetrics {
        let mut total = StepMetrics::default();
        for _ in 0..self.steps_per_tick {
            total.merge(&self.step());
        }
        total
    }

    /// Set how many steps [`run_tick()`](Self::run_tick) runs. Zero pauses.
    pub fn set_steps_per_tick(&mut self, steps: u32) {
        tracing::debug!(steps, "steps per tick changed");
        self.steps_per_tick = steps;
    }

    /// Steps run by each [`run_tick()`](Self::run_tick).
    pub fn steps_per_tick(&self) -> u32 {
        self.steps_per_tick
    }

    /// Remove and return pending paint events in emission order.
    pub fn drain_paint(&mut self) -> std::vec::Drain<'_, PaintEvent> {
        self.paint.drain()
    }

    /// Paint events not yet drained.
    pub fn pending_paint(&self) -> &[PaintEvent] {
        self.paint.events()
    }

    /// The cell-state grid.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// The ants, in stepping order.
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// The active rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The active palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Seed the palette RNG was created from.
    pub fn palette_seed(&self) -> u64 {
        self.palette_seed
    }

    /// Steps taken since the last (re)configuration.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl std::fmt::Debug for AntSimulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AntSimulation")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("rules", &self.rules.as_str())
            .field("ants", &self.ants.len())
            .field("current_tick", &self.tick)
            .field("steps_per_tick", &self.steps_per_tick)
            .finish()
    }
}
