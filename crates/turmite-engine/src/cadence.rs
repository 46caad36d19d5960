//! Fixed-interval tick pacing for hosts.
//!
//! The engine has no timer. A host feeds [`Cadence`] the wall-clock time
//! elapsed since its last frame and gets back how many ticks are due;
//! [`Cadence::drive`] runs them through
//! [`AntSimulation::run_tick`](crate::AntSimulation::run_tick).

use std::time::Duration;

use crate::metrics::StepMetrics;
use crate::simulation::AntSimulation;

/// Accumulates elapsed time and releases ticks at a fixed interval.
///
/// While the accumulated time is at least one interval, one interval is
/// subtracted and one tick becomes due. At most
/// [`max_catch_up`](Cadence::max_catch_up) ticks are released per call;
/// any remaining backlog is dropped so a stalled host does not spiral.
///
/// A zero interval releases exactly one tick per call.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use turmite_engine::Cadence;
///
/// let mut cadence = Cadence::new(Duration::from_millis(10));
/// assert_eq!(cadence.advance(Duration::from_millis(25)), 2);
/// assert_eq!(cadence.advance(Duration::from_millis(5)), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Cadence {
    interval: Duration,
    accumulated: Duration,
    max_catch_up: u32,
}

impl Cadence {
    /// Default cap on ticks released per call.
    pub const DEFAULT_MAX_CATCH_UP: u32 = 8;

    /// A cadence releasing one tick per `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            max_catch_up: Self::DEFAULT_MAX_CATCH_UP,
        }
    }

    /// Set the per-call tick cap. Values below 1 are raised to 1.
    pub fn with_max_catch_up(mut self, max: u32) -> Self {
        self.max_catch_up = max.max(1);
        self
    }

    /// Time per tick.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the time per tick. Accumulated time is kept.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Per-call tick cap.
    pub fn max_catch_up(&self) -> u32 {
        self.max_catch_up
    }

    /// Time accumulated towards the next tick.
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Forget accumulated time.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }

    /// Add `elapsed` and return the number of ticks now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 1;
        }
        self.accumulated = self.accumulated.saturating_add(elapsed);

        let mut due = 0;
        while self.accumulated >= self.interval && due < self.max_catch_up {
            self.accumulated -= self.interval;
            due += 1;
        }
        if self.accumulated >= self.interval {
            let dropped = self.accumulated.as_nanos() / self.interval.as_nanos();
            tracing::debug!(
                dropped = dropped as u64,
                max_catch_up = self.max_catch_up,
                "cadence backlog dropped"
            );
            self.accumulated = Duration::ZERO;
        }
        due
    }

    /// Advance by `elapsed` and run every due tick on `sim`.
    ///
    /// Returns metrics merged over all steps run.
    pub fn drive(&mut self, sim: &mut AntSimulation, elapsed: Duration) -> StepMetrics {
        let mut total = StepMetrics::default();
        for _ in 0..self.advance(elapsed) {
            total.merge(&sim.run_tick());
        }
        total
    }
}
