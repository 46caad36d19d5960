//! Per-step performance metrics for the simulation engine.
//!
//! [`StepMetrics`] captures counts and timing for one step, or for a run
//! of steps merged together by [`run_tick()`](crate::AntSimulation::run_tick).

/// Counts and timing collected during one or more steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Number of steps covered.
    pub steps: u64,
    /// Ant moves performed, summed over all steps.
    pub ants_stepped: u64,
    /// Paint events emitted, summed over all steps.
    pub cells_painted: u64,
    /// Wall-clock time spent stepping, in microseconds.
    pub total_us: u64,
}

impl StepMetrics {
    /// Accumulate `other` into `self`.
    pub fn merge(&mut self, other: &StepMetrics) {
        self.steps += other.steps;
        self.ants_stepped += other.ants_stepped;
        self.cells_painted += other.cells_painted;
        self.total_us += other.total_us;
    }
}
