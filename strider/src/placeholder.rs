//! Stand-in simulator for dry runs of the training loop.

use rl::{PriorBundle, Simulator, SimulatorError, StepMetrics};
use terrain::Terrain;

/// Tick from which [`PlaceholderSimulator`] reports success.
pub const SUCCESS_TICK: usize = 50;

/// Reports fixed tracking metrics every tick and succeeds once
/// [`SUCCESS_TICK`] ticks have elapsed since the last reset.
#[derive(Debug, Default)]
pub struct PlaceholderSimulator {
    steps: usize,
}

impl PlaceholderSimulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Simulator for PlaceholderSimulator {
    fn reset(&mut self, terrain: &Terrain, priors: &PriorBundle) -> Result<(), SimulatorError> {
        tracing::trace!(
            obstacles = terrain.len(),
            footsteps = priors.footsteps.len(),
            "placeholder reset"
        );
        self.steps = 0;
        Ok(())
    }

    fn step(&mut self) -> Result<StepMetrics, SimulatorError> {
        self.steps += 1;
        Ok(StepMetrics {
            success: self.steps >= SUCCESS_TICK,
            collision: false,
            foot_errors: vec![0.05],
            com_error: 0.02,
            head_error: 0.01,
            energy: 0.1,
            stability: 0.02,
        })
    }
}
