use crate::priors::PriorBundle;
use serde::Deserialize;
use terrain::Terrain;
use thiserror::Error;

/// Per-tick measurements reported by a [`Simulator`].
///
/// Every field is optional on the wire; absent keys deserialize to `false`,
/// `0.0` or an empty list.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StepMetrics {
    pub success: bool,
    pub collision: bool,
    pub foot_errors: Vec<f32>,
    pub com_error: f32,
    pub head_error: f32,
    pub energy: f32,
    pub stability: f32,
}

/// Failure surfaced by a simulator binding during `reset` or `step`.
#[derive(Error, Debug)]
#[error("simulator failure: {message}")]
pub struct SimulatorError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl SimulatorError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Simulator binding driven by the [`Trainer`](crate::Trainer).
///
/// This is the whole contract between the training loop and the physics
/// backend: a reset per episode followed by exactly `episode_length` calls
/// to [`step`]. How contacts, collisions and tracking errors are measured is
/// up to the implementation.
///
/// [`step`]: Simulator::step
pub trait Simulator {
    /// Start a new episode on `terrain`, tracking the targets in `priors`.
    ///
    /// # Errors
    ///
    /// Implementations may reject terrain or priors they cannot load.
    fn reset(&mut self, terrain: &Terrain, priors: &PriorBundle) -> Result<(), SimulatorError>;

    /// Advance one control tick and report its metrics.
    ///
    /// # Errors
    ///
    /// Any backend failure. The trainer aborts the run on error.
    fn step(&mut self) -> Result<StepMetrics, SimulatorError>;
}

impl<S: Simulator + ?Sized> Simulator for &mut S {
    fn reset(&mut self, terrain: &Terrain, priors: &PriorBundle) -> Result<(), SimulatorError> {
        (**self).reset(terrain, priors)
    }

    fn step(&mut self) -> Result<StepMetrics, SimulatorError> {
        (**self).step()
    }
}

impl<S: Simulator + ?Sized> Simulator for Box<S> {
    fn reset(&mut self, terrain: &Terrain, priors: &PriorBundle) -> Result<(), SimulatorError> {
        (**self).reset(terrain, priors)
    }

    fn step(&mut self) -> Result<StepMetrics, SimulatorError> {
        (**self).step()
    }
}
