//! # Curriculum Training Loop
//!
//! [`Trainer`] runs fixed-length episodes against a [`Simulator`] and feeds
//! windowed success rates back into a [`CurriculumScheduler`].
//!
//! Per episode:
//!
//! 1. read the current stage and sample a terrain bounded by it,
//! 2. reset the simulator with that terrain and the motion priors,
//! 3. call `step` exactly `episode_length` times, scoring each tick,
//! 4. record an [`EpisodeResult`].
//!
//! Episodes always run to `episode_length`, even after success or a
//! collision. Every `log_every` episodes the success rate of the last
//! `log_every` results goes to [`CurriculumScheduler::update`].

use crate::curriculum::{CurriculumScheduler, CurriculumStage};
use crate::env::Simulator;
use crate::error::TrainError;
use crate::priors::{build_priors, PriorBundle, PriorValidationError};
use crate::reward::RewardTerms;
use config::{EnvironmentConfig, PriorsConfig, TaskConfig, TrainingConfig};
use serde::Serialize;
use terrain::{ObstacleBounds, Terrain};

/// Floor of the sampled obstacle height range; keeps obstacles from
/// collapsing to zero height.
pub const MIN_OBSTACLE_HEIGHT: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EpisodeResult {
    pub success: bool,
    pub reward: f32,
}

/// Fraction of successful episodes in `results`; `0.0` when empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn success_rate(results: &[EpisodeResult]) -> f32 {
    if results.is_empty() {
        return 0.0;
    }
    let successes = results.iter().filter(|r| r.success).count();
    successes as f32 / results.len() as f32
}

pub struct Trainer<S: Simulator> {
    environment: EnvironmentConfig,
    priors: PriorsConfig,
    training: TrainingConfig,
    curriculum: CurriculumScheduler,
    reward_terms: RewardTerms,
    simulator: S,
    history: Vec<EpisodeResult>,
}

impl<S: Simulator> Trainer<S> {
    /// # Errors
    ///
    /// [`TrainError::Curriculum`] when the config has no stages and
    /// [`TrainError::InvalidTraining`] when `log_every` is zero.
    pub fn new(cfg: &TaskConfig, simulator: S) -> Result<Self, TrainError> {
        if cfg.training.log_every == 0 {
            return Err(TrainError::InvalidTraining {
                reason: "log_every must be at least 1",
            });
        }
        Ok(Self {
            environment: cfg.environment.clone(),
            priors: cfg.priors.clone(),
            training: cfg.training.clone(),
            curriculum: CurriculumScheduler::from_config(&cfg.curriculum)?,
            reward_terms: RewardTerms::from(&cfg.reward),
            simulator,
            history: Vec::new(),
        })
    }

    #[must_use]
    pub fn curriculum(&self) -> &CurriculumScheduler {
        &self.curriculum
    }

    #[must_use]
    pub fn reward_terms(&self) -> &RewardTerms {
        &self.reward_terms
    }

    /// Results of the current (or last) run, including those recorded
    /// before a failure aborted it.
    #[must_use]
    pub fn history(&self) -> &[EpisodeResult] {
        &self.history
    }

    #[must_use]
    pub fn simulator(&self) -> &S {
        &self.simulator
    }

    pub fn into_simulator(self) -> S {
        self.simulator
    }

    /// Terrain for one episode at `stage`.
    ///
    /// The stream is reseeded from the config on every call, so a stage
    /// always yields the same field.
    #[must_use]
    pub fn sample_terrain(&self, stage: CurriculumStage) -> Terrain {
        let env = &self.environment;
        let bounds = ObstacleBounds {
            count: env.obstacle_count.min(stage.max_count),
            height_range: [MIN_OBSTACLE_HEIGHT, stage.max_height],
            width_range: env.obstacle_width_range,
            length_range: env.obstacle_length_range,
            spawn_area: env.spawn_area,
        };
        terrain::generate(env.seed, &bounds)
    }

    /// Builds and validates the motion priors for the configured horizon.
    ///
    /// # Errors
    ///
    /// Any [`PriorValidationError`]; this indicates a configuration bug.
    pub fn build_priors(&self) -> Result<PriorBundle, PriorValidationError> {
        let horizon = self.priors.footstep_horizon;
        let mut bundle = build_priors(horizon, self.priors.com_height, self.priors.head_height);
        bundle.landing_tolerance = self.priors.landing_tolerance;
        bundle.validate(horizon)?;
        Ok(bundle)
    }

    /// Runs one full-length episode at `stage`.
    ///
    /// # Errors
    ///
    /// Propagates the first simulator failure; the episode is discarded.
    pub fn run_episode(
        &mut self,
        stage: CurriculumStage,
        priors: &PriorBundle,
    ) -> Result<EpisodeResult, TrainError> {
        let terrain = self.sample_terrain(stage);
        self.simulator.reset(&terrain, priors)?;

        let mut reward = 0.0;
        let mut success = false;
        for _ in 0..self.training.episode_length {
            let metrics = self.simulator.step()?;
            reward += self.reward_terms.evaluate(&metrics);
            success |= metrics.success;
        }
        tracing::debug!(
            stage = self.curriculum.stage_index(),
            obstacles = terrain.len(),
            reward,
            success,
            "episode finished"
        );
        Ok(EpisodeResult { success, reward })
    }

    /// Runs `training.episodes` episodes and returns their results in order.
    ///
    /// History from a previous call is cleared; the curriculum keeps its
    /// stage.
    ///
    /// # Errors
    ///
    /// Prior validation failures abort before the simulator is touched.
    /// Simulator failures abort the run; [`Trainer::history`] still holds the
    /// episodes completed before it.
    pub fn train(&mut self) -> Result<&[EpisodeResult], TrainError> {
        let priors = self.build_priors()?;
        let log_every = self.training.log_every;
        self.history.clear();

        for episode in 1..=self.training.episodes {
            let stage = self.curriculum.current_stage();
            let result = self.run_episode(stage, &priors)?;
            self.history.push(result);

            if episode % log_every == 0 {
                let window = &self.history[self.history.len() - log_every..];
                let rate = success_rate(window);
                tracing::info!(
                    episode,
                    success_rate = rate,
                    threshold = self.curriculum.success_threshold(),
                    stage = self.curriculum.stage_index(),
                    "curriculum checkpoint"
                );
                self.curriculum.update(rate);
            }
        }

        tracing::info!(
            episodes = self.history.len(),
            success_rate = success_rate(&self.history),
            final_stage = self.curriculum.stage_index(),
            "training finished"
        );
        Ok(&self.history)
    }
}
