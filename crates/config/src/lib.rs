#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Task Configuration
//!
//! JSON description of one obstacle-crossing training run. The document has
//! five sections, mirrored one-to-one by the structs below:
//!
//! ```json
//! {
//!   "environment": { "seed": 0, "obstacle_count": 8, "obstacle_height_range": [0.02, 0.2], ... },
//!   "priors":      { "footstep_horizon": 16, "com_height": 0.3, ... },
//!   "reward":      { "success_bonus": 10.0, "collision_penalty": 5.0, ... },
//!   "curriculum":  {
//!     "stages": [{ "max_height": 0.05, "max_count": 2 }],
//!     "success_threshold": 0.8
//!   },
//!   "training":    { "episodes": 200, "episode_length": 400, "log_every": 10 }
//! }
//! ```
//!
//! Every range is a two-element `[low, high]` array. [`TaskConfig::load`]
//! and [`TaskConfig::from_str`] both run [`TaskConfig::validate`] before
//! returning, so a config that reaches the trainer is well formed.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub seed: u64,
    pub obstacle_count: usize,
    pub obstacle_height_range: [f32; 2],
    pub obstacle_width_range: [f32; 2],
    pub obstacle_length_range: [f32; 2],
    /// Lateral half-extent and forward extent of the obstacle spawn plane.
    pub spawn_area: [f32; 2],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriorsConfig {
    pub footstep_horizon: usize,
    pub com_height: f32,
    pub head_height: f32,
    pub landing_tolerance: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    pub success_bonus: f32,
    pub collision_penalty: f32,
    pub tracking_weight: f32,
    pub com_weight: f32,
    pub head_weight: f32,
    pub energy_weight: f32,
    pub stability_weight: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    pub max_height: f32,
    pub max_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurriculumConfig {
    pub stages: Vec<StageConfig>,
    pub success_threshold: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub episodes: usize,
    pub episode_length: usize,
    pub log_every: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskConfig {
    pub environment: EnvironmentConfig,
    pub priors: PriorsConfig,
    pub reward: RewardConfig,
    pub curriculum: CurriculumConfig,
    pub training: TrainingConfig,
}

impl TaskConfig {
    /// Reads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`TaskConfig::from_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Self = json.parse()?;
        tracing::debug!(
            path = %path.display(),
            stages = cfg.curriculum.stages.len(),
            episodes = cfg.training.episodes,
            "loaded task config"
        );
        Ok(cfg)
    }

    /// Checks the semantic constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let env = &self.environment;
        check_range("environment.obstacle_height_range", env.obstacle_height_range)?;
        check_range("environment.obstacle_width_range", env.obstacle_width_range)?;
        check_range("environment.obstacle_length_range", env.obstacle_length_range)?;

        let [half_width, forward] = env.spawn_area;
        if !(half_width.is_finite() && half_width >= 0.0) {
            return Err(ConfigError::invalid(
                "environment.spawn_area",
                format!("lateral extent must be a non-negative number, got {half_width}"),
            ));
        }
        // obstacles are drawn in [0.3, forward] along the forward axis
        if !(forward.is_finite() && forward >= 0.3) {
            return Err(ConfigError::invalid(
                "environment.spawn_area",
                format!("forward extent must be at least 0.3, got {forward}"),
            ));
        }

        if self.curriculum.stages.is_empty() {
            return Err(ConfigError::invalid("curriculum.stages", "at least one stage is required"));
        }
        for stage in &self.curriculum.stages {
            if !(stage.max_height.is_finite() && stage.max_height > 0.0) {
                return Err(ConfigError::invalid(
                    "curriculum.stages.max_height",
                    format!("must be positive, got {}", stage.max_height),
                ));
            }
        }
        if !self.curriculum.success_threshold.is_finite() {
            return Err(ConfigError::invalid("curriculum.success_threshold", "must be finite"));
        }

        if self.training.log_every == 0 {
            return Err(ConfigError::invalid("training.log_every", "must be at least 1"));
        }
        Ok(())
    }
}

impl FromStr for TaskConfig {
    type Err = ConfigError;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

fn check_range(field: &'static str, [low, high]: [f32; 2]) -> Result<(), ConfigError> {
    if !(low.is_finite() && high.is_finite()) {
        return Err(ConfigError::invalid(field, "bounds must be finite"));
    }
    if low > high {
        return Err(ConfigError::invalid(field, format!("low {low} exceeds high {high}")));
    }
    Ok(())
}
