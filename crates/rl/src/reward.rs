//! Per-tick reward shaping.
//!
//! The reward is a fixed linear combination of the simulator's metrics:
//!
//! ```text
//! r = [success] * success_bonus - [collision] * collision_penalty
//!   - tracking_weight * sum(foot_errors)
//!   - com_weight * com_error - head_weight * head_error
//!   - energy_weight * energy - stability_weight * stability
//! ```
//!
//! Foot errors are summed rather than averaged, so more simultaneous
//! placement errors cost more. Nothing is clipped or normalized.

use crate::env::StepMetrics;
use config::RewardConfig;

/// Weights of the reward terms. Non-negative by convention; not enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RewardTerms {
    pub success_bonus: f32,
    pub collision_penalty: f32,
    pub tracking_weight: f32,
    pub com_weight: f32,
    pub head_weight: f32,
    pub energy_weight: f32,
    pub stability_weight: f32,
}

impl From<&RewardConfig> for RewardTerms {
    fn from(cfg: &RewardConfig) -> Self {
        Self {
            success_bonus: cfg.success_bonus,
            collision_penalty: cfg.collision_penalty,
            tracking_weight: cfg.tracking_weight,
            com_weight: cfg.com_weight,
            head_weight: cfg.head_weight,
            energy_weight: cfg.energy_weight,
            stability_weight: cfg.stability_weight,
        }
    }
}

#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn compute_reward(
    success: bool,
    collision: bool,
    foot_errors: &[f32],
    com_error: f32,
    head_error: f32,
    energy: f32,
    stability: f32,
    terms: &RewardTerms,
) -> f32 {
    let mut reward = 0.0;
    if success {
        reward += terms.success_bonus;
    }
    if collision {
        reward -= terms.collision_penalty;
    }
    reward -= terms.tracking_weight * foot_errors.iter().sum::<f32>();
    reward -= terms.com_weight * com_error;
    reward -= terms.head_weight * head_error;
    reward -= terms.energy_weight * energy;
    reward -= terms.stability_weight * stability;
    reward
}

impl RewardTerms {
    /// Scores one tick of simulator output.
    #[must_use]
    pub fn evaluate(&self, m: &StepMetrics) -> f32 {
        compute_reward(
            m.success,
            m.collision,
            &m.foot_errors,
            m.com_error,
            m.head_error,
            m.energy,
            m.stability,
            self,
        )
    }
}
