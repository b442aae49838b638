//! Motion priors: the nominal footstep and posture references a policy
//! tracks while crossing the obstacle field.

use terrain::Vec3;
use thiserror::Error;

/// Forward advance between consecutive nominal footsteps.
pub const STRIDE_LENGTH: f32 = 0.2;
/// Simulation ticks between consecutive nominal footsteps.
pub const STEP_TICKS: usize = 20;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FootstepTarget {
    pub position: Vec3,
    /// Simulation tick at which the foot should land.
    pub timestamp: usize,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyTarget {
    pub com: Vec3,
    pub head: Vec3,
}

/// Footstep and body targets handed to the simulator together on reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriorBundle {
    pub footsteps: Vec<FootstepTarget>,
    pub body_targets: Vec<BodyTarget>,
    /// Distance within which a landing counts as on-target.
    pub landing_tolerance: f32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriorValidationError {
    #[error("footstep horizon shorter than required: {footsteps} < {horizon}")]
    ShortHorizon { footsteps: usize, horizon: usize },
    #[error("body targets must be provided for CoM/head conditioning")]
    MissingBodyTargets,
}

impl PriorBundle {
    /// Checks the bundle covers `horizon` planning steps.
    ///
    /// # Errors
    ///
    /// [`PriorValidationError::ShortHorizon`] when there are fewer than
    /// `horizon` footsteps, [`PriorValidationError::MissingBodyTargets`] when
    /// no body targets are present.
    pub fn validate(&self, horizon: usize) -> Result<(), PriorValidationError> {
        if self.footsteps.len() < horizon {
            return Err(PriorValidationError::ShortHorizon {
                footsteps: self.footsteps.len(),
                horizon,
            });
        }
        if self.body_targets.is_empty() {
            return Err(PriorValidationError::MissingBodyTargets);
        }
        Ok(())
    }
}

/// Straight-ahead gait reference: one footstep every [`STEP_TICKS`] ticks,
/// advancing [`STRIDE_LENGTH`] along x.
#[must_use]
pub fn nominal_footsteps(horizon: usize) -> Vec<FootstepTarget> {
    (0..horizon)
        .map(|idx| {
            #[allow(clippy::cast_precision_loss)]
            let x = STRIDE_LENGTH * idx as f32;
            FootstepTarget {
                position: Vec3::new(x, 0.0, 0.0),
                timestamp: idx * STEP_TICKS,
            }
        })
        .collect()
}

/// Constant posture held for `steps` planning steps.
#[must_use]
pub fn default_body_targets(com_height: f32, head_height: f32, steps: usize) -> Vec<BodyTarget> {
    let target = BodyTarget {
        com: Vec3::new(0.0, 0.0, com_height),
        head: Vec3::new(0.0, 0.0, head_height),
    };
    vec![target; steps]
}

#[must_use]
pub fn build_priors(horizon: usize, com_height: f32, head_height: f32) -> PriorBundle {
    PriorBundle {
        footsteps: nominal_footsteps(horizon),
        body_targets: default_body_targets(com_height, head_height, horizon),
        landing_tolerance: 0.0,
    }
}
