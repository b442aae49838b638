#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Strider RL
//!
//! Curriculum-gated training for a legged agent crossing obstacle fields.
//!
//! ## Key Components
//!
//! -   **[`Simulator`]:** the two-method contract (`reset`, `step`) a
//!     physics backend implements. Defined in [`env`].
//! -   **[`RewardTerms`]:** weighted linear reward over [`StepMetrics`].
//! -   **[`PriorBundle`]:** nominal footstep and posture targets.
//! -   **[`CurriculumScheduler`]:** advances obstacle difficulty when the
//!     windowed success rate clears a threshold.
//! -   **[`Trainer`]:** owns all of the above and runs the episode loop.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rl::Trainer;
//!
//! let cfg = config::TaskConfig::load("configs/default.json")?;
//! let mut trainer = Trainer::new(&cfg, MySimulator::connect()?)?;
//! let history = trainer.train()?;
//! ```

pub mod curriculum;
pub mod env;
pub mod error;
pub mod priors;
pub mod reward;
pub mod trainer;

pub use curriculum::{CurriculumError, CurriculumScheduler, CurriculumStage};
pub use env::{Simulator, SimulatorError, StepMetrics};
pub use error::TrainError;
pub use priors::{
    build_priors, default_body_targets, nominal_footsteps, BodyTarget, FootstepTarget, PriorBundle,
    PriorValidationError,
};
pub use reward::{compute_reward, RewardTerms};
pub use trainer::{success_rate, EpisodeResult, Trainer, MIN_OBSTACLE_HEIGHT};
