use crate::curriculum::CurriculumError;
use crate::env::SimulatorError;
use crate::priors::PriorValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrainError {
    #[error(transparent)]
    PriorValidation(#[from] PriorValidationError),
    #[error(transparent)]
    Simulator(#[from] SimulatorError),
    #[error(transparent)]
    Curriculum(#[from] CurriculumError),
    #[error("invalid training settings: {reason}")]
    InvalidTraining { reason: &'static str },
}
