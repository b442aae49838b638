use config::{CurriculumConfig, StageConfig};
use thiserror::Error;

/// Difficulty tier: upper bounds on obstacle height and count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurriculumStage {
    pub max_height: f32,
    pub max_count: usize,
}

impl From<&StageConfig> for CurriculumStage {
    fn from(cfg: &StageConfig) -> Self {
        Self {
            max_height: cfg.max_height,
            max_count: cfg.max_count,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurriculumError {
    #[error("curriculum needs at least one stage")]
    NoStages,
}

/// Success-gated walk through an ordered list of stages.
///
/// The stage index only moves forward, one stage per [`update`], and stops
/// at the last stage.
///
/// [`update`]: CurriculumScheduler::update
#[derive(Clone, Debug)]
pub struct CurriculumScheduler {
    stages: Vec<CurriculumStage>,
    success_threshold: f32,
    stage_index: usize,
}

impl CurriculumScheduler {
    /// # Errors
    ///
    /// [`CurriculumError::NoStages`] if `stages` is empty.
    pub fn new(
        stages: Vec<CurriculumStage>,
        success_threshold: f32,
    ) -> Result<Self, CurriculumError> {
        if stages.is_empty() {
            return Err(CurriculumError::NoStages);
        }
        Ok(Self {
            stages,
            success_threshold,
            stage_index: 0,
        })
    }

    /// # Errors
    ///
    /// [`CurriculumError::NoStages`] if the config lists no stages.
    pub fn from_config(cfg: &CurriculumConfig) -> Result<Self, CurriculumError> {
        Self::new(
            cfg.stages.iter().map(CurriculumStage::from).collect(),
            cfg.success_threshold,
        )
    }

    #[must_use]
    pub fn current_stage(&self) -> CurriculumStage {
        self.stages[self.stage_index]
    }

    #[must_use]
    pub fn stage_index(&self) -> usize {
        self.stage_index
    }

    #[must_use]
    pub fn stages(&self) -> &[CurriculumStage] {
        &self.stages
    }

    #[must_use]
    pub fn success_threshold(&self) -> f32 {
        self.success_threshold
    }

    #[must_use]
    pub fn is_final_stage(&self) -> bool {
        self.stage_index + 1 == self.stages.len()
    }

    /// Advances one stage when `success_rate >= success_threshold`.
    pub fn update(&mut self, success_rate: f32) -> CurriculumStage {
        if success_rate >= self.success_threshold && !self.is_final_stage() {
            self.stage_index += 1;
            tracing::info!(
                stage = self.stage_index,
                success_rate,
                threshold = self.success_threshold,
                "curriculum advanced"
            );
        }
        self.current_stage()
    }
}
