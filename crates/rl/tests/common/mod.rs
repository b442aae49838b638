#![allow(dead_code)]

use config::{
    CurriculumConfig, EnvironmentConfig, PriorsConfig, RewardConfig, StageConfig, TaskConfig,
    TrainingConfig,
};
use rl::{PriorBundle, Simulator, SimulatorError, StepMetrics};
use terrain::Terrain;

pub fn reward_config() -> RewardConfig {
    RewardConfig {
        success_bonus: 10.0,
        collision_penalty: 5.0,
        tracking_weight: 1.0,
        com_weight: 0.5,
        head_weight: 0.25,
        energy_weight: 0.125,
        stability_weight: 2.0,
    }
}

pub fn task_config(episodes: usize, episode_length: usize, log_every: usize) -> TaskConfig {
    TaskConfig {
        environment: EnvironmentConfig {
            seed: 3,
            obstacle_count: 5,
            obstacle_height_range: [0.02, 0.2],
            obstacle_width_range: [0.3, 0.6],
            obstacle_length_range: [0.1, 0.3],
            spawn_area: [1.0, 3.0],
        },
        priors: PriorsConfig {
            footstep_horizon: 8,
            com_height: 0.3,
            head_height: 0.42,
            landing_tolerance: 0.05,
        },
        reward: reward_config(),
        curriculum: CurriculumConfig {
            stages: vec![
                StageConfig {
                    max_height: 0.05,
                    max_count: 2,
                },
                StageConfig {
                    max_height: 0.15,
                    max_count: 8,
                },
            ],
            success_threshold: 0.5,
        },
        training: TrainingConfig {
            episodes,
            episode_length,
            log_every,
        },
    }
}

/// Reports success from `success_tick` onward and records every reset.
pub struct ScriptedSim {
    pub success_tick: usize,
    pub tick: usize,
    pub resets: Vec<(Terrain, PriorBundle)>,
    pub steps: usize,
    pub metrics: StepMetrics,
}

impl ScriptedSim {
    pub fn new(success_tick: usize) -> Self {
        Self {
            success_tick,
            tick: 0,
            resets: Vec::new(),
            steps: 0,
            metrics: StepMetrics::default(),
        }
    }

    pub fn with_metrics(mut self, metrics: StepMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

impl Simulator for ScriptedSim {
    fn reset(&mut self, terrain: &Terrain, priors: &PriorBundle) -> Result<(), SimulatorError> {
        self.tick = 0;
        self.resets.push((terrain.clone(), priors.clone()));
        Ok(())
    }

    fn step(&mut self) -> Result<StepMetrics, SimulatorError> {
        let mut metrics = self.metrics.clone();
        metrics.success |= self.tick >= self.success_tick;
        self.tick += 1;
        self.steps += 1;
        Ok(metrics)
    }
}

/// Fails on the `fail_at`-th step call (0-based, counted across episodes).
pub struct FailingSim {
    pub fail_at: usize,
    pub steps: usize,
    pub resets: usize,
}

impl Simulator for FailingSim {
    fn reset(&mut self, _terrain: &Terrain, _priors: &PriorBundle) -> Result<(), SimulatorError> {
        self.resets += 1;
        Ok(())
    }

    fn step(&mut self) -> Result<StepMetrics, SimulatorError> {
        if self.steps == self.fail_at {
            return Err(SimulatorError::new("physics backend lost"));
        }
        self.steps += 1;
        Ok(StepMetrics {
            success: true,
            ..StepMetrics::default()
        })
    }
}

pub fn assert_close(a: f32, b: f32) {
    let tol = 1e-4 * a.abs().max(b.abs()).max(1.0);
    assert!((a - b).abs() <= tol, "{a} != {b}");
}
