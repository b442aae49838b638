//! # Strider Application Logic
//!
//! Loads a [`TaskConfig`], trains against the [`PlaceholderSimulator`] and
//! reports a summary of the run. The placeholder stands in until a real
//! physics binding implements [`rl::Simulator`].

use crate::placeholder::PlaceholderSimulator;
use anyhow::{Context, Result};
use config::TaskConfig;
use rl::{success_rate, EpisodeResult, Trainer};
use std::path::{Path, PathBuf};

/// Options for one training run.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub config: PathBuf,
    /// Where to write the episode history as JSON, if anywhere.
    pub output: Option<PathBuf>,
}

/// Aggregate figures for a finished run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub episodes: usize,
    pub success_rate: f32,
    pub mean_reward: f32,
    pub final_stage: usize,
}

impl RunSummary {
    #[must_use]
    pub fn from_history(history: &[EpisodeResult], final_stage: usize) -> Self {
        let mean_reward = if history.is_empty() {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let n = history.len() as f32;
            history.iter().map(|r| r.reward).sum::<f32>() / n
        };
        Self {
            episodes: history.len(),
            success_rate: success_rate(history),
            mean_reward,
            final_stage,
        }
    }
}

/// Train on the config at `opts.config`.
///
/// # Errors
///
/// Returns config loading, training and output-writing failures.
pub fn run(opts: &RunOptions) -> Result<RunSummary> {
    let cfg = TaskConfig::load(&opts.config)
        .with_context(|| format!("loading {}", opts.config.display()))?;
    let (summary, history) = train(&cfg)?;

    if let Some(path) = &opts.output {
        write_history(path, &history)?;
        tracing::info!(path = %path.display(), "wrote episode history");
    }
    Ok(summary)
}

/// Train on an already-loaded config and return the summary and history.
///
/// # Errors
///
/// Any [`rl::TrainError`] raised by the run.
pub fn train(cfg: &TaskConfig) -> Result<(RunSummary, Vec<EpisodeResult>)> {
    let mut trainer = Trainer::new(cfg, PlaceholderSimulator::new())?;
    let history = trainer.train()?.to_vec();
    let summary = RunSummary::from_history(&history, trainer.curriculum().stage_index());
    tracing::info!(
        episodes = summary.episodes,
        success_rate = summary.success_rate,
        mean_reward = summary.mean_reward,
        final_stage = summary.final_stage,
        "run complete"
    );
    Ok((summary, history))
}

fn write_history(path: &Path, history: &[EpisodeResult]) -> Result<()> {
    let json = serde_json::to_string_pretty(history)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}
