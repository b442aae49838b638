//! # Strider
//!
//! Command-line entry point: `strider --config configs/default.json`.
//! Set `RUST_LOG=debug` for per-episode output.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use strider::app::{self, RunOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Curriculum-gated obstacle-crossing training")]
struct Args {
    /// Task config (JSON).
    #[arg(long, default_value = "configs/default.json")]
    config: PathBuf,

    /// Write the episode history to this file as JSON.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let summary = app::run(&RunOptions {
        config: args.config,
        output: args.output,
    })?;
    println!(
        "{} episodes, success rate {:.2}, mean reward {:.3}, final stage {}",
        summary.episodes, summary.success_rate, summary.mean_reward, summary.final_stage
    );
    Ok(())
}
