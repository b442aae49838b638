//! # Strider: obstacle-crossing curriculum training
//!
//! Strider trains a legged agent to cross procedurally generated obstacle
//! fields. Difficulty is gated by a curriculum: obstacles only get taller
//! and more numerous once the agent succeeds often enough at the current
//! stage.
//!
//! ## The Crates
//!
//! -   **`strider`:** this crate. Re-exports the others, provides the
//!     [`PlaceholderSimulator`] and the command-line entry point.
//! -   **[`terrain`]:** seeded procedural obstacle fields.
//! -   **[`config`]:** the JSON task description and its validation.
//! -   **[`rl`]:** rewards, motion priors, the curriculum scheduler and the
//!     training loop, plus the [`rl::Simulator`] trait a physics binding
//!     implements.
//!
//! ## Getting Started
//!
//! ```rust,no_run
//! use strider::app::{run, RunOptions};
//!
//! let summary = run(&RunOptions {
//!     config: "configs/default.json".into(),
//!     output: None,
//! })?;
//! println!("final stage {}", summary.final_stage);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod app;
pub mod placeholder;

pub use config;
pub use placeholder::PlaceholderSimulator;
pub use rl;
pub use terrain;
