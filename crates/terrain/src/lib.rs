#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Strider Terrain
//!
//! Procedural obstacle fields for the obstacle-crossing curriculum.
//!
//! A [`Terrain`] is an ordered list of box [`Obstacle`]s placed in front of
//! the agent's spawn point. Fields are produced by a [`TerrainGenerator`],
//! which owns a seeded random stream: the same seed and the same sequence of
//! [`ObstacleBounds`] always reproduce the same obstacles, so curricula are
//! repeatable across runs.
//!
//! ```rust
//! use terrain::{generate, ObstacleBounds};
//!
//! let bounds = ObstacleBounds {
//!     count: 4,
//!     height_range: [0.01, 0.1],
//!     width_range: [0.2, 0.4],
//!     length_range: [0.2, 0.4],
//!     spawn_area: [1.0, 3.0],
//! };
//! let terrain = generate(42, &bounds);
//! assert_eq!(terrain.len(), 4);
//! assert_eq!(terrain, generate(42, &bounds));
//! ```

pub mod generator;
pub mod types;

pub use generator::{generate, ObstacleBounds, TerrainGenerator, MIN_FORWARD_OFFSET};
pub use types::{Obstacle, Terrain, Vec2, Vec3};
