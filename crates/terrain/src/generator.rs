//! # Procedural Obstacle Fields
//!
//! Obstacles are sampled from an explicit [`fastrand::Rng`] stream so that a
//! fixed seed always reproduces the same field. The draw order per obstacle
//! is fixed: center x, center y, width, length, height. Changing that order
//! changes every field generated from an existing seed.

use crate::types::{Obstacle, Terrain, Vec2, Vec3};

/// Obstacles never spawn closer than this to the agent along the forward axis.
pub const MIN_FORWARD_OFFSET: f32 = 0.3;

/// Bounds for one call to [`TerrainGenerator::generate`].
///
/// Every range is an inclusive `[low, high]` pair. `spawn_area` holds the
/// lateral half-extent and the forward extent of the spawn plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObstacleBounds {
    pub count: usize,
    pub height_range: [f32; 2],
    pub width_range: [f32; 2],
    pub length_range: [f32; 2],
    pub spawn_area: [f32; 2],
}

/// Seeded source of obstacle fields.
#[derive(Clone)]
pub struct TerrainGenerator {
    rng: fastrand::Rng,
}

impl TerrainGenerator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(fastrand::Rng::with_seed(seed))
    }

    /// Wraps an existing stream, e.g. one a test has already advanced.
    #[must_use]
    pub fn from_rng(rng: fastrand::Rng) -> Self {
        Self { rng }
    }

    /// Draws `bounds.count` obstacles from the stream.
    ///
    /// Overlapping obstacles are kept as drawn. A range with `low == high`
    /// yields that value for every obstacle.
    pub fn generate(&mut self, bounds: &ObstacleBounds) -> Terrain {
        let [half_width, forward] = bounds.spawn_area;
        let obstacles = (0..bounds.count)
            .map(|_| {
                let center = Vec2::new(
                    self.uniform(-half_width, half_width),
                    self.uniform(MIN_FORWARD_OFFSET, forward),
                );
                let size = Vec3::new(
                    self.uniform_in(bounds.width_range),
                    self.uniform_in(bounds.length_range),
                    self.uniform_in(bounds.height_range),
                );
                Obstacle::new(center, size)
            })
            .collect();
        Terrain::new(obstacles)
    }

    fn uniform_in(&mut self, range: [f32; 2]) -> f32 {
        self.uniform(range[0], range[1])
    }

    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        // f32() is in [0, 1); clamp guards against rounding past `high`
        (low + (high - low) * self.rng.f32()).clamp(low.min(high), low.max(high))
    }
}

/// One-shot generation from a fresh stream seeded with `seed`.
#[must_use]
pub fn generate(seed: u64, bounds: &ObstacleBounds) -> Terrain {
    TerrainGenerator::new(seed).generate(bounds)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn uniform_handles_degenerate_range() {
        let mut gen = TerrainGenerator::new(3);
        for _ in 0..16 {
            assert_eq!(gen.uniform(0.25, 0.25), 0.25);
        }
    }

    #[test]
    fn uniform_stays_inside_range() {
        let mut gen = TerrainGenerator::new(11);
        for _ in 0..1000 {
            let v = gen.uniform(-1.5, 1.5);
            assert!((-1.5..=1.5).contains(&v), "{v}");
        }
    }
}
