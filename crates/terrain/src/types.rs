#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Box obstacle resting on the ground plane.
///
/// `center` lies in the spawn plane; `size` is `(width, length, height)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub center: Vec2,
    pub size: Vec3,
}

impl Obstacle {
    #[must_use]
    pub const fn new(center: Vec2, size: Vec3) -> Self {
        Self { center, size }
    }

    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.x
    }

    #[must_use]
    pub const fn length(&self) -> f32 {
        self.size.y
    }

    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.z
    }
}

/// Obstacle field for a single episode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Terrain {
    pub obstacles: Vec<Obstacle>,
}

impl Terrain {
    #[must_use]
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    #[must_use]
    pub fn heights(&self) -> Vec<f32> {
        self.obstacles.iter().map(Obstacle::height).collect()
    }
}
