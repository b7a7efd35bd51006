//! Wall collision checks
//!
//! Walls are boxes, but the check is deliberately coarse: a point collides
//! with a wall when it is closer than a clearance radius to the wall's center.
//! Long walls can therefore be walked through away from their middle.

use arena_math::Vec3;

/// A static wall box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallCollider {
    /// Center of the box in world space
    pub center: Vec3,
    /// Full extent along X, Y, Z
    pub size: Vec3,
}

impl WallCollider {
    /// Create a wall from its center and full size
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    /// Distance from a point to the wall's center
    pub fn distance_to_center(&self, point: Vec3) -> f32 {
        self.center.distance(point)
    }

    /// Whether `point` is strictly closer than `clearance` to the center
    pub fn blocks(&self, point: Vec3, clearance: f32) -> bool {
        self.distance_to_center(point) < clearance
    }
}

/// Index of the first wall that blocks `point`, if any
pub fn first_blocking_wall(walls: &[WallCollider], point: Vec3, clearance: f32) -> Option<usize> {
    walls.iter().position(|wall| wall.blocks(point, clearance))
}
