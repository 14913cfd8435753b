//! Collision shapes for 2D physics
//!
//! These are lightweight primitives used for collision detection,
//! separate from anything the renderer draws.

use clothnet_math::Vec2;

/// A circle defined by center and radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    /// Create a new circle at the given center with the given radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Area of the circle (used to derive mass from density)
    pub fn area(&self) -> f32 {
        std::f32::consts::PI * self.radius * self.radius
    }

    /// Translate the circle by a delta
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            center: self.center + delta,
            radius: self.radius,
        }
    }
}
