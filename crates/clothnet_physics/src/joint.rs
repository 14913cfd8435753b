//! Pin joints: distance constraints between two bodies

use crate::body::BodyKey;
use clothnet_math::Vec2;
use slotmap::new_key_type;

new_key_type! {
    /// Key to a joint in the physics world
    pub struct JointKey;
}

/// Holds two bodies at a fixed distance from each other
///
/// The joint attaches at body centers. Its rest length is captured when the
/// joint is created and never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinJoint {
    pub body_a: BodyKey,
    pub body_b: BodyKey,
    pub rest_length: f32,
    /// Whether the two joined bodies may still collide with each other
    pub collide_bodies: bool,
}

impl PinJoint {
    /// Create a joint with an explicit rest length; joined bodies don't collide
    pub fn new(body_a: BodyKey, body_b: BodyKey, rest_length: f32) -> Self {
        Self {
            body_a,
            body_b,
            rest_length: rest_length.max(0.0),
            collide_bodies: false,
        }
    }

    /// Allow or forbid collisions between the joined bodies
    pub fn with_collide_bodies(mut self, collide: bool) -> Self {
        self.collide_bodies = collide;
        self
    }

    /// Check whether the joint references a body
    pub fn involves(&self, key: BodyKey) -> bool {
        self.body_a == key || self.body_b == key
    }

    /// Position corrections that restore the rest length
    ///
    /// Corrections are split by inverse mass, so a static body (inverse mass 0)
    /// never moves. Returns `None` when both bodies are immovable or the
    /// endpoints coincide.
    pub fn corrections(
        &self,
        pos_a: Vec2,
        pos_b: Vec2,
        inv_mass_a: f32,
        inv_mass_b: f32,
    ) -> Option<(Vec2, Vec2)> {
        let w_total = inv_mass_a + inv_mass_b;
        if w_total <= 1e-12 {
            return None;
        }

        let delta = pos_b - pos_a;
        let dist = delta.length();
        if dist <= 1e-6 {
            return None;
        }

        let error = dist - self.rest_length;
        let correction = delta * (error / dist);
        Some((
            correction * (inv_mass_a / w_total),
            -correction * (inv_mass_b / w_total),
        ))
    }
}
