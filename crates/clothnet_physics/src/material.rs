//! Contact response of colliding bodies

/// How a body bounces and slides when it touches another body
///
/// Both coefficients live in [0, 1]. The default is a dead, frictionless
/// surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhysicsMaterial {
    /// Share of the approach speed given back along the contact normal
    pub restitution: f32,
    /// Share of the sliding speed removed along the contact tangent
    pub friction: f32,
}

impl PhysicsMaterial {
    /// Bounces back with its full approach speed and never grips
    pub const ELASTIC: Self = Self {
        restitution: 1.0,
        friction: 0.0,
    };

    /// Frictionless material with the given restitution
    pub fn new(restitution: f32) -> Self {
        Self {
            restitution: restitution.clamp(0.0, 1.0),
            friction: 0.0,
        }
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction.clamp(0.0, 1.0);
        self
    }

    /// Material used for a contact between `self` and `other`
    ///
    /// The bouncier surface decides restitution; friction is the geometric
    /// mean, so one frictionless surface makes the contact frictionless.
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            restitution: self.restitution.max(other.restitution),
            friction: (self.friction * other.friction).sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead_and_frictionless() {
        let material = PhysicsMaterial::default();
        assert_eq!(material.restitution, 0.0);
        assert_eq!(material.friction, 0.0);
    }

    #[test]
    fn test_coefficients_clamped() {
        let material = PhysicsMaterial::new(2.0).with_friction(-1.0);
        assert_eq!(material.restitution, 1.0);
        assert_eq!(material.friction, 0.0);

        assert_eq!(PhysicsMaterial::new(-0.5).with_friction(3.0).friction, 1.0);
    }

    #[test]
    fn test_bouncier_surface_wins() {
        let dead = PhysicsMaterial::new(0.0);
        assert_eq!(dead.combine(&PhysicsMaterial::ELASTIC).restitution, 1.0);
        assert_eq!(PhysicsMaterial::ELASTIC.combine(&dead).restitution, 1.0);
    }

    #[test]
    fn test_friction_needs_both_surfaces() {
        let grippy = PhysicsMaterial::new(0.5).with_friction(0.8);
        assert_eq!(grippy.combine(&PhysicsMaterial::ELASTIC).friction, 0.0);
        assert!((grippy.combine(&grippy).friction - 0.8).abs() < 1e-6);
    }
}
