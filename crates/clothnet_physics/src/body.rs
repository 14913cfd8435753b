//! Rigid body types for 2D physics simulation

use crate::collision::CollisionFilter;
use crate::material::PhysicsMaterial;
use crate::shapes::Circle;
use clothnet_math::Vec2;
use slotmap::new_key_type;

// Define generational key type for rigid bodies
new_key_type! {
    /// Key to a rigid body in the physics world
    ///
    /// Uses generational indexing: if a body is removed and its slot reused,
    /// old keys return None instead of pointing to the wrong body.
    pub struct BodyKey;
}

/// How a body participates in the simulation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyType {
    /// Integrated every step, pushed by joints and contacts
    #[default]
    Dynamic,
    /// Never moves; infinite mass for joints and contacts
    Static,
}

/// A 2D rigid body with position, velocity, and optional collision shape
///
/// Rotation is not simulated: pin joints attach at body centers, so the
/// bodies in a net behave as point masses.
#[derive(Clone, Debug)]
pub struct RigidBody2D {
    /// Position in world coordinates (y-up)
    pub position: Vec2,
    /// Velocity (units per second)
    pub velocity: Vec2,
    /// Mass of the body
    pub mass: f32,
    /// Dynamic or static
    pub body_type: BodyType,
    /// Whether this body is affected by gravity
    pub affected_by_gravity: bool,
    /// Collision shape (stores absolute world position); static anchors have none
    pub collider: Option<Circle>,
    /// Surface material used for contact response
    pub material: PhysicsMaterial,
    /// Collision layer filter
    pub filter: CollisionFilter,
}

impl RigidBody2D {
    /// Create a new dynamic body with a circle collider
    pub fn new_circle(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            mass: 1.0,
            body_type: BodyType::Dynamic,
            affected_by_gravity: true,
            collider: Some(Circle::new(position, radius)),
            material: PhysicsMaterial::default(),
            filter: CollisionFilter::default(),
        }
    }

    /// Create a static body without a collider (a fixed anchor point)
    pub fn new_static(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            mass: 0.0,
            body_type: BodyType::Static,
            affected_by_gravity: false,
            collider: None,
            material: PhysicsMaterial::default(),
            filter: CollisionFilter::anchor(),
        }
    }

    /// Set the velocity of this body
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the mass of this body
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Derive the mass from the collider area
    ///
    /// Bodies without a collider keep their current mass.
    pub fn with_density(mut self, density: f32) -> Self {
        if let Some(circle) = &self.collider {
            self.mass = density * circle.area();
        }
        self
    }

    /// Set the surface material
    pub fn with_material(mut self, material: PhysicsMaterial) -> Self {
        self.material = material;
        self
    }

    /// Set the collision filter
    pub fn with_filter(mut self, filter: CollisionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set whether this body is affected by gravity
    pub fn with_gravity(mut self, affected: bool) -> Self {
        self.affected_by_gravity = affected;
        self
    }

    /// Check if this body is static
    pub fn is_static(&self) -> bool {
        self.body_type == BodyType::Static
    }

    /// Inverse mass; zero for static bodies and non-positive masses
    pub fn inverse_mass(&self) -> f32 {
        if self.is_static() || self.mass <= 0.0 {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// Update the position and sync the collider
    pub fn set_position(&mut self, position: Vec2) {
        let delta = position - self.position;
        self.apply_correction(delta);
    }

    /// Apply a positional correction (e.g., from joint or contact resolution)
    pub fn apply_correction(&mut self, correction: Vec2) {
        self.position += correction;
        if let Some(circle) = &mut self.collider {
            *circle = circle.translated(correction);
        }
    }
}
