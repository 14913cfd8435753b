//! Physics world and simulation

use std::collections::HashSet;

use crate::body::{BodyKey, RigidBody2D};
use crate::collision::circle_vs_circle;
use crate::error::PhysicsError;
use crate::joint::{JointKey, PinJoint};
use clothnet_math::Vec2;
use slotmap::{SecondaryMap, SlotMap};

/// Configuration for the physics simulation
#[derive(Clone, Debug)]
pub struct PhysicsConfig {
    /// Gravity acceleration (y-up, so negative y pulls down)
    pub gravity: Vec2,
    /// Joint/contact relaxation rounds per step
    pub iterations: usize,
    /// Velocity multiplier applied every step (1.0 = no damping)
    pub damping: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -900.0),
            iterations: 10,
            damping: 1.0,
        }
    }
}

impl PhysicsConfig {
    /// Create a new physics config with the given gravity
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }

    /// Set the number of relaxation rounds (at least one)
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    /// Set the per-step velocity damping factor, clamped to [0, 1]
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping.clamp(0.0, 1.0);
        self
    }
}

/// A contact seen during the first relaxation round of a step
#[derive(Clone, Copy, Debug)]
struct ContactRecord {
    a: BodyKey,
    b: BodyKey,
    normal: Vec2,
    /// Relative normal velocity before the step; negative means approaching
    approach_speed: f32,
}

/// The physics world containing all rigid bodies and pin joints
pub struct PhysicsWorld {
    /// All rigid bodies in the world (using generational keys)
    bodies: SlotMap<BodyKey, RigidBody2D>,
    /// Distance constraints between bodies
    joints: SlotMap<JointKey, PinJoint>,
    /// Physics configuration
    pub config: PhysicsConfig,
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            bodies: SlotMap::with_key(),
            joints: SlotMap::with_key(),
            config,
        }
    }

    /// Add a body to the world and return its key
    pub fn add_body(&mut self, body: RigidBody2D) -> BodyKey {
        self.bodies.insert(body)
    }

    /// Remove a body from the world and return it
    ///
    /// Every joint attached to the body is removed as well.
    pub fn remove_body(&mut self, key: BodyKey) -> Option<RigidBody2D> {
        let body = self.bodies.remove(key)?;
        let before = self.joints.len();
        self.joints.retain(|_, joint| !joint.involves(key));
        let dropped = before - self.joints.len();
        if dropped > 0 {
            log::debug!("Removed {} joint(s) attached to body {:?}", dropped, key);
        }
        Some(body)
    }

    /// Get an immutable reference to a body by key
    pub fn get_body(&self, key: BodyKey) -> Option<&RigidBody2D> {
        self.bodies.get(key)
    }

    /// Get a mutable reference to a body by key
    pub fn get_body_mut(&mut self, key: BodyKey) -> Option<&mut RigidBody2D> {
        self.bodies.get_mut(key)
    }

    /// Get the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Pin two bodies together at their current distance
    pub fn add_pin_joint(&mut self, a: BodyKey, b: BodyKey) -> Result<JointKey, PhysicsError> {
        if a == b {
            return Err(PhysicsError::SameBody(a));
        }
        let pos_a = self.bodies.get(a).ok_or(PhysicsError::BodyNotFound(a))?.position;
        let pos_b = self.bodies.get(b).ok_or(PhysicsError::BodyNotFound(b))?.position;
        Ok(self.joints.insert(PinJoint::new(a, b, pos_a.distance(pos_b))))
    }

    /// Add a pre-built joint
    pub fn add_joint(&mut self, joint: PinJoint) -> Result<JointKey, PhysicsError> {
        if joint.body_a == joint.body_b {
            return Err(PhysicsError::SameBody(joint.body_a));
        }
        for key in [joint.body_a, joint.body_b] {
            if !self.bodies.contains_key(key) {
                return Err(PhysicsError::BodyNotFound(key));
            }
        }
        Ok(self.joints.insert(joint))
    }

    /// Remove a joint and return it
    pub fn remove_joint(&mut self, key: JointKey) -> Option<PinJoint> {
        self.joints.remove(key)
    }

    /// Get a joint by key
    pub fn get_joint(&self, key: JointKey) -> Option<&PinJoint> {
        self.joints.get(key)
    }

    /// Get the number of joints in the world
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Current distance between a joint's two bodies
    pub fn joint_length(&self, key: JointKey) -> Result<f32, PhysicsError> {
        let joint = self.joints.get(key).ok_or(PhysicsError::JointNotFound(key))?;
        let a = self.bodies.get(joint.body_a).ok_or(PhysicsError::BodyNotFound(joint.body_a))?;
        let b = self.bodies.get(joint.body_b).ok_or(PhysicsError::BodyNotFound(joint.body_b))?;
        Ok(a.position.distance(b.position))
    }

    /// Apply an instantaneous impulse to a body (Δv = J / m)
    ///
    /// Static bodies ignore impulses.
    pub fn apply_impulse(&mut self, key: BodyKey, impulse: Vec2) -> Result<(), PhysicsError> {
        let body = self.bodies.get_mut(key).ok_or(PhysicsError::BodyNotFound(key))?;
        let inv_mass = body.inverse_mass();
        body.velocity += impulse * inv_mass;
        Ok(())
    }

    /// Step the physics simulation forward by dt seconds
    ///
    /// This performs:
    /// 1. Gravity and damping on dynamic velocities, then position prediction
    /// 2. `iterations` rounds of pin joint projection and contact separation
    /// 3. Velocity update from the corrected positions
    /// 4. Restitution and friction impulses for contacts found in round one
    ///
    /// Non-positive or non-finite `dt` leaves the world untouched.
    pub fn step(&mut self, dt: f32) {
        if !(dt > 0.0 && dt.is_finite()) {
            return;
        }

        // Phase 1: Apply gravity and predict positions
        let mut previous: SecondaryMap<BodyKey, Vec2> =
            SecondaryMap::with_capacity(self.bodies.len());
        for (key, body) in &mut self.bodies {
            if body.is_static() {
                continue;
            }

            if body.affected_by_gravity {
                body.velocity += self.config.gravity * dt;
            }
            body.velocity *= self.config.damping;

            previous.insert(key, body.position);
            let displacement = body.velocity * dt;
            body.apply_correction(displacement);
        }

        // Phase 2: Relax joints and contacts
        let excluded = self.jointed_pairs();
        let mut contacts = Vec::new();
        for round in 0..self.config.iterations.max(1) {
            self.solve_joints();
            let record = if round == 0 { Some(&mut contacts) } else { None };
            self.solve_contacts(&excluded, record);
        }

        // Phase 3: Derive velocities from the corrected positions
        for (key, prev) in &previous {
            if let Some(body) = self.bodies.get_mut(key) {
                body.velocity = (body.position - *prev) / dt;
            }
        }

        // Phase 4: Bounce
        self.apply_contact_impulses(&contacts);
    }

    /// Body pairs held by a joint that forbids collision between them
    fn jointed_pairs(&self) -> HashSet<(BodyKey, BodyKey)> {
        self.joints
            .values()
            .filter(|joint| !joint.collide_bodies)
            .map(|joint| ordered_pair(joint.body_a, joint.body_b))
            .collect()
    }

    /// Project every joint back to its rest length
    fn solve_joints(&mut self) {
        for joint in self.joints.values() {
            let (pos_a, inv_a, pos_b, inv_b) = match (
                self.bodies.get(joint.body_a),
                self.bodies.get(joint.body_b),
            ) {
                (Some(a), Some(b)) => (a.position, a.inverse_mass(), b.position, b.inverse_mass()),
                _ => continue,
            };

            if let Some((correction_a, correction_b)) =
                joint.corrections(pos_a, pos_b, inv_a, inv_b)
            {
                self.bodies[joint.body_a].apply_correction(correction_a);
                self.bodies[joint.body_b].apply_correction(correction_b);
            }
        }
    }

    /// Push overlapping circles apart, split by inverse mass
    fn solve_contacts(
        &mut self,
        excluded: &HashSet<(BodyKey, BodyKey)>,
        mut record: Option<&mut Vec<ContactRecord>>,
    ) {
        // Collect all keys first (needed because we can't iterate and mutate)
        let keys: Vec<BodyKey> = self.bodies.keys().collect();
        let key_count = keys.len();

        for i in 0..key_count {
            for j in (i + 1)..key_count {
                let key_a = keys[i];
                let key_b = keys[j];

                let (contact, inv_a, inv_b, approach_speed) = {
                    let body_a = &self.bodies[key_a];
                    let body_b = &self.bodies[key_b];

                    if body_a.is_static() && body_b.is_static() {
                        continue;
                    }
                    if !body_a.filter.collides_with(&body_b.filter) {
                        continue;
                    }
                    if excluded.contains(&ordered_pair(key_a, key_b)) {
                        continue;
                    }
                    let (Some(circle_a), Some(circle_b)) = (body_a.collider, body_b.collider) else {
                        continue;
                    };
                    let Some(contact) = circle_vs_circle(&circle_a, &circle_b) else {
                        continue;
                    };
                    let approach_speed = (body_b.velocity - body_a.velocity).dot(contact.normal);
                    (contact, body_a.inverse_mass(), body_b.inverse_mass(), approach_speed)
                };

                let total = inv_a + inv_b;
                if total <= 0.0 {
                    continue;
                }

                if let Some(records) = record.as_deref_mut() {
                    records.push(ContactRecord {
                        a: key_a,
                        b: key_b,
                        normal: contact.normal,
                        approach_speed,
                    });
                }

                let push = contact.normal * (contact.penetration / total);
                self.bodies[key_a].apply_correction(-push * inv_a);
                self.bodies[key_b].apply_correction(push * inv_b);
            }
        }
    }

    /// Restore the bounce that position projection removed
    fn apply_contact_impulses(&mut self, contacts: &[ContactRecord]) {
        for contact in contacts {
            if contact.approach_speed >= 0.0 {
                continue;
            }

            let (relative, inv_a, inv_b, combined) =
                match (self.bodies.get(contact.a), self.bodies.get(contact.b)) {
                    (Some(a), Some(b)) => (
                        b.velocity - a.velocity,
                        a.inverse_mass(),
                        b.inverse_mass(),
                        a.material.combine(&b.material),
                    ),
                    _ => continue,
                };
            let total = inv_a + inv_b;
            if total <= 0.0 {
                continue;
            }

            let normal_speed = relative.dot(contact.normal);
            let target_speed = -combined.restitution * contact.approach_speed;
            let normal_impulse = ((target_speed - normal_speed) / total).max(0.0);

            let tangent = contact.normal.perp();
            let tangent_impulse = -relative.dot(tangent) * combined.friction / total;

            let impulse = contact.normal * normal_impulse + tangent * tangent_impulse;
            self.bodies[contact.a].velocity -= impulse * inv_a;
            self.bodies[contact.b].velocity += impulse * inv_b;
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn ordered_pair(a: BodyKey, b: BodyKey) -> (BodyKey, BodyKey) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::CollisionFilter;
    use crate::material::PhysicsMaterial;

    fn zero_gravity() -> PhysicsWorld {
        PhysicsWorld::with_config(PhysicsConfig::new(Vec2::ZERO))
    }

    #[test]
    fn test_physics_config_default() {
        let config = PhysicsConfig::default();
        assert_eq!(config.gravity, Vec2::new(0.0, -900.0));
        assert_eq!(config.iterations, 10);
        assert_eq!(config.damping, 1.0);
    }

    #[test]
    fn test_physics_config_builders_clamp() {
        let config = PhysicsConfig::new(Vec2::ZERO).with_iterations(0).with_damping(1.5);
        assert_eq!(config.iterations, 1);
        assert_eq!(config.damping, 1.0);
    }

    #[test]
    fn test_world_add_body() {
        let mut world = PhysicsWorld::new();
        assert_eq!(world.body_count(), 0);

        let key = world.add_body(RigidBody2D::new_circle(Vec2::new(0.0, 5.0), 0.5));

        assert!(world.get_body(key).is_some());
        assert_eq!(world.body_count(), 1);
    }

    #[test]
    fn test_stale_key_returns_none() {
        let mut world = PhysicsWorld::new();
        let key = world.add_body(RigidBody2D::new_circle(Vec2::new(0.0, 5.0), 0.5));

        assert!(world.remove_body(key).is_some());
        assert!(world.get_body(key).is_none());

        // Add a new body - it gets a different key
        let new_key = world.add_body(RigidBody2D::new_circle(Vec2::new(1.0, 5.0), 0.5));

        // Old key still returns None (generational safety)
        assert!(world.get_body(key).is_none());
        assert!(world.get_body(new_key).is_some());
    }

    #[test]
    fn test_gravity_application() {
        let mut world = PhysicsWorld::new();
        let handle = world.add_body(RigidBody2D::new_circle(Vec2::new(0.0, 500.0), 10.0));

        world.step(0.1);

        let body = world.get_body(handle).unwrap();
        // 0 + (-900) * 0.1 = -90
        assert!((body.velocity.y - (-90.0)).abs() < 0.01);
        assert!((body.position.y - 491.0).abs() < 0.01);
    }

    #[test]
    fn test_velocity_integration() {
        let mut world = zero_gravity();
        let handle = world.add_body(
            RigidBody2D::new_circle(Vec2::ZERO, 1.0).with_velocity(Vec2::new(10.0, 0.0)),
        );

        world.step(1.0);

        let body = world.get_body(handle).unwrap();
        assert!((body.position.x - 10.0).abs() < 0.0001);
        assert_eq!(body.collider.map(|c| c.center), Some(body.position));
    }

    #[test]
    fn test_damping_slows_bodies() {
        let mut world =
            PhysicsWorld::with_config(PhysicsConfig::new(Vec2::ZERO).with_damping(0.5));
        let handle = world.add_body(
            RigidBody2D::new_circle(Vec2::ZERO, 1.0).with_velocity(Vec2::new(10.0, 0.0)),
        );

        world.step(1.0);

        let body = world.get_body(handle).unwrap();
        assert!((body.velocity.x - 5.0).abs() < 0.0001);
    }

    #[test]
    fn test_static_body_does_not_move() {
        let mut world = PhysicsWorld::new();
        let handle = world.add_body(RigidBody2D::new_static(Vec2::new(300.0, 500.0)));

        world.step(1.0);

        let body = world.get_body(handle).unwrap();
        assert_eq!(body.position, Vec2::new(300.0, 500.0));
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_invalid_dt_is_noop() {
        let mut world = PhysicsWorld::new();
        let handle = world.add_body(RigidBody2D::new_circle(Vec2::new(0.0, 5.0), 1.0));

        world.step(0.0);
        world.step(-1.0);
        world.step(f32::NAN);
        world.step(f32::INFINITY);

        let body = world.get_body(handle).unwrap();
        assert_eq!(body.position, Vec2::new(0.0, 5.0));
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_pin_joint_rest_length_is_current_distance() {
        let mut world = PhysicsWorld::new();
        let anchor = world.add_body(RigidBody2D::new_static(Vec2::new(300.0, 500.0)));
        let bob = world.add_body(RigidBody2D::new_circle(Vec2::new(300.0, 400.0), 10.0));

        let joint = world.add_pin_joint(anchor, bob).unwrap();

        assert_eq!(world.get_joint(joint).unwrap().rest_length, 100.0);
        assert_eq!(world.joint_count(), 1);
    }

    #[test]
    fn test_pin_joint_errors() {
        let mut world = PhysicsWorld::new();
        let a = world.add_body(RigidBody2D::new_circle(Vec2::ZERO, 1.0));
        let b = world.add_body(RigidBody2D::new_circle(Vec2::X, 1.0));
        world.remove_body(b);

        assert_eq!(world.add_pin_joint(a, a), Err(PhysicsError::SameBody(a)));
        assert_eq!(world.add_pin_joint(a, b), Err(PhysicsError::BodyNotFound(b)));
        assert_eq!(
            world.add_joint(PinJoint::new(b, a, 1.0)),
            Err(PhysicsError::BodyNotFound(b))
        );
    }

    #[test]
    fn test_pinned_bob_hangs_at_rest_length() {
        let mut world = PhysicsWorld::new();
        let anchor = world.add_body(RigidBody2D::new_static(Vec2::new(300.0, 500.0)));
        let bob = world.add_body(
            RigidBody2D::new_circle(Vec2::new(300.0, 400.0), 10.0).with_density(1.0),
        );
        let joint = world.add_pin_joint(anchor, bob).unwrap();

        for _ in 0..100 {
            world.step(1.0 / 50.0);
        }

        let length = world.joint_length(joint).unwrap();
        assert!((length - 100.0).abs() < 0.5, "joint length drifted to {}", length);
        assert_eq!(world.get_body(anchor).unwrap().position, Vec2::new(300.0, 500.0));
        assert!((world.get_body(bob).unwrap().position.x - 300.0).abs() < 0.01);
    }

    #[test]
    fn test_pendulum_swings_through_bottom() {
        let mut world = PhysicsWorld::new();
        let anchor = world.add_body(RigidBody2D::new_static(Vec2::new(400.0, 400.0)));
        let bob = world.add_body(RigidBody2D::new_circle(Vec2::new(500.0, 400.0), 10.0));
        world.add_pin_joint(anchor, bob).unwrap();

        let mut min_x = f32::MAX;
        for _ in 0..50 {
            world.step(1.0 / 50.0);
            min_x = min_x.min(world.get_body(bob).unwrap().position.x);
        }

        // Released horizontally to the right, it must swing past the anchor's x
        assert!(min_x < 400.0, "bob never swung past the anchor (min x = {})", min_x);
    }

    #[test]
    fn test_remove_body_removes_its_joints() {
        let mut world = PhysicsWorld::new();
        let a = world.add_body(RigidBody2D::new_static(Vec2::ZERO));
        let b = world.add_body(RigidBody2D::new_circle(Vec2::new(0.0, -10.0), 1.0));
        let c = world.add_body(RigidBody2D::new_circle(Vec2::new(0.0, -20.0), 1.0));
        let ab = world.add_pin_joint(a, b).unwrap();
        let bc = world.add_pin_joint(b, c).unwrap();
        let ac = world.add_pin_joint(a, c).unwrap();

        world.remove_body(b);

        assert!(world.get_joint(ab).is_none());
        assert!(world.get_joint(bc).is_none());
        assert!(world.get_joint(ac).is_some());
        assert_eq!(world.joint_count(), 1);
    }

    #[test]
    fn test_apply_impulse() {
        let mut world = zero_gravity();
        let key = world.add_body(RigidBody2D::new_circle(Vec2::ZERO, 1.0).with_mass(2.0));

        world.apply_impulse(key, Vec2::new(10.0, -4.0)).unwrap();

        assert_eq!(world.get_body(key).unwrap().velocity, Vec2::new(5.0, -2.0));
    }

    #[test]
    fn test_apply_impulse_ignored_by_static_body() {
        let mut world = zero_gravity();
        let key = world.add_body(RigidBody2D::new_static(Vec2::ZERO));

        world.apply_impulse(key, Vec2::new(10.0, 10.0)).unwrap();

        assert_eq!(world.get_body(key).unwrap().velocity, Vec2::ZERO);
    }

    #[test]
    fn test_apply_impulse_stale_key() {
        let mut world = zero_gravity();
        let key = world.add_body(RigidBody2D::new_circle(Vec2::ZERO, 1.0));
        world.remove_body(key);

        assert_eq!(
            world.apply_impulse(key, Vec2::X),
            Err(PhysicsError::BodyNotFound(key))
        );
    }

    #[test]
    fn test_elastic_head_on_collision_bounces() {
        let mut world = zero_gravity();
        let a = world.add_body(
            RigidBody2D::new_circle(Vec2::ZERO, 10.0)
                .with_velocity(Vec2::new(100.0, 0.0))
                .with_material(PhysicsMaterial::ELASTIC),
        );
        let b = world.add_body(
            RigidBody2D::new_circle(Vec2::new(25.0, 0.0), 10.0)
                .with_velocity(Vec2::new(-100.0, 0.0))
                .with_material(PhysicsMaterial::ELASTIC),
        );

        world.step(0.1);

        let body_a = world.get_body(a).unwrap();
        let body_b = world.get_body(b).unwrap();
        assert!((body_a.velocity.x - (-100.0)).abs() < 0.01);
        assert!((body_b.velocity.x - 100.0).abs() < 0.01);
        assert!(body_a.position.distance(body_b.position) >= 20.0 - 0.01);
    }

    #[test]
    fn test_inelastic_collision_stops_approach() {
        let mut world = zero_gravity();
        let material = PhysicsMaterial::new(0.0);
        let a = world.add_body(
            RigidBody2D::new_circle(Vec2::ZERO, 10.0)
                .with_velocity(Vec2::new(100.0, 0.0))
                .with_material(material),
        );
        let b = world.add_body(
            RigidBody2D::new_circle(Vec2::new(25.0, 0.0), 10.0)
                .with_velocity(Vec2::new(-100.0, 0.0))
                .with_material(material),
        );

        world.step(0.1);

        let relative = world.get_body(b).unwrap().velocity - world.get_body(a).unwrap().velocity;
        assert!(relative.x.abs() < 0.01);
    }

    /// Relative sliding speed after a glancing hit between two points
    fn glancing_slide_speed(material: PhysicsMaterial) -> f32 {
        let mut world = zero_gravity();
        let a = world.add_body(
            RigidBody2D::new_circle(Vec2::ZERO, 10.0)
                .with_velocity(Vec2::new(100.0, 40.0))
                .with_material(material),
        );
        let b = world.add_body(
            RigidBody2D::new_circle(Vec2::new(21.0, 0.0), 10.0).with_material(material),
        );

        world.step(0.02);

        let body_a = world.get_body(a).unwrap();
        let body_b = world.get_body(b).unwrap();
        let normal = (body_b.position - body_a.position).normalized();
        (body_b.velocity - body_a.velocity).dot(normal.perp()).abs()
    }

    #[test]
    fn test_friction_removes_sliding_speed() {
        let frictionless = glancing_slide_speed(PhysicsMaterial::new(0.0));
        let sticky = glancing_slide_speed(PhysicsMaterial::new(0.0).with_friction(1.0));

        assert!(frictionless > 20.0, "slide speed {}", frictionless);
        assert!(sticky < 1.0, "slide speed {}", sticky);
    }

    #[test]
    fn test_jointed_bodies_do_not_collide() {
        let mut world = zero_gravity();
        let a = world.add_body(RigidBody2D::new_circle(Vec2::ZERO, 10.0));
        let b = world.add_body(RigidBody2D::new_circle(Vec2::new(5.0, 0.0), 10.0));
        world.add_pin_joint(a, b).unwrap();

        world.step(0.1);

        assert_eq!(world.get_body(a).unwrap().position, Vec2::ZERO);
        assert_eq!(world.get_body(b).unwrap().position, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_joint_with_collide_bodies_separates() {
        let mut world = zero_gravity();
        let a = world.add_body(RigidBody2D::new_circle(Vec2::ZERO, 10.0));
        let b = world.add_body(RigidBody2D::new_circle(Vec2::new(5.0, 0.0), 10.0));
        world
            .add_joint(PinJoint::new(a, b, 5.0).with_collide_bodies(true))
            .unwrap();

        world.step(0.1);

        assert!(distance_between(&world, a, b) > 5.0);
    }

    #[test]
    fn test_filter_blocks_collision() {
        let mut world = zero_gravity();
        let a = world.add_body(
            RigidBody2D::new_circle(Vec2::ZERO, 10.0).with_filter(CollisionFilter::net()),
        );
        let b = world.add_body(
            RigidBody2D::new_circle(Vec2::new(5.0, 0.0), 10.0)
                .with_filter(CollisionFilter::anchor()),
        );

        world.step(0.1);

        assert_eq!(world.get_body(a).unwrap().position, Vec2::ZERO);
        assert_eq!(world.get_body(b).unwrap().position, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_overlapping_circles_are_separated() {
        let mut world = zero_gravity();
        let a = world.add_body(RigidBody2D::new_circle(Vec2::ZERO, 10.0));
        let b = world.add_body(RigidBody2D::new_circle(Vec2::new(15.0, 0.0), 10.0));

        world.step(0.016);

        assert!(distance_between(&world, a, b) >= 20.0 - 0.001);
    }

    fn distance_between(world: &PhysicsWorld, a: BodyKey, b: BodyKey) -> f32 {
        let pos_a = world.get_body(a).unwrap().position;
        let pos_b = world.get_body(b).unwrap().position;
        pos_a.distance(pos_b)
    }
}
