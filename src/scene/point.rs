//! Point masses drawn as filled circles

use clothnet_math::{Color, Vec2};
use clothnet_physics::{BodyKey, CollisionFilter, PhysicsMaterial, PhysicsWorld, RigidBody2D};
use clothnet_render::DrawList;

use super::coords::world_to_screen;
use super::style::DrawStyle;
use super::trail::Trail;

/// Physical and trail properties shared by every point of an object
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointTemplate {
    pub radius: f32,
    /// Mass per unit area
    pub density: f32,
    /// Restitution against other points
    pub elasticity: f32,
    /// Sliding resistance against other points
    pub friction: f32,
    /// Trail positions kept per point
    pub trail_length: usize,
}

impl Default for PointTemplate {
    fn default() -> Self {
        Self {
            radius: 10.0,
            density: 1.0,
            elasticity: 1.0,
            friction: 0.0,
            trail_length: 120,
        }
    }
}

/// A dynamic circle body with its color and trail
#[derive(Clone, Debug)]
pub struct PointMass {
    pub body: BodyKey,
    pub color: Color,
    pub radius: f32,
    pub trail: Trail,
}

impl PointMass {
    /// Add a point body to the world
    pub fn spawn(
        world: &mut PhysicsWorld,
        position: Vec2,
        template: &PointTemplate,
        color: Color,
        filter: CollisionFilter,
    ) -> Self {
        let body = RigidBody2D::new_circle(position, template.radius)
            .with_density(template.density)
            .with_material(
                PhysicsMaterial::new(template.elasticity).with_friction(template.friction),
            )
            .with_filter(filter);

        Self {
            body: world.add_body(body),
            color,
            radius: template.radius,
            trail: Trail::new(template.trail_length),
        }
    }

    /// Current physics position, if the body still exists
    pub fn position(&self, world: &PhysicsWorld) -> Option<Vec2> {
        world.get_body(self.body).map(|body| body.position)
    }

    /// Append the current screen position to the trail
    pub fn record_trail(&mut self, world: &PhysicsWorld, screen_height: f32) {
        if let Some(position) = self.position(world) {
            self.trail.record(world_to_screen(position, screen_height));
        }
    }

    pub fn draw_trail(&self, list: &mut DrawList, style: &DrawStyle) {
        for position in self.trail.iter() {
            list.circle(*position, style.trail_radius, self.color);
        }
    }

    pub fn draw(&self, list: &mut DrawList, world: &PhysicsWorld, style: &DrawStyle) {
        if let Some(position) = self.position(world) {
            list.circle(
                world_to_screen(position, style.screen_height),
                self.radius,
                self.color,
            );
        }
    }
}
