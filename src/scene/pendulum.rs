//! Double pendulum hanging from a static pivot

use clothnet_math::Vec2;
use clothnet_physics::{BodyKey, CollisionFilter, PhysicsError, PhysicsWorld};
use clothnet_render::DrawList;

use super::connector::Connector;
use super::point::{PointMass, PointTemplate};
use super::style::{palette_color, DrawStyle};

/// Placement and look of a double pendulum
#[derive(Clone, Debug, PartialEq)]
pub struct PendulumConfig {
    /// First bob, pinned to the pivot
    pub point1: Vec2,
    /// Second bob, pinned to the first
    pub point2: Vec2,
    /// Static pivot
    pub anchor: Vec2,
    /// Palette index of the first bob; the second uses `color_index + 4`
    pub color_index: usize,
    pub show_connectors: bool,
    pub point: PointTemplate,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            point1: Vec2::new(200.0, 500.0),
            point2: Vec2::new(300.0, 700.0),
            anchor: Vec2::new(400.0, 400.0),
            color_index: 1,
            show_connectors: true,
            point: PointTemplate::default(),
        }
    }
}

/// A spawned double pendulum
#[derive(Clone, Debug)]
pub struct Pendulum {
    pub point1: PointMass,
    pub point2: PointMass,
    pivot: Connector,
    link: Connector,
    /// Draw the connectors as well as the bobs
    pub show_connectors: bool,
}

impl Pendulum {
    /// Add the pendulum's bodies and joints to the world
    pub fn spawn(world: &mut PhysicsWorld, config: &PendulumConfig) -> Result<Self, PhysicsError> {
        let point1 = PointMass::spawn(
            world,
            config.point1,
            &config.point,
            palette_color(config.color_index),
            CollisionFilter::pendulum(),
        );
        let point2 = PointMass::spawn(
            world,
            config.point2,
            &config.point,
            palette_color(config.color_index + 4),
            CollisionFilter::pendulum(),
        );

        let joints = Connector::to_anchor(world, point1.body, config.anchor).and_then(|pivot| {
            match Connector::between(world, point1.body, point2.body) {
                Ok(link) => Ok((pivot, link)),
                Err(e) => {
                    pivot.despawn(world);
                    Err(e)
                }
            }
        });
        let (pivot, link) = match joints {
            Ok(joints) => joints,
            Err(e) => {
                world.remove_body(point1.body);
                world.remove_body(point2.body);
                return Err(e);
            }
        };

        Ok(Self {
            point1,
            point2,
            pivot,
            link,
            show_connectors: config.show_connectors,
        })
    }

    /// Remove the pendulum's bodies, joints and pivot from the world
    pub fn despawn(self, world: &mut PhysicsWorld) {
        self.link.despawn(world);
        self.pivot.despawn(world);
        world.remove_body(self.point1.body);
        world.remove_body(self.point2.body);
    }

    /// The outer bob
    pub fn tip(&self) -> BodyKey {
        self.point2.body
    }

    pub fn record_trails(&mut self, world: &PhysicsWorld, screen_height: f32) {
        self.point1.record_trail(world, screen_height);
        self.point2.record_trail(world, screen_height);
    }

    pub fn clear_trails(&mut self) {
        self.point1.trail.clear();
        self.point2.trail.clear();
    }

    /// Draw trails (optional), connectors (optional), then both bobs
    pub fn draw(
        &self,
        list: &mut DrawList,
        world: &PhysicsWorld,
        style: &DrawStyle,
        show_trails: bool,
    ) {
        if show_trails {
            self.point1.draw_trail(list, style);
            self.point2.draw_trail(list, style);
        }
        if self.show_connectors {
            self.pivot.draw(list, world, style);
            self.link.draw(list, world, style);
        }
        self.point1.draw(list, world, style);
        self.point2.draw(list, world, style);
    }
}
