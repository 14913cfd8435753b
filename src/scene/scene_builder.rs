//! Scene and SceneBuilder
//!
//! A [`Scene`] owns the physics world and everything spawned into it: the
//! cloth net and any pendulums. It is rebuilt in place on reset.

use clothnet_math::{Color, Vec2};
use clothnet_physics::{PhysicsConfig, PhysicsWorld};
use clothnet_render::DrawList;

use super::net::{Net, NetConfig, NetError};
use super::pendulum::{Pendulum, PendulumConfig};
use super::point::PointTemplate;
use super::style::{palette_color, DrawStyle};
use crate::config::AppConfig;

/// The simulated world plus its display state
pub struct Scene {
    world: PhysicsWorld,
    net_config: NetConfig,
    net: Net,
    pendulum_configs: Vec<PendulumConfig>,
    pendulums: Vec<Pendulum>,
    style: DrawStyle,
    show_trails: bool,
    show_connectors: bool,
    disturb_impulse: Vec2,
}

impl Scene {
    /// Advance the physics world by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.world.step(dt);
    }

    /// Despawn everything and spawn it again from the stored configs
    ///
    /// Trails start empty after a reset.
    pub fn reset(&mut self) -> Result<(), NetError> {
        self.net.despawn(&mut self.world);
        for pendulum in self.pendulums.drain(..) {
            pendulum.despawn(&mut self.world);
        }

        self.net = Net::spawn(&mut self.world, &self.net_config)?;
        for config in &self.pendulum_configs {
            let mut pendulum = Pendulum::spawn(&mut self.world, config)?;
            pendulum.show_connectors = self.show_connectors;
            self.pendulums.push(pendulum);
        }

        log::debug!(
            "Scene reset: {} bodies, {} joints",
            self.world.body_count(),
            self.world.joint_count()
        );
        Ok(())
    }

    /// Kick the net's bottom row and every pendulum tip
    ///
    /// Returns how many bodies received the impulse.
    pub fn disturb(&mut self, impulse: Vec2) -> usize {
        let targets = self
            .net
            .bottom_row()
            .into_iter()
            .chain(self.pendulums.iter().map(Pendulum::tip));

        let mut disturbed = 0;
        for key in targets {
            match self.world.apply_impulse(key, impulse) {
                Ok(()) => disturbed += 1,
                Err(e) => log::warn!("Skipping disturbance: {}", e),
            }
        }
        disturbed
    }

    /// Flip trail drawing; returns the new state
    pub fn toggle_trails(&mut self) -> bool {
        self.show_trails = !self.show_trails;
        self.show_trails
    }

    pub fn clear_trails(&mut self) {
        self.net.clear_trails();
        for pendulum in &mut self.pendulums {
            pendulum.clear_trails();
        }
    }

    /// Flip pendulum connector drawing; returns the new state
    pub fn toggle_connectors(&mut self) -> bool {
        self.show_connectors = !self.show_connectors;
        for pendulum in &mut self.pendulums {
            pendulum.show_connectors = self.show_connectors;
        }
        self.show_connectors
    }

    /// Append every point's screen position to its trail
    pub fn record_trails(&mut self) {
        let height = self.style.screen_height;
        self.net.record_trails(&self.world, height);
        for pendulum in &mut self.pendulums {
            pendulum.record_trails(&self.world, height);
        }
    }

    /// Append this frame's shapes to `list`
    pub fn draw(&self, list: &mut DrawList) {
        self.net.draw(list, &self.world, &self.style, self.show_trails);
        for pendulum in &self.pendulums {
            pendulum.draw(list, &self.world, &self.style, self.show_trails);
        }
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn net(&self) -> &Net {
        &self.net
    }

    pub fn pendulums(&self) -> &[Pendulum] {
        &self.pendulums
    }

    pub fn style(&self) -> &DrawStyle {
        &self.style
    }

    pub fn show_trails(&self) -> bool {
        self.show_trails
    }

    pub fn show_connectors(&self) -> bool {
        self.show_connectors
    }

    /// Impulse used by the disturb action
    pub fn disturb_impulse(&self) -> Vec2 {
        self.disturb_impulse
    }
}

/// Builder for constructing a [`Scene`]
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new()
///     .with_net(NetConfig { cols: 6, ..NetConfig::default() })
///     .add_pendulum(PendulumConfig::default())
///     .with_trails(true)
///     .build()?;
/// ```
pub struct SceneBuilder {
    physics: PhysicsConfig,
    net: NetConfig,
    pendulums: Vec<PendulumConfig>,
    style: DrawStyle,
    show_trails: bool,
    show_connectors: bool,
    disturb_impulse: Vec2,
}

impl SceneBuilder {
    /// Create a builder for the default 4x4 net
    pub fn new() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            net: NetConfig::default(),
            pendulums: Vec::new(),
            style: DrawStyle::default(),
            show_trails: false,
            show_connectors: true,
            disturb_impulse: Vec2::new(60_000.0, 30_000.0),
        }
    }

    /// Create a builder from the application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let trail_length = config.trails.max_length;

        let net = NetConfig {
            origin: Vec2::from(config.net.origin),
            cols: config.net.cols,
            rows: config.net.rows,
            separation: config.net.separation,
            point_radius: config.net.point_radius,
            density: config.net.density,
            elasticity: config.net.elasticity,
            friction: config.net.friction,
            color: palette_color(config.net.color_index),
            trail_length,
        };

        let style = DrawStyle {
            screen_height: config.window.height as f32,
            line_width: config.rendering.line_width,
            link_dot_radius: config.rendering.link_dot_radius,
            trail_radius: config.trails.radius,
            connector_color: Color::BLACK,
        };

        let mut builder = Self::new()
            .with_physics(config.physics.to_physics_config())
            .with_net(net)
            .with_style(style)
            .with_trails(config.trails.enabled)
            .with_connectors(config.pendulum.show_connectors)
            .with_disturb_impulse(Vec2::from(config.net.disturb_impulse));

        if config.pendulum.enabled {
            builder = builder.add_pendulum(PendulumConfig {
                point1: Vec2::from(config.pendulum.point1),
                point2: Vec2::from(config.pendulum.point2),
                anchor: Vec2::from(config.pendulum.anchor),
                color_index: config.pendulum.color_index,
                show_connectors: config.pendulum.show_connectors,
                point: PointTemplate {
                    trail_length,
                    ..PointTemplate::default()
                },
            });
        }

        builder
    }

    pub fn with_physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = physics;
        self
    }

    pub fn with_net(mut self, net: NetConfig) -> Self {
        self.net = net;
        self
    }

    pub fn add_pendulum(mut self, pendulum: PendulumConfig) -> Self {
        self.pendulums.push(pendulum);
        self
    }

    pub fn with_style(mut self, style: DrawStyle) -> Self {
        self.style = style;
        self
    }

    /// Start with trails shown or hidden
    pub fn with_trails(mut self, show: bool) -> Self {
        self.show_trails = show;
        self
    }

    /// Start with pendulum connectors shown or hidden
    pub fn with_connectors(mut self, show: bool) -> Self {
        self.show_connectors = show;
        self
    }

    pub fn with_disturb_impulse(mut self, impulse: Vec2) -> Self {
        self.disturb_impulse = impulse;
        self
    }

    /// Create the world and spawn the net and pendulums into it
    pub fn build(self) -> Result<Scene, NetError> {
        let mut world = PhysicsWorld::with_config(self.physics);
        let net = Net::spawn(&mut world, &self.net)?;

        let mut pendulums = Vec::with_capacity(self.pendulums.len());
        for config in &self.pendulums {
            let mut pendulum = Pendulum::spawn(&mut world, config)?;
            pendulum.show_connectors = self.show_connectors;
            pendulums.push(pendulum);
        }

        log::info!(
            "Built scene: {}x{} net, {} pendulum(s), {} bodies",
            net.cols(),
            net.rows(),
            pendulums.len(),
            world.body_count()
        );

        Ok(Scene {
            world,
            net_config: self.net,
            net,
            pendulum_configs: self.pendulums,
            pendulums,
            style: self.style,
            show_trails: self.show_trails,
            show_connectors: self.show_connectors,
            disturb_impulse: self.disturb_impulse,
        })
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
