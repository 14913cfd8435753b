//! Cloth net: a grid of point masses held together by pin joints
//!
//! The top row of the grid is made of fixed anchors. Every other grid
//! position holds a free point, stored column by column. Each free point is
//! pinned to its south and east neighbours, and each point of the first free
//! row is pinned to the anchor above it.

use clothnet_math::{Color, Vec2};
use clothnet_physics::{BodyKey, CollisionFilter, PhysicsError, PhysicsWorld};
use clothnet_render::DrawList;

use super::connector::Connector;
use super::point::{PointMass, PointTemplate};
use super::style::DrawStyle;

/// Layout and material of a net
#[derive(Clone, Debug, PartialEq)]
pub struct NetConfig {
    /// Position of the top-left anchor
    pub origin: Vec2,
    pub cols: usize,
    /// Row count including the anchor row
    pub rows: usize,
    /// Distance between neighbouring grid positions
    pub separation: f32,
    pub point_radius: f32,
    pub density: f32,
    pub elasticity: f32,
    pub friction: f32,
    pub color: Color,
    /// Trail positions kept per point
    pub trail_length: usize,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            origin: Vec2::new(300.0, 500.0),
            cols: 4,
            rows: 4,
            separation: 100.0,
            point_radius: 10.0,
            density: 1.0,
            elasticity: 1.0,
            friction: 0.0,
            color: Color::PURPLE,
            trail_length: 120,
        }
    }
}

impl NetConfig {
    /// Physics position of grid column `col`, row `row` (row 0 is the anchor row)
    pub fn grid_position(&self, col: usize, row: usize) -> Vec2 {
        Vec2::new(
            self.origin.x + col as f32 * self.separation,
            self.origin.y - row as f32 * self.separation,
        )
    }

    /// Index of the free point at (`col`, `row`), for rows 1 and below
    pub fn point_index(&self, col: usize, row: usize) -> Option<usize> {
        if col >= self.cols || row == 0 || row >= self.rows {
            return None;
        }
        Some(col * (self.rows - 1) + (row - 1))
    }

    pub fn validate(&self) -> Result<(), NetError> {
        if self.cols < 1 || self.rows < 2 {
            return Err(NetError::InvalidDimensions {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if !(self.separation > 0.0 && self.separation.is_finite()) {
            return Err(NetError::InvalidSeparation(self.separation));
        }
        Ok(())
    }

    fn point_template(&self) -> PointTemplate {
        PointTemplate {
            radius: self.point_radius,
            density: self.density,
            elasticity: self.elasticity,
            friction: self.friction,
            trail_length: self.trail_length,
        }
    }
}

/// A spawned net, holding keys into the physics world
#[derive(Clone, Debug)]
pub struct Net {
    cols: usize,
    rows: usize,
    /// Free points, column-major
    points: Vec<PointMass>,
    /// South and east links between free points
    connectors: Vec<Connector>,
    /// Links from the first free row to the anchors
    anchors: Vec<Connector>,
}

impl Net {
    /// Add the net's bodies and joints to the world
    pub fn spawn(world: &mut PhysicsWorld, config: &NetConfig) -> Result<Self, NetError> {
        config.validate()?;

        let template = config.point_template();
        let free_rows = config.rows - 1;
        let mut net = Self {
            cols: config.cols,
            rows: config.rows,
            points: Vec::with_capacity(config.cols * free_rows),
            connectors: Vec::new(),
            anchors: Vec::with_capacity(config.cols),
        };

        for col in 0..config.cols {
            for row in 1..config.rows {
                net.points.push(PointMass::spawn(
                    world,
                    config.grid_position(col, row),
                    &template,
                    config.color,
                    CollisionFilter::net(),
                ));
            }
        }

        if let Err(e) = net.wire(world, config) {
            net.despawn(world);
            return Err(e.into());
        }

        log::debug!(
            "Spawned {}x{} net: {} points, {} connectors, {} anchors",
            net.cols,
            net.rows,
            net.free_point_count(),
            net.connectors.len(),
            net.anchor_count()
        );
        Ok(net)
    }

    fn wire(&mut self, world: &mut PhysicsWorld, config: &NetConfig) -> Result<(), PhysicsError> {
        let free_rows = self.rows - 1;

        for col in 0..self.cols {
            let top = self.points[col * free_rows].body;
            self.anchors
                .push(Connector::to_anchor(world, top, config.grid_position(col, 0))?);
        }

        let count = self.points.len();
        for k in 0..count {
            // South, unless k is the bottom of its column
            if k % free_rows != free_rows - 1 {
                let link = Connector::between(world, self.points[k].body, self.points[k + 1].body)?;
                self.connectors.push(link);
            }
            // East, unless k is in the last column
            if k + free_rows < count {
                let link = Connector::between(
                    world,
                    self.points[k].body,
                    self.points[k + free_rows].body,
                )?;
                self.connectors.push(link);
            }
        }
        Ok(())
    }

    /// Remove every body and joint the net owns from the world
    pub fn despawn(&mut self, world: &mut PhysicsWorld) {
        for connector in self.connectors.drain(..).chain(self.anchors.drain(..)) {
            connector.despawn(world);
        }
        for point in self.points.drain(..) {
            world.remove_body(point.body);
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn points(&self) -> &[PointMass] {
        &self.points
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn anchors(&self) -> &[Connector] {
        &self.anchors
    }

    pub fn free_point_count(&self) -> usize {
        self.points.len()
    }

    /// Total pin joints, anchor links included
    pub fn connector_count(&self) -> usize {
        self.connectors.len() + self.anchors.len()
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Bodies of the lowest free row, left to right
    pub fn bottom_row(&self) -> Vec<BodyKey> {
        let free_rows = self.rows - 1;
        self.points
            .iter()
            .skip(free_rows - 1)
            .step_by(free_rows)
            .map(|point| point.body)
            .collect()
    }

    /// Physics positions of the free points, column-major
    pub fn point_positions(&self, world: &PhysicsWorld) -> Vec<Vec2> {
        self.points
            .iter()
            .filter_map(|point| point.position(world))
            .collect()
    }

    /// Physics endpoints of every connector, anchor links last
    pub fn connector_endpoints(&self, world: &PhysicsWorld) -> Vec<(Vec2, Vec2)> {
        self.connectors
            .iter()
            .chain(&self.anchors)
            .filter_map(|connector| connector.endpoints(world))
            .collect()
    }

    pub fn record_trails(&mut self, world: &PhysicsWorld, screen_height: f32) {
        for point in &mut self.points {
            point.record_trail(world, screen_height);
        }
    }

    pub fn clear_trails(&mut self) {
        for point in &mut self.points {
            point.trail.clear();
        }
    }

    /// Draw trails (optional), connectors, points, then anchor links
    pub fn draw(
        &self,
        list: &mut DrawList,
        world: &PhysicsWorld,
        style: &DrawStyle,
        show_trails: bool,
    ) {
        if show_trails {
            for point in &self.points {
                point.draw_trail(list, style);
            }
        }
        for connector in &self.connectors {
            connector.draw(list, world, style);
        }
        for point in &self.points {
            point.draw(list, world, style);
        }
        for anchor in &self.anchors {
            anchor.draw(list, world, style);
        }
    }
}

/// Errors raised while spawning a net
#[derive(Debug, Clone, PartialEq)]
pub enum NetError {
    /// Fewer than one column or two rows
    InvalidDimensions { cols: usize, rows: usize },
    /// Separation must be positive and finite
    InvalidSeparation(f32),
    /// The physics world rejected a body or joint
    Physics(PhysicsError),
}

impl From<PhysicsError> for NetError {
    fn from(e: PhysicsError) -> Self {
        NetError::Physics(e)
    }
}

impl std::fmt::Display for NetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetError::InvalidDimensions { cols, rows } => write!(
                f,
                "Invalid net size {}x{}: need at least 1 column and 2 rows",
                cols, rows
            ),
            NetError::InvalidSeparation(sep) => {
                write!(f, "Invalid net separation: {}", sep)
            }
            NetError::Physics(e) => write!(f, "Physics error: {}", e),
        }
    }
}

impl std::error::Error for NetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NetError::Physics(e) => Some(e),
            _ => None,
        }
    }
}
