//! CPU-side tessellation of 2D shapes
//!
//! Shapes are given in screen pixels (origin top-left, y down) and turned
//! into triangle lists ready for [`crate::pipeline::ShapePipeline`]. Later
//! shapes paint over earlier ones.

use clothnet_math::{Color, Vec2};

use crate::pipeline::Vertex2D;

/// Number of triangles used to approximate a circle
pub const CIRCLE_SEGMENTS: usize = 24;

/// A frame's worth of shapes, in paint order
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    vertices: Vec<Vertex2D>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every shape, keeping the allocation
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Add a filled circle
    ///
    /// Non-positive radii draw nothing.
    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if !(radius > 0.0) {
            return;
        }

        let color = color.to_array();
        let step = std::f32::consts::TAU / CIRCLE_SEGMENTS as f32;
        let rim = |i: usize| {
            let angle = step * i as f32;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        };

        for i in 0..CIRCLE_SEGMENTS {
            self.push_triangle([center, rim(i), rim(i + 1)], color);
        }
    }

    /// Add a line segment `width` pixels thick
    ///
    /// Degenerate segments (coincident endpoints) draw nothing.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let direction = (to - from).normalized();
        if direction == Vec2::ZERO || !(width > 0.0) {
            return;
        }

        let color = color.to_array();
        let offset = direction.perp() * (width * 0.5);
        let (a, b) = (from + offset, from - offset);
        let (c, d) = (to - offset, to + offset);

        self.push_triangle([a, b, c], color);
        self.push_triangle([a, c, d], color);
    }

    /// Tessellated vertices in paint order
    pub fn vertices(&self) -> &[Vertex2D] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn push_triangle(&mut self, corners: [Vec2; 3], color: [f32; 4]) {
        self.vertices.extend(
            corners
                .iter()
                .map(|corner| Vertex2D::new(corner.to_array(), color)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertex_count() {
        let mut list = DrawList::new();
        list.circle(Vec2::new(100.0, 100.0), 10.0, Color::PURPLE);
        assert_eq!(list.vertex_count(), CIRCLE_SEGMENTS * 3);
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let mut list = DrawList::new();
        let center = Vec2::new(50.0, 60.0);
        list.circle(center, 5.0, Color::BLACK);

        for vertex in list.vertices() {
            let p = Vec2::from(vertex.position);
            assert!(p.distance(center) <= 5.0 + 1e-4);
            assert_eq!(vertex.color, Color::BLACK.to_array());
        }
    }

    #[test]
    fn test_zero_radius_circle_is_skipped() {
        let mut list = DrawList::new();
        list.circle(Vec2::ZERO, 0.0, Color::RED);
        list.circle(Vec2::ZERO, f32::NAN, Color::RED);
        assert!(list.is_empty());
    }

    #[test]
    fn test_line_is_two_triangles() {
        let mut list = DrawList::new();
        list.line(Vec2::ZERO, Vec2::new(100.0, 0.0), 2.0, Color::BLACK);
        assert_eq!(list.vertex_count(), 6);

        for vertex in list.vertices() {
            assert!((vertex.position[1].abs() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_degenerate_line_is_skipped() {
        let mut list = DrawList::new();
        list.line(Vec2::X, Vec2::X, 1.0, Color::BLACK);
        list.line(Vec2::ZERO, Vec2::X, 0.0, Color::BLACK);
        assert!(list.is_empty());
    }

    #[test]
    fn test_paint_order_is_preserved() {
        let mut list = DrawList::new();
        list.line(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.0, Color::BLACK);
        list.circle(Vec2::ZERO, 3.0, Color::PURPLE);

        assert_eq!(list.vertices()[0].color, Color::BLACK.to_array());
        assert_eq!(
            list.vertices()[list.vertex_count() - 1].color,
            Color::PURPLE.to_array()
        );
    }

    #[test]
    fn test_clear_empties_list() {
        let mut list = DrawList::new();
        list.circle(Vec2::ZERO, 1.0, Color::RED);
        list.clear();
        assert!(list.is_empty());
    }
}
