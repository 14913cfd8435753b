//! Collision detection for 2D shapes
//!
//! Provides circle-circle contact generation and collision filtering via
//! layer masks.

use bitflags::bitflags;

use crate::shapes::Circle;
use clothnet_math::Vec2;

bitflags! {
    /// Collision layers for filtering which objects can collide
    ///
    /// Each layer is a bit in a 32-bit mask. Objects can belong to multiple layers
    /// and can define which layers they collide with via a collision mask.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionLayer: u32 {
        /// Default layer for most objects
        const DEFAULT = 1 << 0;
        /// Point masses of a cloth net
        const NET = 1 << 1;
        /// Pendulum bobs
        const PENDULUM = 1 << 2;
        /// Fixed anchors (static, never pushed)
        const ANCHOR = 1 << 3;
        /// All layers (collide with everything)
        const ALL = 0xFFFFFFFF;
    }
}

/// Collision filter determining what an object collides with
///
/// Two objects A and B collide if:
/// - (A.layer & B.mask) != 0, AND
/// - (B.layer & A.mask) != 0
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionFilter {
    /// Which layer(s) this object belongs to
    pub layer: CollisionLayer,
    /// Which layer(s) this object can collide with
    pub mask: CollisionLayer,
}

impl Default for CollisionFilter {
    fn default() -> Self {
        Self {
            layer: CollisionLayer::DEFAULT,
            mask: CollisionLayer::ALL,
        }
    }
}

impl CollisionFilter {
    /// Create a new collision filter with specified layer and mask
    pub fn new(layer: CollisionLayer, mask: CollisionLayer) -> Self {
        Self { layer, mask }
    }

    /// Check if this filter allows collision with another filter
    pub fn collides_with(&self, other: &Self) -> bool {
        self.layer.intersects(other.mask) && other.layer.intersects(self.mask)
    }

    /// Filter for net points: they bump into each other and into pendulums
    pub fn net() -> Self {
        Self {
            layer: CollisionLayer::NET,
            mask: CollisionLayer::ALL & !CollisionLayer::ANCHOR,
        }
    }

    /// Filter for pendulum bobs
    pub fn pendulum() -> Self {
        Self {
            layer: CollisionLayer::PENDULUM,
            mask: CollisionLayer::ALL & !CollisionLayer::ANCHOR,
        }
    }

    /// Filter for anchors: detected by nothing
    pub fn anchor() -> Self {
        Self {
            layer: CollisionLayer::ANCHOR,
            mask: CollisionLayer::empty(),
        }
    }
}

/// Contact information from a collision
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    /// Point of contact (on the surface of the first shape)
    pub point: Vec2,
    /// Unit normal pointing from the first shape toward the second
    pub normal: Vec2,
    /// Penetration depth (positive means overlapping)
    pub penetration: f32,
}

impl Contact {
    /// Create a new contact
    pub fn new(point: Vec2, normal: Vec2, penetration: f32) -> Self {
        Self {
            point,
            normal,
            penetration,
        }
    }

    /// Check if this represents an actual collision (positive penetration)
    pub fn is_colliding(&self) -> bool {
        self.penetration > 0.0
    }
}

/// Test circle vs circle collision
///
/// The contact normal points from `a` toward `b`. Circles with coincident
/// centers have no defined normal and report no contact.
pub fn circle_vs_circle(a: &Circle, b: &Circle) -> Option<Contact> {
    let delta = b.center - a.center;
    let dist_sq = delta.length_squared();
    let min_dist = a.radius + b.radius;

    if dist_sq < min_dist * min_dist && dist_sq > 1e-8 {
        let dist = dist_sq.sqrt();
        let normal = delta * (1.0 / dist);
        let point = a.center + normal * a.radius;
        Some(Contact::new(point, normal, min_dist - dist))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_collides_with_everything() {
        let a = CollisionFilter::default();
        assert!(a.collides_with(&CollisionFilter::default()));
        assert!(a.collides_with(&CollisionFilter::net()));
    }

    #[test]
    fn test_net_points_collide_with_each_other() {
        assert!(CollisionFilter::net().collides_with(&CollisionFilter::net()));
        assert!(CollisionFilter::net().collides_with(&CollisionFilter::pendulum()));
    }

    #[test]
    fn test_anchor_collides_with_nothing() {
        let anchor = CollisionFilter::anchor();
        assert!(!anchor.collides_with(&CollisionFilter::net()));
        assert!(!anchor.collides_with(&CollisionFilter::default()));
        assert!(!anchor.collides_with(&anchor));
    }

    #[test]
    fn test_asymmetric_mask_blocks_collision() {
        let a = CollisionFilter::new(CollisionLayer::DEFAULT, CollisionLayer::NET);
        let b = CollisionFilter::new(CollisionLayer::NET, CollisionLayer::PENDULUM);
        assert!(!a.collides_with(&b));
        assert!(!b.collides_with(&a));
    }

    #[test]
    fn test_circles_overlapping() {
        let a = Circle::new(Vec2::ZERO, 10.0);
        let b = Circle::new(Vec2::new(15.0, 0.0), 10.0);
        let contact = circle_vs_circle(&a, &b).expect("circles overlap");
        assert!(contact.is_colliding());
        assert!((contact.penetration - 5.0).abs() < 1e-5);
        assert_eq!(contact.normal, Vec2::X);
        assert_eq!(contact.point, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_circles_separated() {
        let a = Circle::new(Vec2::ZERO, 10.0);
        let b = Circle::new(Vec2::new(0.0, 100.0), 10.0);
        assert!(circle_vs_circle(&a, &b).is_none());
    }

    #[test]
    fn test_circles_touching_is_not_a_contact() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        let b = Circle::new(Vec2::new(2.0, 0.0), 1.0);
        assert!(circle_vs_circle(&a, &b).is_none());
    }

    #[test]
    fn test_coincident_circles_no_contact() {
        let a = Circle::new(Vec2::new(3.0, 3.0), 1.0);
        assert!(circle_vs_circle(&a, &a).is_none());
    }
}
