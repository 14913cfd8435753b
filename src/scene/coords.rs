//! Conversion between physics space and screen space
//!
//! Physics space is y-up with the origin at the bottom-left of the canvas;
//! screen space is y-down with the origin at the top-left.

use clothnet_math::Vec2;

/// Convert a physics position to whole screen pixels
///
/// Both components are truncated toward zero.
pub fn world_to_screen(point: Vec2, screen_height: f32) -> Vec2 {
    Vec2::new(point.x.trunc(), (screen_height - point.y).trunc())
}

/// Convert a screen position back to physics space
pub fn screen_to_world(point: Vec2, screen_height: f32) -> Vec2 {
    Vec2::new(point.x, screen_height - point.y)
}
