//! Colors and sizes used when drawing the scene

use clothnet_math::Color;

/// Point colors selectable by index
pub const PALETTE: [Color; 6] = [
    Color::RED,
    Color::ORANGE,
    Color::YELLOW,
    Color::GREEN,
    Color::BLUE,
    Color::PURPLE,
];

/// Palette lookup that wraps past the end
pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Drawing parameters shared by every scene object
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawStyle {
    /// Canvas height, used to flip physics y into screen y
    pub screen_height: f32,
    /// Connector line thickness
    pub line_width: f32,
    /// Radius of the dot at a connector's far end
    pub link_dot_radius: f32,
    /// Radius of each trail dot
    pub trail_radius: f32,
    pub connector_color: Color,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            screen_height: 800.0,
            line_width: 1.0,
            link_dot_radius: 5.0,
            trail_radius: 5.0,
            connector_color: Color::BLACK,
        }
    }
}
