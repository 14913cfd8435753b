//! RGBA color type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// RGBA color, each component 0.0-1.0 (display values, not linear light)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Paused background (200, 200, 200)
    pub const GREY: Self = Self::new(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// (255, 255, 0)
    pub const ORANGE: Self = Self::new(1.0, 1.0, 0.0, 1.0);
    /// (235, 255, 0)
    pub const YELLOW: Self = Self::new(235.0 / 255.0, 1.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// (200, 0, 255)
    pub const PURPLE: Self = Self::new(200.0 / 255.0, 0.0, 1.0, 1.0);

    /// Create a new color from float components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 0-255 byte components
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Components as an array (for GPU vertex data)
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}
