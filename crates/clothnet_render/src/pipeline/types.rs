//! GPU-compatible data types for the shape pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A vertex in screen pixels with color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in pixels (origin top-left, y down)
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex2D {
    /// Create a new 2D vertex
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for the shape pass
/// Layout: 16 bytes total (must match shape.wgsl ScreenUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ScreenUniforms {
    /// Surface size in pixels
    pub size: [f32; 2],
    pub _padding: [f32; 2],
}

impl ScreenUniforms {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: [width.max(1) as f32, height.max(1) as f32],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ScreenUniforms {
    fn default() -> Self {
        Self::new(800, 800)
    }
}
