//! 2D shape rendering for clothnet
//!
//! This crate provides the wgpu-based pipeline that draws the cloth net:
//! filled circles and thick line segments, tessellated on the CPU and
//! drawn in a single pass.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`draw_list::DrawList`] - Per-frame list of shapes in screen pixels
//! - [`pipeline::ShapePipeline`] - Render pipeline that draws a `DrawList`

pub mod context;
pub mod draw_list;
pub mod pipeline;

pub use clothnet_math::{Color, Vec2};
pub use context::{ContextError, RenderContext};
pub use draw_list::{DrawList, CIRCLE_SEGMENTS};
pub use pipeline::{ScreenUniforms, ShapePipeline, Vertex2D};
