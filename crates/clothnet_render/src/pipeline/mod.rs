//! Rendering pipeline components
//!
//! This module contains the single render pipeline used for 2D shapes.

pub mod shape_pipeline;
pub mod types;

pub use shape_pipeline::ShapePipeline;
pub use types::{ScreenUniforms, Vertex2D};
