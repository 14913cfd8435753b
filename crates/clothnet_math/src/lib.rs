//! 2D Mathematics Library
//!
//! Small vector and color types shared by the clothnet physics and
//! rendering crates.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components
//! - [`Color`] - RGBA color with the demo's named palette

mod color;
mod vec2;

pub use color::Color;
pub use vec2::Vec2;
