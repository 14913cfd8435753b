//! Clothnet - 2D cloth net simulation
//!
//! A grid of point masses hanging from static anchors, joined by pin joints
//! and stepped in a 2D physics world. The binary renders it with wgpu and
//! takes keyboard controls for pause, frame rate, reset and trails.
//!
//! The library side holds everything that does not need a window, so it can
//! be driven from tests.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
