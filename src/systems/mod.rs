//! Application systems
//!
//! Modular systems used by the event loop in main.rs.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{
    ActionOutcome, FrameClock, SimulationSystem, FPS_SAMPLE_FRAMES, MAX_SUBSTEP,
};
pub use window::{format_title, WindowError, WindowSystem};
