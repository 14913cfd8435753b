//! Scene construction and drawing
//!
//! Everything that lives in the physics world (the cloth net and optional
//! pendulums) together with the state needed to draw it.

mod connector;
mod coords;
mod net;
mod pendulum;
mod point;
mod scene_builder;
mod style;
mod trail;

pub use connector::Connector;
pub use coords::{screen_to_world, world_to_screen};
pub use net::{Net, NetConfig, NetError};
pub use pendulum::{Pendulum, PendulumConfig};
pub use point::{PointMass, PointTemplate};
pub use scene_builder::{Scene, SceneBuilder};
pub use style::{palette_color, DrawStyle, PALETTE};
pub use trail::Trail;
