//! 2D physics simulation for clothnet
//!
//! This crate provides physics simulation for 2D point-mass bodies, including:
//! - Circle collision shapes and layer-based filtering
//! - Pin joints holding body pairs at a fixed distance
//! - Position-based stepping with gravity, damping, and bouncy contacts

pub mod body;
pub mod collision;
pub mod error;
pub mod joint;
pub mod material;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use body::{BodyKey, BodyType, RigidBody2D};
pub use collision::{circle_vs_circle, CollisionFilter, CollisionLayer, Contact};
pub use error::PhysicsError;
pub use joint::{JointKey, PinJoint};
pub use material::PhysicsMaterial;
pub use shapes::Circle;
pub use world::{PhysicsConfig, PhysicsWorld};
