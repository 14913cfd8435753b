//! Errors returned by physics world operations

use crate::body::BodyKey;
use crate::joint::JointKey;

/// Errors that can occur when mutating the physics world
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// The body key is stale or was never issued by this world
    BodyNotFound(BodyKey),
    /// The joint key is stale or was never issued by this world
    JointNotFound(JointKey),
    /// A joint cannot connect a body to itself
    SameBody(BodyKey),
}

impl std::fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhysicsError::BodyNotFound(key) => write!(f, "Body not found: {:?}", key),
            PhysicsError::JointNotFound(key) => write!(f, "Joint not found: {:?}", key),
            PhysicsError::SameBody(key) => {
                write!(f, "Cannot pin body {:?} to itself", key)
            }
        }
    }
}

impl std::error::Error for PhysicsError {}
