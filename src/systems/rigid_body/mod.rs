//! RigidBody - A solid body that moves as a unit
//!
//! The body stores its collider in body space and transforms it to world
//! space using position and rotation.

mod body;
mod desc;
mod shape;

pub use body::RigidBody;
pub use desc::{BodyDesc, BodyKind};
pub use shape::{ColliderShape, SamplePoint};
