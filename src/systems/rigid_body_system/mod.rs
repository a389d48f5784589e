//! RigidBodySystem - Small 3D rigid body world for the playground scene
//!
//! Current behavior:
//! - Dynamic, kinematic-position and fixed bodies with ball, cuboid and
//!   cylinder colliders.
//! - Contacts come from sampled surface points tested against signed
//!   distance functions (good enough for boxes, balls and cylinders).
//! - Sequential-impulse solver with restitution and Coulomb friction,
//!   followed by a small positional correction.
//! - Collision-begin events for bodies that subscribe to them.

mod collision;
mod solver;
mod system;

pub use system::{RigidBodySystem, StepReport, DEFAULT_GRAVITY, DEFAULT_SOLVER_ITERATIONS};
