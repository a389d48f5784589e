//! Plain data passed between the scene drivers and the physics engine.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position and orientation of a body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation: rotation.normalize(),
        }
    }

    /// Build from XYZ Euler angles in radians (x applied first).
    pub fn from_euler(position: Vec3, euler: Vec3) -> Self {
        Self::new(position, Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One entry of the instanced body pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDescriptor {
    pub id: String,
    pub initial_transform: Transform,
}

/// Pose a kinematic body must reach on the next physics step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicTarget {
    pub rotation: Quat,
    pub translation: Vec3,
}

/// Impulses for a single jump trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpulseCommand {
    pub linear: Vec3,
    pub angular_torque: Vec3,
}
