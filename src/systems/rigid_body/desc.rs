use glam::{Quat, Vec3};

use crate::domain::transform::Transform;

use super::shape::ColliderShape;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Moved by gravity, impulses and contacts
    Dynamic,
    /// Moved only by `set_next_kinematic_*`; pushes dynamic bodies aside
    KinematicPosition,
    /// Never moves
    Fixed,
}

/// Everything needed to spawn a body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyDesc {
    pub kind: BodyKind,
    pub shape: ColliderShape,
    pub position: Vec3,
    pub rotation: Quat,
    /// Explicit mass; `None` derives it from density and volume
    pub mass: Option<f32>,
    pub density: f32,
    pub restitution: f32,
    pub friction: f32,
    /// Report collision-begin events for this body
    pub collision_events: bool,
}

impl BodyDesc {
    pub fn new(kind: BodyKind, shape: ColliderShape) -> Self {
        Self {
            kind,
            shape,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            mass: None,
            density: 1.0,
            restitution: 0.0,
            friction: 0.5,
            collision_events: false,
        }
    }

    pub fn dynamic(shape: ColliderShape) -> Self {
        Self::new(BodyKind::Dynamic, shape)
    }

    pub fn kinematic(shape: ColliderShape) -> Self {
        Self::new(BodyKind::KinematicPosition, shape)
    }

    pub fn fixed(shape: ColliderShape) -> Self {
        Self::new(BodyKind::Fixed, shape)
    }

    pub fn position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation.normalize();
        self
    }

    pub fn pose(self, transform: &Transform) -> Self {
        self.position(transform.position).rotation(transform.rotation)
    }

    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution.clamp(0.0, 1.0);
        self
    }

    pub fn friction(mut self, friction: f32) -> Self {
        self.friction = friction.max(0.0);
        self
    }

    pub fn collision_events(mut self, enabled: bool) -> Self {
        self.collision_events = enabled;
        self
    }
}
