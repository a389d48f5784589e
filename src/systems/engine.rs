//! The narrow interface between the scene drivers and a physics engine.
//!
//! Drivers never touch simulated state directly: they read mass, write
//! impulses and kinematic targets, and receive collision-begin events. Any
//! engine that offers these capabilities can run the playground.

use glam::{Quat, Vec3};

use crate::domain::transform::BodyDescriptor;
use crate::rigid_body::BodyDesc;

/// Opaque reference to a body owned by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub u32);

/// `body` started touching `other` during the last step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionEvent {
    pub body: BodyHandle,
    pub other: BodyHandle,
}

/// Capabilities the scene needs from an engine.
///
/// Writes addressed to an unknown body return `false` and change nothing.
pub trait PhysicsEngine {
    fn spawn(&mut self, desc: &BodyDesc) -> BodyHandle;

    /// Instancing intake: one independent body per descriptor, in order.
    fn spawn_instances(&mut self, descriptors: &[BodyDescriptor], template: &BodyDesc) -> Vec<BodyHandle> {
        descriptors
            .iter()
            .map(|d| self.spawn(&template.clone().pose(&d.initial_transform)))
            .collect()
    }

    /// Current mass, or `None` when the body does not exist.
    fn mass(&self, body: BodyHandle) -> Option<f32>;

    fn apply_impulse(&mut self, body: BodyHandle, impulse: Vec3) -> bool;

    fn apply_torque_impulse(&mut self, body: BodyHandle, torque: Vec3) -> bool;

    fn set_next_kinematic_rotation(&mut self, body: BodyHandle, rotation: Quat) -> bool;

    fn set_next_kinematic_translation(&mut self, body: BodyHandle, translation: Vec3) -> bool;

    /// Start reporting collision-begin events for `body`.
    fn subscribe_collisions(&mut self, body: BodyHandle) -> bool;

    /// Events produced since the last call, oldest first.
    fn drain_collision_events(&mut self) -> Vec<CollisionEvent>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording engine for driver tests.

    use std::collections::{HashMap, HashSet};

    use super::*;

    #[derive(Default)]
    pub(crate) struct FakeEngine {
        pub masses: HashMap<BodyHandle, f32>,
        pub impulses: Vec<(BodyHandle, Vec3)>,
        pub torques: Vec<(BodyHandle, Vec3)>,
        pub rotations: Vec<(BodyHandle, Quat)>,
        pub translations: Vec<(BodyHandle, Vec3)>,
        pub subscribed: HashSet<BodyHandle>,
        pub pending: Vec<CollisionEvent>,
        pub spawned: Vec<BodyDesc>,
    }

    impl FakeEngine {
        pub fn with_body(mut self, body: BodyHandle, mass: f32) -> Self {
            self.masses.insert(body, mass);
            self
        }
    }

    impl PhysicsEngine for FakeEngine {
        fn spawn(&mut self, desc: &BodyDesc) -> BodyHandle {
            let handle = BodyHandle(self.spawned.len() as u32 + 1000);
            self.spawned.push(desc.clone());
            self.masses.insert(handle, desc.mass.unwrap_or(1.0));
            handle
        }

        fn mass(&self, body: BodyHandle) -> Option<f32> {
            self.masses.get(&body).copied()
        }

        fn apply_impulse(&mut self, body: BodyHandle, impulse: Vec3) -> bool {
            self.impulses.push((body, impulse));
            self.masses.contains_key(&body)
        }

        fn apply_torque_impulse(&mut self, body: BodyHandle, torque: Vec3) -> bool {
            self.torques.push((body, torque));
            self.masses.contains_key(&body)
        }

        fn set_next_kinematic_rotation(&mut self, body: BodyHandle, rotation: Quat) -> bool {
            self.rotations.push((body, rotation));
            true
        }

        fn set_next_kinematic_translation(&mut self, body: BodyHandle, translation: Vec3) -> bool {
            self.translations.push((body, translation));
            true
        }

        fn subscribe_collisions(&mut self, body: BodyHandle) -> bool {
            self.subscribed.insert(body)
        }

        fn drain_collision_events(&mut self) -> Vec<CollisionEvent> {
            std::mem::take(&mut self.pending)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeEngine;
    use super::*;
    use crate::domain::transform::Transform;
    use crate::rigid_body::ColliderShape;

    #[test]
    fn instancing_keeps_descriptor_order_and_pose() {
        let descriptors: Vec<BodyDescriptor> = (0..3)
            .map(|i| BodyDescriptor {
                id: format!("instance_{i}"),
                initial_transform: Transform::new(Vec3::new(i as f32, 6.0, 0.0), Quat::IDENTITY),
            })
            .collect();
        let template = BodyDesc::dynamic(ColliderShape::cuboid(0.5, 0.5, 0.5));

        let mut engine = FakeEngine::default();
        let handles = engine.spawn_instances(&descriptors, &template);

        assert_eq!(handles.len(), 3);
        for (i, desc) in engine.spawned.iter().enumerate() {
            assert_eq!(desc.position.x, i as f32);
            assert_eq!(desc.shape, template.shape);
        }
    }
}
