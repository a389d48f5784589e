use std::collections::HashSet;

use glam::{Quat, Vec3};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::engine::{BodyHandle, CollisionEvent, PhysicsEngine};
use crate::rigid_body::{BodyDesc, BodyKind, RigidBody};

use super::collision::detect_contacts;
use super::solver::{correct_positions, solve_velocities};

/// Standard gravity of the playground (y up).
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.08, 0.0);
pub const DEFAULT_SOLVER_ITERATIONS: u32 = 8;
/// Clamp to keep cost bounded and avoid tunneling.
const MAX_LINEAR_SPEED: f32 = 40.0;
const MAX_ANGULAR_SPEED: f32 = 40.0;

/// Counters from one `step` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub manifolds: u32,
    pub contact_points: u32,
    pub collision_events: u32,
}

/// Manages all rigid bodies in the simulation
pub struct RigidBodySystem {
    /// Kept sorted by id so handles resolve with a binary search.
    bodies: Vec<RigidBody>,
    next_id: u32,
    gravity: Vec3,
    solver_iterations: u32,
    /// Pairs of body ids touching at the end of the last step, smaller id first.
    touching: HashSet<(u32, u32)>,
    events: Vec<CollisionEvent>,
}

impl RigidBodySystem {
    pub fn new(gravity: Vec3) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            gravity,
            solver_iterations: DEFAULT_SOLVER_ITERATIONS,
            touching: HashSet::new(),
            events: Vec::new(),
        }
    }

    pub fn with_solver_iterations(mut self, iterations: u32) -> Self {
        self.solver_iterations = iterations.max(1);
        self
    }

    /// Add a new rigid body.
    pub fn add_body(&mut self, desc: &BodyDesc) -> BodyHandle {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.bodies.push(RigidBody::from_desc(desc, id));
        BodyHandle(id)
    }

    /// Remove a rigid body. Returns `false` for unknown handles.
    pub fn remove_body(&mut self, handle: BodyHandle) -> bool {
        let Some(idx) = self.index_of(handle) else {
            return false;
        };
        self.bodies.remove(idx);
        self.touching.retain(|&(a, b)| a != handle.0 && b != handle.0);
        self.events.retain(|e| e.body != handle && e.other != handle);
        true
    }

    /// Remove all bodies.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.touching.clear();
        self.events.clear();
        self.next_id = 1;
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.index_of(handle).map(|idx| &self.bodies[idx])
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        let idx = self.index_of(handle)?;
        Some(&mut self.bodies[idx])
    }

    /// Bodies in spawn order.
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.bodies.binary_search_by_key(&handle.0, |b| b.id).ok()
    }

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    /// Advance the world by `dt` seconds.
    pub fn step(&mut self, dt: f32) -> StepReport {
        if !dt.is_finite() || dt <= 0.0 {
            return StepReport::default();
        }

        self.prepare_kinematic(dt);
        self.integrate_velocities(dt);

        let manifolds = detect_contacts(&self.bodies);
        solve_velocities(&mut self.bodies, &manifolds, self.solver_iterations);
        correct_positions(&mut self.bodies, &manifolds);

        self.integrate_positions(dt);

        let mut report = StepReport {
            manifolds: manifolds.len() as u32,
            contact_points: manifolds.iter().map(|m| m.points.len() as u32).sum(),
            collision_events: 0,
        };

        let now: HashSet<(u32, u32)> = manifolds
            .iter()
            .map(|m| (self.bodies[m.a].id, self.bodies[m.b].id))
            .collect();
        let before = self.events.len();
        for m in manifolds.iter() {
            let (a, b) = (&self.bodies[m.a], &self.bodies[m.b]);
            if self.touching.contains(&(a.id, b.id)) {
                continue;
            }
            if a.collision_events {
                self.events.push(CollisionEvent {
                    body: BodyHandle(a.id),
                    other: BodyHandle(b.id),
                });
            }
            if b.collision_events {
                self.events.push(CollisionEvent {
                    body: BodyHandle(b.id),
                    other: BodyHandle(a.id),
                });
            }
        }
        report.collision_events = (self.events.len() - before) as u32;
        self.touching = now;
        report
    }

    /// Turn pending kinematic targets into velocities so contacts see the motion.
    fn prepare_kinematic(&mut self, dt: f32) {
        for body in self.bodies.iter_mut() {
            if body.kind != BodyKind::KinematicPosition {
                continue;
            }
            body.velocity = match body.next_translation {
                Some(target) => (target - body.pos) / dt,
                None => Vec3::ZERO,
            };
            body.angular_vel = match body.next_rotation {
                Some(target) => {
                    let mut dq = target * body.rotation.conjugate();
                    if dq.w < 0.0 {
                        dq = -dq;
                    }
                    dq.to_scaled_axis() / dt
                }
                None => Vec3::ZERO,
            };
        }
    }

    fn integrate_velocities(&mut self, dt: f32) {
        let gravity = self.gravity;
        let apply = |body: &mut RigidBody| {
            if body.is_dynamic() {
                body.velocity += gravity * dt;
            }
        };

        #[cfg(feature = "parallel")]
        self.bodies.par_iter_mut().for_each(apply);

        #[cfg(not(feature = "parallel"))]
        self.bodies.iter_mut().for_each(apply);
    }

    fn integrate_positions(&mut self, dt: f32) {
        for body in self.bodies.iter_mut() {
            match body.kind {
                BodyKind::Fixed => {}
                BodyKind::Dynamic => {
                    body.velocity = body.velocity.clamp_length_max(MAX_LINEAR_SPEED);
                    body.angular_vel = body.angular_vel.clamp_length_max(MAX_ANGULAR_SPEED);
                    body.pos += body.velocity * dt;
                    body.rotation = (Quat::from_scaled_axis(body.angular_vel * dt) * body.rotation).normalize();
                }
                BodyKind::KinematicPosition => {
                    // Targets are consumed by the step that reaches them.
                    if let Some(target) = body.next_translation.take() {
                        body.pos = target;
                    }
                    if let Some(target) = body.next_rotation.take() {
                        body.rotation = target.normalize();
                    }
                }
            }
        }
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY)
    }
}

impl PhysicsEngine for RigidBodySystem {
    fn spawn(&mut self, desc: &BodyDesc) -> BodyHandle {
        self.add_body(desc)
    }

    fn mass(&self, body: BodyHandle) -> Option<f32> {
        self.body(body).map(|b| b.mass)
    }

    fn apply_impulse(&mut self, body: BodyHandle, impulse: Vec3) -> bool {
        match self.body_mut(body) {
            Some(b) => {
                b.apply_impulse(impulse);
                true
            }
            None => false,
        }
    }

    fn apply_torque_impulse(&mut self, body: BodyHandle, torque: Vec3) -> bool {
        match self.body_mut(body) {
            Some(b) => {
                b.apply_torque_impulse(torque);
                true
            }
            None => false,
        }
    }

    fn set_next_kinematic_rotation(&mut self, body: BodyHandle, rotation: Quat) -> bool {
        match self.body_mut(body) {
            Some(b) if b.kind == BodyKind::KinematicPosition => {
                b.next_rotation = Some(rotation.normalize());
                true
            }
            _ => false,
        }
    }

    fn set_next_kinematic_translation(&mut self, body: BodyHandle, translation: Vec3) -> bool {
        match self.body_mut(body) {
            Some(b) if b.kind == BodyKind::KinematicPosition => {
                b.next_translation = Some(translation);
                true
            }
            _ => false,
        }
    }

    fn subscribe_collisions(&mut self, body: BodyHandle) -> bool {
        match self.body_mut(body) {
            Some(b) => {
                b.collision_events = true;
                true
            }
            None => false,
        }
    }

    fn drain_collision_events(&mut self) -> Vec<CollisionEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::ColliderShape;

    fn world_with_floor() -> (RigidBodySystem, BodyHandle) {
        let mut world = RigidBodySystem::default();
        let floor = world.add_body(
            &BodyDesc::fixed(ColliderShape::cuboid(5.0, 0.25, 5.0))
                .position(Vec3::new(0.0, -1.25, 0.0))
                .friction(0.7),
        );
        (world, floor)
    }

    #[test]
    fn handles_are_sequential_and_resolvable() {
        let (mut world, floor) = world_with_floor();
        let ball = world.add_body(&BodyDesc::dynamic(ColliderShape::ball(1.0)));
        assert_eq!(floor, BodyHandle(1));
        assert_eq!(ball, BodyHandle(2));
        assert!(world.remove_body(floor));
        assert_eq!(world.index_of(ball), Some(0));
        assert!(!world.remove_body(floor));
        assert_eq!(world.mass(floor), None);
    }

    #[test]
    fn free_fall_follows_gravity() {
        let mut world = RigidBodySystem::default();
        let ball = world.add_body(&BodyDesc::dynamic(ColliderShape::ball(0.5)).position(Vec3::Y * 10.0));
        world.step(0.5);
        let body = world.body(ball).map(|b| b.velocity.y);
        assert_eq!(body, Some(-9.08 * 0.5));
    }

    #[test]
    fn cube_comes_to_rest_on_floor() {
        let (mut world, _) = world_with_floor();
        let cube = world.add_body(&BodyDesc::dynamic(ColliderShape::cuboid(0.5, 0.5, 0.5)).position(Vec3::new(0.0, 1.0, 0.0)));
        for _ in 0..240 {
            world.step(1.0 / 60.0);
        }
        let Some(body) = world.body(cube) else {
            panic!("cube vanished");
        };
        // Floor top is at y = -1.0.
        assert!((body.pos.y + 0.5).abs() < 0.05, "cube at {}", body.pos.y);
        assert!(body.velocity.length() < 0.2);
    }

    #[test]
    fn collision_begin_is_reported_once_per_contact() {
        let (mut world, floor) = world_with_floor();
        let cube = world.add_body(
            &BodyDesc::dynamic(ColliderShape::cuboid(0.5, 0.5, 0.5))
                .position(Vec3::new(0.0, 0.0, 0.0))
                .collision_events(true),
        );

        let mut events = Vec::new();
        for _ in 0..120 {
            world.step(1.0 / 60.0);
            events.extend(world.drain_collision_events());
        }
        assert_eq!(events.first(), Some(&CollisionEvent { body: cube, other: floor }));
        assert!(events.len() <= 3, "too many begin events: {}", events.len());
    }

    #[test]
    fn unsubscribed_bodies_stay_silent() {
        let (mut world, _) = world_with_floor();
        world.add_body(&BodyDesc::dynamic(ColliderShape::ball(0.5)).position(Vec3::new(0.0, -0.51, 0.0)));
        let report = world.step(1.0 / 60.0);
        assert!(report.manifolds >= 1);
        assert_eq!(report.collision_events, 0);
        assert!(world.drain_collision_events().is_empty());
    }

    #[test]
    fn kinematic_targets_are_reached_exactly() {
        let mut world = RigidBodySystem::default();
        let bar = world.add_body(&BodyDesc::kinematic(ColliderShape::cuboid(0.2, 0.2, 1.5)));
        let rot = Quat::from_rotation_y(0.3);
        assert!(world.set_next_kinematic_translation(bar, Vec3::new(1.0, 0.0, 0.0)));
        assert!(world.set_next_kinematic_rotation(bar, rot));
        world.step(1.0 / 60.0);

        let Some(body) = world.body(bar) else {
            panic!("bar vanished");
        };
        assert_eq!(body.pos, Vec3::new(1.0, 0.0, 0.0));
        assert!(body.rotation.abs_diff_eq(rot, 1e-6));
        assert!((body.velocity.x - 60.0).abs() < 1e-3);
        assert!(body.next_translation.is_none());
    }

    #[test]
    fn kinematic_bar_pushes_cube_without_leaving_its_path() {
        let mut world = RigidBodySystem::new(Vec3::ZERO);
        let bar = world.add_body(&BodyDesc::kinematic(ColliderShape::cuboid(0.2, 0.2, 1.5)).position(Vec3::new(0.5, 0.0, 0.0)));
        let cube = world.add_body(
            &BodyDesc::dynamic(ColliderShape::cuboid(0.5, 0.5, 0.5))
                .position(Vec3::new(1.5, 0.0, 0.0))
                .mass(500.0)
                .collision_events(true),
        );

        let mut events = Vec::new();
        for i in 1..=60 {
            let target = Vec3::new(0.5 + 0.03 * i as f32, 0.0, 0.0);
            assert!(world.set_next_kinematic_translation(bar, target));
            world.step(1.0 / 60.0);
            events.extend(world.drain_collision_events());

            assert_eq!(world.body(bar).map(|b| b.pos), Some(target), "bar left its path at step {i}");
            assert_eq!(world.body(bar).map(|b| b.rotation), Some(Quat::IDENTITY));
        }

        assert_eq!(events, vec![CollisionEvent { body: cube, other: bar }]);
        let Some(pushed) = world.body(cube) else {
            panic!("cube vanished");
        };
        assert!(pushed.pos.x > 1.5, "cube was not pushed: {}", pushed.pos.x);
    }

    #[test]
    fn clear_resets_bodies_and_handles() {
        let (mut world, floor) = world_with_floor();
        world.add_body(&BodyDesc::dynamic(ColliderShape::ball(0.5)).position(Vec3::new(0.0, -0.6, 0.0)).collision_events(true));
        world.step(1.0 / 60.0);

        world.clear();
        assert_eq!(world.body_count(), 0);
        assert!(world.drain_collision_events().is_empty());
        assert_eq!(world.gravity(), DEFAULT_GRAVITY);

        let again = world.add_body(&BodyDesc::fixed(ColliderShape::ball(1.0)));
        assert_eq!(again, floor);
    }

    #[test]
    fn kinematic_setters_reject_other_kinds() {
        let (mut world, floor) = world_with_floor();
        assert!(!world.set_next_kinematic_translation(floor, Vec3::ONE));
        assert!(!world.set_next_kinematic_rotation(BodyHandle(99), Quat::IDENTITY));
    }

    #[test]
    fn impulses_only_move_dynamic_bodies() {
        let (mut world, floor) = world_with_floor();
        let ball = world.add_body(&BodyDesc::dynamic(ColliderShape::ball(1.0)).mass(2.0));
        assert!(world.apply_impulse(ball, Vec3::Y * 10.0));
        assert!(world.apply_impulse(floor, Vec3::Y * 10.0));
        assert!(!world.apply_impulse(BodyHandle(42), Vec3::Y));
        assert_eq!(world.body(ball).map(|b| b.velocity), Some(Vec3::Y * 5.0));
        assert_eq!(world.body(floor).map(|b| b.velocity), Some(Vec3::ZERO));
    }
}
