use glam::{Quat, Vec3};

use super::desc::{BodyDesc, BodyKind};
use super::shape::{ColliderShape, SamplePoint};

/// Lower bound on mass so a zero-volume collider cannot divide by zero.
const MIN_MASS: f32 = 1.0e-4;

/// Rigid Body - moves as a single unit
pub struct RigidBody {
    // === Physics State ===
    /// World position (center of mass)
    pub pos: Vec3,
    /// Orientation
    pub rotation: Quat,
    /// Linear velocity (units per second)
    pub velocity: Vec3,
    /// Angular velocity (radians per second, world axes)
    pub angular_vel: Vec3,
    /// Total mass (explicit or density * volume)
    pub mass: f32,
    /// Zero for kinematic and fixed bodies
    pub inv_mass: f32,
    /// Principal moments of inertia in body space
    pub inertia: Vec3,
    inv_inertia: Vec3,
    pub kind: BodyKind,
    /// Unique ID for this body
    pub id: u32,

    // === Shape Definition ===
    pub shape: ColliderShape,
    /// Body-space points tested during contact detection
    pub samples: Vec<SamplePoint>,
    pub bounding_radius: f32,

    // === Kinematic pose for the next step ===
    pub next_translation: Option<Vec3>,
    pub next_rotation: Option<Quat>,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    pub friction: f32,
    /// Report collision-begin events for this body
    pub collision_events: bool,
}

impl RigidBody {
    pub fn from_desc(desc: &BodyDesc, id: u32) -> Self {
        let mass = desc
            .mass
            .unwrap_or(desc.density * desc.shape.volume())
            .max(MIN_MASS);
        let inertia = desc.shape.principal_inertia(mass);
        let (inv_mass, inv_inertia) = match desc.kind {
            BodyKind::Dynamic => (1.0 / mass, inertia.max(Vec3::splat(MIN_MASS)).recip()),
            BodyKind::KinematicPosition | BodyKind::Fixed => (0.0, Vec3::ZERO),
        };

        Self {
            pos: desc.position,
            rotation: desc.rotation.normalize(),
            velocity: Vec3::ZERO,
            angular_vel: Vec3::ZERO,
            mass,
            inv_mass,
            inertia,
            inv_inertia,
            kind: desc.kind,
            id,
            shape: desc.shape,
            samples: desc.shape.sample_points(),
            bounding_radius: desc.shape.bounding_radius(),
            next_translation: None,
            next_rotation: None,
            restitution: desc.restitution,
            friction: desc.friction,
            collision_events: desc.collision_events,
        }
    }

    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.kind == BodyKind::Dynamic
    }

    /// Transform body-space coordinates to world coordinates
    #[inline]
    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.pos + self.rotation * local
    }

    #[inline]
    pub fn world_to_local(&self, world: Vec3) -> Vec3 {
        self.rotation.conjugate() * (world - self.pos)
    }

    /// World-space inverse inertia applied to `v`.
    #[inline]
    pub fn inv_inertia_mul(&self, v: Vec3) -> Vec3 {
        if !self.is_dynamic() {
            return Vec3::ZERO;
        }
        self.rotation * ((self.rotation.conjugate() * v) * self.inv_inertia)
    }

    /// Velocity of the material point currently at `point`.
    #[inline]
    pub fn velocity_at(&self, point: Vec3) -> Vec3 {
        self.velocity + self.angular_vel.cross(point - self.pos)
    }

    /// Apply impulse at center of mass
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse * self.inv_mass;
    }

    /// Apply an angular impulse (torque integrated over one instant)
    pub fn apply_torque_impulse(&mut self, torque: Vec3) {
        self.angular_vel += self.inv_inertia_mul(torque);
    }

    /// Apply impulse at a world point, producing spin when off-center
    pub fn apply_impulse_at(&mut self, impulse: Vec3, point: Vec3) {
        self.velocity += impulse * self.inv_mass;
        self.angular_vel += self.inv_inertia_mul((point - self.pos).cross(impulse));
    }
}
