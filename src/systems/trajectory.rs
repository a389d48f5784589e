//! Trajectory Generator - kinematic pose of the twister bar as a function of time

use glam::{EulerRot, Quat, Vec3};

use crate::domain::config::TrajectoryParams;
use crate::domain::transform::KinematicTarget;
use crate::engine::{BodyHandle, PhysicsEngine};

/// Stateless: the same elapsed time always yields the same target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrajectoryGenerator {
    params: TrajectoryParams,
}

impl TrajectoryGenerator {
    pub fn new(params: TrajectoryParams) -> Self {
        Self { params }
    }

    /// Pose for the next physics step at `elapsed` seconds.
    pub fn target_at(&self, elapsed: f64) -> KinematicTarget {
        let p = &self.params;
        // Angles stay in f64 until the end so long sessions keep their precision.
        let yaw = (elapsed * p.rotation_rate as f64) as f32;
        let orbit = elapsed * p.orbit_rate as f64;
        let radius = p.radius as f64;

        KinematicTarget {
            rotation: Quat::from_euler(EulerRot::XYZ, 0.0, yaw, 0.0).normalize(),
            translation: Vec3::new((radius * orbit.sin()) as f32, p.height, (radius * orbit.cos()) as f32),
        }
    }

    /// Write this frame's target into the engine.
    ///
    /// Returns `None` (and writes nothing) until the driven body exists.
    pub fn drive<E: PhysicsEngine + ?Sized>(
        &self,
        engine: &mut E,
        body: Option<BodyHandle>,
        elapsed: f64,
    ) -> Option<KinematicTarget> {
        let body = body?;
        let target = self.target_at(elapsed);
        let accepted = engine.set_next_kinematic_rotation(body, target.rotation)
            & engine.set_next_kinematic_translation(body, target.translation);
        if !accepted {
            log::debug!("trajectory target for body {} was not accepted", body.0);
            return None;
        }
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::engine::testing::FakeEngine;

    fn generator() -> TrajectoryGenerator {
        TrajectoryGenerator::new(TrajectoryParams::default())
    }

    #[test]
    fn starts_at_positive_z_without_rotation() {
        let target = generator().target_at(0.0);
        assert!(target.translation.abs_diff_eq(Vec3::new(0.0, -0.8, 2.0), 1e-6));
        assert!(target.rotation.abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn half_orbit_reaches_negative_z() {
        let target = generator().target_at(PI / 0.5);
        assert!(target.translation.abs_diff_eq(Vec3::new(0.0, -0.8, -2.0), 1e-5));
    }

    #[test]
    fn translation_stays_on_the_circle() {
        let g = generator();
        for i in 0..500 {
            let t = i as f64 * 0.37;
            let p = g.target_at(t).translation;
            assert!((p.x * p.x + p.z * p.z - 4.0).abs() < 1e-4, "off circle at t={t}");
            assert_eq!(p.y, -0.8);
        }
    }

    #[test]
    fn yaw_advances_with_time() {
        let g = generator();
        let dt = 0.01;
        for i in 0..200 {
            let t = i as f64 * dt;
            let a = g.target_at(t).rotation;
            let b = g.target_at(t + dt).rotation;
            // Relative rotation from a to b is a positive turn about +Y.
            let (axis, angle) = (b * a.conjugate()).to_axis_angle();
            assert!(angle > 0.0);
            assert!(axis.y * angle.signum() > 0.99, "unexpected axis {axis}");
        }
    }

    #[test]
    fn rotation_is_normalized() {
        let g = generator();
        for i in 0..50 {
            assert!(g.target_at(i as f64 * 1.7).rotation.is_normalized());
        }
    }

    #[test]
    fn drive_writes_both_targets() {
        let mut engine = FakeEngine::default();
        let body = BodyHandle(7);
        let target = generator().drive(&mut engine, Some(body), 1.0);

        assert!(target.is_some());
        assert_eq!(engine.rotations.len(), 1);
        assert_eq!(engine.translations, vec![(body, generator().target_at(1.0).translation)]);
    }

    #[test]
    fn drive_without_body_is_a_no_op() {
        let mut engine = FakeEngine::default();
        assert_eq!(generator().drive(&mut engine, None, 1.0), None);
        assert!(engine.rotations.is_empty());
        assert!(engine.translations.is_empty());
    }
}
