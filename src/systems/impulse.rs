//! Impulse Interaction Controller - click-to-jump for one dynamic body

use glam::Vec3;
use rand::Rng;

use crate::domain::config::ImpulseParams;
use crate::domain::transform::ImpulseCommand;
use crate::engine::{BodyHandle, PhysicsEngine};

#[derive(Clone, Copy, Debug, Default)]
pub struct ImpulseController {
    params: ImpulseParams,
}

impl ImpulseController {
    pub fn new(params: ImpulseParams) -> Self {
        Self { params }
    }

    /// Impulses for a body of `mass`. The linear part scales with mass so
    /// every body gains the same upward velocity.
    pub fn command_for_mass<R: Rng + ?Sized>(&self, mass: f32, rng: &mut R) -> ImpulseCommand {
        let p = &self.params;
        let jitter = |rng: &mut R| (rng.random::<f32>() - 0.5) * 2.0 * p.torque_jitter;

        ImpulseCommand {
            linear: Vec3::new(0.0, p.jump_strength * mass, 0.0),
            angular_torque: Vec3::new(jitter(&mut *rng), p.torque_y, jitter(&mut *rng)),
        }
    }

    /// Read the current mass and apply one jump.
    ///
    /// A missing body (not spawned yet, or already removed) is a no-op.
    pub fn trigger<E, R>(&self, engine: &mut E, body: Option<BodyHandle>, rng: &mut R) -> Option<ImpulseCommand>
    where
        E: PhysicsEngine + ?Sized,
        R: Rng + ?Sized,
    {
        let Some(body) = body else {
            log::debug!("jump ignored: target body not created yet");
            return None;
        };
        let Some(mass) = engine.mass(body) else {
            log::debug!("jump ignored: body {} does not exist", body.0);
            return None;
        };

        let command = self.command_for_mass(mass, rng);
        engine.apply_impulse(body, command.linear);
        engine.apply_torque_impulse(body, command.angular_torque);
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::{stream, IMPULSE_STREAM};
    use crate::engine::testing::FakeEngine;

    #[test]
    fn mass_two_jumps_with_ten_units() {
        let cube = BodyHandle(1);
        let mut engine = FakeEngine::default().with_body(cube, 2.0);
        let mut rng = stream(5, IMPULSE_STREAM);

        let command = ImpulseController::default().trigger(&mut engine, Some(cube), &mut rng);
        let Some(command) = command else {
            panic!("jump should apply");
        };
        assert_eq!(command.linear, Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(command.angular_torque.y, 1.0);
        assert_eq!(engine.impulses, vec![(cube, command.linear)]);
        assert_eq!(engine.torques, vec![(cube, command.angular_torque)]);
    }

    #[test]
    fn impulse_scales_with_mass() {
        let controller = ImpulseController::default();
        let mut rng = stream(0, IMPULSE_STREAM);
        let light = controller.command_for_mass(1.0, &mut rng).linear.y;
        let heavy = controller.command_for_mass(10.0, &mut rng).linear.y;
        assert_eq!(heavy / light, 10.0);
    }

    #[test]
    fn torque_jitter_stays_in_range() {
        let controller = ImpulseController::default();
        let mut rng = stream(11, IMPULSE_STREAM);
        for _ in 0..1000 {
            let t = controller.command_for_mass(1.0, &mut rng).angular_torque;
            assert!((-0.5..0.5).contains(&t.x), "x jitter {}", t.x);
            assert!((-0.5..0.5).contains(&t.z), "z jitter {}", t.z);
            assert_eq!(t.y, 1.0);
        }
    }

    #[test]
    fn uninitialized_target_is_ignored() {
        let mut engine = FakeEngine::default();
        let mut rng = stream(0, IMPULSE_STREAM);
        let controller = ImpulseController::default();

        assert!(controller.trigger(&mut engine, None, &mut rng).is_none());
        assert!(controller.trigger(&mut engine, Some(BodyHandle(3)), &mut rng).is_none());
        assert!(engine.impulses.is_empty());
        assert!(engine.torques.is_empty());
    }

    #[test]
    fn repeated_triggers_compound() {
        let cube = BodyHandle(1);
        let mut engine = FakeEngine::default().with_body(cube, 1.0);
        let mut rng = stream(0, IMPULSE_STREAM);
        let controller = ImpulseController::default();

        for _ in 0..3 {
            controller.trigger(&mut engine, Some(cube), &mut rng);
        }
        let total: f32 = engine.impulses.iter().map(|(_, v)| v.y).sum();
        assert_eq!(total, 15.0);
    }
}
