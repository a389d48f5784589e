use glam::Vec3;

use crate::rigid_body::RigidBody;

use super::collision::Manifold;

/// Approach speeds below this do not bounce (keeps resting contacts quiet).
const RESTITUTION_THRESHOLD: f32 = 1.0;
/// Penetration left alone by position correction.
const PENETRATION_SLOP: f32 = 0.005;
/// Share of the remaining penetration removed per step.
const CORRECTION_PERCENT: f32 = 0.4;
const EPSILON: f32 = 1.0e-6;

/// Sequential impulses over all manifolds.
///
/// Impulses accumulate per contact point and the running total is clamped,
/// so later iterations can take back what earlier ones overshot.
pub(super) fn solve_velocities(bodies: &mut [RigidBody], manifolds: &[Manifold], iterations: u32) {
    // Bounce targets come from the approach speed before any iteration runs.
    let bounce: Vec<Vec<f32>> = manifolds
        .iter()
        .map(|m| {
            let (a, b) = (&bodies[m.a], &bodies[m.b]);
            m.points
                .iter()
                .map(|p| {
                    let vn = (b.velocity_at(p.point) - a.velocity_at(p.point)).dot(p.normal);
                    if vn < -RESTITUTION_THRESHOLD {
                        -m.restitution * vn
                    } else {
                        0.0
                    }
                })
                .collect()
        })
        .collect();
    let mut accumulated: Vec<Vec<Accumulated>> = manifolds
        .iter()
        .map(|m| vec![Accumulated::default(); m.points.len()])
        .collect();

    for _ in 0..iterations.max(1) {
        for ((m, targets), totals) in manifolds.iter().zip(bounce.iter()).zip(accumulated.iter_mut()) {
            let (a, b) = pair_mut(bodies, m.a, m.b);
            for ((p, &target), total) in m.points.iter().zip(targets.iter()).zip(totals.iter_mut()) {
                if p.depth < 0.0 {
                    continue;
                }
                resolve_normal(a, b, p.point, p.normal, target, &mut total.normal);
                resolve_friction(a, b, p.point, p.normal, total.normal * m.friction, &mut total.tangent);
            }
        }
    }
}

#[derive(Clone, Copy, Default)]
struct Accumulated {
    normal: f32,
    /// Friction impulse applied to body `b` (body `a` receives the opposite)
    tangent: Vec3,
}

/// Push overlapping bodies apart along the deepest contact normal.
pub(super) fn correct_positions(bodies: &mut [RigidBody], manifolds: &[Manifold]) {
    for m in manifolds {
        let Some(deepest) = m.points.first() else {
            continue;
        };
        let excess = deepest.depth - PENETRATION_SLOP;
        if excess <= 0.0 {
            continue;
        }

        let (a, b) = pair_mut(bodies, m.a, m.b);
        let total = a.inv_mass + b.inv_mass;
        if total <= 0.0 {
            continue;
        }
        let shift = deepest.normal * (excess * CORRECTION_PERCENT / total);
        a.pos -= shift * a.inv_mass;
        b.pos += shift * b.inv_mass;
    }
}

fn pair_mut(bodies: &mut [RigidBody], a: usize, b: usize) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert!(a < b);
    let (head, tail) = bodies.split_at_mut(b);
    (&mut head[a], &mut tail[0])
}

/// Inverse effective mass of the pair along `dir` at `point`.
fn inverse_mass_along(a: &RigidBody, b: &RigidBody, point: Vec3, dir: Vec3) -> f32 {
    let ra = point - a.pos;
    let rb = point - b.pos;
    let angular_a = a.inv_inertia_mul(ra.cross(dir)).cross(ra);
    let angular_b = b.inv_inertia_mul(rb.cross(dir)).cross(rb);
    a.inv_mass + b.inv_mass + dir.dot(angular_a + angular_b)
}

fn resolve_normal(a: &mut RigidBody, b: &mut RigidBody, point: Vec3, normal: Vec3, target: f32, total: &mut f32) {
    let k = inverse_mass_along(a, b, point, normal);
    if k <= EPSILON {
        return;
    }
    let vn = (b.velocity_at(point) - a.velocity_at(point)).dot(normal);

    // Contacts push, never pull.
    let next = (*total + (target - vn) / k).max(0.0);
    let j = next - *total;
    *total = next;
    if j == 0.0 {
        return;
    }
    a.apply_impulse_at(-normal * j, point);
    b.apply_impulse_at(normal * j, point);
}

/// Coulomb friction: the accumulated tangent impulse stays within `max_impulse`.
fn resolve_friction(
    a: &mut RigidBody,
    b: &mut RigidBody,
    point: Vec3,
    normal: Vec3,
    max_impulse: f32,
    total: &mut Vec3,
) {
    let rel = b.velocity_at(point) - a.velocity_at(point);
    let sliding = rel - normal * rel.dot(normal);
    let speed = sliding.length();

    let mut next = *total;
    if speed > EPSILON {
        let tangent = sliding / speed;
        let k = inverse_mass_along(a, b, point, tangent);
        if k > EPSILON {
            next -= tangent * (speed / k);
        }
    }
    next = next.clamp_length_max(max_impulse.max(0.0));

    let p = next - *total;
    *total = next;
    if p == Vec3::ZERO {
        return;
    }
    a.apply_impulse_at(-p, point);
    b.apply_impulse_at(p, point);
}
