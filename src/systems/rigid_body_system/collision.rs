use glam::Vec3;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::rigid_body::RigidBody;

/// Surfaces closer than this still count as touching.
pub(super) const CONTACT_MARGIN: f32 = 0.02;
const MAX_MANIFOLD_POINTS: usize = 8;

#[derive(Clone, Copy, Debug)]
pub(super) struct ContactPoint {
    /// World-space point on the probing sample's surface
    pub point: Vec3,
    /// Unit normal pointing from body `a` towards body `b`
    pub normal: Vec3,
    /// Penetration depth (negative when apart but inside the margin)
    pub depth: f32,
}

/// Contacts between one pair of bodies, deepest first. `a < b` always.
#[derive(Clone, Debug)]
pub(super) struct Manifold {
    pub a: usize,
    pub b: usize,
    pub points: Vec<ContactPoint>,
    pub friction: f32,
    pub restitution: f32,
}

/// Find every touching pair. Output is ordered by `(a, b)` with or without
/// the parallel feature.
pub(super) fn detect_contacts(bodies: &[RigidBody]) -> Vec<Manifold> {
    let n = bodies.len();

    #[cfg(feature = "parallel")]
    {
        (0..n)
            .into_par_iter()
            .flat_map_iter(|a| (a + 1..n).filter_map(move |b| collide_pair(bodies, a, b)))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..n)
            .flat_map(|a| (a + 1..n).filter_map(move |b| collide_pair(bodies, a, b)))
            .collect()
    }
}

fn collide_pair(bodies: &[RigidBody], a: usize, b: usize) -> Option<Manifold> {
    let body_a = &bodies[a];
    let body_b = &bodies[b];

    // Fixed and kinematic bodies never respond to each other.
    if !body_a.is_dynamic() && !body_b.is_dynamic() {
        return None;
    }

    let reach = body_a.bounding_radius + body_b.bounding_radius + CONTACT_MARGIN;
    if body_a.pos.distance_squared(body_b.pos) > reach * reach {
        return None;
    }

    let mut points = Vec::new();
    probe(body_a, body_b, false, &mut points);
    probe(body_b, body_a, true, &mut points);
    if points.is_empty() {
        return None;
    }

    points.sort_by(|x, y| y.depth.total_cmp(&x.depth));
    points.truncate(MAX_MANIFOLD_POINTS);

    Some(Manifold {
        a,
        b,
        points,
        friction: (body_a.friction + body_b.friction) * 0.5,
        restitution: body_a.restitution.max(body_b.restitution),
    })
}

/// Test every sample of `prober` against the surface of `target`.
/// `flipped` is set when `prober` is body `b` of the pair.
fn probe(prober: &RigidBody, target: &RigidBody, flipped: bool, out: &mut Vec<ContactPoint>) {
    for sample in prober.samples.iter() {
        let world = prober.local_to_world(sample.local);
        let (distance, local_normal) = target.shape.signed_distance(target.world_to_local(world));
        let depth = sample.radius - distance;
        if depth <= -CONTACT_MARGIN {
            continue;
        }

        // The target's outward normal points back at the prober.
        let outward = target.rotation * local_normal;
        out.push(ContactPoint {
            point: world - outward * sample.radius,
            normal: if flipped { outward } else { -outward },
            depth,
        });
    }
}
