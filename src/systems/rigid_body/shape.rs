use std::f32::consts::PI;

use glam::Vec3;

/// Target spacing between samples along cuboid edges.
const EDGE_SPACING: f32 = 0.5;
/// Samples per cylinder rim.
const RIM_SAMPLES: usize = 12;
const EPSILON: f32 = 1.0e-6;

/// Collider attached to a rigid body, expressed in body space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColliderShape {
    Ball { radius: f32 },
    Cuboid { half_extents: Vec3 },
    /// Upright cylinder along the body's y axis
    Cylinder { half_height: f32, radius: f32 },
}

/// A point of a body that is tested against other shapes.
///
/// `radius` inflates the point into a sphere; corners use 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub local: Vec3,
    pub radius: f32,
}

impl SamplePoint {
    fn corner(local: Vec3) -> Self {
        Self { local, radius: 0.0 }
    }
}

impl ColliderShape {
    pub fn ball(radius: f32) -> Self {
        Self::Ball { radius }
    }

    pub fn cuboid(hx: f32, hy: f32, hz: f32) -> Self {
        Self::Cuboid {
            half_extents: Vec3::new(hx, hy, hz),
        }
    }

    pub fn cylinder(half_height: f32, radius: f32) -> Self {
        Self::Cylinder { half_height, radius }
    }

    pub fn volume(&self) -> f32 {
        match *self {
            Self::Ball { radius } => 4.0 / 3.0 * PI * radius.powi(3),
            Self::Cuboid { half_extents: h } => 8.0 * h.x * h.y * h.z,
            Self::Cylinder { half_height, radius } => PI * radius * radius * 2.0 * half_height,
        }
    }

    /// Principal moments of inertia about the body axes for a solid of `mass`.
    pub fn principal_inertia(&self, mass: f32) -> Vec3 {
        match *self {
            Self::Ball { radius } => Vec3::splat(0.4 * mass * radius * radius),
            Self::Cuboid { half_extents: h } => {
                let h2 = h * h;
                Vec3::new(h2.y + h2.z, h2.x + h2.z, h2.x + h2.y) * (mass / 3.0)
            }
            Self::Cylinder { half_height, radius } => {
                let side = mass * (3.0 * radius * radius + 4.0 * half_height * half_height) / 12.0;
                Vec3::new(side, 0.5 * mass * radius * radius, side)
            }
        }
    }

    /// Radius of the sphere around the body origin that contains the shape.
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Self::Ball { radius } => radius,
            Self::Cuboid { half_extents } => half_extents.length(),
            Self::Cylinder { half_height, radius } => (half_height * half_height + radius * radius).sqrt(),
        }
    }

    /// Signed distance from body-space point `p` to the surface, negative
    /// inside, together with the outward unit normal at the closest feature.
    pub fn signed_distance(&self, p: Vec3) -> (f32, Vec3) {
        match *self {
            Self::Ball { radius } => {
                let len = p.length();
                if len > EPSILON {
                    (len - radius, p / len)
                } else {
                    (-radius, Vec3::Y)
                }
            }
            Self::Cuboid { half_extents: h } => {
                let q = p.abs() - h;
                if q.max_element() > 0.0 {
                    let d = p - p.clamp(-h, h);
                    let dist = d.length();
                    (dist, d / dist)
                } else if q.x >= q.y && q.x >= q.z {
                    (q.x, Vec3::new(p.x.signum(), 0.0, 0.0))
                } else if q.y >= q.z {
                    (q.y, Vec3::new(0.0, p.y.signum(), 0.0))
                } else {
                    (q.z, Vec3::new(0.0, 0.0, p.z.signum()))
                }
            }
            Self::Cylinder { half_height, radius } => {
                let radial = Vec3::new(p.x, 0.0, p.z);
                let radial_len = radial.length();
                let radial_dir = if radial_len > EPSILON { radial / radial_len } else { Vec3::X };
                let dr = radial_len - radius;
                let dy = p.y.abs() - half_height;

                if dr > 0.0 || dy > 0.0 {
                    let closest = radial_dir * radial_len.min(radius)
                        + Vec3::Y * p.y.clamp(-half_height, half_height);
                    let d = p - closest;
                    let dist = d.length();
                    if dist > EPSILON {
                        (dist, d / dist)
                    } else {
                        (0.0, radial_dir)
                    }
                } else if dr > dy {
                    (dr, radial_dir)
                } else {
                    (dy, Vec3::new(0.0, p.y.signum(), 0.0))
                }
            }
        }
    }

    /// Points tested against other bodies during contact detection.
    ///
    /// Corners come first so that equally deep contacts prefer the widest
    /// support when a manifold is truncated.
    pub fn sample_points(&self) -> Vec<SamplePoint> {
        match *self {
            Self::Ball { radius } => vec![SamplePoint { local: Vec3::ZERO, radius }],
            Self::Cuboid { half_extents: h } => {
                let mut points = Vec::with_capacity(32);

                for i in 0..8 {
                    let sign = Vec3::new(
                        if i & 1 == 0 { -1.0 } else { 1.0 },
                        if i & 2 == 0 { -1.0 } else { 1.0 },
                        if i & 4 == 0 { -1.0 } else { 1.0 },
                    );
                    points.push(SamplePoint::corner(sign * h));
                }

                // Interior points along the 12 edges
                for axis in 0..3 {
                    let (a, b) = ((axis + 1) % 3, (axis + 2) % 3);
                    let len = 2.0 * h[axis];
                    let segments = (len / EDGE_SPACING).ceil().max(1.0) as usize;
                    for k in 1..segments {
                        let t = -h[axis] + len * k as f32 / segments as f32;
                        for corner in 0..4 {
                            let mut local = Vec3::ZERO;
                            local[axis] = t;
                            local[a] = if corner & 1 == 0 { -h[a] } else { h[a] };
                            local[b] = if corner & 2 == 0 { -h[b] } else { h[b] };
                            points.push(SamplePoint::corner(local));
                        }
                    }
                }

                for axis in 0..3 {
                    for sign in [-1.0, 1.0] {
                        let mut local = Vec3::ZERO;
                        local[axis] = sign * h[axis];
                        points.push(SamplePoint::corner(local));
                    }
                }

                points.push(SamplePoint {
                    local: Vec3::ZERO,
                    radius: h.min_element(),
                });
                points
            }
            Self::Cylinder { half_height, radius } => {
                let mut points = Vec::with_capacity(2 * RIM_SAMPLES + 3);
                for y in [-half_height, half_height] {
                    for k in 0..RIM_SAMPLES {
                        let angle = 2.0 * PI * k as f32 / RIM_SAMPLES as f32;
                        let (sin, cos) = angle.sin_cos();
                        points.push(SamplePoint::corner(Vec3::new(radius * cos, y, radius * sin)));
                    }
                    points.push(SamplePoint::corner(Vec3::new(0.0, y, 0.0)));
                }
                points.push(SamplePoint {
                    local: Vec3::ZERO,
                    radius: radius.min(half_height),
                });
                points
            }
        }
    }
}
