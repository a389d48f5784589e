//! Body Pool Initializer - randomized spawn transforms for the instanced cubes

use glam::Vec3;
use rand::Rng;

use crate::domain::config::PoolParams;
use crate::domain::transform::{BodyDescriptor, Transform};

#[derive(Clone, Copy, Debug, Default)]
pub struct BodyPool {
    params: PoolParams,
}

impl BodyPool {
    pub fn new(params: PoolParams) -> Self {
        Self { params }
    }

    /// Number of descriptors `initialize` produces.
    pub fn len(&self) -> usize {
        self.params.count.max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn id(index: usize) -> String {
        format!("instance_{index}")
    }

    /// Draw a fresh set of spawn transforms.
    ///
    /// Ids and count never depend on `rng`; only the transforms do. Each
    /// rotation axis is an independent draw in `[0, 1)` radians, which is
    /// not a uniform orientation distribution and does not need to be.
    pub fn initialize<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<BodyDescriptor> {
        let p = &self.params;
        let span = p.half_width * 2.0;

        (0..self.len())
            .map(|i| {
                let position = Vec3::new(
                    (rng.random::<f32>() - 0.5) * span,
                    p.base_height + i as f32 * p.stagger,
                    (rng.random::<f32>() - 0.5) * span,
                );
                let euler = Vec3::new(rng.random(), rng.random(), rng.random());
                BodyDescriptor {
                    id: Self::id(i),
                    initial_transform: Transform::from_euler(position, euler),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::core::random::{stream, POOL_STREAM};

    fn pool(count: i32) -> BodyPool {
        BodyPool::new(PoolParams {
            count,
            ..PoolParams::default()
        })
    }

    #[test]
    fn reference_pool_has_unique_sequential_ids() {
        let descriptors = pool(100).initialize(&mut stream(1, POOL_STREAM));
        assert_eq!(descriptors.len(), 100);

        let ids: HashSet<&str> = descriptors.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), 100);
        assert_eq!(descriptors[0].id, "instance_0");
        assert_eq!(descriptors[99].id, "instance_99");
    }

    #[test]
    fn positions_stay_inside_the_spawn_square() {
        for seed in 0..20 {
            for d in pool(100).initialize(&mut stream(seed, POOL_STREAM)) {
                let p = d.initial_transform.position;
                assert!(p.x.abs() <= 4.0 && p.z.abs() <= 4.0, "{} at {p}", d.id);
            }
        }
    }

    #[test]
    fn heights_are_staggered_by_index() {
        let descriptors = pool(5).initialize(&mut stream(3, POOL_STREAM));
        for (i, d) in descriptors.iter().enumerate() {
            let expected = 6.0 + i as f32 * 0.2;
            assert!((d.initial_transform.position.y - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn empty_or_negative_count_gives_empty_pool() {
        let mut rng = stream(0, POOL_STREAM);
        assert!(pool(0).initialize(&mut rng).is_empty());
        assert!(pool(-3).initialize(&mut rng).is_empty());
        assert!(pool(-3).is_empty());
    }

    #[test]
    fn reinitializing_keeps_ids_and_changes_transforms() {
        let pool = pool(10);
        let mut rng = stream(9, POOL_STREAM);
        let first = pool.initialize(&mut rng);
        let second = pool.initialize(&mut rng);

        let ids = |v: &[BodyDescriptor]| v.iter().map(|d| d.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
        assert_ne!(first, second);
    }

    #[test]
    fn same_seed_same_layout() {
        let a = pool(10).initialize(&mut stream(42, POOL_STREAM));
        let b = pool(10).initialize(&mut stream(42, POOL_STREAM));
        assert_eq!(a, b);
    }
}
