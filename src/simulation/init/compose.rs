use glam::Vec3;

use crate::domain::transform::BodyDescriptor;
use crate::engine::{BodyHandle, PhysicsEngine};
use crate::rigid_body::{BodyDesc, ColliderShape};
use crate::systems::trajectory::TrajectoryGenerator;

use super::SceneCore;

/// Spawn order is the render order: ball, cube, twister, pool, then the
/// static set and the burger.
const POOL_OFFSET: usize = 3;

const CUBE_MASS: f32 = 500.0;

/// Handles of everything one composition spawned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneHandles {
    pub ball: BodyHandle,
    pub cube: BodyHandle,
    pub twister: BodyHandle,
    pub pool: Vec<BodyHandle>,
    pub floor: BodyHandle,
    pub walls: [BodyHandle; 4],
    pub burger: BodyHandle,
    /// Index of the first pool body in spawn order
    pub pool_offset: usize,
}

fn unit_cube() -> ColliderShape {
    ColliderShape::cuboid(0.5, 0.5, 0.5)
}

/// Template for every pooled cube; the pose comes from its descriptor.
pub(crate) fn pool_template() -> BodyDesc {
    BodyDesc::dynamic(unit_cube())
}

/// Spawn the playground into `engine`.
///
/// The twister starts on its trajectory at `elapsed` so the first kinematic
/// step does not sweep it across the floor.
pub(crate) fn spawn_playground<E: PhysicsEngine + ?Sized>(
    engine: &mut E,
    pool: &[BodyDescriptor],
    trajectory: &TrajectoryGenerator,
    elapsed: f64,
) -> SceneHandles {
    let ball = engine.spawn(&BodyDesc::dynamic(ColliderShape::ball(1.0)).position(Vec3::new(-1.5, 2.0, 0.0)));

    let cube = engine.spawn(
        &BodyDesc::dynamic(unit_cube())
            .position(Vec3::new(1.5, 2.0, 0.0))
            .mass(CUBE_MASS)
            .restitution(0.5)
            .friction(0.7),
    );
    engine.subscribe_collisions(cube);

    let start = trajectory.target_at(elapsed);
    let twister = engine.spawn(
        &BodyDesc::kinematic(ColliderShape::cuboid(0.2, 0.2, 1.5))
            .position(start.translation)
            .rotation(start.rotation)
            .friction(0.0),
    );

    let pool = engine.spawn_instances(pool, &pool_template());

    let floor = engine.spawn(
        &BodyDesc::fixed(ColliderShape::cuboid(5.0, 0.25, 5.0))
            .position(Vec3::new(0.0, -1.25, 0.0))
            .friction(0.7),
    );
    let long_wall = ColliderShape::cuboid(5.0, 2.0, 0.5);
    let side_wall = ColliderShape::cuboid(0.5, 2.0, 5.0);
    let walls = [
        engine.spawn(&BodyDesc::fixed(long_wall).position(Vec3::new(0.0, 1.0, -5.5))),
        engine.spawn(&BodyDesc::fixed(long_wall).position(Vec3::new(0.0, 1.0, 5.5))),
        engine.spawn(&BodyDesc::fixed(side_wall).position(Vec3::new(-5.5, 1.0, 0.0))),
        engine.spawn(&BodyDesc::fixed(side_wall).position(Vec3::new(5.5, 1.0, 0.0))),
    ];

    let burger = engine.spawn(&BodyDesc::dynamic(ColliderShape::cylinder(0.5, 1.25)).position(Vec3::new(0.0, 4.0, 0.0)));

    SceneHandles {
        ball,
        cube,
        twister,
        pool,
        floor,
        walls,
        burger,
        pool_offset: POOL_OFFSET,
    }
}

/// Draw pool transforms and spawn everything into the scene's engine.
pub(super) fn compose_scene(scene: &mut SceneCore) {
    scene.pool = scene.body_pool.initialize(&mut scene.pool_rng);
    let handles = spawn_playground(&mut scene.engine, &scene.pool, &scene.trajectory, scene.elapsed);
    scene.reactor.watch(handles.cube);
    scene.handles = Some(handles);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::{stream, POOL_STREAM};
    use crate::domain::config::{PoolParams, TrajectoryParams};
    use crate::engine::testing::FakeEngine;
    use crate::rigid_body::BodyKind;
    use crate::systems::body_pool::BodyPool;

    #[test]
    fn playground_spawns_in_render_order() {
        let pool = BodyPool::new(PoolParams {
            count: 4,
            ..PoolParams::default()
        })
        .initialize(&mut stream(1, POOL_STREAM));
        let mut engine = FakeEngine::default();
        let handles = spawn_playground(
            &mut engine,
            &pool,
            &TrajectoryGenerator::new(TrajectoryParams::default()),
            0.0,
        );

        // ball, cube, twister, 4 pool cubes, floor, 4 walls, burger
        assert_eq!(engine.spawned.len(), 13);
        assert_eq!(handles.pool.len(), 4);
        assert_eq!(engine.spawned[POOL_OFFSET].position, pool[0].initial_transform.position);
        assert_eq!(engine.spawned[1].mass, Some(CUBE_MASS));
        assert_eq!(engine.spawned[2].kind, BodyKind::KinematicPosition);
        assert!(engine.spawned[2].position.abs_diff_eq(Vec3::new(0.0, -0.8, 2.0), 1e-6));
        assert!(engine.subscribed.contains(&handles.cube));
        assert_eq!(engine.subscribed.len(), 1);
    }
}
