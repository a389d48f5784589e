use crate::collision_audio::{AudioCue, CollisionAudioReactor};
use crate::core::random;
use crate::domain::config::SceneConfig;
use crate::rigid_body_system::RigidBodySystem;
use crate::systems::body_pool::BodyPool;
use crate::systems::impulse::ImpulseController;
use crate::systems::trajectory::TrajectoryGenerator;

use super::perf_stats::PerfStats;
use super::{compose, stream, SceneCore, AUDIO_STREAM, IMPULSE_STREAM, POOL_STREAM};

pub(super) fn create_engine(config: &SceneConfig) -> RigidBodySystem {
    RigidBodySystem::new(config.physics.gravity).with_solver_iterations(config.physics.solver_iterations)
}

pub(super) fn create_scene_core(config: SceneConfig, cue: Box<dyn AudioCue>) -> SceneCore {
    let seed = config.seed.unwrap_or_else(random::entropy_seed);

    let mut scene = SceneCore {
        engine: create_engine(&config),
        handles: None,
        pool: Vec::new(),
        body_pool: BodyPool::new(config.pool),
        trajectory: TrajectoryGenerator::new(config.trajectory),
        impulses: ImpulseController::new(config.impulse),
        reactor: CollisionAudioReactor::new(cue, stream(seed, AUDIO_STREAM)),
        pool_rng: stream(seed, POOL_STREAM),
        impulse_rng: stream(seed, IMPULSE_STREAM),
        elapsed: 0.0,
        accumulator: 0.0,
        frame: 0,
        rebuilds: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        transforms: Vec::new(),
        config,
        seed,
    };
    compose::compose_scene(&mut scene);

    log::info!(
        "scene ready: {} bodies, {} pooled, seed {}",
        scene.engine.body_count(),
        scene.pool.len(),
        scene.seed
    );
    scene
}
