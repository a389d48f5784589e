//! Scene - the physics playground driven one rendered frame at a time
//!
//! SceneCore only orchestrates. The four drivers live in systems/:
//! - trajectory      - kinematic target of the twister bar
//! - body_pool       - spawn transforms of the instanced cubes
//! - impulse         - click-to-jump for the cube
//! - collision_audio - hit sound when the cube lands
//!
//! The rigid body world is the only owner of simulated state; drivers talk
//! to it through the `PhysicsEngine` trait.

use crate::collision_audio::{default_cue, AudioCue, CollisionAudioReactor};
use crate::core::error::ConfigError;
use crate::core::random::{self, SceneRng, AUDIO_STREAM, IMPULSE_STREAM, POOL_STREAM};
use crate::domain::config::SceneConfig;
use crate::domain::transform::BodyDescriptor;
use crate::rigid_body_system::RigidBodySystem;
use crate::systems::body_pool::BodyPool;
use crate::systems::impulse::ImpulseController;
use crate::systems::trajectory::TrajectoryGenerator;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/compose.rs"]
mod compose;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use compose::SceneHandles;
pub use facade::Scene;
pub use perf_stats::PerfStats;
pub use render_extract::TRANSFORM_STRIDE;
pub use step::FrameReport;

use perf_timer::PerfTimer;

/// The playground scene
pub struct SceneCore {
    config: SceneConfig,
    seed: u64,
    engine: RigidBodySystem,
    /// `None` until the scene is composed
    handles: Option<SceneHandles>,
    /// Descriptors handed to the engine on the last composition
    pool: Vec<BodyDescriptor>,

    // Drivers
    body_pool: BodyPool,
    trajectory: TrajectoryGenerator,
    impulses: ImpulseController,
    /// Survives rebuilds together with its cue
    reactor: CollisionAudioReactor,

    pool_rng: SceneRng,
    impulse_rng: SceneRng,

    // Clock
    elapsed: f64,
    accumulator: f64,
    frame: u64,
    rebuilds: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    /// Packed render transforms, refreshed by `extract_transforms`
    transforms: Vec<f32>,
}

impl SceneCore {
    /// Compose the scene with the default hit sound for this target.
    pub fn new(config: SceneConfig) -> Self {
        let cue = default_cue(config.hit_sound.as_deref());
        init::create_scene_core(config, cue)
    }

    /// Compose the scene around a caller-provided cue.
    pub fn with_cue(config: SceneConfig, cue: Box<dyn AudioCue>) -> Self {
        init::create_scene_core(config, cue)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(SceneConfig::from_json(json)?))
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn engine(&self) -> &RigidBodySystem {
        &self.engine
    }

    pub fn handles(&self) -> Option<&SceneHandles> {
        self.handles.as_ref()
    }

    /// Pool descriptors of the current composition, in spawn order.
    pub fn pool_descriptors(&self) -> &[BodyDescriptor] {
        &self.pool
    }

    pub fn reactor(&self) -> &CollisionAudioReactor {
        &self.reactor
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn rebuilds(&self) -> u32 {
        self.rebuilds
    }

    pub fn body_count(&self) -> usize {
        self.engine.body_count()
    }

    /// Advance to the host's elapsed time (seconds since the scene started).
    pub fn frame(&mut self, elapsed: f64) -> FrameReport {
        step::frame(self, elapsed)
    }

    /// Pointer click on the cube.
    pub fn jump_cube(&mut self) -> bool {
        commands::jump_cube(self)
    }

    /// Re-compose the scene: fresh bodies and pool transforms, same cue.
    pub fn rebuild(&mut self) {
        commands::rebuild(self)
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32, z: f32) {
        settings::set_gravity(self, x, y, z);
    }

    /// Refresh the packed transform buffer; returns its length in floats.
    pub fn extract_transforms(&mut self) -> usize {
        render_extract::extract_transforms(self)
    }

    pub fn transforms(&self) -> &[f32] {
        &self.transforms
    }

    /// Get pointer to transform buffer (for JS rendering)
    pub fn transforms_ptr(&self) -> *const f32 {
        self.transforms.as_ptr()
    }

    /// Body indices `(start, len)` of the instanced pool in the transform buffer.
    pub fn pool_range(&self) -> (usize, usize) {
        render_extract::pool_range(self)
    }

    pub fn instances_json(&self) -> Result<String, serde_json::Error> {
        render_extract::instances_json(self)
    }
}

fn stream(seed: u64, stream: u64) -> SceneRng {
    random::stream(seed, stream)
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
