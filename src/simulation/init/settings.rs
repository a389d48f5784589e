use glam::Vec3;

use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
    if !enabled {
        scene.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(scene: &SceneCore) -> PerfStats {
    scene.perf_stats.clone()
}

pub(super) fn set_gravity(scene: &mut SceneCore, x: f32, y: f32, z: f32) {
    let gravity = Vec3::new(x, y, z);
    if !gravity.is_finite() {
        log::warn!("ignoring non-finite gravity {gravity}");
        return;
    }
    scene.config.physics.gravity = gravity;
    scene.engine.set_gravity(gravity);
}
