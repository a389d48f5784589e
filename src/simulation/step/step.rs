use crate::engine::PhysicsEngine;

use super::{PerfTimer, SceneCore};

/// Tolerance when comparing accumulated host time against the f32 timestep.
const TIME_EPSILON: f64 = 1.0e-6;

/// What one `frame` call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Fixed physics steps taken
    pub substeps: u32,
    pub collision_events: u32,
    /// Hit sounds started or attempted
    pub cue_triggers: u32,
}

/// One rendered frame: trajectory write, fixed physics steps, then audio.
pub(super) fn frame(scene: &mut SceneCore, elapsed: f64) -> FrameReport {
    let perf_on = scene.perf_enabled;
    if perf_on {
        scene.perf_stats.reset();
    }
    let frame_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Time never runs backwards, whatever the host passes.
    let elapsed = if elapsed.is_finite() { elapsed.max(scene.elapsed) } else { scene.elapsed };
    scene.accumulator += elapsed - scene.elapsed;
    scene.elapsed = elapsed;
    scene.frame += 1;

    // === TRAJECTORY ===
    // Written before stepping: the first substep consumes it.
    let twister = scene.handles.as_ref().map(|h| h.twister);
    if perf_on {
        let t0 = PerfTimer::start();
        scene.trajectory.drive(&mut scene.engine, twister, elapsed);
        scene.perf_stats.trajectory_ms = t0.elapsed_ms();
    } else {
        scene.trajectory.drive(&mut scene.engine, twister, elapsed);
    }

    // === PHYSICS ===
    let physics_start = if perf_on { Some(PerfTimer::start()) } else { None };
    let dt = scene.config.physics.timestep as f64;
    let max_substeps = scene.config.physics.max_substeps;
    let mut report = FrameReport::default();
    while scene.accumulator + TIME_EPSILON >= dt && report.substeps < max_substeps {
        let step = scene.engine.step(dt as f32);
        scene.accumulator = (scene.accumulator - dt).max(0.0);
        report.substeps += 1;
        if perf_on {
            scene.perf_stats.manifolds += step.manifolds;
            scene.perf_stats.contact_points += step.contact_points;
        }
    }
    if scene.accumulator + TIME_EPSILON >= dt {
        // Too far behind (tab in background): drop the backlog instead of spiralling.
        log::debug!("dropping {:.3}s of physics backlog", scene.accumulator);
        scene.accumulator = 0.0;
    }
    if let Some(t0) = physics_start {
        scene.perf_stats.physics_ms = t0.elapsed_ms();
    }

    // === AUDIO ===
    let events = scene.engine.drain_collision_events();
    report.collision_events = events.len() as u32;
    report.cue_triggers = scene.reactor.handle_events(&events);

    if let Some(t0) = frame_start {
        let stats = &mut scene.perf_stats;
        stats.frame_ms = t0.elapsed_ms();
        stats.substeps = report.substeps;
        stats.collision_events = report.collision_events;
        stats.cue_plays = scene.reactor.plays();
        stats.cue_failures = scene.reactor.failures();
        stats.body_count = scene.engine.body_count() as u32;
    }

    report
}
