use super::{compose, SceneCore};

/// Jump the cube. Returns `false` when there is no cube to jump.
pub(super) fn jump_cube(scene: &mut SceneCore) -> bool {
    let cube = scene.handles.as_ref().map(|h| h.cube);
    scene
        .impulses
        .trigger(&mut scene.engine, cube, &mut scene.impulse_rng)
        .is_some()
}

/// Clear the world and compose the scene again.
///
/// The reactor (and with it the audio cue) is kept; only its watched body
/// changes. Pool size and ids stay, transforms are drawn fresh.
pub(super) fn rebuild(scene: &mut SceneCore) {
    scene.engine.clear();
    scene.handles = None;
    scene.accumulator = 0.0;
    compose::compose_scene(scene);
    scene.rebuilds = scene.rebuilds.saturating_add(1);

    log::info!(
        "scene rebuilt ({}): {} bodies",
        scene.rebuilds,
        scene.engine.body_count()
    );
}
