use super::SceneCore;

/// Floats per body in the transform buffer: position xyz, rotation xyzw.
pub const TRANSFORM_STRIDE: usize = 7;

/// Pack every body's transform in spawn order. The buffer keeps its
/// allocation between frames; returns its length in floats.
pub(super) fn extract_transforms(scene: &mut SceneCore) -> usize {
    let bodies = scene.engine.bodies();
    scene.transforms.clear();
    scene.transforms.reserve(bodies.len() * TRANSFORM_STRIDE);

    for body in bodies {
        scene.transforms.extend_from_slice(&body.pos.to_array());
        scene.transforms.extend_from_slice(&body.rotation.to_array());
    }

    scene.transforms.len()
}

pub(super) fn pool_range(scene: &SceneCore) -> (usize, usize) {
    scene
        .handles
        .as_ref()
        .map_or((0, 0), |h| (h.pool_offset, h.pool.len()))
}

pub(super) fn instances_json(scene: &SceneCore) -> Result<String, serde_json::Error> {
    serde_json::to_string(&scene.pool)
}
