use playground_engine::{PhysicsEngine, SceneConfig, SceneCore};

fn scene(json: &str) -> SceneCore {
    match SceneCore::from_json(json) {
        Ok(scene) => scene,
        Err(e) => panic!("config rejected: {e}"),
    }
}

#[test]
fn scene_smoke_frames() {
    let mut scene = scene(r#"{"seed": 7}"#);
    for i in 1..=120 {
        scene.frame(i as f64 / 60.0);
    }
    assert_eq!(scene.frame_count(), 120);
    assert_eq!(scene.body_count(), 109);
    assert!(scene.engine().bodies().iter().all(|b| b.pos.is_finite()));
}

#[test]
fn scene_smoke_jump_and_rebuild() {
    let mut scene = scene(r#"{"seed": 2, "pool": {"count": 8}}"#);
    assert!(scene.jump_cube());
    scene.frame(1.0 / 60.0);

    let cube = scene.handles().map(|h| h.cube);
    let rising = cube
        .and_then(|c| scene.engine().body(c))
        .map(|b| b.velocity.y > 0.0);
    assert_eq!(rising, Some(true));

    scene.rebuild();
    assert_eq!(scene.pool_range(), (3, 8));
    assert!(scene.jump_cube());
    let mass = scene.handles().and_then(|h| scene.engine().mass(h.cube));
    assert_eq!(mass, Some(500.0));
}

#[test]
fn scene_smoke_default_config_round_trips() {
    let config = SceneConfig::default();
    let back = SceneConfig::from_json(&config.to_json());
    assert!(matches!(back, Ok(c) if c == config));
}
