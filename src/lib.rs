//! Playground Engine - per-frame driver for a 3D physics playground in WASM
//!
//! Architecture:
//! - core/       - errors, logging, seeded randomness
//! - domain/     - scene configuration and plain data (transforms, commands)
//! - systems/    - the rigid body world and the four scene drivers
//! - simulation/ - scene orchestration and the wasm-bindgen facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths used across the crate
pub use systems::body_pool;
pub use systems::collision_audio;
pub use systems::engine;
pub use systems::impulse;
pub use systems::rigid_body;
pub use systems::rigid_body_system;
pub use systems::trajectory;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logger::init(log::LevelFilter::Info);
    log::info!("playground engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::SceneConfig;
pub use domain::transform::{BodyDescriptor, ImpulseCommand, KinematicTarget, Transform};
pub use engine::{BodyHandle, CollisionEvent, PhysicsEngine};
pub use simulation::{PerfStats, Scene, SceneCore};
