//! Seeded random streams.
//!
//! Every consumer of randomness gets its own stream derived from the scene
//! seed, so drawing torque jitter never shifts the pool layout or the hit
//! volumes of a seeded scene.

use rand::rngs::SmallRng;
use rand::SeedableRng;

pub type SceneRng = SmallRng;

pub const POOL_STREAM: u64 = 1;
pub const IMPULSE_STREAM: u64 = 2;
pub const AUDIO_STREAM: u64 = 3;

/// Independent generator for `stream` under `seed`.
pub fn stream(seed: u64, stream: u64) -> SceneRng {
    SmallRng::seed_from_u64(seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Seed for scenes that were not given one.
#[cfg(target_arch = "wasm32")]
pub fn entropy_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

/// Seed for scenes that were not given one.
#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}
