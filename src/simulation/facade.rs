use wasm_bindgen::prelude::*;

use crate::domain::config::SceneConfig;

use super::perf_stats::PerfStats;
use super::SceneCore;

#[wasm_bindgen]
pub struct Scene {
    core: SceneCore,
}

#[wasm_bindgen]
impl Scene {
    /// Create the reference scene
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SceneCore::new(SceneConfig::default()),
        }
    }

    /// Create a scene from a JSON `SceneConfig` (missing fields use defaults)
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<Scene, JsValue> {
        SceneCore::from_json(json)
            .map(|core| Self { core })
            .map_err(|e| {
                log::error!("scene config rejected: {e}");
                JsValue::from_str(&e.to_string())
            })
    }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 { self.core.frame_count() }

    #[wasm_bindgen(getter)]
    pub fn elapsed(&self) -> f64 { self.core.elapsed() }

    #[wasm_bindgen(getter)]
    pub fn seed(&self) -> u64 { self.core.seed() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn rebuilds(&self) -> u32 { self.core.rebuilds() }

    /// Advance to `elapsed` seconds; returns the number of physics steps taken
    pub fn frame(&mut self, elapsed: f64) -> u32 {
        self.core.frame(elapsed).substeps
    }

    /// Pointer click on the cube
    pub fn jump_cube(&mut self) -> bool {
        self.core.jump_cube()
    }

    pub fn rebuild(&mut self) {
        self.core.rebuild();
    }

    pub fn set_gravity(&mut self, x: f32, y: f32, z: f32) {
        self.core.set_gravity(x, y, z);
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Refresh the transform buffer; returns its length in floats
    pub fn extract_transforms(&mut self) -> usize {
        self.core.extract_transforms()
    }

    /// Get pointer to transform buffer (7 floats per body, for JS rendering)
    pub fn transforms_ptr(&self) -> *const f32 {
        self.core.transforms_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.core.transforms().len()
    }

    /// First body index of the instanced pool
    pub fn pool_start(&self) -> usize {
        self.core.pool_range().0
    }

    pub fn pool_len(&self) -> usize {
        self.core.pool_range().1
    }

    /// Pool descriptors of the current composition as JSON
    pub fn instances_json(&self) -> Result<String, JsValue> {
        self.core
            .instances_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn cue_plays(&self) -> u32 { self.core.reactor().plays() }

    #[wasm_bindgen(getter)]
    pub fn cue_failures(&self) -> u32 { self.core.reactor().failures() }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn core(&self) -> &SceneCore {
        &self.core
    }
}
