use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) frame_ms: f64,
    pub(super) trajectory_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) substeps: u32,
    pub(super) manifolds: u32,
    pub(super) contact_points: u32,
    pub(super) collision_events: u32,
    pub(super) cue_plays: u32,
    pub(super) cue_failures: u32,
    pub(super) body_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn trajectory_ms(&self) -> f64 { self.trajectory_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.substeps }
    #[wasm_bindgen(getter)]
    pub fn manifolds(&self) -> u32 { self.manifolds }
    #[wasm_bindgen(getter)]
    pub fn contact_points(&self) -> u32 { self.contact_points }
    #[wasm_bindgen(getter)]
    pub fn collision_events(&self) -> u32 { self.collision_events }
    /// Hit sounds started since the scene was created
    #[wasm_bindgen(getter)]
    pub fn cue_plays(&self) -> u32 { self.cue_plays }
    #[wasm_bindgen(getter)]
    pub fn cue_failures(&self) -> u32 { self.cue_failures }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
}
