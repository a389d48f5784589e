//! Collision Audio Reactor - hit sound for the jumping cube
//!
//! The reactor owns one `AudioCue` for the lifetime of the scene. Scene
//! rebuilds keep the reactor, so the cue is never created twice.

mod cue;
mod reactor;
#[cfg(target_arch = "wasm32")]
mod web;

pub use cue::{AudioCue, SilentCue};
pub use reactor::CollisionAudioReactor;
#[cfg(target_arch = "wasm32")]
pub use web::HtmlAudioCue;

/// The cue for `src`: an audio element in the browser, silent elsewhere or
/// when the element cannot be created.
pub fn default_cue(src: Option<&str>) -> Box<dyn AudioCue> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(src) = src {
            match HtmlAudioCue::new(src) {
                Ok(cue) => return Box::new(cue),
                Err(err) => log::warn!("hit sound disabled: {err}"),
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    if let Some(src) = src {
        log::debug!("no audio output on this target, {src} stays silent");
    }

    Box::new(SilentCue::new())
}
