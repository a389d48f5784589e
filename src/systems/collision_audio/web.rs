//! `HtmlAudioElement` backed cue for the browser.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

use crate::core::error::CueError;

use super::cue::AudioCue;

pub struct HtmlAudioCue {
    element: HtmlAudioElement,
    /// Attached to every play() promise; autoplay blocks arrive here.
    on_reject: Closure<dyn FnMut(JsValue)>,
    rejections: Rc<Cell<u32>>,
}

impl HtmlAudioCue {
    /// Create the element once; it is reused for every hit.
    pub fn new(src: &str) -> Result<Self, CueError> {
        let element = HtmlAudioElement::new_with_src(src).map_err(|e| CueError::Unavailable(describe(&e)))?;

        let rejections = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&rejections);
        let on_reject = Closure::wrap(Box::new(move |reason: JsValue| {
            counter.set(counter.get().saturating_add(1));
            log::warn!("hit sound playback rejected: {}", describe(&reason));
        }) as Box<dyn FnMut(JsValue)>);

        Ok(Self {
            element,
            on_reject,
            rejections,
        })
    }
}

impl AudioCue for HtmlAudioCue {
    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn volume(&self) -> f64 {
        self.element.volume()
    }

    fn set_volume(&mut self, volume: f64) {
        self.element.set_volume(volume.clamp(0.0, 1.0));
    }

    fn is_playing(&self) -> bool {
        !self.element.paused()
    }

    fn play(&mut self) -> Result<(), CueError> {
        let promise = self.element.play().map_err(|e| CueError::Rejected(describe(&e)))?;
        // The returned promise is dropped; its rejection is handled by the closure.
        let _ = promise.catch(&self.on_reject);
        Ok(())
    }

    /// Playback promises rejected so far (autoplay policy, decode errors).
    fn rejections(&self) -> u32 {
        self.rejections.get()
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
