use crate::core::error::CueError;

/// A single reusable sound with mutable playback state.
///
/// `play` on a cue that is already playing keeps the one playback going
/// (from wherever `current_time` was just set); it never starts a second one.
pub trait AudioCue {
    /// Playback position in seconds
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// Loudness in `[0, 1]`
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn is_playing(&self) -> bool;
    fn play(&mut self) -> Result<(), CueError>;

    /// Playbacks that failed after `play` had already returned `Ok`
    /// (the browser rejects the play promise later).
    fn rejections(&self) -> u32 {
        0
    }
}

impl<T: AudioCue + ?Sized> AudioCue for Box<T> {
    fn current_time(&self) -> f64 {
        (**self).current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        (**self).set_current_time(seconds)
    }

    fn volume(&self) -> f64 {
        (**self).volume()
    }

    fn set_volume(&mut self, volume: f64) {
        (**self).set_volume(volume)
    }

    fn is_playing(&self) -> bool {
        (**self).is_playing()
    }

    fn play(&mut self) -> Result<(), CueError> {
        (**self).play()
    }

    fn rejections(&self) -> u32 {
        (**self).rejections()
    }
}

/// Cue without an audio device: keeps the playback fields, makes no sound.
///
/// Used on native targets and when the scene has no hit sound.
#[derive(Clone, Debug, PartialEq)]
pub struct SilentCue {
    current_time: f64,
    volume: f64,
    playing: bool,
}

impl SilentCue {
    pub fn new() -> Self {
        Self {
            current_time: 0.0,
            volume: 1.0,
            playing: false,
        }
    }
}

impl Default for SilentCue {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioCue for SilentCue {
    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds.max(0.0);
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn play(&mut self) -> Result<(), CueError> {
        self.playing = true;
        Ok(())
    }
}
