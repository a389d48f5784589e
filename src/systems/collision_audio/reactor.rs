use rand::Rng;

use crate::core::random::SceneRng;
use crate::engine::{BodyHandle, CollisionEvent};

use super::cue::AudioCue;

/// Plays the hit sound when the watched body starts touching something.
///
/// Owns the only cue of the scene. Every hit restarts it from zero at a
/// random loudness; a hit during playback wins over the one still playing.
pub struct CollisionAudioReactor<C: AudioCue = Box<dyn AudioCue>> {
    cue: C,
    rng: SceneRng,
    watched: Option<BodyHandle>,
    plays: u32,
    failures: u32,
}

impl<C: AudioCue> CollisionAudioReactor<C> {
    pub fn new(cue: C, rng: SceneRng) -> Self {
        Self {
            cue,
            rng,
            watched: None,
            plays: 0,
            failures: 0,
        }
    }

    /// React to collision-begin events of `body` from now on.
    pub fn watch(&mut self, body: BodyHandle) {
        self.watched = Some(body);
    }

    pub fn watched(&self) -> Option<BodyHandle> {
        self.watched
    }

    /// Restart the cue. Returns whether playback started; failures are
    /// logged and counted, never returned.
    pub fn on_collision_begin(&mut self) -> bool {
        self.cue.set_current_time(0.0);
        self.cue.set_volume(self.rng.random::<f64>());

        match self.cue.play() {
            Ok(()) => {
                self.plays = self.plays.saturating_add(1);
                true
            }
            Err(err) => {
                self.failures = self.failures.saturating_add(1);
                log::warn!("hit sound skipped: {err}");
                false
            }
        }
    }

    /// Feed one frame's events; only those of the watched body trigger.
    /// Returns the number of triggers.
    pub fn handle_events(&mut self, events: &[CollisionEvent]) -> u32 {
        let Some(watched) = self.watched else {
            return 0;
        };
        let mut triggered = 0;
        for _ in events.iter().filter(|e| e.body == watched) {
            self.on_collision_begin();
            triggered += 1;
        }
        triggered
    }

    pub fn cue(&self) -> &C {
        &self.cue
    }

    /// Playbacks that started and were not rejected afterwards.
    pub fn plays(&self) -> u32 {
        self.plays.saturating_sub(self.cue.rejections())
    }

    /// Playbacks refused by `play` plus those the cue rejected later.
    pub fn failures(&self) -> u32 {
        self.failures.saturating_add(self.cue.rejections())
    }
}
