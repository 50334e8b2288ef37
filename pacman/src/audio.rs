//! This module handles the audio cues for the game.
//!
//! The core only ever fires cues and forgets about them. The sinks here log
//! the cue names; a real mixer would plug in behind the same trait.

use std::collections::HashMap;

use strum::IntoEnumIterator;
use tracing::{debug, trace};

use crate::events::Sound;

/// Anything that can play a sound cue. Fire-and-forget.
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioState {
    Enabled,
    Muted,
}

/// An audio sink that logs each cue and counts how often it played.
#[derive(Debug)]
pub struct LoggingAudio {
    state: AudioState,
    counts: HashMap<Sound, u32>,
}

impl Default for LoggingAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingAudio {
    pub fn new() -> Self {
        Self {
            state: AudioState::Enabled,
            counts: Sound::iter().map(|sound| (sound, 0)).collect(),
        }
    }

    pub fn set_mute(&mut self, mute: bool) {
        self.state = if mute { AudioState::Muted } else { AudioState::Enabled };
        debug!(mute, "Audio mute toggled");
    }

    pub fn is_muted(&self) -> bool {
        self.state == AudioState::Muted
    }

    /// How many times a cue has been played (muted cues count too).
    pub fn count(&self, sound: Sound) -> u32 {
        self.counts.get(&sound).copied().unwrap_or(0)
    }
}

impl AudioSink for LoggingAudio {
    fn play(&mut self, sound: Sound) {
        *self.counts.entry(sound).or_default() += 1;
        if self.state == AudioState::Enabled {
            trace!(sound = sound.name(), "Playing sound");
        }
    }
}

/// Discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _sound: Sound) {}
}
