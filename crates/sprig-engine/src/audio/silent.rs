use std::collections::{HashMap, HashSet};

use anyhow::{Result, bail};

use super::{Audio, SoundHandle};

/// What [`SilentAudio`] remembers about one sound.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundState {
    pub url: String,
    pub playing: bool,
    pub looping: bool,
    pub volume: f32,
    pub plays: u32,
    pub stops: u32,
}

/// Audio backend that plays nothing and records every request.
#[derive(Debug, Default)]
pub struct SilentAudio {
    sounds: HashMap<SoundHandle, SoundState>,
    rejected: HashSet<String>,
    next_id: u64,
}

impl SilentAudio {
    pub const DEFAULT_VOLUME: f32 = 100.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `load_sound` fail for `url`.
    pub fn rejecting(mut self, url: impl Into<String>) -> Self {
        self.rejected.insert(url.into());
        self
    }

    pub fn state(&self, sound: SoundHandle) -> Option<&SoundState> {
        self.sounds.get(&sound)
    }

    /// Number of sounds currently playing.
    pub fn playing(&self) -> usize {
        self.sounds.values().filter(|s| s.playing).count()
    }

    fn with_state(&mut self, sound: SoundHandle, f: impl FnOnce(&mut SoundState)) {
        match self.sounds.get_mut(&sound) {
            Some(st) => f(st),
            None => log::warn!("silent audio: unknown sound {sound:?}"),
        }
    }
}

impl Audio for SilentAudio {
    fn load_sound(&mut self, url: &str) -> Result<SoundHandle> {
        if self.rejected.contains(url) {
            bail!("sound not found: {url}");
        }
        self.next_id += 1;
        let handle = SoundHandle(self.next_id);
        self.sounds.insert(
            handle,
            SoundState {
                url: url.to_owned(),
                playing: false,
                looping: false,
                volume: Self::DEFAULT_VOLUME,
                plays: 0,
                stops: 0,
            },
        );
        Ok(handle)
    }

    fn play(&mut self, sound: SoundHandle) {
        self.with_state(sound, |st| {
            st.playing = true;
            st.plays += 1;
        });
    }

    fn set_looping(&mut self, sound: SoundHandle, looping: bool) {
        self.with_state(sound, |st| st.looping = looping);
    }

    fn stop(&mut self, sound: SoundHandle) {
        self.with_state(sound, |st| {
            st.playing = false;
            st.stops += 1;
        });
    }

    fn stop_all(&mut self) {
        for st in self.sounds.values_mut() {
            st.playing = false;
        }
    }

    fn volume(&self, sound: SoundHandle) -> f32 {
        self.sounds.get(&sound).map_or(0.0, |st| st.volume)
    }

    fn set_volume(&mut self, sound: SoundHandle, volume: f32) {
        self.with_state(sound, |st| st.volume = volume.clamp(0.0, 100.0));
    }
}
