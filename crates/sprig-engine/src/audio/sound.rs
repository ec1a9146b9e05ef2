use anyhow::{Context, Result};

use super::{Audio, SoundHandle};

/// A sound file, identified by URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundAsset {
    pub url: String,
}

impl SoundAsset {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// A loaded sound.
///
/// Every operation goes through the [`Audio`] backend that loaded it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    asset: SoundAsset,
    handle: SoundHandle,
}

impl Sound {
    pub fn load(audio: &mut dyn Audio, asset: SoundAsset) -> Result<Self> {
        let handle = audio
            .load_sound(&asset.url)
            .with_context(|| format!("loading sound {}", asset.url))?;
        log::debug!("loaded sound {} as {handle:?}", asset.url);
        Ok(Self { asset, handle })
    }

    #[inline]
    pub fn asset(&self) -> &SoundAsset {
        &self.asset
    }

    #[inline]
    pub fn handle(&self) -> SoundHandle {
        self.handle
    }

    /// Plays once from the start.
    pub fn play(&self, audio: &mut dyn Audio) {
        audio.stop(self.handle);
        audio.set_looping(self.handle, false);
        audio.play(self.handle);
    }

    /// Plays from the start, repeating until stopped.
    pub fn play_looped(&self, audio: &mut dyn Audio) {
        audio.stop(self.handle);
        audio.set_looping(self.handle, true);
        audio.play(self.handle);
    }

    pub fn stop(&self, audio: &mut dyn Audio) {
        audio.stop(self.handle);
    }

    pub fn volume(&self, audio: &dyn Audio) -> f32 {
        audio.volume(self.handle)
    }

    pub fn set_volume(&self, audio: &mut dyn Audio, volume: f32) {
        audio.set_volume(self.handle, volume);
    }
}
