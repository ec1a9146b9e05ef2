//! Audio collaborator contract and sound wrappers.
//!
//! Decoding and playback live outside the engine behind [`Audio`]. The
//! engine only tracks handles and forwards play/loop/stop/volume requests.

mod silent;
mod sound;

pub use silent::{SilentAudio, SoundState};
pub use sound::{Sound, SoundAsset};

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

/// Opaque handle to a loaded sound.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SoundHandle(pub u64);

/// Audio backend as seen by the core.
///
/// Volumes range from 0 to 100.
pub trait Audio {
    fn load_sound(&mut self, url: &str) -> Result<SoundHandle>;

    fn play(&mut self, sound: SoundHandle);

    /// Marks `sound` to restart when it ends. Takes effect on the next `play`.
    fn set_looping(&mut self, sound: SoundHandle, looping: bool);

    fn stop(&mut self, sound: SoundHandle);

    /// Stops every sound; used when a session is torn down.
    fn stop_all(&mut self);

    fn volume(&self, sound: SoundHandle) -> f32;

    fn set_volume(&mut self, sound: SoundHandle, volume: f32);
}

impl<A: Audio + ?Sized> Audio for Rc<RefCell<A>> {
    fn load_sound(&mut self, url: &str) -> Result<SoundHandle> {
        self.borrow_mut().load_sound(url)
    }

    fn play(&mut self, sound: SoundHandle) {
        self.borrow_mut().play(sound)
    }

    fn set_looping(&mut self, sound: SoundHandle, looping: bool) {
        self.borrow_mut().set_looping(sound, looping)
    }

    fn stop(&mut self, sound: SoundHandle) {
        self.borrow_mut().stop(sound)
    }

    fn stop_all(&mut self) {
        self.borrow_mut().stop_all()
    }

    fn volume(&self, sound: SoundHandle) -> f32 {
        self.borrow().volume(sound)
    }

    fn set_volume(&mut self, sound: SoundHandle, volume: f32) {
        self.borrow_mut().set_volume(sound, volume)
    }
}
