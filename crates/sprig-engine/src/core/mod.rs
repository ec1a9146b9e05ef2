//! Session core.
//!
//! [`App`] ties the registry, the event router and the collaborators
//! (renderer, audio, clock) into one explicitly constructed session. Input
//! flows in through [`App::dispatch`], per-tick logic through [`Game`], and
//! changed sprite state flows out to the renderer after each.

mod app;
mod config;
mod game;

pub use app::{App, KeyListener, PointerListener};
pub use config::{AppConfig, CollisionModel};
pub use game::{AppControl, Game};
