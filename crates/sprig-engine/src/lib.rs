//! Sprig engine crate.
//!
//! A 2D sprite toolkit: shapes placed on a stage with a transform, lazily
//! maintained bounding boxes, collision queries, and keyboard/pointer event
//! routing. Drawing, sound playback and frame scheduling belong to external
//! collaborators reached through the [`render::Renderer`] and
//! [`audio::Audio`] traits.

pub mod audio;
pub mod coords;
pub mod core;
pub mod error;
pub mod events;
pub mod geom;
pub mod input;
pub mod logging;
pub mod registry;
pub mod render;
pub mod scene;
pub mod shape;
pub mod sprite;
pub mod time;

pub use crate::core::{App, AppConfig, AppControl, CollisionModel, Game};
pub use crate::sprite::{Kind, Sprite, SpriteBuilder, SpriteId};
