//! Contract violations reported by the registry and the event router.
//!
//! Collaborator failures (textures, sounds) travel as `anyhow::Error`
//! instead; these enums are for mistakes in how the API is driven.

use crate::events::KeyTarget;
use crate::input::{KeyPhase, PointerPhase};
use crate::registry::RegistryId;
use crate::sprite::SpriteId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("sprite {0} is already registered")]
    DuplicateSprite(SpriteId),
    #[error("sprite {0} is not registered")]
    UnknownSprite(SpriteId),
    #[error("sprite {sprite} belongs to registry {owner}, not {registry}")]
    ForeignSprite { sprite: SpriteId, owner: RegistryId, registry: RegistryId },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("listener is not subscribed to {phase} for {target}")]
    KeyNotSubscribed { phase: KeyPhase, target: KeyTarget },
    #[error("listener is not subscribed to {0}")]
    PointerNotSubscribed(PointerPhase),
}
