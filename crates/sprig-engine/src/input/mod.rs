//! Input subsystem.
//!
//! Two layers:
//! - [`InputEvent`]: platform-agnostic window input, produced by adapters in
//!   [`platform`] (winit today).
//! - [`RawInput`]: DOM-style notifications (`keydown`, `click`, `wheel`, ...)
//!   produced by [`PointerTracker`] and consumed by the event router.

pub mod platform;
mod state;
mod types;

pub use state::{DoubleClickConfig, PointerTracker};
pub use types::{
    InputEvent,
    KeyPhase,
    KeyState,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerPhase,
    RawInput,
};
