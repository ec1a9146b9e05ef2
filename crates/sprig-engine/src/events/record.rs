use crate::coords::{Vec2, ViewportRect};
use crate::input::{KeyPhase, PointerPhase};

use super::keys::key_name;

/// Events that listeners can mark as handled.
pub trait Consumable {
    fn is_consumed(&self) -> bool;
}

/// Keyboard event handed to key listeners.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    phase: KeyPhase,
    code: u32,
    key: Option<&'static str>,
    consumed: bool,
}

impl KeyEvent {
    pub fn new(phase: KeyPhase, code: u32) -> Self {
        Self { phase, code, key: key_name(code), consumed: false }
    }

    #[inline]
    pub fn phase(&self) -> KeyPhase {
        self.phase
    }

    #[inline]
    pub fn code(&self) -> u32 {
        self.code
    }

    /// Symbolic key name; `None` for codes outside the key table.
    #[inline]
    pub fn key(&self) -> Option<&'static str> {
        self.key
    }

    /// Stops delivery to the remaining listeners.
    #[inline]
    pub fn consume(&mut self) {
        self.consumed = true;
    }
}

impl Consumable for KeyEvent {
    fn is_consumed(&self) -> bool {
        self.consumed
    }
}

/// Pointer event in stage coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    phase: PointerPhase,
    x: f32,
    y: f32,
    wheel_delta: f32,
    consumed: bool,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f32, y: f32, wheel_delta: f32) -> Self {
        let wheel_delta = if phase == PointerPhase::Wheel { wheel_delta } else { 0.0 };
        Self { phase, x, y, wheel_delta, consumed: false }
    }

    /// Maps client coordinates into stage pixels.
    ///
    /// The stage of size `stage` is displayed inside `viewport`; client
    /// coordinates are shifted by the viewport origin and scaled by
    /// `stage / viewport`. A degenerate viewport leaves the scale at 1.
    pub fn from_client(
        phase: PointerPhase,
        client: Vec2,
        wheel_delta: f32,
        viewport: ViewportRect,
        stage: Vec2,
    ) -> Self {
        let (sx, sy) = if viewport.is_valid() {
            (stage.x / viewport.width, stage.y / viewport.height)
        } else {
            (1.0, 1.0)
        };
        let x = (client.x - viewport.left) * sx;
        let y = (client.y - viewport.top) * sy;
        Self::new(phase, x, y, wheel_delta)
    }

    #[inline]
    pub fn phase(&self) -> PointerPhase {
        self.phase
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Vertical wheel motion in pixels; 0 for non-wheel events.
    #[inline]
    pub fn wheel_delta(&self) -> f32 {
        self.wheel_delta
    }

    #[inline]
    pub fn consume(&mut self) {
        self.consumed = true;
    }
}

impl Consumable for PointerEvent {
    fn is_consumed(&self) -> bool {
        self.consumed
    }
}
