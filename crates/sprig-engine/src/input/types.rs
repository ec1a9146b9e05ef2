use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Mouse wheel delta.
///
/// `Line` corresponds to "scroll lines" style input; `Pixel` is high precision.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

/// Platform-agnostic window input.
///
/// Platform adapters translate window system events into these; coordinates
/// are client (window) pixels, not stage pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        /// Legacy numeric key code (see [`crate::events::key_name`]); 0 when unknown.
        code: u32,
        state: KeyState,
        /// True when event is a key-repeat.
        repeat: bool,
    },

    PointerMoved { x: f32, y: f32 },

    PointerButton { button: MouseButton, state: MouseButtonState },

    MouseWheel { delta: MouseWheelDelta },

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}

/// Keyboard notification phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KeyPhase {
    Down,
    Up,
    /// Auto-repeat while a key is held.
    Repeat,
}

/// Pointer notification phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PointerPhase {
    Move,
    Down,
    Up,
    Click,
    DoubleClick,
    Wheel,
}

/// Raw input notification, the unit the event router consumes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RawInput {
    Key { phase: KeyPhase, code: u32 },
    Pointer {
        phase: PointerPhase,
        /// Client coordinates; the session rescales them to stage pixels.
        client_x: f32,
        client_y: f32,
        /// Vertical wheel delta in pixels; 0 unless `phase == Wheel`.
        delta_y: f32,
    },
}

impl RawInput {
    pub fn key(phase: KeyPhase, code: u32) -> Self {
        RawInput::Key { phase, code }
    }

    pub fn pointer(phase: PointerPhase, client_x: f32, client_y: f32) -> Self {
        RawInput::Pointer { phase, client_x, client_y, delta_y: 0.0 }
    }

    pub fn wheel(client_x: f32, client_y: f32, delta_y: f32) -> Self {
        RawInput::Pointer { phase: PointerPhase::Wheel, client_x, client_y, delta_y }
    }
}

impl fmt::Display for KeyPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyPhase::Down => "keydown",
            KeyPhase::Up => "keyup",
            KeyPhase::Repeat => "keyrepeat",
        })
    }
}

impl fmt::Display for PointerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PointerPhase::Move => "mousemove",
            PointerPhase::Down => "mousedown",
            PointerPhase::Up => "mouseup",
            PointerPhase::Click => "click",
            PointerPhase::DoubleClick => "dblclick",
            PointerPhase::Wheel => "wheel",
        })
    }
}
