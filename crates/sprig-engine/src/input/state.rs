use std::collections::HashSet;
use std::time::{Duration, Instant};

use super::types::{
    InputEvent, KeyPhase, KeyState, MouseButton, MouseButtonState, MouseWheelDelta, PointerPhase,
    RawInput,
};

/// Pixels per wheel "line", matching typical browser wheel deltas.
const WHEEL_LINE_PIXELS: f32 = 100.0;

/// Double-click detection thresholds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DoubleClickConfig {
    /// Maximum time between the two clicks.
    pub interval: Duration,
    /// Maximum pointer travel between the two clicks, in client pixels.
    pub max_distance: f32,
}

impl Default for DoubleClickConfig {
    fn default() -> Self {
        Self { interval: Duration::from_millis(500), max_distance: 4.0 }
    }
}

/// Pointer and button state for a single window.
///
/// Turns window-level [`InputEvent`]s into the [`RawInput`] notifications the
/// router consumes: it remembers where the pointer is (button events carry no
/// position) and synthesises click and double-click notifications.
#[derive(Debug, Default)]
pub struct PointerTracker {
    /// Pointer position in client pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,

    /// Whether the window is focused.
    pub focused: bool,

    config: DoubleClickConfig,
    last_click: Option<(Instant, (f32, f32))>,
}

impl PointerTracker {
    pub fn new(config: DoubleClickConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Applies one window event and returns the notifications it produces, in order.
    pub fn apply_event(&mut self, ev: InputEvent, now: Instant) -> Vec<RawInput> {
        let mut out = Vec::new();

        match ev {
            InputEvent::Key { code, state, repeat } => {
                let phase = match (state, repeat) {
                    (KeyState::Released, _) => KeyPhase::Up,
                    (KeyState::Pressed, true) => KeyPhase::Repeat,
                    (KeyState::Pressed, false) => KeyPhase::Down,
                };
                out.push(RawInput::key(phase, code));
            }

            InputEvent::PointerMoved { x, y } => {
                self.pointer_pos = Some((x, y));
                out.push(RawInput::pointer(PointerPhase::Move, x, y));
            }

            InputEvent::PointerButton { button, state } => {
                let (x, y) = self.pointer_pos.unwrap_or((0.0, 0.0));
                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.insert(button);
                        out.push(RawInput::pointer(PointerPhase::Down, x, y));
                    }
                    MouseButtonState::Released => {
                        let was_down = self.buttons_down.remove(&button);
                        out.push(RawInput::pointer(PointerPhase::Up, x, y));
                        if was_down && button == MouseButton::Left {
                            out.push(RawInput::pointer(PointerPhase::Click, x, y));
                            if self.is_double_click(now, (x, y)) {
                                self.last_click = None;
                                out.push(RawInput::pointer(PointerPhase::DoubleClick, x, y));
                            } else {
                                self.last_click = Some((now, (x, y)));
                            }
                        }
                    }
                }
            }

            InputEvent::MouseWheel { delta } => {
                let (x, y) = self.pointer_pos.unwrap_or((0.0, 0.0));
                let dy = match delta {
                    MouseWheelDelta::Line { y: lines, .. } => lines * WHEEL_LINE_PIXELS,
                    MouseWheelDelta::Pixel { y: px, .. } => px,
                };
                out.push(RawInput::wheel(x, y, dy));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // On focus loss, forget held buttons and click history.
                    self.buttons_down.clear();
                    self.last_click = None;
                }
            }
        }

        out
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }

    fn is_double_click(&self, now: Instant, pos: (f32, f32)) -> bool {
        let Some((at, prev)) = self.last_click else {
            return false;
        };
        let dx = pos.0 - prev.0;
        let dy = pos.1 - prev.1;
        now.saturating_duration_since(at) <= self.config.interval
            && (dx * dx + dy * dy).sqrt() <= self.config.max_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(t: &mut PointerTracker, now: Instant) -> Vec<RawInput> {
        let mut out = t.apply_event(
            InputEvent::PointerButton { button: MouseButton::Left, state: MouseButtonState::Pressed },
            now,
        );
        out.extend(t.apply_event(
            InputEvent::PointerButton { button: MouseButton::Left, state: MouseButtonState::Released },
            now,
        ));
        out
    }

    fn phases(out: &[RawInput]) -> Vec<PointerPhase> {
        out.iter()
            .filter_map(|r| match r {
                RawInput::Pointer { phase, .. } => Some(*phase),
                RawInput::Key { .. } => None,
            })
            .collect()
    }

    #[test]
    fn key_repeat_maps_to_repeat_phase() {
        let mut t = PointerTracker::default();
        let now = Instant::now();
        let out = t.apply_event(InputEvent::Key { code: 65, state: KeyState::Pressed, repeat: true }, now);
        assert_eq!(out, vec![RawInput::key(KeyPhase::Repeat, 65)]);
        let out = t.apply_event(InputEvent::Key { code: 65, state: KeyState::Released, repeat: false }, now);
        assert_eq!(out, vec![RawInput::key(KeyPhase::Up, 65)]);
    }

    #[test]
    fn button_uses_last_pointer_position() {
        let mut t = PointerTracker::default();
        let now = Instant::now();
        t.apply_event(InputEvent::PointerMoved { x: 12.0, y: 34.0 }, now);
        let out = t.apply_event(
            InputEvent::PointerButton { button: MouseButton::Right, state: MouseButtonState::Pressed },
            now,
        );
        assert_eq!(out, vec![RawInput::pointer(PointerPhase::Down, 12.0, 34.0)]);
        assert!(t.button_down(MouseButton::Right));
    }

    #[test]
    fn release_of_primary_synthesises_click() {
        let mut t = PointerTracker::default();
        let out = press(&mut t, Instant::now());
        assert_eq!(phases(&out), vec![PointerPhase::Down, PointerPhase::Up, PointerPhase::Click]);
    }

    #[test]
    fn release_without_press_is_not_a_click() {
        let mut t = PointerTracker::default();
        let out = t.apply_event(
            InputEvent::PointerButton { button: MouseButton::Left, state: MouseButtonState::Released },
            Instant::now(),
        );
        assert_eq!(phases(&out), vec![PointerPhase::Up]);
    }

    #[test]
    fn two_quick_clicks_make_a_double_click() {
        let mut t = PointerTracker::default();
        let t0 = Instant::now();
        press(&mut t, t0);
        let out = press(&mut t, t0 + Duration::from_millis(200));
        assert_eq!(
            phases(&out),
            vec![PointerPhase::Down, PointerPhase::Up, PointerPhase::Click, PointerPhase::DoubleClick]
        );
        // A third click starts a new pair.
        let out = press(&mut t, t0 + Duration::from_millis(300));
        assert!(!phases(&out).contains(&PointerPhase::DoubleClick));
    }

    #[test]
    fn slow_clicks_are_not_a_double_click() {
        let mut t = PointerTracker::default();
        let t0 = Instant::now();
        press(&mut t, t0);
        let out = press(&mut t, t0 + Duration::from_millis(900));
        assert!(!phases(&out).contains(&PointerPhase::DoubleClick));
    }

    #[test]
    fn wheel_lines_convert_to_pixels() {
        let mut t = PointerTracker::default();
        let out = t.apply_event(
            InputEvent::MouseWheel { delta: MouseWheelDelta::Line { x: 0.0, y: -1.5 } },
            Instant::now(),
        );
        assert_eq!(out, vec![RawInput::wheel(0.0, 0.0, -150.0)]);
    }

    #[test]
    fn focus_loss_clears_buttons() {
        let mut t = PointerTracker::default();
        let now = Instant::now();
        t.apply_event(
            InputEvent::PointerButton { button: MouseButton::Left, state: MouseButtonState::Pressed },
            now,
        );
        t.apply_event(InputEvent::Focused(false), now);
        assert!(t.buttons_down.is_empty());
    }
}
