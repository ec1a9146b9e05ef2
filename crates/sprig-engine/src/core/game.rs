use crate::time::FrameTime;

use super::app::App;

/// Control directive returned by per-tick callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Per-tick logic run by [`App::tick`].
///
/// Closures of the form `FnMut(&mut App, FrameTime) -> AppControl` implement
/// this trait directly.
pub trait Game {
    fn step(&mut self, app: &mut App, time: FrameTime) -> AppControl;
}

impl<F> Game for F
where
    F: FnMut(&mut App, FrameTime) -> AppControl,
{
    fn step(&mut self, app: &mut App, time: FrameTime) -> AppControl {
        self(app, time)
    }
}
