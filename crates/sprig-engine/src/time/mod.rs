//! Frame timing.
//!
//! The session owns one [`FrameClock`] and advances it once per tick. The
//! clock itself never schedules anything: ticks are driven by whoever owns the
//! display refresh (a window loop, or a test calling `App::tick`).

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
