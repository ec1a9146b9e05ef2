//! Coordinate and geometry value types shared by shapes, sprites and input.
//!
//! Canonical stage space:
//! - Stage pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Rotations are radians, positive counter-clockwise as seen on screen.

mod color;
mod extents;
mod frame;
mod vec2;
mod viewport;

pub use color::{Color, LineStyle};
pub use extents::Extents;
pub use frame::Frame;
pub use vec2::Vec2;
pub use viewport::ViewportRect;
