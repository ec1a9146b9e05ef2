//! Scene contents kept by in-process renderers.
//!
//! Responsibilities:
//! - store attached display objects with their latest properties
//! - provide deterministic paint order (insertion order)

mod list;

pub use list::{DisplayItem, DisplayList};
