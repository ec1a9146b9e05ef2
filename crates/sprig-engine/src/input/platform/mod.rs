//! Window-system adapters producing [`super::InputEvent`]s.

pub mod winit;
