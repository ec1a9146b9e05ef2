use crate::geom::{ConservativeNarrowPhase, ExactNarrowPhase, NarrowPhase};
use crate::input::DoubleClickConfig;

/// Narrow-phase strategy used once two bounding boxes overlap.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum CollisionModel {
    /// Edge intersection plus containment; handles concave outlines.
    #[default]
    Exact,
    /// Overlapping bounding boxes count as a collision.
    Conservative,
}

impl CollisionModel {
    pub fn narrow_phase(self) -> Box<dyn NarrowPhase> {
        match self {
            CollisionModel::Exact => Box::new(ExactNarrowPhase),
            CollisionModel::Conservative => Box::new(ConservativeNarrowPhase),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    /// Stage width in pixels; 0 takes the renderer viewport width.
    pub width: u32,
    /// Stage height in pixels; 0 takes the renderer viewport height.
    pub height: u32,
    pub collision: CollisionModel,
    pub double_click: DoubleClickConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "sprig".to_owned(),
            width: 0,
            height: 0,
            collision: CollisionModel::default(),
            double_click: DoubleClickConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn sized(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_collision(mut self, collision: CollisionModel) -> Self {
        self.collision = collision;
        self
    }
}
