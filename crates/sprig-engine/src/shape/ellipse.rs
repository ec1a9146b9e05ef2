use crate::coords::{Color, LineStyle, Vec2};

use super::rect::box_vertices;

/// Filled axis-aligned ellipse described by its half-width and half-height.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseShape {
    pub half_width: f32,
    pub half_height: f32,
    pub line: LineStyle,
    pub fill: Color,
}

impl EllipseShape {
    #[inline]
    pub fn new(half_width: f32, half_height: f32) -> Self {
        Self { half_width, half_height, line: LineStyle::BLACK_LINE, fill: Color::BLACK }
    }

    #[inline]
    pub fn with_style(mut self, line: LineStyle, fill: Color) -> Self {
        self.line = line;
        self.fill = fill;
        self
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.half_width * 2.0, self.half_height * 2.0)
    }

    /// Outline used for collision: the ellipse's bounding box.
    pub(crate) fn outline(&self) -> Vec<Vec2> {
        box_vertices(self.size())
    }
}
