use crate::coords::{Color, LineStyle, Vec2};

/// Filled circle.
///
/// Circles never produce an outline vertex list: extents and collision use
/// closed-form math on the radius instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub radius: f32,
    pub line: LineStyle,
    pub fill: Color,
}

impl CircleShape {
    #[inline]
    pub fn new(radius: f32) -> Self {
        Self { radius, line: LineStyle::BLACK_LINE, fill: Color::BLACK }
    }

    #[inline]
    pub fn with_style(mut self, line: LineStyle, fill: Color) -> Self {
        self.line = line;
        self.fill = fill;
        self
    }

    #[inline]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.diameter(), self.diameter())
    }
}
