use crate::coords::{LineStyle, Vec2};

/// Straight segment from the local origin to `(delta_x, delta_y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pub delta_x: f32,
    pub delta_y: f32,
    pub line: LineStyle,
}

impl LineShape {
    #[inline]
    pub fn new(delta_x: f32, delta_y: f32) -> Self {
        Self { delta_x, delta_y, line: LineStyle::BLACK_LINE }
    }

    #[inline]
    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.delta_x.abs(), self.delta_y.abs())
    }

    pub(crate) fn outline(&self) -> Vec<Vec2> {
        vec![Vec2::zero(), Vec2::new(self.delta_x, self.delta_y)]
    }
}
