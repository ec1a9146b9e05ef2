use crate::coords::{Color, LineStyle, Vec2};

/// Filled rectangle with its upper-left corner at the local origin.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleShape {
    pub width: f32,
    pub height: f32,
    pub line: LineStyle,
    pub fill: Color,
}

impl RectangleShape {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, line: LineStyle::BLACK_LINE, fill: Color::BLACK }
    }

    #[inline]
    pub fn with_style(mut self, line: LineStyle, fill: Color) -> Self {
        self.line = line;
        self.fill = fill;
        self
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Corners of `(0,0)-(w,h)` in outline order.
pub(crate) fn box_vertices(size: Vec2) -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, size.y),
        Vec2::new(size.x, size.y),
        Vec2::new(size.x, 0.0),
    ]
}
