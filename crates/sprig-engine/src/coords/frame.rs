use super::Vec2;

/// Axis-aligned sub-region of a larger image or sprite sheet.
///
/// `(x, y)` is the upper-left corner. `center` is derived: moving it
/// translates the corner and keeps `w`/`h` fixed.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Frame {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn origin(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Moves the frame so its center lands on `c`.
    #[inline]
    pub fn set_center(&mut self, c: Vec2) {
        let current = self.center();
        self.x += c.x - current.x;
        self.y += c.y - current.y;
    }

    /// Returns a copy shifted by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Frame {
        Frame::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}
