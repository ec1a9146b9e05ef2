use super::Vec2;

/// Axis-aligned bounding box of a sprite in stage coordinates.
///
/// Unlike [`super::Frame`], extents are stored as min/max pairs because the
/// collision broad phase compares edges directly.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Extents {
    pub xmin: f32,
    pub xmax: f32,
    pub ymin: f32,
    pub ymax: f32,
}

impl Extents {
    #[inline]
    pub const fn new(xmin: f32, xmax: f32, ymin: f32, ymax: f32) -> Self {
        Self { xmin, xmax, ymin, ymax }
    }

    /// Degenerate box at a single point.
    #[inline]
    pub const fn point(p: Vec2) -> Self {
        Self::new(p.x, p.x, p.y, p.y)
    }

    /// Tight box around `points`, or `None` when there are none.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut e = Extents::point(*first);
        for p in rest {
            e.xmin = e.xmin.min(p.x);
            e.xmax = e.xmax.max(p.x);
            e.ymin = e.ymin.min(p.y);
            e.ymax = e.ymax.max(p.y);
        }
        Some(e)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.xmax - self.xmin
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.ymax - self.ymin
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new((self.xmin + self.xmax) / 2.0, (self.ymin + self.ymax) / 2.0)
    }

    #[inline]
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.xmin += dx;
        self.xmax += dx;
        self.ymin += dy;
        self.ymax += dy;
    }

    /// Closed-interval overlap; boxes that only touch still overlap.
    #[inline]
    pub fn overlaps(self, other: Extents) -> bool {
        !(self.xmin > other.xmax
            || self.xmax < other.xmin
            || self.ymin > other.ymax
            || self.ymax < other.ymin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(xmin: f32, xmax: f32, ymin: f32, ymax: f32) -> Extents {
        Extents::new(xmin, xmax, ymin, ymax)
    }

    // ── from_points ───────────────────────────────────────────────────────

    #[test]
    fn from_points_empty_is_none() {
        assert!(Extents::from_points(&[]).is_none());
    }

    #[test]
    fn from_points_tracks_min_and_max() {
        let pts = [Vec2::new(3.0, -1.0), Vec2::new(-2.0, 4.0), Vec2::new(0.0, 0.0)];
        assert_eq!(Extents::from_points(&pts), Some(e(-2.0, 3.0, -1.0, 4.0)));
    }

    // ── overlaps ──────────────────────────────────────────────────────────

    #[test]
    fn touching_edges_overlap() {
        assert!(e(0.0, 10.0, 0.0, 10.0).overlaps(e(10.0, 20.0, 0.0, 10.0)));
    }

    #[test]
    fn separated_boxes_do_not_overlap() {
        assert!(!e(0.0, 10.0, 0.0, 10.0).overlaps(e(10.5, 20.0, 0.0, 10.0)));
        assert!(!e(0.0, 10.0, 0.0, 10.0).overlaps(e(0.0, 10.0, -5.0, -0.1)));
    }

    #[test]
    fn translate_shifts_all_edges() {
        let mut b = e(0.0, 1.0, 2.0, 3.0);
        b.translate(5.0, -2.0);
        assert_eq!(b, e(5.0, 6.0, 0.0, 1.0));
    }
}
