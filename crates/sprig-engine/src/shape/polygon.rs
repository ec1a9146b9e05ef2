use crate::coords::{Color, Extents, LineStyle, Vec2};

/// Filled closed polygon.
///
/// The stored path is always closed: its last point repeats the first.
/// Paths passed in open are closed on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    path: Vec<Vec2>,
    pub line: LineStyle,
    pub fill: Color,
}

impl PolygonShape {
    pub fn new<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Vec2>,
    {
        let mut path: Vec<Vec2> = points.into_iter().map(Into::into).collect();
        if let (Some(&first), Some(&last)) = (path.first(), path.last()) {
            if path.len() == 1 || first != last {
                path.push(first);
            }
        }
        Self { path, line: LineStyle::BLACK_LINE, fill: Color::BLACK }
    }

    #[inline]
    pub fn with_style(mut self, line: LineStyle, fill: Color) -> Self {
        self.line = line;
        self.fill = fill;
        self
    }

    /// The closed path, including the repeated closing point.
    #[inline]
    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    /// Distinct outline points (closing point dropped).
    pub(crate) fn outline(&self) -> Vec<Vec2> {
        match self.path.split_last() {
            Some((_, open)) => open.to_vec(),
            None => Vec::new(),
        }
    }

    /// Local bounds measured from the origin, matching the drawn texture.
    pub fn size(&self) -> Vec2 {
        match Extents::from_points(&self.path) {
            Some(e) => Vec2::new(e.xmax.max(0.0), e.ymax.max(0.0)),
            None => Vec2::zero(),
        }
    }
}
