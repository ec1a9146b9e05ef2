//! Shape descriptors.
//!
//! A [`Shape`] describes an outline used both for display and for the
//! collision boundary of a sprite. Shapes are immutable once built and are
//! shared read-only between sprites through `Rc<Shape>`; text blocks are
//! the exception and are copied per sprite.
//!
//! Shape-specific helpers live in one file per shape.

mod circle;
mod ellipse;
mod image;
mod line;
mod polygon;
mod rect;
mod text;

pub use circle::CircleShape;
pub use ellipse::EllipseShape;
pub use image::{ImageAsset, SheetDirection, SheetLayout};
pub use line::LineShape;
pub use polygon::PolygonShape;
pub use rect::RectangleShape;
pub use text::{TextAlign, TextBlock};

use std::rc::Rc;

use crate::coords::Vec2;

/// Discriminant of [`Shape`], used for collision dispatch.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Ellipse,
    Polygon,
    Line,
    Text,
    Image,
}

/// Closed set of drawable outlines.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(RectangleShape),
    Circle(CircleShape),
    Ellipse(EllipseShape),
    Polygon(PolygonShape),
    Line(LineShape),
    Text(TextBlock),
    Image(ImageAsset),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Text(_) => ShapeKind::Text,
            Shape::Image(_) => ShapeKind::Image,
        }
    }

    #[inline]
    pub fn is_circle(&self) -> bool {
        matches!(self, Shape::Circle(_))
    }

    /// Unscaled size known without asking the renderer.
    ///
    /// `None` for text, whose size depends on font metrics.
    pub fn local_size(&self) -> Option<Vec2> {
        match self {
            Shape::Rectangle(r) => Some(r.size()),
            Shape::Circle(c) => Some(c.size()),
            Shape::Ellipse(e) => Some(e.size()),
            Shape::Polygon(p) => Some(p.size()),
            Shape::Line(l) => Some(l.size()),
            Shape::Image(i) => Some(i.size()),
            Shape::Text(_) => None,
        }
    }

    /// Local outline before any transform.
    ///
    /// Rectangles, images and text give the corners of `(0,0)-(w,h)`;
    /// `text_size` supplies the measured size for text. Circles give an empty
    /// list: they are handled analytically.
    pub fn base_vertices(&self, text_size: Vec2) -> Vec<Vec2> {
        match self {
            Shape::Rectangle(r) => rect::box_vertices(r.size()),
            Shape::Image(i) => rect::box_vertices(i.size()),
            Shape::Text(_) => rect::box_vertices(text_size),
            Shape::Polygon(p) => p.outline(),
            Shape::Line(l) => l.outline(),
            Shape::Ellipse(e) => e.outline(),
            Shape::Circle(_) => Vec::new(),
        }
    }
}

macro_rules! shape_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl From<$ty> for Shape {
            fn from(s: $ty) -> Self {
                Shape::$variant(s)
            }
        }

        impl From<$ty> for Rc<Shape> {
            fn from(s: $ty) -> Self {
                Rc::new(Shape::$variant(s))
            }
        }
    )*};
}

shape_from! {
    RectangleShape => Rectangle,
    CircleShape => Circle,
    EllipseShape => Ellipse,
    PolygonShape => Polygon,
    LineShape => Line,
    TextBlock => Text,
    ImageAsset => Image,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn rectangle_vertices_are_corners() {
        let s: Shape = RectangleShape::new(30.0, 150.0).into();
        assert_eq!(
            s.base_vertices(Vec2::zero()),
            vec![v(0.0, 0.0), v(0.0, 150.0), v(30.0, 150.0), v(30.0, 0.0)]
        );
    }

    #[test]
    fn polygon_vertices_drop_closing_point() {
        let s: Shape =
            PolygonShape::new([(0.0, 0.0), (50.0, 75.0), (100.0, 60.0), (0.0, 0.0)]).into();
        assert_eq!(s.base_vertices(Vec2::zero()), vec![v(0.0, 0.0), v(50.0, 75.0), v(100.0, 60.0)]);
    }

    #[test]
    fn line_vertices_are_endpoints() {
        let s: Shape = LineShape::new(500.0, 0.0).into();
        assert_eq!(s.base_vertices(Vec2::zero()), vec![v(0.0, 0.0), v(500.0, 0.0)]);
    }

    #[test]
    fn ellipse_vertices_are_bounding_box() {
        let s: Shape = EllipseShape::new(10.0, 3.0).into();
        assert_eq!(
            s.base_vertices(Vec2::zero()),
            vec![v(0.0, 0.0), v(0.0, 6.0), v(20.0, 6.0), v(20.0, 0.0)]
        );
    }

    #[test]
    fn text_vertices_use_measured_size() {
        let s: Shape = TextBlock::new("hello").into();
        assert_eq!(s.local_size(), None);
        assert_eq!(s.base_vertices(v(40.0, 20.0))[2], v(40.0, 20.0));
    }

    #[test]
    fn circle_has_no_vertices() {
        let s: Shape = CircleShape::new(5.0).into();
        assert!(s.base_vertices(Vec2::zero()).is_empty());
        assert_eq!(s.local_size(), Some(v(10.0, 10.0)));
        assert_eq!(s.kind(), ShapeKind::Circle);
    }

    #[test]
    fn shapes_convert_into_shared_handles() {
        let rc: Rc<Shape> = RectangleShape::new(2.0, 3.0).into();
        assert_eq!(rc.kind(), ShapeKind::Rectangle);
    }
}
