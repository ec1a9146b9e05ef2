//! Narrow-phase overlap tests.
//!
//! These run only after the bounding boxes of two sprites overlap. They are
//! pluggable through [`NarrowPhase`] so callers can trade precision for
//! speed, or count calls in tests.

use crate::coords::Vec2;

/// A circle in stage coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// Exact overlap strategy for the non circle-vs-circle cases.
///
/// Outlines are vertex lists in stage coordinates: three or more points form
/// a closed polygon, two points a segment, one point a point.
pub trait NarrowPhase {
    fn circle_polygon(&self, circle: Circle, outline: &[Vec2]) -> bool;
    fn polygon_polygon(&self, a: &[Vec2], b: &[Vec2]) -> bool;
}

/// Edge-intersection + containment tests.
///
/// Handles concave polygons and segments. Touching counts as overlapping.
#[derive(Debug, Copy, Clone, Default)]
pub struct ExactNarrowPhase;

/// Reports overlap whenever the bounding boxes overlap.
#[derive(Debug, Copy, Clone, Default)]
pub struct ConservativeNarrowPhase;

impl NarrowPhase for ExactNarrowPhase {
    fn circle_polygon(&self, circle: Circle, outline: &[Vec2]) -> bool {
        if outline.is_empty() {
            return false;
        }
        if outline.len() >= 3 && point_in_polygon(circle.center, outline) {
            return true;
        }
        let r2 = circle.radius * circle.radius;
        edges(outline).any(|(p, q)| segment_distance_squared(circle.center, p, q) <= r2)
    }

    fn polygon_polygon(&self, a: &[Vec2], b: &[Vec2]) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }
        for (p1, p2) in edges(a) {
            for (q1, q2) in edges(b) {
                if segments_intersect(p1, p2, q1, q2) {
                    return true;
                }
            }
        }
        // No crossing edges: overlap only if one lies entirely inside the other.
        (b.len() >= 3 && point_in_polygon(a[0], b)) || (a.len() >= 3 && point_in_polygon(b[0], a))
    }
}

impl NarrowPhase for ConservativeNarrowPhase {
    fn circle_polygon(&self, _circle: Circle, _outline: &[Vec2]) -> bool {
        true
    }

    fn polygon_polygon(&self, _a: &[Vec2], _b: &[Vec2]) -> bool {
        true
    }
}

/// Outline edges: a closed loop for polygons, one edge for a segment,
/// a zero-length edge for a single point.
fn edges(outline: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = outline.len();
    let count = match n {
        0 => 0,
        1 | 2 => 1,
        _ => n,
    };
    (0..count).map(move |i| (outline[i], outline[(i + 1) % n]))
}

/// Even-odd ray cast. Points exactly on an edge may land either way; the
/// edge tests catch those.
pub fn point_in_polygon(p: Vec2, poly: &[Vec2]) -> bool {
    let mut inside = false;
    let n = poly.len();
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let (a, b) = (poly[i], poly[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn orientation(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).cross(c - a)
}

fn on_segment(p: Vec2, a: Vec2, b: Vec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Closed-segment intersection, including collinear overlap and touching ends.
pub fn segments_intersect(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(p1, q1, q2))
        || (d2 == 0.0 && on_segment(p2, q1, q2))
        || (d3 == 0.0 && on_segment(q1, p1, p2))
        || (d4 == 0.0 && on_segment(q2, p1, p2))
}

/// Squared distance from `p` to the closed segment `a`-`b`.
pub fn segment_distance_squared(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 == 0.0 {
        return (p - a).length_squared();
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).length_squared()
}
