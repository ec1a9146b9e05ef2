use crate::coords::{Extents, Vec2};

use super::narrow::{Circle, NarrowPhase};

/// Collision outline of one sprite in stage coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Circle(Circle),
    Polygon(Vec<Vec2>),
}

/// What the collision predicate needs from a sprite: fresh extents plus an
/// outline that is only built when the broad phase passes.
pub struct Collider<'a> {
    pub extents: Extents,
    pub outline: &'a dyn Fn() -> Outline,
}

/// Broad phase on `extents`, then the narrow phase picked by outline kinds.
///
/// Circle pairs compare center distance against the sum of radii; every
/// other pairing goes through `narrow`. Identity is the caller's concern.
pub fn collides(a: &Collider<'_>, b: &Collider<'_>, narrow: &dyn NarrowPhase) -> bool {
    if !a.extents.overlaps(b.extents) {
        return false;
    }
    match ((a.outline)(), (b.outline)()) {
        (Outline::Circle(ca), Outline::Circle(cb)) => {
            ca.center.distance(cb.center) <= ca.radius + cb.radius
        }
        (Outline::Circle(c), Outline::Polygon(p)) | (Outline::Polygon(p), Outline::Circle(c)) => {
            narrow.circle_polygon(c, &p)
        }
        (Outline::Polygon(pa), Outline::Polygon(pb)) => narrow.polygon_polygon(&pa, &pb),
    }
}
