//! Transform, extents and collision geometry.
//!
//! Collision is two-phase: a bounding-box broad phase that rejects most
//! pairs, then a narrow phase chosen by the pair of outline kinds.

mod collision;
mod narrow;
mod transform;

pub use collision::{Collider, Outline, collides};
pub use narrow::{
    Circle, ConservativeNarrowPhase, ExactNarrowPhase, NarrowPhase, point_in_polygon,
    segment_distance_squared, segments_intersect,
};
pub use transform::Transform;
