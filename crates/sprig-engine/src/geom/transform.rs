use crate::coords::{Extents, Vec2};

/// Position, uniform scale, rotation and fractional anchor of a sprite.
///
/// `rotation` is in radians, positive counter-clockwise on screen.
/// `anchor` is a fraction of the unscaled size; it is the point that sits
/// at `position` and the pivot for scale and rotation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub scale: f32,
    pub rotation: f32,
    pub anchor: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self { position: Vec2::zero(), scale: 1.0, rotation: 0.0, anchor: Vec2::zero() }
    }
}

impl Transform {
    #[inline]
    pub fn at(position: Vec2) -> Self {
        Self { position, ..Self::default() }
    }

    /// Anchor point in unscaled local coordinates.
    #[inline]
    pub fn anchor_point(&self, size: Vec2) -> Vec2 {
        Vec2::new(size.x * self.anchor.x, size.y * self.anchor.y)
    }

    /// Applies anchor, scale and rotation to `base`, but not the translation.
    ///
    /// Keeping the result position-free lets callers move a sprite without
    /// redoing this work; add `position` to get stage coordinates.
    pub fn local_vertices(&self, base: &[Vec2], size: Vec2) -> Vec<Vec2> {
        let pivot = self.anchor_point(size);
        let rotate = self.rotation != 0.0;
        let (s, c) = self.rotation.sin_cos();
        base.iter()
            .map(|&v| {
                let mut d = v - pivot;
                if self.scale != 1.0 {
                    d = d * self.scale;
                }
                if rotate {
                    Vec2::new(d.x * c + d.y * s, -d.x * s + d.y * c)
                } else {
                    d
                }
            })
            .collect()
    }

    /// `base` in stage coordinates.
    pub fn world_vertices(&self, base: &[Vec2], size: Vec2) -> Vec<Vec2> {
        let mut out = self.local_vertices(base, size);
        for p in &mut out {
            *p = *p + self.position;
        }
        out
    }

    /// Bounding box of a circle of displayed diameter `diameter`.
    ///
    /// Closed form: the circle's center sits at distance
    /// `L = D·|anchor − (½,½)|` from the anchor, in direction
    /// `atan2(ay − ½, ½ − ax) + rotation`.
    pub fn circle_extents(&self, diameter: f32) -> Extents {
        let ax = self.anchor.x - 0.5;
        let ay = self.anchor.y - 0.5;
        let theta = ay.atan2(-ax) + self.rotation;
        let l = diameter * (ax * ax + ay * ay).sqrt();
        let xmin = self.position.x + l * theta.cos() - diameter / 2.0;
        let ymin = self.position.y - l * theta.sin() - diameter / 2.0;
        Extents::new(xmin, xmin + diameter, ymin, ymin + diameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn approx_ext(a: Extents, b: Extents) -> bool {
        approx(a.xmin, b.xmin) && approx(a.xmax, b.xmax) && approx(a.ymin, b.ymin) && approx(a.ymax, b.ymax)
    }

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(100.0, 0.0),
        ]
    }

    // ── world_vertices ────────────────────────────────────────────────────

    #[test]
    fn identity_transform_only_translates() {
        let t = Transform::at(Vec2::new(7.0, -3.0));
        let base = square();
        let world = t.world_vertices(&base, Vec2::new(100.0, 100.0));
        let expected: Vec<Vec2> = base.iter().map(|&v| v + Vec2::new(7.0, -3.0)).collect();
        assert_eq!(world, expected);
    }

    #[test]
    fn centered_anchor_shifts_by_half_size() {
        let t = Transform { anchor: Vec2::new(0.5, 0.5), ..Transform::at(Vec2::new(10.0, 10.0)) };
        let e = Extents::from_points(&t.world_vertices(&square(), Vec2::new(100.0, 100.0))).unwrap();
        assert_eq!(e, Extents::new(-40.0, 60.0, -40.0, 60.0));
    }

    #[test]
    fn scale_pivots_on_anchor() {
        let t = Transform {
            scale: 2.0,
            anchor: Vec2::new(0.5, 0.5),
            ..Transform::at(Vec2::new(0.0, 0.0))
        };
        let e = Extents::from_points(&t.world_vertices(&square(), Vec2::new(100.0, 100.0))).unwrap();
        assert_eq!(e, Extents::new(-100.0, 100.0, -100.0, 100.0));
    }

    #[test]
    fn quarter_turn_about_corner() {
        // Rotating a 100x20 bar CCW by 90° about its top-left corner lays it
        // upward along -Y.
        let base = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 20.0),
            Vec2::new(100.0, 20.0),
            Vec2::new(100.0, 0.0),
        ];
        let t = Transform { rotation: FRAC_PI_2, ..Transform::default() };
        let e = Extents::from_points(&t.world_vertices(&base, Vec2::new(100.0, 20.0))).unwrap();
        assert!(approx_ext(e, Extents::new(0.0, 20.0, -100.0, 0.0)), "{e:?}");
    }

    // ── circle_extents ────────────────────────────────────────────────────

    #[test]
    fn circle_with_corner_anchor_starts_at_position() {
        let t = Transform::at(Vec2::new(30.0, 40.0));
        assert!(approx_ext(t.circle_extents(20.0), Extents::new(30.0, 50.0, 40.0, 60.0)));
    }

    #[test]
    fn circle_with_center_anchor_is_centered() {
        let t = Transform { anchor: Vec2::new(0.5, 0.5), ..Transform::at(Vec2::new(0.0, 0.0)) };
        assert!(approx_ext(t.circle_extents(150.0), Extents::new(-75.0, 75.0, -75.0, 75.0)));
    }

    #[test]
    fn circle_center_anchor_ignores_rotation() {
        let t = Transform {
            anchor: Vec2::new(0.5, 0.5),
            rotation: 1.3,
            ..Transform::at(Vec2::new(5.0, 5.0))
        };
        assert!(approx_ext(t.circle_extents(10.0), Extents::new(0.0, 10.0, 0.0, 10.0)));
    }

    #[test]
    fn circle_corner_anchor_half_turn_swings_to_other_side() {
        // The center starts down-right of the anchor; half a turn puts it up-left.
        let t = Transform { rotation: PI, ..Transform::default() };
        assert!(approx_ext(t.circle_extents(20.0), Extents::new(-20.0, 0.0, -20.0, 0.0)));
    }
}
