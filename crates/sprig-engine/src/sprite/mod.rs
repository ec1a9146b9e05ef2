//! Sprites: a shape placed on the stage with a transform.
//!
//! A sprite owns its cached extents. Every mutator that changes the outline
//! in a way other than pure translation marks the cache dirty; the next query
//! recomputes it. Pure translation shifts the cached box in place.

mod builder;
mod id;

pub use builder::SpriteBuilder;
pub use id::{Kind, SpriteId};

use std::rc::Rc;

use crate::coords::{Extents, Vec2};
use crate::geom::{Circle, Collider, NarrowPhase, Outline, Transform, collides};
use crate::registry::RegistryId;
use crate::render::{DisplayCaps, DisplayHandle, DisplayProps, TextureHandle};
use crate::shape::Shape;

/// A positioned, transformable, collidable stage object.
#[derive(Debug)]
pub struct Sprite {
    id: SpriteId,
    registry: RegistryId,
    kind: Kind,

    shape: Rc<Shape>,
    edge: Rc<Shape>,
    /// Local outline of `edge` before any transform.
    base: Vec<Vec2>,

    display: DisplayHandle,
    caps: DisplayCaps,
    /// Unscaled display size.
    size: Vec2,
    transform: Transform,
    visible: bool,
    image_index: usize,

    extents: Extents,
    extents_dirty: bool,
    /// `base` after anchor, scale and rotation; add the position for stage coordinates.
    local_outline: Vec<Vec2>,

    display_dirty: bool,
}

impl Sprite {
    #[inline]
    pub fn builder(shape: impl Into<Rc<Shape>>) -> SpriteBuilder {
        SpriteBuilder::new(shape)
    }

    #[inline]
    pub fn id(&self) -> SpriteId {
        self.id
    }

    /// Registry this sprite was built for.
    #[inline]
    pub fn registry(&self) -> RegistryId {
        self.registry
    }

    #[inline]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Display shape.
    #[inline]
    pub fn shape(&self) -> &Rc<Shape> {
        &self.shape
    }

    /// Collision boundary shape; the display shape unless one was supplied.
    #[inline]
    pub fn edge(&self) -> &Rc<Shape> {
        &self.edge
    }

    #[inline]
    pub fn display_handle(&self) -> DisplayHandle {
        self.display
    }

    #[inline]
    pub fn caps(&self) -> DisplayCaps {
        self.caps
    }

    // ── position ──────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.transform.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.transform.position.y
    }

    pub fn set_position(&mut self, p: Vec2) {
        let d = p - self.transform.position;
        self.translate(d.x, d.y);
    }

    pub fn set_x(&mut self, x: f32) {
        self.translate(x - self.transform.position.x, 0.0);
    }

    pub fn set_y(&mut self, y: f32) {
        self.translate(0.0, y - self.transform.position.y);
    }

    /// Moves the sprite; the cached extents shift by the same delta.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.transform.position = self.transform.position + Vec2::new(dx, dy);
        self.extents.translate(dx, dy);
        self.display_dirty = true;
    }

    // ── transform (capability-gated) ──────────────────────────────────────

    /// Uniform scale; 1.0 when the display object cannot scale.
    #[inline]
    pub fn scale(&self) -> f32 {
        if self.caps.scale { self.transform.scale } else { 1.0 }
    }

    pub fn set_scale(&mut self, scale: f32) {
        if !self.caps.scale {
            log::debug!("sprite {}: display object has no scale, ignoring", self.id);
            return;
        }
        self.transform.scale = scale;
        self.mark_dirty();
    }

    /// Rotation in radians, counter-clockwise; 0.0 when unsupported.
    #[inline]
    pub fn rotation(&self) -> f32 {
        if self.caps.rotation { self.transform.rotation } else { 0.0 }
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        if !self.caps.rotation {
            log::debug!("sprite {}: display object has no rotation, ignoring", self.id);
            return;
        }
        self.transform.rotation = rotation;
        self.mark_dirty();
    }

    /// Fractional anchor; `(0, 0)` when unsupported.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        if self.caps.anchor { self.transform.anchor } else { Vec2::zero() }
    }

    pub fn set_anchor(&mut self, anchor: Vec2) {
        if !self.caps.anchor {
            log::debug!("sprite {}: display object has no anchor, ignoring", self.id);
            return;
        }
        self.transform.anchor = anchor;
        self.mark_dirty();
    }

    pub fn set_anchor_x(&mut self, ax: f32) {
        let a = self.anchor();
        self.set_anchor(Vec2::new(ax, a.y));
    }

    pub fn set_anchor_y(&mut self, ay: f32) {
        let a = self.anchor();
        self.set_anchor(Vec2::new(a.x, ay));
    }

    /// Transform with unsupported properties replaced by their defaults.
    pub fn transform(&self) -> Transform {
        Transform {
            position: self.transform.position,
            scale: self.scale(),
            rotation: self.rotation(),
            anchor: self.anchor(),
        }
    }

    // ── size ──────────────────────────────────────────────────────────────

    /// Displayed (scaled) width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x * self.scale()
    }

    /// Displayed (scaled) height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y * self.scale()
    }

    pub fn set_width(&mut self, w: f32) {
        self.size.x = w / self.scale();
        self.mark_dirty();
    }

    pub fn set_height(&mut self, h: f32) {
        self.size.y = h / self.scale();
        self.mark_dirty();
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.display_dirty = true;
    }

    // ── extents ───────────────────────────────────────────────────────────

    #[inline]
    fn mark_dirty(&mut self) {
        self.extents_dirty = true;
        self.display_dirty = true;
    }

    #[inline]
    pub fn extents_dirty(&self) -> bool {
        self.extents_dirty
    }

    /// Cached extents as they are, without recomputing.
    #[inline]
    pub fn cached_extents(&self) -> Extents {
        self.extents
    }

    /// Up-to-date extents, recomputing only if the cache is dirty.
    pub fn extents(&mut self) -> Extents {
        self.refresh_extents();
        self.extents
    }

    /// Recomputes the cached extents if they are dirty.
    pub fn refresh_extents(&mut self) {
        if !self.extents_dirty {
            return;
        }
        let t = self.transform();
        if self.edge.is_circle() {
            self.local_outline.clear();
            self.extents = t.circle_extents(self.collision_diameter());
        } else {
            self.local_outline = t.local_vertices(&self.base, self.size);
            let p = t.position;
            let world: Vec<Vec2> = self.local_outline.iter().map(|&v| v + p).collect();
            self.extents = Extents::from_points(&world).unwrap_or(Extents::point(p));
        }
        self.extents_dirty = false;
    }

    /// Diameter of a circular collision boundary. A circle supplied as a
    /// separate edge keeps its own size; otherwise the displayed width.
    fn collision_diameter(&self) -> f32 {
        match &*self.edge {
            Shape::Circle(c) if !Rc::ptr_eq(&self.shape, &self.edge) => c.diameter() * self.scale(),
            _ => self.width(),
        }
    }

    /// Collision outline in stage coordinates; empty for circles.
    pub fn world_vertices(&mut self) -> Vec<Vec2> {
        self.refresh_extents();
        let p = self.transform.position;
        self.local_outline.iter().map(|&v| v + p).collect()
    }

    /// Outline from the current cache. Callers refresh first.
    pub(crate) fn outline(&self) -> Outline {
        if self.edge.is_circle() {
            Outline::Circle(Circle {
                center: self.extents.center(),
                radius: self.collision_diameter() / 2.0,
            })
        } else {
            let p = self.transform.position;
            Outline::Polygon(self.local_outline.iter().map(|&v| v + p).collect())
        }
    }

    /// Collision predicate between two sprites.
    ///
    /// A sprite never collides with itself. Both caches are refreshed, the
    /// bounding boxes are compared, and only overlapping pairs reach `narrow`.
    pub fn collides_with(&mut self, other: &mut Sprite, narrow: &dyn NarrowPhase) -> bool {
        if self.id == other.id {
            return false;
        }
        self.refresh_extents();
        other.refresh_extents();
        collides_fresh(self, other, narrow)
    }

    // ── images ────────────────────────────────────────────────────────────

    /// Number of images this sprite can show (1 for non-image shapes).
    pub fn image_count(&self) -> usize {
        match &*self.shape {
            Shape::Image(img) => img.len().max(1),
            _ => 1,
        }
    }

    #[inline]
    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn first_image(&mut self) {
        self.show_image(0);
    }

    pub fn last_image(&mut self) {
        self.show_image(self.image_count() - 1);
    }

    /// Advances one image; past the end, wraps to the first or stays on the last.
    pub fn next_image(&mut self, wrap: bool) {
        let n = self.image_count();
        let next = self.image_index + 1;
        self.show_image(if next < n { next } else if wrap { 0 } else { n - 1 });
    }

    /// Steps back one image; before the start, wraps to the last or stays on the first.
    pub fn prev_image(&mut self, wrap: bool) {
        let n = self.image_count();
        let prev = match self.image_index.checked_sub(1) {
            Some(i) => i,
            None if wrap => n - 1,
            None => 0,
        };
        self.show_image(prev);
    }

    /// Shows image `index`, clamped to the last image.
    pub fn set_image(&mut self, index: usize) {
        let last = self.image_count() - 1;
        if index > last {
            log::trace!("sprite {}: image {index} out of range, clamping to {last}", self.id);
        }
        self.show_image(index.min(last));
    }

    fn show_image(&mut self, index: usize) {
        if index != self.image_index {
            self.image_index = index;
            self.display_dirty = true;
        }
    }

    fn texture(&self) -> Option<TextureHandle> {
        match &*self.shape {
            Shape::Image(img) => img.textures().get(self.image_index).map(|t| t.handle),
            _ => None,
        }
    }

    // ── display sync ──────────────────────────────────────────────────────

    /// Properties as the renderer should see them.
    pub fn display_props(&self) -> DisplayProps {
        DisplayProps {
            position: self.transform.position,
            scale: self.scale(),
            rotation: -self.rotation(),
            anchor: self.anchor(),
            visible: self.visible,
            size: Vec2::new(self.width(), self.height()),
            texture: self.texture(),
        }
    }

    /// Returns the props to push if anything changed since the last call.
    pub(crate) fn take_display_update(&mut self) -> Option<DisplayProps> {
        if !self.display_dirty {
            return None;
        }
        self.display_dirty = false;
        Some(self.display_props())
    }
}

/// Collision test on sprites whose extents are already fresh.
pub(crate) fn collides_fresh(a: &Sprite, b: &Sprite, narrow: &dyn NarrowPhase) -> bool {
    let oa = || a.outline();
    let ob = || b.outline();
    collides(
        &Collider { extents: a.extents, outline: &oa },
        &Collider { extents: b.extents, outline: &ob },
        narrow,
    )
}
