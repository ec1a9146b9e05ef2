//! Live sprite set.
//!
//! The registry owns every sprite of a session, remembers insertion order
//! (which is also draw order) and keeps one bucket per [`Kind`] so collision
//! queries can be narrowed to a category.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::RegistryError;
use crate::geom::{ExactNarrowPhase, NarrowPhase};
use crate::sprite::{Kind, Sprite, SpriteId, collides_fresh};

static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one registry; sprites remember which one they were built for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RegistryId(u64);

impl RegistryId {
    fn next() -> Self {
        RegistryId(NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// An id no registry owns; sprites built with it can't be registered.
    #[cfg(test)]
    pub(crate) fn detached() -> Self {
        Self::next()
    }
}

impl fmt::Display for RegistryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

pub struct Registry {
    id: RegistryId,
    sprites: HashMap<SpriteId, Sprite>,
    order: Vec<SpriteId>,
    by_kind: HashMap<Kind, Vec<SpriteId>>,
    narrow: Box<dyn NarrowPhase>,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_narrow_phase(Box::new(ExactNarrowPhase))
    }

    pub fn with_narrow_phase(narrow: Box<dyn NarrowPhase>) -> Self {
        Self {
            id: RegistryId::next(),
            sprites: HashMap::new(),
            order: Vec::new(),
            by_kind: HashMap::new(),
            narrow,
        }
    }

    #[inline]
    pub fn id(&self) -> RegistryId {
        self.id
    }

    pub fn set_narrow_phase(&mut self, narrow: Box<dyn NarrowPhase>) {
        self.narrow = narrow;
    }

    #[inline]
    pub fn narrow_phase(&self) -> &dyn NarrowPhase {
        &*self.narrow
    }

    // ── membership ────────────────────────────────────────────────────────

    /// Adds `sprite` to the live set and to its kind bucket.
    pub fn register(&mut self, sprite: Sprite) -> Result<SpriteId, RegistryError> {
        let id = sprite.id();
        if sprite.registry() != self.id {
            return Err(RegistryError::ForeignSprite { sprite: id, owner: sprite.registry(), registry: self.id });
        }
        if self.sprites.contains_key(&id) {
            return Err(RegistryError::DuplicateSprite(id));
        }
        self.order.push(id);
        self.by_kind.entry(sprite.kind().clone()).or_default().push(id);
        self.sprites.insert(id, sprite);
        log::trace!("registry {}: registered sprite {id}", self.id);
        Ok(id)
    }

    /// Removes a sprite from the live set and hands it back.
    pub fn unregister(&mut self, id: SpriteId) -> Result<Sprite, RegistryError> {
        let sprite = self.sprites.remove(&id).ok_or(RegistryError::UnknownSprite(id))?;
        self.order.retain(|&s| s != id);
        if let Some(bucket) = self.by_kind.get_mut(sprite.kind()) {
            bucket.retain(|&s| s != id);
            if bucket.is_empty() {
                self.by_kind.remove(sprite.kind());
            }
        }
        log::trace!("registry {}: unregistered sprite {id}", self.id);
        Ok(sprite)
    }

    /// Empties the registry, returning the sprites in insertion order.
    pub fn reset(&mut self) -> Vec<Sprite> {
        let order = std::mem::take(&mut self.order);
        self.by_kind.clear();
        let out: Vec<Sprite> = order.iter().filter_map(|id| self.sprites.remove(id)).collect();
        self.sprites.clear();
        log::debug!("registry {}: reset, dropped {} sprite(s)", self.id, out.len());
        out
    }

    // ── lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: SpriteId) -> Option<&mut Sprite> {
        self.sprites.get_mut(&id)
    }

    #[inline]
    pub fn contains(&self, id: SpriteId) -> bool {
        self.sprites.contains_key(&id)
    }

    /// Live sprite ids in insertion order.
    #[inline]
    pub fn ids(&self) -> &[SpriteId] {
        &self.order
    }

    /// Live sprites in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Sprite> + '_ {
        self.order.iter().filter_map(|id| self.sprites.get(id))
    }

    /// Every live sprite, in no particular order.
    pub(crate) fn sprites_mut(&mut self) -> impl Iterator<Item = &mut Sprite> + '_ {
        self.sprites.values_mut()
    }

    /// Ids of sprites of `kind`, in insertion order; empty if none.
    pub fn of_kind(&self, kind: &Kind) -> &[SpriteId] {
        self.by_kind.get(kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn kinds(&self) -> impl Iterator<Item = &Kind> + '_ {
        self.by_kind.keys()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // ── collision queries ─────────────────────────────────────────────────

    fn refresh(&mut self, id: SpriteId) -> Result<(), RegistryError> {
        self.sprites
            .get_mut(&id)
            .ok_or(RegistryError::UnknownSprite(id))?
            .refresh_extents();
        Ok(())
    }

    /// Whether two registered sprites overlap. A sprite never collides with itself.
    pub fn collides_with(&mut self, a: SpriteId, b: SpriteId) -> Result<bool, RegistryError> {
        self.refresh(a)?;
        if a == b {
            return Ok(false);
        }
        self.refresh(b)?;
        let (sa, sb) = (&self.sprites[&a], &self.sprites[&b]);
        Ok(collides_fresh(sa, sb, &*self.narrow))
    }

    /// Every other registered sprite (of `kind`, if given) that overlaps `id`,
    /// in insertion order.
    pub fn colliding_with(&mut self, id: SpriteId, kind: Option<&Kind>) -> Result<Vec<SpriteId>, RegistryError> {
        self.refresh(id)?;
        let candidates: Vec<SpriteId> = match kind {
            Some(k) => self.of_kind(k).to_vec(),
            None => self.order.clone(),
        };
        let mut hits = Vec::new();
        for other in candidates.into_iter().filter(|&o| o != id) {
            self.refresh(other)?;
            if collides_fresh(&self.sprites[&id], &self.sprites[&other], &*self.narrow) {
                hits.push(other);
            }
        }
        Ok(hits)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("id", &self.id)
            .field("order", &self.order)
            .field("kinds", &self.by_kind.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::geom::Circle;
    use crate::coords::Vec2;
    use crate::render::HeadlessRenderer;
    use crate::shape::{CircleShape, RectangleShape};
    use crate::sprite::SpriteBuilder;

    const ROCK: Kind = Kind::new("rock");
    const SHIP: Kind = Kind::new("ship");

    fn add(reg: &mut Registry, r: &mut HeadlessRenderer, kind: Kind, x: f32, y: f32) -> SpriteId {
        let s = SpriteBuilder::new(RectangleShape::new(10.0, 10.0))
            .position(x, y)
            .kind(kind)
            .build(r, reg.id())
            .unwrap();
        reg.register(s).unwrap()
    }

    // ── membership ────────────────────────────────────────────────────────

    #[test]
    fn register_indexes_by_kind_in_order() {
        let mut r = HeadlessRenderer::new();
        let mut reg = Registry::new();
        let a = add(&mut reg, &mut r, ROCK, 0.0, 0.0);
        let b = add(&mut reg, &mut r, SHIP, 0.0, 0.0);
        let c = add(&mut reg, &mut r, ROCK, 0.0, 0.0);
        assert_eq!(reg.ids(), &[a, b, c]);
        assert_eq!(reg.of_kind(&ROCK), &[a, c]);
        assert_eq!(reg.of_kind(&SHIP), &[b]);
        assert!(reg.of_kind(&Kind::new("ufo")).is_empty());
    }

    #[test]
    fn unregister_removes_from_every_index() {
        let mut r = HeadlessRenderer::new();
        let mut reg = Registry::new();
        let a = add(&mut reg, &mut r, ROCK, 0.0, 0.0);
        let b = add(&mut reg, &mut r, ROCK, 0.0, 0.0);
        let removed = reg.unregister(a).unwrap();
        assert_eq!(removed.id(), a);
        assert_eq!(reg.ids(), &[b]);
        assert_eq!(reg.of_kind(&ROCK), &[b]);
        assert!(reg.get(a).is_none());
    }

    #[test]
    fn double_unregister_is_an_error() {
        let mut r = HeadlessRenderer::new();
        let mut reg = Registry::new();
        let a = add(&mut reg, &mut r, ROCK, 0.0, 0.0);
        reg.unregister(a).unwrap();
        assert_eq!(reg.unregister(a).unwrap_err(), RegistryError::UnknownSprite(a));
    }

    #[test]
    fn foreign_sprites_are_rejected() {
        let mut r = HeadlessRenderer::new();
        let mut reg = Registry::new();
        let other = Registry::new();
        let s = SpriteBuilder::new(RectangleShape::new(1.0, 1.0)).build(&mut r, other.id()).unwrap();
        let id = s.id();
        assert_eq!(
            reg.register(s).unwrap_err(),
            RegistryError::ForeignSprite { sprite: id, owner: other.id(), registry: reg.id() }
        );
        assert!(reg.is_empty());
    }

    #[test]
    fn reset_empties_everything_and_allows_reuse() {
        let mut r = HeadlessRenderer::new();
        let mut reg = Registry::new();
        let a = add(&mut reg, &mut r, ROCK, 0.0, 0.0);
        let b = add(&mut reg, &mut r, SHIP, 0.0, 0.0);
        let dropped: Vec<SpriteId> = reg.reset().iter().map(Sprite::id).collect();
        assert_eq!(dropped, vec![a, b]);
        assert!(reg.is_empty());
        assert!(reg.of_kind(&ROCK).is_empty());
        assert_eq!(reg.kinds().count(), 0);
        add(&mut reg, &mut r, ROCK, 0.0, 0.0);
        assert_eq!(reg.len(), 1);
    }

    // ── collision queries ─────────────────────────────────────────────────

    #[test]
    fn sprite_does_not_collide_with_itself() {
        let mut r = HeadlessRenderer::new();
        let mut reg = Registry::new();
        let a = add(&mut reg, &mut r, ROCK, 0.0, 0.0);
        assert_eq!(reg.collides_with(a, a), Ok(false));
    }

    #[test]
    fn queries_on_unknown_sprites_fail() {
        let mut r = HeadlessRenderer::new();
        let mut reg = Registry::new();
        let a = add(&mut reg, &mut r, ROCK, 0.0, 0.0);
        reg.unregister(a).unwrap();
        assert_eq!(reg.collides_with(a, a), Err(RegistryError::UnknownSprite(a)));
        assert!(reg.colliding_with(a, None).is_err());
    }

    #[test]
    fn colliding_with_filters_by_kind() {
        let mut r = HeadlessRenderer::new();
        let mut reg = Registry::new();
        let me = add(&mut reg, &mut r, SHIP, 0.0, 0.0);
        let rock = add(&mut reg, &mut r, ROCK, 5.0, 5.0);
        let ship = add(&mut reg, &mut r, SHIP, 8.0, 0.0);
        let _far = add(&mut reg, &mut r, ROCK, 500.0, 0.0);
        assert_eq!(reg.colliding_with(me, None).unwrap(), vec![rock, ship]);
        assert_eq!(reg.colliding_with(me, Some(&ROCK)).unwrap(), vec![rock]);
        assert_eq!(reg.colliding_with(me, Some(&SHIP)).unwrap(), vec![ship]);
    }

    #[test]
    fn unfiltered_query_is_union_of_kind_queries() {
        let mut r = HeadlessRenderer::new();
        let mut reg = Registry::new();
        let me = add(&mut reg, &mut r, SHIP, 0.0, 0.0);
        for i in 0..6 {
            let kind = if i % 2 == 0 { ROCK } else { SHIP };
            add(&mut reg, &mut r, kind, i as f32 * 4.0, 0.0);
        }
        let mut all = reg.colliding_with(me, None).unwrap();
        let mut by_kind = Vec::new();
        let kinds: Vec<Kind> = reg.kinds().cloned().collect();
        for k in &kinds {
            by_kind.extend(reg.colliding_with(me, Some(k)).unwrap());
        }
        all.sort();
        by_kind.sort();
        assert_eq!(all, by_kind);
    }

    struct Counting(Rc<Cell<u32>>);

    impl NarrowPhase for Counting {
        fn circle_polygon(&self, _: Circle, _: &[Vec2]) -> bool {
            self.0.set(self.0.get() + 1);
            true
        }

        fn polygon_polygon(&self, _: &[Vec2], _: &[Vec2]) -> bool {
            self.0.set(self.0.get() + 1);
            true
        }
    }

    #[test]
    fn narrow_phase_skipped_for_disjoint_boxes() {
        let calls = Rc::new(Cell::new(0));
        let mut r = HeadlessRenderer::new();
        let mut reg = Registry::with_narrow_phase(Box::new(Counting(calls.clone())));
        let a = add(&mut reg, &mut r, ROCK, 0.0, 0.0);
        let b = add(&mut reg, &mut r, ROCK, 100.0, 0.0);
        assert_eq!(reg.collides_with(a, b), Ok(false));
        assert_eq!(calls.get(), 0);
        reg.get_mut(b).unwrap().set_x(5.0);
        assert_eq!(reg.collides_with(a, b), Ok(true));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn circle_and_rectangle_use_circle_polygon_test() {
        let calls = Rc::new(Cell::new(0));
        let mut r = HeadlessRenderer::new();
        let mut reg = Registry::with_narrow_phase(Box::new(Counting(calls.clone())));
        let c = SpriteBuilder::new(CircleShape::new(5.0)).build(&mut r, reg.id()).unwrap();
        let c = reg.register(c).unwrap();
        let b = add(&mut reg, &mut r, ROCK, 5.0, 5.0);
        assert_eq!(reg.collides_with(c, b), Ok(true));
        assert_eq!(calls.get(), 1);
    }
}
