use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SPRITE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a sprite.
///
/// Allocated once per sprite construction; never reused within a process.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SpriteId(u64);

impl SpriteId {
    pub(crate) fn next() -> Self {
        SpriteId(NEXT_SPRITE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// User-facing category of a sprite ("asteroid", "ship", ...).
///
/// The registry keeps one bucket per kind so collision queries can be
/// limited to a category.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Kind(Cow<'static, str>);

impl Kind {
    /// Kind given to sprites spawned without one.
    pub const SPRITE: Kind = Kind(Cow::Borrowed("sprite"));

    pub const fn new(name: &'static str) -> Self {
        Kind(Cow::Borrowed(name))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Kind(Cow::Owned(name.into()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Kind {
    fn default() -> Self {
        Kind::SPRITE
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(SpriteId::next(), SpriteId::next());
    }

    #[test]
    fn static_and_owned_kinds_compare_by_name() {
        assert_eq!(Kind::new("ship"), Kind::named("ship"));
        assert_ne!(Kind::new("ship"), Kind::SPRITE);
    }
}
