use std::rc::Rc;

use anyhow::{Context, Result};

use super::{Kind, Sprite, SpriteId};
use crate::coords::{Extents, Vec2};
use crate::core::App;
use crate::geom::Transform;
use crate::registry::RegistryId;
use crate::render::Renderer;
use crate::shape::Shape;

/// Describes a sprite before it is placed on the stage.
///
/// ```ignore
/// let ship = Sprite::builder(RectangleShape::new(30.0, 15.0))
///     .position(100.0, 80.0)
///     .anchor(0.5, 0.5)
///     .kind(Kind::new("ship"))
///     .spawn(&mut app)?;
/// ```
#[derive(Debug, Clone)]
pub struct SpriteBuilder {
    shape: Rc<Shape>,
    edge: Option<Rc<Shape>>,
    kind: Kind,
    transform: Transform,
    visible: bool,
}

impl SpriteBuilder {
    pub fn new(shape: impl Into<Rc<Shape>>) -> Self {
        Self {
            shape: shape.into(),
            edge: None,
            kind: Kind::default(),
            transform: Transform::default(),
            visible: true,
        }
    }

    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.transform.position = Vec2::new(x, y);
        self
    }

    /// Separate collision boundary; the display shape is used otherwise.
    pub fn edge(mut self, edge: impl Into<Rc<Shape>>) -> Self {
        self.edge = Some(edge.into());
        self
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    pub fn anchor(mut self, ax: f32, ay: f32) -> Self {
        self.transform.anchor = Vec2::new(ax, ay);
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn rotation(mut self, rotation: f32) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Builds the sprite and registers it with `app`.
    pub fn spawn(self, app: &mut App) -> Result<SpriteId> {
        app.spawn(self)
    }

    /// Creates the display object and computes the initial extents.
    ///
    /// Text shapes are copied so that each sprite owns its text state.
    pub(crate) fn build(self, renderer: &mut dyn Renderer, registry: RegistryId) -> Result<Sprite> {
        let shape = match &*self.shape {
            Shape::Text(t) => Rc::new(Shape::Text(t.clone())),
            _ => self.shape,
        };
        let edge = self.edge.unwrap_or_else(|| shape.clone());
        let display = renderer
            .create_display_object(&shape)
            .with_context(|| format!("creating display object for {:?}", shape.kind()))?;

        let base = edge.base_vertices(display.size);
        let mut sprite = Sprite {
            id: SpriteId::next(),
            registry,
            kind: self.kind,
            shape,
            edge,
            base,
            display: display.handle,
            caps: display.caps,
            size: display.size,
            transform: Transform::at(self.transform.position),
            visible: self.visible,
            image_index: 0,
            extents: Extents::point(self.transform.position),
            extents_dirty: true,
            local_outline: Vec::new(),
            display_dirty: true,
        };
        if self.transform.scale != 1.0 {
            sprite.set_scale(self.transform.scale);
        }
        if self.transform.rotation != 0.0 {
            sprite.set_rotation(self.transform.rotation);
        }
        if self.transform.anchor != Vec2::zero() {
            sprite.set_anchor(self.transform.anchor);
        }
        sprite.refresh_extents();
        log::trace!("built sprite {} ({}, {:?})", sprite.id, sprite.kind, sprite.shape.kind());
        Ok(sprite)
    }
}
