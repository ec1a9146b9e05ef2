use std::collections::HashMap;

use anyhow::{Result, bail};

use crate::coords::{Frame, Vec2, ViewportRect};
use crate::scene::{DisplayItem, DisplayList};
use crate::shape::{Shape, ShapeKind, TextBlock};

use super::{
    DisplayCaps, DisplayHandle, DisplayObject, DisplayProps, Renderer, Texture, TextureHandle,
};

/// Average glyph advance as a fraction of the font pixel size.
const GLYPH_ADVANCE: f32 = 0.5;
/// Line height as a multiple of the font pixel size.
const LINE_HEIGHT: f32 = 1.2;
const DEFAULT_FONT_PX: f32 = 20.0;

/// Renderer that keeps a display list in memory and draws nothing.
///
/// Image sizes must be registered up front with [`with_image`](Self::with_image);
/// loading an unregistered URL fails like a missing file would.
#[derive(Debug)]
pub struct HeadlessRenderer {
    viewport: ViewportRect,
    images: HashMap<String, Vec2>,
    caps: HashMap<ShapeKind, DisplayCaps>,
    textures: HashMap<TextureHandle, Texture>,
    detached: HashMap<DisplayHandle, DisplayItem>,
    scene: DisplayList,
    next_id: u64,
    frames_requested: u64,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self {
            viewport: ViewportRect::new(0.0, 0.0, 640.0, 480.0),
            images: HashMap::new(),
            caps: HashMap::new(),
            textures: HashMap::new(),
            detached: HashMap::new(),
            scene: DisplayList::new(),
            next_id: 1,
            frames_requested: 0,
        }
    }

    /// Registers an image URL and its pixel size.
    pub fn with_image(mut self, url: impl Into<String>, width: f32, height: f32) -> Self {
        self.images.insert(url.into(), Vec2::new(width, height));
        self
    }

    pub fn with_viewport(mut self, viewport: ViewportRect) -> Self {
        self.viewport = viewport;
        self
    }

    /// Overrides the transform capabilities reported for one shape kind.
    pub fn with_caps(mut self, kind: ShapeKind, caps: DisplayCaps) -> Self {
        self.caps.insert(kind, caps);
        self
    }

    pub fn set_viewport(&mut self, viewport: ViewportRect) {
        self.viewport = viewport;
    }

    /// Items currently in the scene, bottom to top.
    pub fn scene(&self) -> &DisplayList {
        &self.scene
    }

    /// Latest properties of a display object, attached or not.
    pub fn props(&self, handle: DisplayHandle) -> Option<&DisplayProps> {
        self.scene
            .get(handle)
            .or_else(|| self.detached.get(&handle))
            .map(|item| &item.props)
    }

    pub fn texture(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(&handle)
    }

    pub fn frames_requested(&self) -> u64 {
        self.frames_requested
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Greedy word wrap with a fixed glyph advance.
    ///
    /// Only approximates real font metrics. A renderer holding font bytes
    /// can measure with `fontdue` glyph metrics instead.
    fn measure_text(text: &TextBlock) -> Vec2 {
        let px = text.font_px().unwrap_or(DEFAULT_FONT_PX);
        let advance = px * GLYPH_ADVANCE;
        let space = advance;

        let mut lines = 0usize;
        let mut widest = 0.0f32;
        for paragraph in text.text.split('\n') {
            let mut line = 0.0f32;
            lines += 1;
            for word in paragraph.split_whitespace() {
                let w = word.chars().count() as f32 * advance;
                let needed = if line > 0.0 { line + space + w } else { w };
                if line > 0.0 && needed > text.wrap_width {
                    widest = widest.max(line);
                    lines += 1;
                    line = w;
                } else {
                    line = needed;
                }
            }
            widest = widest.max(line);
        }
        Vec2::new(widest, lines as f32 * px * LINE_HEIGHT)
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HeadlessRenderer {
    fn create_texture(&mut self, url: &str, frame: Option<Frame>) -> Result<Texture> {
        let Some(&image) = self.images.get(url) else {
            bail!("image not found: {url}");
        };
        let size = match frame {
            None => image,
            Some(f) => {
                if f.x < 0.0 || f.y < 0.0 || f.x + f.w > image.x || f.y + f.h > image.y {
                    bail!("frame {f:?} lies outside {url} ({}x{})", image.x, image.y);
                }
                f.size()
            }
        };
        let tex = Texture { handle: TextureHandle(self.next_id()), size };
        self.textures.insert(tex.handle, tex);
        Ok(tex)
    }

    fn create_display_object(&mut self, shape: &Shape) -> Result<DisplayObject> {
        let (size, texture) = match shape {
            Shape::Text(t) => (Self::measure_text(t), None),
            Shape::Image(img) => {
                let Some(first) = img.textures().first() else {
                    bail!("image {} has no textures", img.url());
                };
                (first.size, Some(first.handle))
            }
            other => (other.local_size().unwrap_or_default(), None),
        };
        let caps = self.caps.get(&shape.kind()).copied().unwrap_or_default();
        let handle = DisplayHandle(self.next_id());
        let props = DisplayProps { size, texture, visible: false, ..DisplayProps::default() };
        self.detached.insert(handle, DisplayItem::new(handle, shape.kind(), props));
        log::trace!("headless: created {handle:?} ({:?}, {size:?})", shape.kind());
        Ok(DisplayObject { handle, size, caps })
    }

    fn update_display_object(&mut self, handle: DisplayHandle, props: &DisplayProps) {
        let item = match self.scene.get_mut(handle) {
            Some(item) => Some(item),
            None => self.detached.get_mut(&handle),
        };
        match item {
            Some(item) => item.props = *props,
            None => log::warn!("headless: update for unknown display object {handle:?}"),
        }
    }

    fn add_to_scene(&mut self, handle: DisplayHandle) {
        match self.detached.remove(&handle) {
            Some(item) => self.scene.push(item),
            None => log::warn!("headless: add_to_scene for unknown display object {handle:?}"),
        }
    }

    fn remove_from_scene(&mut self, handle: DisplayHandle) {
        if self.scene.remove(handle).is_none() && self.detached.remove(&handle).is_none() {
            log::warn!("headless: remove_from_scene for unknown display object {handle:?}");
        }
    }

    fn viewport_rect(&self) -> ViewportRect {
        self.viewport
    }

    fn request_next_frame(&mut self) {
        self.frames_requested += 1;
    }
}
