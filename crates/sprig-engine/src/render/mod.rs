//! Renderer collaborator.
//!
//! Pixel output is not this crate's job. The core talks to whatever draws the
//! stage through the narrow [`Renderer`] trait: create textures and display
//! objects, push their properties, add/remove them from the scene, report
//! the on-screen viewport, and schedule the next frame.
//!
//! [`HeadlessRenderer`] implements the contract without a GPU for tests,
//! tools and the demo binary.

mod headless;

pub use headless::HeadlessRenderer;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

use crate::coords::{Frame, Vec2, ViewportRect};
use crate::shape::Shape;

/// Renderer-owned texture identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureHandle(pub u64);

/// Renderer-owned display object identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DisplayHandle(pub u64);

/// A texture together with its pixel size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Texture {
    pub handle: TextureHandle,
    pub size: Vec2,
}

/// Which transform properties a display object supports.
///
/// A property the object lacks reads back as its documented default
/// (`scale = 1.0`, `rotation = 0.0`, `anchor = (0, 0)`).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DisplayCaps {
    pub scale: bool,
    pub rotation: bool,
    pub anchor: bool,
}

impl DisplayCaps {
    pub const ALL: DisplayCaps = DisplayCaps { scale: true, rotation: true, anchor: true };
    pub const NONE: DisplayCaps = DisplayCaps { scale: false, rotation: false, anchor: false };
}

impl Default for DisplayCaps {
    fn default() -> Self {
        Self::ALL
    }
}

/// Result of [`Renderer::create_display_object`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplayObject {
    pub handle: DisplayHandle,
    /// Natural (unscaled) size of the drawn object.
    pub size: Vec2,
    pub caps: DisplayCaps,
}

/// Mutable display properties pushed to the renderer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplayProps {
    pub position: Vec2,
    pub scale: f32,
    /// Screen rotation in radians, clockwise-positive (the negated sprite rotation).
    pub rotation: f32,
    pub anchor: Vec2,
    pub visible: bool,
    /// Displayed (scaled) size.
    pub size: Vec2,
    /// Current texture for image sprites.
    pub texture: Option<TextureHandle>,
}

impl Default for DisplayProps {
    fn default() -> Self {
        Self {
            position: Vec2::zero(),
            scale: 1.0,
            rotation: 0.0,
            anchor: Vec2::zero(),
            visible: true,
            size: Vec2::zero(),
            texture: None,
        }
    }
}

/// Rendering backend as seen by the core.
pub trait Renderer {
    /// Loads `url` (optionally cut to `frame`) as a texture.
    fn create_texture(&mut self, url: &str, frame: Option<Frame>) -> Result<Texture>;

    /// Creates an unattached display object for `shape`.
    fn create_display_object(&mut self, shape: &Shape) -> Result<DisplayObject>;

    /// Pushes new properties for `handle`.
    fn update_display_object(&mut self, handle: DisplayHandle, props: &DisplayProps);

    /// Appends `handle` on top of the scene.
    fn add_to_scene(&mut self, handle: DisplayHandle);

    /// Removes `handle` from the scene and releases it.
    fn remove_from_scene(&mut self, handle: DisplayHandle);

    /// On-screen placement of the stage, used to scale pointer coordinates.
    fn viewport_rect(&self) -> ViewportRect;

    /// Asks the clock to run the tick callback again on the next refresh.
    fn request_next_frame(&mut self);
}

/// Lets a caller keep a handle on a renderer it gave to the session, e.g. to
/// inspect a [`HeadlessRenderer`] scene from a test.
impl<R: Renderer + ?Sized> Renderer for Rc<RefCell<R>> {
    fn create_texture(&mut self, url: &str, frame: Option<Frame>) -> Result<Texture> {
        self.borrow_mut().create_texture(url, frame)
    }

    fn create_display_object(&mut self, shape: &Shape) -> Result<DisplayObject> {
        self.borrow_mut().create_display_object(shape)
    }

    fn update_display_object(&mut self, handle: DisplayHandle, props: &DisplayProps) {
        self.borrow_mut().update_display_object(handle, props)
    }

    fn add_to_scene(&mut self, handle: DisplayHandle) {
        self.borrow_mut().add_to_scene(handle)
    }

    fn remove_from_scene(&mut self, handle: DisplayHandle) {
        self.borrow_mut().remove_from_scene(handle)
    }

    fn viewport_rect(&self) -> ViewportRect {
        self.borrow().viewport_rect()
    }

    fn request_next_frame(&mut self) {
        self.borrow_mut().request_next_frame()
    }
}
