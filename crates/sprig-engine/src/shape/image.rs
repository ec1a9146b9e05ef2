use anyhow::{Context, Result};

use crate::coords::{Frame, Vec2};
use crate::render::{Renderer, Texture};

/// Direction in which successive sheet frames are laid out.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SheetDirection {
    #[default]
    Horizontal,
    Vertical,
}

/// How to cut a sequence of equally sized frames out of one image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SheetLayout {
    /// First frame.
    pub frame: Frame,
    /// Number of frames to cut.
    pub qty: usize,
    pub direction: SheetDirection,
    /// Gap between consecutive frames in pixels.
    pub margin: f32,
}

impl SheetLayout {
    pub fn single(frame: Frame) -> Self {
        Self { frame, qty: 1, direction: SheetDirection::Horizontal, margin: 0.0 }
    }

    pub fn strip(frame: Frame, qty: usize, direction: SheetDirection, margin: f32) -> Self {
        Self { frame, qty, direction, margin }
    }

    /// Frame `i` of the sheet.
    pub fn frame_at(&self, i: usize) -> Frame {
        let step = i as f32;
        match self.direction {
            SheetDirection::Horizontal => self.frame.offset((self.frame.w + self.margin) * step, 0.0),
            SheetDirection::Vertical => self.frame.offset(0.0, (self.frame.h + self.margin) * step),
        }
    }
}

/// Image (or sequence of sheet frames) loaded through the renderer.
///
/// Width/height are those of the most recently appended frame, or of the
/// whole image when no frame was given.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    url: String,
    textures: Vec<Texture>,
    pub width: f32,
    pub height: f32,
}

impl ImageAsset {
    /// Loads a whole image as a single texture.
    pub fn load(renderer: &mut dyn Renderer, url: impl Into<String>) -> Result<Self> {
        Self::load_with(renderer, url, None)
    }

    /// Loads `layout.qty` frames cut from one image.
    pub fn load_sheet(
        renderer: &mut dyn Renderer,
        url: impl Into<String>,
        layout: SheetLayout,
    ) -> Result<Self> {
        Self::load_with(renderer, url, Some(layout))
    }

    fn load_with(
        renderer: &mut dyn Renderer,
        url: impl Into<String>,
        layout: Option<SheetLayout>,
    ) -> Result<Self> {
        let url = url.into();
        let mut asset = Self { url: url.clone(), textures: Vec::new(), width: 0.0, height: 0.0 };
        asset.append(renderer, &url, layout)?;
        Ok(asset)
    }

    /// Appends more frames, possibly from a different image, to this asset.
    pub fn append(
        &mut self,
        renderer: &mut dyn Renderer,
        url: &str,
        layout: Option<SheetLayout>,
    ) -> Result<()> {
        match layout {
            None => {
                let tex = renderer
                    .create_texture(url, None)
                    .with_context(|| format!("failed to load image {url:?}"))?;
                self.width = tex.size.x;
                self.height = tex.size.y;
                self.textures.push(tex);
            }
            Some(layout) => {
                for i in 0..layout.qty {
                    let frame = layout.frame_at(i);
                    let tex = renderer
                        .create_texture(url, Some(frame))
                        .with_context(|| format!("failed to cut frame {i} from image {url:?}"))?;
                    self.width = frame.w;
                    self.height = frame.h;
                    self.textures.push(tex);
                }
            }
        }
        log::debug!("image {url:?}: {} texture(s)", self.textures.len());
        Ok(())
    }

    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[inline]
    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HeadlessRenderer;

    #[test]
    fn horizontal_strip_steps_by_width_plus_margin() {
        let layout = SheetLayout::strip(Frame::new(0.0, 10.0, 32.0, 16.0), 3, SheetDirection::Horizontal, 2.0);
        assert_eq!(layout.frame_at(2), Frame::new(68.0, 10.0, 32.0, 16.0));
    }

    #[test]
    fn vertical_strip_steps_by_height_plus_margin() {
        let layout = SheetLayout::strip(Frame::new(5.0, 0.0, 8.0, 8.0), 2, SheetDirection::Vertical, 1.0);
        assert_eq!(layout.frame_at(1), Frame::new(5.0, 9.0, 8.0, 8.0));
    }

    #[test]
    fn whole_image_takes_renderer_size() {
        let mut r = HeadlessRenderer::new().with_image("bunny.png", 26.0, 37.0);
        let img = ImageAsset::load(&mut r, "bunny.png").unwrap();
        assert_eq!(img.len(), 1);
        assert_eq!(img.size(), Vec2::new(26.0, 37.0));
    }

    #[test]
    fn sheet_and_append_accumulate_frames() {
        let mut r = HeadlessRenderer::new().with_image("sheet.png", 128.0, 32.0);
        let layout = SheetLayout::strip(Frame::new(0.0, 0.0, 32.0, 32.0), 4, SheetDirection::Horizontal, 0.0);
        let mut img = ImageAsset::load_sheet(&mut r, "sheet.png", layout).unwrap();
        assert_eq!(img.len(), 4);
        img.append(&mut r, "sheet.png", Some(SheetLayout::single(Frame::new(0.0, 0.0, 16.0, 16.0))))
            .unwrap();
        assert_eq!(img.len(), 5);
        assert_eq!(img.size(), Vec2::new(16.0, 16.0));
    }

    #[test]
    fn unknown_image_is_an_error() {
        let mut r = HeadlessRenderer::new();
        let err = ImageAsset::load(&mut r, "missing.png").unwrap_err();
        assert!(format!("{err:#}").contains("missing.png"));
    }

    #[test]
    fn frame_outside_image_is_an_error() {
        let mut r = HeadlessRenderer::new().with_image("small.png", 10.0, 10.0);
        let layout = SheetLayout::strip(Frame::new(0.0, 0.0, 8.0, 8.0), 2, SheetDirection::Horizontal, 0.0);
        assert!(ImageAsset::load_sheet(&mut r, "small.png", layout).is_err());
    }
}
