use crate::coords::Color;

/// Horizontal alignment of wrapped text lines.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Word-wrapped block of text.
///
/// Text is stateful, so every sprite built from a `TextBlock` takes its own
/// copy. The rendered size is measured by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    /// CSS-like font description, e.g. `"20px Arial"`.
    pub style: String,
    /// Wrapping width in stage pixels.
    pub wrap_width: f32,
    pub fill: Color,
    pub align: TextAlign,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: "20px Arial".to_string(),
            wrap_width: 100.0,
            fill: Color::BLACK,
            align: TextAlign::Left,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_wrap_width(mut self, width: f32) -> Self {
        self.wrap_width = width;
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Pixel size parsed from the leading `"<n>px"` of `style`, if present.
    pub fn font_px(&self) -> Option<f32> {
        let head = self.style.split_whitespace().next()?;
        head.strip_suffix("px")?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_style_conventions() {
        let t = TextBlock::new("hi");
        assert_eq!(t.style, "20px Arial");
        assert_eq!(t.wrap_width, 100.0);
        assert_eq!(t.align, TextAlign::Left);
    }

    #[test]
    fn font_px_parses_leading_size() {
        assert_eq!(TextBlock::new("x").with_style("14px Mono").font_px(), Some(14.0));
        assert_eq!(TextBlock::new("x").with_style("bold Arial").font_px(), None);
    }
}
