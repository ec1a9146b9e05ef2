/// Fill or stroke color: 24-bit `0xRRGGBB` plus alpha in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub rgb: u32,
    pub alpha: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0x000000, 1.0);
    pub const WHITE: Color = Color::new(0xffffff, 1.0);

    #[inline]
    pub const fn new(rgb: u32, alpha: f32) -> Self {
        Self { rgb: rgb & 0x00ff_ffff, alpha }
    }

    #[inline]
    pub const fn opaque(rgb: u32) -> Self {
        Self::new(rgb, 1.0)
    }

    #[inline]
    pub const fn red(self) -> u8 {
        ((self.rgb >> 16) & 0xff) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        ((self.rgb >> 8) & 0xff) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        (self.rgb & 0xff) as u8
    }
}

/// Outline stroke used by shapes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineStyle {
    pub width: f32,
    pub color: Color,
}

impl LineStyle {
    pub const BLACK_LINE: LineStyle = LineStyle::new(1.0, Color::BLACK);
    pub const WHITE_LINE: LineStyle = LineStyle::new(1.0, Color::WHITE);

    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::BLACK_LINE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack_from_hex() {
        let c = Color::opaque(0x12ab34);
        assert_eq!((c.red(), c.green(), c.blue()), (0x12, 0xab, 0x34));
    }

    #[test]
    fn high_byte_is_masked() {
        assert_eq!(Color::new(0xff00_0000, 1.0), Color::BLACK);
    }

    #[test]
    fn equality_includes_alpha() {
        assert_ne!(Color::new(0, 1.0), Color::new(0, 0.5));
        assert_eq!(LineStyle::new(1.0, Color::BLACK), LineStyle::BLACK_LINE);
    }
}
