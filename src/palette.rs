//! Fixed colors of the pen icon

/// Opaque RGB color used to paint the icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl IconColor {
    /// Build a color from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }

    /// Convert to image crate RGBA format (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl From<IconColor> for image::Rgba<u8> {
    fn from(c: IconColor) -> Self {
        image::Rgba(c.to_rgba_u8())
    }
}

impl From<IconColor> for tiny_skia::Color {
    fn from(c: IconColor) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, 255)
    }
}

/// Canvas fill behind the pen
pub const BACKGROUND: IconColor = IconColor::from_hex(0x020617);
pub const PEN_BODY: IconColor = IconColor::from_hex(0x38bdf8);
/// Shading under the body, reused for the clip
pub const PEN_SHADOW: IconColor = IconColor::from_hex(0x0ea5e9);
/// Eraser cap
pub const PEN_CLIP: IconColor = IconColor::from_hex(0xbae6fd);
pub const PEN_NIB: IconColor = IconColor::from_hex(0xf8fafc);
pub const PEN_NIB_LINE: IconColor = IconColor::from_hex(0x94a3b8);
