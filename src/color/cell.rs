//! RGB cell colors and alpha compositing.

/// RGB color for a character cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CellColor {
    pub const BLACK: CellColor = CellColor { r: 0, g: 0, b: 0 };
    pub const WHITE: CellColor = CellColor {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a background preset name (`black` or `white`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            _ => None,
        }
    }

    /// Read the color of one pixel, blending it over `background` when the
    /// pixel carries alpha.
    ///
    /// `pixel` holds 3 (RGB) or 4 (RGBA) channel values. Alpha is linear:
    /// `out = src * a + bg * (1 - a)` with `a = alpha / 255`, truncated.
    /// Three-channel pixels are taken as opaque.
    #[inline]
    pub fn composite(pixel: &[u8], background: CellColor) -> Self {
        if pixel.len() < 4 {
            return Self::new(pixel[0], pixel[1], pixel[2]);
        }

        let alpha = pixel[3] as f32 / 255.0;
        let inv = 1.0 - alpha;
        Self {
            r: (pixel[0] as f32 * alpha + background.r as f32 * inv) as u8,
            g: (pixel[1] as f32 * alpha + background.g as f32 * inv) as u8,
            b: (pixel[2] as f32 * alpha + background.b as f32 * inv) as u8,
        }
    }
}
