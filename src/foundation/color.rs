/// Premultiplied RGBA color with 16-bit channels.
///
/// Red, green and blue are already scaled by alpha, so each of them is `<= a` for colors
/// produced by this crate.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Color {
    /// Red channel premultiplied by alpha.
    pub r: u16,
    /// Green channel premultiplied by alpha.
    pub g: u16,
    /// Blue channel premultiplied by alpha.
    pub b: u16,
    /// Alpha channel.
    pub a: u16,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba16(0, 0, 0, 0);
    /// Opaque black.
    pub const OPAQUE_BLACK: Self = Self::rgba16(0, 0, 0, 0xFFFF);
    /// Opaque white.
    pub const OPAQUE_WHITE: Self = Self::rgba16(0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF);

    /// Build a color from premultiplied 16-bit channels.
    pub const fn rgba16(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from premultiplied 8-bit channels, widening each by `0x101`.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as u16 * 0x101,
            g: g as u16 * 0x101,
            b: b as u16 * 0x101,
            a: a as u16 * 0x101,
        }
    }

    /// Coverage-only color used by masks: every channel carries `a`.
    pub const fn alpha8(a: u8) -> Self {
        Self::rgba8(a, a, a, a)
    }

    /// The four channels widened to `u32`, each in `0..=0xFFFF`.
    pub fn channels(self) -> (u32, u32, u32, u32) {
        (
            u32::from(self.r),
            u32::from(self.g),
            u32::from(self.b),
            u32::from(self.a),
        )
    }

    /// High byte of each channel.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            (self.r >> 8) as u8,
            (self.g >> 8) as u8,
            (self.b >> 8) as u8,
            (self.a >> 8) as u8,
        ]
    }

    /// Return `true` when alpha is at its maximum.
    pub fn is_opaque(self) -> bool {
        self.a == 0xFFFF
    }
}

impl From<[u8; 4]> for Color {
    fn from(px: [u8; 4]) -> Self {
        Self::rgba8(px[0], px[1], px[2], px[3])
    }
}
