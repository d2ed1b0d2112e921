use crate::foundation::color::Color;
use crate::foundation::error::{DrawError, DrawResult};
use crate::foundation::math::{premul_u8, unpremul_u8};
use crate::surface::{Image, ImageMut, Pixels};

const BYTES_PER_PIXEL: usize = 4;

/// Packed premultiplied RGBA8 image, rows stored top to bottom without padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    pub(crate) data: Vec<u8>,
}

impl RgbaImage {
    /// Allocate a transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * BYTES_PER_PIXEL],
        }
    }

    /// Allocate an image where every pixel is `c`.
    pub fn filled(width: u32, height: u32, c: Color) -> Self {
        let px = c.to_rgba8();
        Self {
            width,
            height,
            data: px.repeat((width as usize) * (height as usize)),
        }
    }

    /// Wrap an existing premultiplied RGBA8 buffer of exactly `width * height * 4` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> DrawResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(|| DrawError::validation("rgba image size overflow"))?;
        if data.len() != expected {
            return Err(DrawError::validation(format!(
                "rgba buffer has {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(DrawError::validation("rgba image dimensions exceed i32"));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Import a straight-alpha `image` buffer, premultiplying every pixel.
    pub fn from_straight(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = img.as_raw().clone();
        for px in data.chunks_exact_mut(BYTES_PER_PIXEL) {
            let a = px[3];
            px[0] = premul_u8(px[0], a);
            px[1] = premul_u8(px[1], a);
            px[2] = premul_u8(px[2], a);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Export as a straight-alpha `image` buffer.
    pub fn to_straight(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let [r, g, b, a] = self.pixel(x, y);
            image::Rgba([
                unpremul_u8(r, a),
                unpremul_u8(g, a),
                unpremul_u8(b, a),
                a,
            ])
        })
    }

    /// Width in pixels.
    pub fn width_px(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height_px(&self) -> u32 {
        self.height
    }

    /// The raw premultiplied bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image, returning its raw premultiplied bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Premultiplied RGBA8 value at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x as usize, y as usize);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Byte offset of pixel `(x, y)`.
    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        (y * self.width as usize + x) * BYTES_PER_PIXEL
    }

    /// Byte range covering pixels `x0..x1` of row `y`.
    pub(crate) fn row_span(&self, y: usize, x0: usize, x1: usize) -> std::ops::Range<usize> {
        self.index(x0, y)..self.index(x1, y)
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}

impl Image for RgbaImage {
    fn width(&self) -> i32 {
        self.width as i32
    }

    fn height(&self) -> i32 {
        self.height as i32
    }

    fn at(&self, x: i32, y: i32) -> Color {
        if !self.in_bounds(x, y) {
            return Color::TRANSPARENT;
        }
        Color::from(self.pixel(x as u32, y as u32))
    }

    fn pixels(&self) -> Pixels<'_> {
        Pixels::Rgba(self)
    }
}

impl ImageMut for RgbaImage {
    fn set(&mut self, x: i32, y: i32, c: Color) {
        if !self.in_bounds(x, y) {
            return;
        }
        let i = self.index(x as usize, y as usize);
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&c.to_rgba8());
    }

    fn rgba_mut(&mut self) -> Option<&mut RgbaImage> {
        Some(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/rgba.rs"]
mod tests;
