use crate::foundation::color::Color;
use crate::foundation::error::{DrawError, DrawResult};
use crate::surface::Image;

/// 8-bit coverage image, typically used as a mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl AlphaImage {
    /// Allocate a fully transparent mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize)],
        }
    }

    /// Wrap an existing coverage buffer of exactly `width * height` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> DrawResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| DrawError::validation("alpha image size overflow"))?;
        if data.len() != expected {
            return Err(DrawError::validation(format!(
                "alpha buffer has {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(DrawError::validation("alpha image dimensions exceed i32"));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Coverage at `(x, y)`, or `0` outside the image.
    pub fn alpha(&self, x: i32, y: i32) -> u8 {
        match self.offset(x, y) {
            Some(i) => self.data[i],
            None => 0,
        }
    }

    /// Store coverage `a` at `(x, y)`; ignored outside the image.
    pub fn set_alpha(&mut self, x: i32, y: i32, a: u8) {
        if let Some(i) = self.offset(x, y) {
            self.data[i] = a;
        }
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl From<&image::GrayImage> for AlphaImage {
    fn from(img: &image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.as_raw().clone(),
        }
    }
}

impl Image for AlphaImage {
    fn width(&self) -> i32 {
        self.width as i32
    }

    fn height(&self) -> i32 {
        self.height as i32
    }

    fn at(&self, x: i32, y: i32) -> Color {
        Color::alpha8(self.alpha(x, y))
    }
}
