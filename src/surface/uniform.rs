use crate::foundation::color::Color;
use crate::surface::{Image, Pixels};

/// An image of unbounded extent that is the same color everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Uniform {
    color: Color,
}

impl Uniform {
    /// Reported width and height; large enough that clipping never shrinks a rectangle.
    pub const EXTENT: i32 = 1 << 30;

    /// Uniform image of color `c`.
    pub const fn new(c: Color) -> Self {
        Self { color: c }
    }

    /// Opaque uniform image from 8-bit RGB.
    pub const fn opaque_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(Color::rgba8(r, g, b, 255))
    }

    /// Uniform coverage mask with alpha `a`.
    pub const fn coverage(a: u8) -> Self {
        Self::new(Color::alpha8(a))
    }

    /// The color returned at every coordinate.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Image for Uniform {
    fn width(&self) -> i32 {
        Self::EXTENT
    }

    fn height(&self) -> i32 {
        Self::EXTENT
    }

    fn at(&self, _x: i32, _y: i32) -> Color {
        self.color
    }

    fn pixels(&self) -> Pixels<'_> {
        Pixels::Uniform(self.color)
    }
}
