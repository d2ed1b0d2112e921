pub(crate) mod alpha;
pub(crate) mod rgba;
pub(crate) mod uniform;

use crate::foundation::color::Color;
use crate::foundation::geom::Rect;

use rgba::RgbaImage;

/// How an image stores its pixels, queried once per draw call to pick a fast path.
#[derive(Clone, Copy, Debug)]
pub enum Pixels<'a> {
    /// The same color everywhere, with no meaningful extent.
    Uniform(Color),
    /// A packed premultiplied RGBA8 buffer that supports bulk row copies.
    Rgba(&'a RgbaImage),
    /// No special layout; only per-pixel reads are available.
    Generic,
}

/// A readable rectangular grid of premultiplied colors with its origin at `(0, 0)`.
pub trait Image {
    /// Width in pixels.
    fn width(&self) -> i32;

    /// Height in pixels.
    fn height(&self) -> i32;

    /// Color at `(x, y)`. Coordinates outside the image read as transparent.
    fn at(&self, x: i32, y: i32) -> Color;

    /// Storage capability used for fast-path dispatch.
    fn pixels(&self) -> Pixels<'_> {
        Pixels::Generic
    }

    /// Full extent of the image, or `None` when reads are valid at any coordinate.
    fn bounds(&self) -> Option<Rect> {
        match self.pixels() {
            Pixels::Uniform(_) => None,
            _ => Some(Rect::from_size(self.width(), self.height())),
        }
    }
}

/// An [`Image`] that can also be written, used as a compositing destination.
pub trait ImageMut: Image {
    /// Store `c` at `(x, y)`. Writes outside the image are dropped.
    fn set(&mut self, x: i32, y: i32, c: Color);

    /// Mutable access to the packed buffer, if this image has one.
    fn rgba_mut(&mut self) -> Option<&mut RgbaImage> {
        None
    }
}
