//! Porter-Duff compositing of premultiplied images.
//!
//! The crate has one real entry point, [`draw_mask`], which aligns a source and an optional
//! mask with a destination rectangle and writes `(src in mask) over dst`. [`draw`] is the
//! unmasked form and [`border`] paints a rectangular frame as four `draw` calls.
//!
//! # Pipeline
//!
//! 1. **Validate**: unsupported operators and inverted rectangles are rejected.
//! 2. **Clip**: the right and bottom edges shrink to the pixels available in the source and
//!    mask. Left/top and destination clipping are not performed; geometry that would still
//!    reach outside an image returns [`DrawError::Geometry`] before any write.
//! 3. **Dispatch**: a uniform source fills rows directly and a packed [`RgbaImage`] source is
//!    copied row by row. Everything else, including an overlapping copy of the destination
//!    onto itself, runs through the per-pixel loop.
//!
//! Colors are premultiplied end to end. Only [`Op::SrcOver`] is implemented.
//!
//! ```
//! use wavyte_draw::{Color, Rect, RgbaImage, Uniform, draw, pt};
//!
//! let mut canvas = RgbaImage::new(8, 8);
//! draw(&mut canvas, Rect::new(2, 2, 6, 6), &Uniform::opaque_rgb8(255, 0, 0), pt(0, 0))?;
//! assert_eq!(canvas.pixel(3, 3), [255, 0, 0, 255]);
//! assert_eq!(canvas.pixel(0, 0), [0, 0, 0, 0]);
//! # Ok::<(), wavyte_draw::DrawError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod draw;
mod foundation;
mod surface;

pub use draw::{Compositor, DrawOpts, Op, Source, border, draw, draw_mask};
pub use foundation::color::Color;
pub use foundation::error::{DrawError, DrawResult};
pub use foundation::geom::{Point, Rect, pt};
pub use surface::alpha::AlphaImage;
pub use surface::rgba::RgbaImage;
pub use surface::uniform::Uniform;
pub use surface::{Image, ImageMut, Pixels};
