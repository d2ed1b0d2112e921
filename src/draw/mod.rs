pub(crate) mod blend;
pub(crate) mod border;
pub(crate) mod clip;
pub(crate) mod fast;

use crate::foundation::error::{DrawError, DrawResult};
use crate::foundation::geom::{Point, Rect};
use crate::surface::{Image, ImageMut, Pixels};

/// Porter-Duff compositing operator.
///
/// Only [`Op::SrcOver`] is implemented; every other operator is rejected with
/// [`DrawError::UnsupportedOp`] before the destination is touched.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    /// Neither source nor destination.
    Clear,
    /// Source only.
    Src,
    /// Destination only.
    Dst,
    /// Source over destination.
    #[default]
    SrcOver,
    /// Destination over source.
    DstOver,
    /// Source inside destination coverage.
    SrcIn,
    /// Destination inside source coverage.
    DstIn,
    /// Source outside destination coverage.
    SrcOut,
    /// Destination outside source coverage.
    DstOut,
    /// Source atop destination.
    SrcAtop,
    /// Destination atop source.
    DstAtop,
    /// Source and destination where they do not overlap.
    Xor,
}

/// Where the source pixels of a draw call come from.
#[derive(Clone, Copy)]
pub enum Source<'a> {
    /// A separate image.
    Image(&'a dyn Image),
    /// The destination image itself, for in-place copies such as scrolling.
    Dst,
}

impl<'a, T: Image> From<&'a T> for Source<'a> {
    fn from(img: &'a T) -> Self {
        Source::Image(img)
    }
}

impl<'a> From<&'a dyn Image> for Source<'a> {
    fn from(img: &'a dyn Image) -> Self {
        Source::Image(img)
    }
}

impl std::fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Image(img) => write!(f, "Image({}x{})", img.width(), img.height()),
            Source::Dst => f.write_str("Dst"),
        }
    }
}

const FAST_PATHS_ENV: &str = "WAVYTE_DRAW_FAST_PATHS";

/// Options for a [`Compositor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOpts {
    pub(crate) fast_paths: bool,
}

impl Default for DrawOpts {
    fn default() -> Self {
        Self { fast_paths: true }
    }
}

impl DrawOpts {
    /// Return options with the fill/copy fast paths enabled or disabled.
    ///
    /// Disabling them routes every call through the per-pixel loop; results are identical.
    pub fn with_fast_paths(mut self, enabled: bool) -> Self {
        self.fast_paths = enabled;
        self
    }

    /// Defaults, overridden by `WAVYTE_DRAW_FAST_PATHS` (`0`, `false`, `off` or `no` disables).
    pub fn from_env() -> Self {
        let fast_paths = std::env::var(FAST_PATHS_ENV)
            .ok()
            .map(|v| parse_flag(&v))
            .unwrap_or(true);
        Self { fast_paths }
    }

    /// Whether fast paths are enabled.
    pub fn fast_paths(&self) -> bool {
        self.fast_paths
    }
}

fn parse_flag(v: &str) -> bool {
    !matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

/// Porter-Duff compositor configured by [`DrawOpts`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Compositor {
    opts: DrawOpts,
}

impl Compositor {
    /// Create a compositor with the given options.
    pub fn new(opts: DrawOpts) -> Self {
        Self { opts }
    }

    /// Options this compositor was built with.
    pub fn opts(&self) -> DrawOpts {
        self.opts
    }

    /// Composite `src` over `dst` inside `r`, aligning `sp` in `src` with `r.min`.
    pub fn draw<'s>(
        &self,
        dst: &mut dyn ImageMut,
        r: Rect,
        src: impl Into<Source<'s>>,
        sp: Point,
    ) -> DrawResult<()> {
        self.draw_mask(dst, r, src, sp, None, Point::ZERO, Op::SrcOver)
    }

    /// Replace `r` in `dst` with `(src in mask) op dst`.
    ///
    /// `r.min` in `dst` is aligned with `sp` in `src` and `mp` in `mask`. The rectangle is
    /// shrunk at its right and bottom edges to the pixels available in `src` and `mask`;
    /// it is never shifted or clipped at its left and top edges. Geometry that would still
    /// read or write outside an image after that is rejected before any pixel is written.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_mask<'s>(
        &self,
        dst: &mut dyn ImageMut,
        r: Rect,
        src: impl Into<Source<'s>>,
        sp: Point,
        mask: Option<&dyn Image>,
        mp: Point,
        op: Op,
    ) -> DrawResult<()> {
        let src: Source<'s> = src.into();
        if op != Op::SrcOver {
            tracing::debug!(?op, "rejecting unsupported operator");
            return Err(DrawError::UnsupportedOp(op));
        }
        if !r.is_well_formed() {
            tracing::debug!(?r, "rejecting inverted rectangle");
            return Err(DrawError::geometry(format!(
                "rectangle {r:?} has max < min"
            )));
        }
        if r.is_empty() {
            return Ok(());
        }

        let (src_size, src_bounds) = match src {
            Source::Image(img) => ((img.width(), img.height()), img.bounds()),
            Source::Dst => ((dst.width(), dst.height()), dst.bounds()),
        };
        let r = clip::clip_to_sources(r, src_size, sp, mask, mp)?;
        if r.is_empty() {
            return Ok(());
        }
        clip::check_bounds(
            Rect::from_size(dst.width(), dst.height()),
            r,
            src_bounds,
            sp,
            mask.and_then(|m| m.bounds()),
            mp,
        )?;

        if self.opts.fast_paths && mask.is_none() && self.try_fast_path(dst, r, src, sp) {
            return Ok(());
        }

        tracing::trace!(path = "generic", ?r, masked = mask.is_some());
        blend::composite(dst, r, src, sp, mask, mp);
        Ok(())
    }

    /// Run the fill or copy fast path when the inputs allow it; `false` means nothing was written.
    fn try_fast_path(&self, dst: &mut dyn ImageMut, r: Rect, src: Source<'_>, sp: Point) -> bool {
        match src {
            Source::Image(img) => match img.pixels() {
                Pixels::Uniform(c) => {
                    if let Some(buf) = dst.rgba_mut() {
                        tracing::trace!(path = "fill", ?r);
                        fast::fill(buf, r, c);
                        return true;
                    }
                }
                Pixels::Rgba(s) => {
                    if let Some(buf) = dst.rgba_mut() {
                        tracing::trace!(path = "copy", ?r);
                        fast::copy(buf, r, s, sp);
                        return true;
                    }
                }
                Pixels::Generic => {}
            },
            // No fast path for an overlapping copy within one buffer.
            Source::Dst if !overlaps_shifted(r, sp) => {
                if let Some(buf) = dst.rgba_mut() {
                    tracing::trace!(path = "copy_within", ?r);
                    fast::copy_within(buf, r, sp);
                    return true;
                }
            }
            Source::Dst => {}
        }
        false
    }
}

/// Return `true` when `r` overlaps the source window it reads from within the same image.
pub(crate) fn overlaps_shifted(r: Rect, sp: Point) -> bool {
    r.checked_at(sp).is_some_and(|w| r.overlaps(&w))
}

/// [`Compositor::draw`] with default options.
pub fn draw<'s>(
    dst: &mut dyn ImageMut,
    r: Rect,
    src: impl Into<Source<'s>>,
    sp: Point,
) -> DrawResult<()> {
    Compositor::default().draw(dst, r, src, sp)
}

/// [`Compositor::draw_mask`] with default options.
pub fn draw_mask<'s>(
    dst: &mut dyn ImageMut,
    r: Rect,
    src: impl Into<Source<'s>>,
    sp: Point,
    mask: Option<&dyn Image>,
    mp: Point,
    op: Op,
) -> DrawResult<()> {
    Compositor::default().draw_mask(dst, r, src, sp, mask, mp, op)
}

/// [`Compositor::border`] with default options.
pub fn border<'s>(
    dst: &mut dyn ImageMut,
    r: Rect,
    w: i32,
    src: impl Into<Source<'s>>,
    sp: Point,
) -> DrawResult<()> {
    Compositor::default().border(dst, r, w, src, sp)
}

#[cfg(test)]
#[path = "../../tests/unit/draw/compositor.rs"]
mod tests;
