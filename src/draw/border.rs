use crate::draw::{Compositor, Source};
use crate::foundation::error::{DrawError, DrawResult};
use crate::foundation::geom::{Point, Rect, pt};
use crate::surface::ImageMut;

impl Compositor {
    /// Draw a `|w|`-pixel frame around `r` in `dst` from `src`, aligning `sp` with `r.min`.
    ///
    /// A positive `w` paints inside `r`, a negative `w` paints outside it, and `0` paints
    /// nothing. Each side is one [`Compositor::draw`] call; the left and right strips skip
    /// the rows already covered by the top and bottom strips. An inside frame wider than half
    /// of `r` in either direction, or a frame whose coordinates overflow `i32`, is rejected
    /// before any strip is drawn.
    #[tracing::instrument(level = "trace", skip_all, fields(rect = ?r, w = w))]
    pub fn border<'s>(
        &self,
        dst: &mut dyn ImageMut,
        r: Rect,
        w: i32,
        src: impl Into<Source<'s>>,
        sp: Point,
    ) -> DrawResult<()> {
        let src: Source<'s> = src.into();
        if w == 0 {
            return Ok(());
        }
        if !r.is_well_formed() {
            return Err(DrawError::geometry(format!(
                "border rectangle {r:?} has max < min"
            )));
        }
        for (strip, offset) in strips(r, w)? {
            let strip_sp = sp.checked_add(offset).ok_or_else(|| {
                DrawError::geometry(format!("source offset {sp:?} + {offset:?} overflows i32"))
            })?;
            self.draw(dst, strip, src, strip_sp)?;
        }
        Ok(())
    }
}

/// The four `(destination strip, source offset delta)` pairs, in top, left, right, bottom order.
fn strips(r: Rect, w: i32) -> DrawResult<[(Rect, Point); 4]> {
    let overflow =
        || DrawError::geometry(format!("border of width {w} around {r:?} overflows i32"));
    let (dx, dy) = r.checked_size().ok_or_else(overflow)?;
    let Rect { min, max } = r;
    if w > 0 {
        if w.saturating_mul(2) > dx || w.saturating_mul(2) > dy {
            return Err(DrawError::geometry(format!(
                "inner border width {w} exceeds half the size of {r:?}"
            )));
        }
        // 2w <= dx, dy keeps every coordinate below inside r.
        return Ok([
            (Rect::new(min.x, min.y, max.x, min.y + w), Point::ZERO),
            (Rect::new(min.x, min.y + w, min.x + w, max.y - w), pt(0, w)),
            (
                Rect::new(max.x - w, min.y + w, max.x, max.y - w),
                pt(dx - w, w),
            ),
            (Rect::new(min.x, max.y - w, max.x, max.y), pt(0, dy - w)),
        ]);
    }

    let i = w.checked_neg().ok_or_else(overflow)?;
    let x0 = min.x.checked_sub(i).ok_or_else(overflow)?;
    let y0 = min.y.checked_sub(i).ok_or_else(overflow)?;
    let x1 = max.x.checked_add(i).ok_or_else(overflow)?;
    let y1 = max.y.checked_add(i).ok_or_else(overflow)?;
    Ok([
        (Rect::new(x0, y0, x1, min.y), pt(-i, -i)),
        (Rect::new(x0, min.y, min.x, max.y), pt(-i, 0)),
        (Rect::new(max.x, min.y, x1, max.y), pt(dx, 0)),
        // Vertical offset 0 rather than the rectangle height, unlike the top strip.
        (Rect::new(x0, max.y, x1, y1), pt(-i, 0)),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/draw/border.rs"]
mod tests;
