use crate::foundation::error::{DrawError, DrawResult};
use crate::foundation::geom::{Point, Rect};
use crate::surface::Image;

/// Shrink the right and bottom edges of `r` to the pixels readable from the source starting
/// at `sp` and, when present, from the mask starting at `mp`.
pub(crate) fn clip_to_sources(
    r: Rect,
    src_size: (i32, i32),
    sp: Point,
    mask: Option<&dyn Image>,
    mp: Point,
) -> DrawResult<Rect> {
    let mut dx = src_size.0.saturating_sub(sp.x);
    let mut dy = src_size.1.saturating_sub(sp.y);
    if let Some(m) = mask {
        dx = dx.min(m.width().saturating_sub(mp.x));
        dy = dy.min(m.height().saturating_sub(mp.y));
    }
    if dx < 0 || dy < 0 {
        tracing::debug!(?sp, ?mp, "offset lies past the far edge of source or mask");
        return Err(DrawError::geometry(format!(
            "source offset {sp:?} / mask offset {mp:?} past the available pixels"
        )));
    }

    let (w, h) = r
        .checked_size()
        .ok_or_else(|| DrawError::geometry(format!("rectangle {r:?} overflows i32")))?;
    let mut out = r;
    if w > dx {
        out.max.x = out.min.x + dx;
    }
    if h > dy {
        out.max.y = out.min.y + dy;
    }
    Ok(out)
}

/// Reject a clipped rectangle that would write outside `dst` or read outside a bounded
/// source or mask. `None` bounds mean reads are valid everywhere.
pub(crate) fn check_bounds(
    dst: Rect,
    r: Rect,
    src: Option<Rect>,
    sp: Point,
    mask: Option<Rect>,
    mp: Point,
) -> DrawResult<()> {
    if !dst.contains_rect(&r) {
        tracing::debug!(?r, ?dst, "rectangle exceeds destination");
        return Err(DrawError::geometry(format!(
            "rectangle {r:?} exceeds destination {}x{}",
            dst.width(),
            dst.height()
        )));
    }
    let window = |p: Point| {
        r.checked_at(p).ok_or_else(|| {
            DrawError::geometry(format!("window of {r:?} at {p:?} overflows i32"))
        })
    };
    if let Some(b) = src
        && !b.contains_rect(&window(sp)?)
    {
        tracing::debug!(?sp, ?r, "source window out of bounds");
        return Err(DrawError::geometry(format!(
            "source window at {sp:?} exceeds source {}x{}",
            b.width(),
            b.height()
        )));
    }
    if let Some(b) = mask
        && !b.contains_rect(&window(mp)?)
    {
        tracing::debug!(?mp, ?r, "mask window out of bounds");
        return Err(DrawError::geometry(format!(
            "mask window at {mp:?} exceeds mask {}x{}",
            b.width(),
            b.height()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/draw/clip.rs"]
mod tests;
