use crate::foundation::color::Color;
use crate::foundation::geom::{Point, Rect};
use crate::surface::rgba::RgbaImage;

// All rectangles here are already clipped and bounds-checked against every buffer involved.

/// Fill `r` with `c`: the first row pixel by pixel, every other row as a copy of it.
pub(crate) fn fill(dst: &mut RgbaImage, r: Rect, c: Color) {
    if r.height() < 1 || r.width() < 1 {
        return;
    }
    let px = c.to_rgba8();
    let (x0, x1) = (r.min.x as usize, r.max.x as usize);
    let (y0, y1) = (r.min.y as usize, r.max.y as usize);

    let first = dst.row_span(y0, x0, x1);
    for out in dst.data[first.clone()].chunks_exact_mut(4) {
        out.copy_from_slice(&px);
    }
    for y in y0 + 1..y1 {
        let start = dst.index(x0, y);
        dst.data.copy_within(first.clone(), start);
    }
}

/// Copy the rows of `r` from a different packed image whose window starts at `sp`.
pub(crate) fn copy(dst: &mut RgbaImage, r: Rect, src: &RgbaImage, sp: Point) {
    let (x0, x1) = (r.min.x as usize, r.max.x as usize);
    let (sx0, sx1) = (sp.x as usize, sp.x as usize + (x1 - x0));
    for row in 0..r.height().max(0) as usize {
        let d = dst.row_span(r.min.y as usize + row, x0, x1);
        let s = src.row_span(sp.y as usize + row, sx0, sx1);
        dst.data[d].copy_from_slice(&src.data[s]);
    }
}

/// Copy the rows of `r` from the window at `sp` in the same buffer. The two regions must not
/// overlap; rows are processed top to bottom.
pub(crate) fn copy_within(buf: &mut RgbaImage, r: Rect, sp: Point) {
    let (x0, x1) = (r.min.x as usize, r.max.x as usize);
    let (sx0, sx1) = (sp.x as usize, sp.x as usize + (x1 - x0));
    for row in 0..r.height().max(0) as usize {
        let d = buf.index(x0, r.min.y as usize + row);
        let s = buf.row_span(sp.y as usize + row, sx0, sx1);
        buf.data.copy_within(s, d);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/fast.rs"]
mod tests;
