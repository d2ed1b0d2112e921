use crate::draw::{Source, overlaps_shifted};
use crate::foundation::color::Color;
use crate::foundation::geom::{Point, Rect};
use crate::foundation::math::{MAX8, div255_trunc};
use crate::surface::{Image, ImageMut};

/// Per-pixel `(src in mask) over dst` for the clipped rectangle `r`.
///
/// When the source is the destination and the windows overlap, pixels are visited from the
/// far corner whenever the source lies above, or on the same row and left of, `r.min`, so
/// every source pixel is read before it is overwritten.
pub(crate) fn composite(
    dst: &mut dyn ImageMut,
    r: Rect,
    src: Source<'_>,
    sp: Point,
    mask: Option<&dyn Image>,
    mp: Point,
) {
    let (mut x0, mut x1, mut step) = (r.min.x, r.max.x, 1);
    let (mut y0, mut y1) = (r.min.y, r.max.y);
    if matches!(src, Source::Dst)
        && overlaps_shifted(r, sp)
        && (sp.y < r.min.y || (sp.y == r.min.y && sp.x < r.min.x))
    {
        (x0, x1) = (x1 - 1, x0 - 1);
        (y0, y1) = (y1 - 1, y0 - 1);
        step = -1;
    }

    let mut y = y0;
    let mut sy = sp.y + y0 - r.min.y;
    let mut my = mp.y + y0 - r.min.y;
    while y != y1 {
        let mut x = x0;
        let mut sx = sp.x + x0 - r.min.x;
        let mut mx = mp.x + x0 - r.min.x;
        while x != x1 {
            match mask {
                None => {
                    let s = read(src, dst, sx, sy);
                    dst.set(x, y, s);
                }
                Some(m) => {
                    let (_, _, _, ma) = m.at(mx, my).channels();
                    match ma {
                        0 => {}
                        0xFFFF => {
                            let s = read(src, dst, sx, sy);
                            dst.set(x, y, s);
                        }
                        _ => {
                            let s = read(src, dst, sx, sy);
                            let out = blend_masked(dst.at(x, y), s, ma);
                            dst.set(x, y, out);
                        }
                    }
                }
            }
            x += step;
            sx += step;
            mx += step;
        }
        y += step;
        sy += step;
        my += step;
    }
}

fn read(src: Source<'_>, dst: &dyn ImageMut, x: i32, y: i32) -> Color {
    match src {
        Source::Image(img) => img.at(x, y),
        Source::Dst => dst.at(x, y),
    }
}

/// Blend `s` over `d` with 16-bit mask alpha `ma`, at 8-bit precision with truncation.
pub(crate) fn blend_masked(d: Color, s: Color, ma: u32) -> Color {
    let [dr, dg, db, da] = d.to_rgba8().map(u32::from);
    let [sr, sg, sb, sa] = s.to_rgba8().map(u32::from);
    let ma = ma >> 8;
    let a = div255_trunc(sa * ma);
    let ch = |dc: u32, sc: u32| div255_trunc(dc * (MAX8 - a) + sc * ma).min(MAX8) as u8;
    Color::rgba8(ch(dr, sr), ch(dg, sg), ch(db, sb), ch(da, sa))
}

#[cfg(test)]
#[path = "../../tests/unit/draw/blend.rs"]
mod tests;
