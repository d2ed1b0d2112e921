use super::*;
use crate::foundation::geom::pt;

fn ramp(w: u32, h: u32) -> RgbaImage {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            let v = (y * w + x) as u8;
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    RgbaImage::from_raw(w, h, data).unwrap()
}

#[test]
fn fill_covers_exactly_the_rect() {
    let mut img = RgbaImage::new(5, 4);
    fill(&mut img, Rect::new(1, 1, 4, 3), Color::rgba8(9, 8, 7, 255));
    for y in 0..4 {
        for x in 0..5 {
            let inside = (1..4).contains(&x) && (1..3).contains(&y);
            let want = if inside { [9, 8, 7, 255] } else { [0, 0, 0, 0] };
            assert_eq!(img.pixel(x, y), want, "pixel ({x},{y})");
        }
    }
}

#[test]
fn fill_degenerate_rect_is_noop() {
    let mut img = RgbaImage::new(3, 3);
    fill(&mut img, Rect::new(0, 1, 3, 1), Color::OPAQUE_WHITE);
    assert!(img.as_raw().iter().all(|&b| b == 0));
}

#[test]
fn copy_moves_rows_from_source_window() {
    let src = ramp(4, 4);
    let mut dst = RgbaImage::new(4, 4);
    copy(&mut dst, Rect::new(0, 0, 2, 2), &src, pt(2, 2));
    assert_eq!(dst.pixel(0, 0), src.pixel(2, 2));
    assert_eq!(dst.pixel(1, 1), src.pixel(3, 3));
    assert_eq!(dst.pixel(2, 0), [0, 0, 0, 0]);
}

#[test]
fn copy_within_disjoint_regions() {
    let mut img = ramp(6, 2);
    let before = img.clone();
    copy_within(&mut img, Rect::new(3, 0, 6, 2), pt(0, 0));
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(img.pixel(x + 3, y), before.pixel(x, y));
            assert_eq!(img.pixel(x, y), before.pixel(x, y));
        }
    }
}
