use super::*;
use crate::foundation::color::Color;
use crate::foundation::geom::pt;
use crate::surface::alpha::AlphaImage;
use crate::surface::rgba::RgbaImage;
use crate::surface::uniform::Uniform;

fn checker(w: u32, h: u32) -> RgbaImage {
    let mut img = RgbaImage::new(w, h);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let v = ((x * 31 + y * 17) % 256) as u8;
            img.set(x, y, Color::rgba8(v, 255 - v, v / 2, 255));
        }
    }
    img
}

/// Image without a packed buffer, forcing the per-pixel loop.
struct Plain(RgbaImage);

impl Image for Plain {
    fn width(&self) -> i32 {
        self.0.width()
    }

    fn height(&self) -> i32 {
        self.0.height()
    }

    fn at(&self, x: i32, y: i32) -> Color {
        self.0.at(x, y)
    }
}

#[test]
fn unsupported_operator_leaves_destination_untouched() {
    let mut dst = RgbaImage::filled(4, 4, Color::OPAQUE_WHITE);
    let before = dst.clone();
    let src = Uniform::opaque_rgb8(1, 2, 3);
    let err = draw_mask(
        &mut dst,
        Rect::from_size(4, 4),
        &src,
        Point::ZERO,
        None,
        Point::ZERO,
        Op::Xor,
    )
    .unwrap_err();
    assert!(matches!(err, DrawError::UnsupportedOp(Op::Xor)));
    assert_eq!(dst, before);
}

#[test]
fn inverted_rect_is_rejected() {
    let mut dst = RgbaImage::new(4, 4);
    let src = Uniform::opaque_rgb8(1, 2, 3);
    let err = draw(&mut dst, Rect::new(3, 0, 1, 2), &src, Point::ZERO).unwrap_err();
    assert!(matches!(err, DrawError::Geometry(_)));
}

#[test]
fn empty_rect_is_noop_even_off_canvas() {
    let mut dst = RgbaImage::new(2, 2);
    let src = Uniform::opaque_rgb8(1, 2, 3);
    draw(&mut dst, Rect::new(50, 50, 50, 60), &src, Point::ZERO).unwrap();
    assert!(dst.as_raw().iter().all(|&b| b == 0));
}

#[test]
fn rect_past_destination_is_rejected_without_writes() {
    let mut dst = RgbaImage::new(4, 4);
    let src = Uniform::opaque_rgb8(9, 9, 9);
    assert!(draw(&mut dst, Rect::new(2, 2, 5, 4), &src, Point::ZERO).is_err());
    assert!(dst.as_raw().iter().all(|&b| b == 0));
}

#[test]
fn negative_offset_into_bounded_source_is_rejected() {
    let mut dst = RgbaImage::new(4, 4);
    let src = checker(4, 4);
    assert!(matches!(
        draw(&mut dst, Rect::from_size(2, 2), &src, pt(-1, 0)),
        Err(DrawError::Geometry(_))
    ));
}

#[test]
fn negative_offset_into_uniform_source_is_fine() {
    let mut dst = RgbaImage::new(4, 4);
    let src = Uniform::opaque_rgb8(9, 9, 9);
    draw(&mut dst, Rect::from_size(2, 2), &src, pt(-5, -5)).unwrap();
    assert_eq!(dst.pixel(1, 1), [9, 9, 9, 255]);
}

#[test]
fn fast_paths_match_generic_loop() {
    let src = checker(9, 7);
    let fast = Compositor::default();
    let slow = Compositor::new(DrawOpts::default().with_fast_paths(false));
    assert!(fast.opts().fast_paths());
    assert!(!slow.opts().fast_paths());

    let mut a = RgbaImage::new(12, 12);
    let mut b = RgbaImage::new(12, 12);
    for c in [&fast, &slow] {
        let dst = if c.opts().fast_paths() { &mut a } else { &mut b };
        c.draw(dst, Rect::new(1, 2, 20, 20), &src, pt(3, 1)).unwrap();
        c.draw(dst, Rect::new(0, 0, 3, 3), &Uniform::opaque_rgb8(7, 7, 7), Point::ZERO)
            .unwrap();
    }
    assert_eq!(a, b);
}

#[test]
fn generic_source_copies_like_packed_source() {
    let packed = checker(5, 5);
    let plain = Plain(packed.clone());
    let mut a = RgbaImage::new(5, 5);
    let mut b = RgbaImage::new(5, 5);
    draw(&mut a, Rect::from_size(5, 5), &packed, Point::ZERO).unwrap();
    draw(&mut b, Rect::from_size(5, 5), &plain, Point::ZERO).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, packed);
}

#[test]
fn disjoint_self_copy_uses_same_buffer() {
    let mut img = checker(8, 4);
    let before = img.clone();
    draw(&mut img, Rect::new(4, 0, 8, 4), Source::Dst, pt(0, 0)).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(img.pixel(x + 4, y), before.pixel(x, y));
        }
    }
}

#[test]
fn masked_half_coverage_through_alpha_image() {
    let mut dst = RgbaImage::filled(3, 1, Color::rgba8(100, 100, 100, 255));
    let src = Uniform::new(Color::rgba8(200, 200, 200, 255));
    let mut mask = AlphaImage::new(3, 1);
    mask.set_alpha(0, 0, 0);
    mask.set_alpha(1, 0, 128);
    mask.set_alpha(2, 0, 255);
    draw_mask(
        &mut dst,
        Rect::from_size(3, 1),
        &src,
        Point::ZERO,
        Some(&mask),
        Point::ZERO,
        Op::SrcOver,
    )
    .unwrap();
    assert_eq!(dst.pixel(0, 0), [100, 100, 100, 255]);
    assert_eq!(dst.pixel(1, 0), [150, 150, 150, 255]);
    assert_eq!(dst.pixel(2, 0), [200, 200, 200, 255]);
}

#[test]
fn env_flag_parsing() {
    assert!(parse_flag("1"));
    assert!(parse_flag("yes"));
    assert!(!parse_flag(" OFF "));
    assert!(!parse_flag("0"));
    assert!(!parse_flag("false"));
}

#[test]
fn op_default_and_serde_names() {
    assert_eq!(Op::default(), Op::SrcOver);
    assert_eq!(serde_json::to_string(&Op::SrcOver).unwrap(), "\"src_over\"");
    let op: Op = serde_json::from_str("\"dst_atop\"").unwrap();
    assert_eq!(op, Op::DstAtop);
}

#[test]
fn extreme_offsets_and_rects_return_geometry_errors() {
    let mut dst = RgbaImage::new(4, 4);
    let src = checker(4, 4);
    assert!(matches!(
        draw(&mut dst, Rect::new(1, 0, 2, 1), &src, pt(i32::MIN, 0)),
        Err(DrawError::Geometry(_))
    ));
    assert!(matches!(
        draw(
            &mut dst,
            Rect::new(i32::MIN, 0, i32::MAX, 1),
            &Uniform::opaque_rgb8(1, 2, 3),
            Point::ZERO
        ),
        Err(DrawError::Geometry(_))
    ));
    assert!(matches!(
        border(
            &mut dst,
            Rect::new(-2, 0, 2, 2),
            i32::MIN,
            &Uniform::opaque_rgb8(1, 2, 3),
            Point::ZERO
        ),
        Err(DrawError::Geometry(_))
    ));
    assert!(dst.as_raw().iter().all(|&b| b == 0));
}
