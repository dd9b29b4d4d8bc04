extern crate pixed;

use pixed::text::{char_width, draw_text, text_width, FONT_HEIGHT};
use pixed::{Color, PixelBuffer};

#[test]
fn width_is_monospace() {
    assert_eq!(text_width(""), 0);
    assert!(char_width() > 0);
    assert_eq!(text_width("a"), char_width());
    assert_eq!(text_width("(3, 4)"), 6 * char_width());
    // chars, not bytes
    assert_eq!(text_width("\u{fffd}\u{fffd}"), 2 * char_width());
}

#[test]
fn drawing_stays_inside_the_glyph_box() {
    let w = text_width("Hi") as i64;
    let mut buf = PixelBuffer::new(64, 24);
    buf.fill(Color::white());
    draw_text(&mut buf, 10, 4, "Hi", Color::black());

    let mut inked = 0;
    for y in 0..24 {
        for x in 0..64 {
            let inside = x >= 10 && x < 10 + w && y >= 4 && y < 4 + FONT_HEIGHT as i64;
            let c = buf.get(x, y).unwrap();
            if !inside {
                assert_eq!(c, Color::white());
            } else if c != Color::white() {
                inked += 1;
            }
        }
    }
    assert!(inked > 0);
}

#[test]
fn clipping_skips_offscreen_pixels() {
    let mut buf = PixelBuffer::new(8, 8);
    buf.fill(Color::white());
    let before = buf.clone();
    draw_text(&mut buf, -1000, -1000, "X", Color::black());
    assert_eq!(buf.as_bytes(), before.as_bytes());

    // partially off the right edge: the visible columns may change, nothing else
    let mut buf = PixelBuffer::new(10, 20);
    buf.fill(Color::white());
    draw_text(&mut buf, 6, 2, "W", Color::black());
    for y in 0..20 {
        for x in 0..6 {
            assert_eq!(buf.get(x, y).unwrap(), Color::white());
        }
    }
    for x in 0..10 {
        assert_eq!(buf.get(x, 0).unwrap(), Color::white());
        assert_eq!(buf.get(x, 1).unwrap(), Color::white());
    }
}

#[test]
fn unknown_glyphs_render_the_replacement() {
    let mut fallback = PixelBuffer::new(32, 20);
    fallback.fill(Color::white());
    // outside both embedded ranges
    draw_text(&mut fallback, 2, 2, "\u{07ff}", Color::black());

    let mut direct = PixelBuffer::new(32, 20);
    direct.fill(Color::white());
    draw_text(&mut direct, 2, 2, "\u{fffd}", Color::black());

    assert_eq!(fallback.as_bytes(), direct.as_bytes());
}

#[test]
fn coverage_scales_with_the_text_alpha() {
    let mut opaque = PixelBuffer::new(32, 20);
    opaque.fill(Color::white());
    draw_text(&mut opaque, 2, 2, "H", Color::black());

    let mut ghost = PixelBuffer::new(32, 20);
    ghost.fill(Color::white());
    draw_text(&mut ghost, 2, 2, "H", Color::from_u8(0, 0, 0, 0));

    // zero-alpha text is invisible even where coverage is full
    let blank: Vec<u8> = vec![255; 32 * 20 * 4];
    assert_eq!(ghost.as_bytes(), &blank[..]);
    assert_ne!(opaque.as_bytes(), &blank[..]);
}
