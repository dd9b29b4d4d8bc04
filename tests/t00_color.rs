extern crate pixed;

use pixed::{blend_pix, cu8, lerp_u8, multiply_u8, Color};

#[test]
fn construction_clamps_and_rounds() {
    assert_eq!(cu8(-4.0), 0);
    assert_eq!(cu8(300.0), 255);
    assert_eq!(cu8(127.4), 127);
    assert_eq!(Color::new(-5.0, 255.9, 127.4, 300.0), Color::from_u8(0, 255, 127, 255));
    assert_eq!(Color::rgb(1.0, 2.0, 3.0).a, 255);
    assert_eq!(Color::default(), Color::transparent());
    assert_eq!(Color::white(), Color::from_u8(255, 255, 255, 255));
    assert_eq!(Color::black(), Color::from_u8(0, 0, 0, 255));
}

#[test]
fn gray_uses_the_luma_weights() {
    assert_eq!(Color::black().gray(), 0.0);
    let g = Color::from_u8(100, 100, 100, 255).gray();
    assert!((g - 100.0).abs() < 1e-9);
    let r = Color::rgb(255.0, 0.0, 0.0).gray();
    assert!((r - 255.0 * 0.299).abs() < 1e-9);
}

#[test]
fn reverse_inverts_channels_and_opacifies() {
    assert_eq!(Color::from_u8(10, 20, 30, 40).reverse(), Color::from_u8(245, 235, 225, 255));
    assert_eq!(Color::white().reverse(), Color::black());
}

#[test]
fn reverse_black_or_white_picks_the_contrasting_extreme() {
    assert_eq!(Color::white().reverse_black_or_white(), Color::black());
    assert_eq!(Color::black().reverse_black_or_white(), Color::white());
    assert_eq!(Color::from_u8(200, 200, 200, 255).reverse_black_or_white(), Color::black());
    assert_eq!(Color::from_u8(50, 50, 50, 255).reverse_black_or_white(), Color::white());
    // the 127/128 boundary splits on the inverse gray
    assert_eq!(Color::from_u8(127, 127, 127, 255).reverse_black_or_white(), Color::white());
    assert_eq!(Color::from_u8(128, 128, 128, 255).reverse_black_or_white(), Color::black());
}

#[test]
fn like_compares_grays_within_a_tolerance() {
    let dark = Color::black();
    let mid = Color::from_u8(100, 100, 100, 255);
    assert!(dark.like(mid, 101.0));
    assert!(!dark.like(mid, 99.0));
    // tolerance clamps at zero; equal grays still match
    assert!(mid.like(mid, -5.0));
    // alpha is not part of the comparison
    let clear = Color::from_u8(100, 100, 100, 0);
    assert!(mid.like(clear, 0.0));
}

#[test]
fn to_rgb_flattens_onto_white() {
    assert_eq!(Color::from_u8(100, 150, 200, 0).to_rgb(), Color::white());
    assert_eq!(Color::from_u8(100, 150, 200, 255).to_rgb(), Color::rgb(100.0, 150.0, 200.0));
    assert_eq!(Color::from_u8(0, 0, 0, 128).to_rgb(), Color::from_u8(127, 127, 127, 255));
}

#[test]
fn over_composites_source_over() {
    let bg = Color::rgb(100.0, 200.0, 50.0);
    assert_eq!(Color::black().over(bg), Color::black());
    assert_eq!(Color::transparent().over(bg), bg);
}

#[test]
fn fixed_point_helpers_are_exact_at_the_endpoints() {
    assert_eq!(lerp_u8(10, 200, 0), 10);
    assert_eq!(lerp_u8(10, 200, 255), 200);
    assert_eq!(lerp_u8(200, 10, 0), 200);
    assert_eq!(lerp_u8(200, 10, 255), 10);
    assert_eq!(multiply_u8(255, 255), 255);
    assert_eq!(multiply_u8(0, 137), 0);
    assert_eq!(multiply_u8(255, 0), 0);
}

#[test]
fn blend_covers_nothing_or_everything_at_the_ends() {
    let dst = Color::from_u8(10, 20, 30, 255);
    let src = Color::rgb(200.0, 100.0, 0.0);
    assert_eq!(blend_pix(dst, src, 0), dst);
    assert_eq!(blend_pix(dst, src, 255), src);
    // transparent sources never move the destination
    assert_eq!(blend_pix(dst, Color::transparent(), 255), dst);
}

#[test]
fn display_prints_the_picker_readout_format() {
    assert_eq!(format!("{}", Color::from_u8(1, 2, 3, 4)), "rgba(1, 2, 3, 4)");
}
