extern crate pixed;

use pixed::{Anchor, Point, Rect, RoundMode, Size};

#[test]
fn point_rounding_modes() {
    let p = Point::new(1.5, -1.5);
    assert_eq!(p.round(RoundMode::Ceil), Point::new(2.0, -1.0));
    assert_eq!(p.round(RoundMode::Floor), Point::new(1.0, -2.0));
    assert_eq!(p.round(RoundMode::Trunc), Point::new(1.0, -1.0));
    assert_eq!(Point::new(1.4, 2.6).round(RoundMode::Round), Point::new(1.0, 3.0));
}

#[test]
fn constrain_applies_the_upper_bound_first() {
    // negative span collapses onto the origin
    let r = Rect::xywh(10.0, 10.0, -5.0, -5.0);
    assert_eq!(Point::new(100.0, 0.0).constrain(r), Point::new(10.0, 10.0));

    let r = Rect::xywh(0.0, 0.0, 9.0, 9.0);
    assert_eq!(Point::new(-3.0, 4.0).constrain(r), Point::new(0.0, 4.0));
    assert_eq!(Point::new(12.0, 20.0).constrain(r), Point::new(9.0, 9.0));
    // far edge inclusive
    assert_eq!(Point::new(9.0, 9.0).constrain(r), Point::new(9.0, 9.0));
}

#[test]
fn in_rect_includes_far_edges() {
    let r = Rect::xywh(1.0, 1.0, 4.0, 4.0);
    assert!(Point::new(1.0, 1.0).in_rect(r));
    assert!(Point::new(5.0, 5.0).in_rect(r));
    assert!(!Point::new(5.1, 5.0).in_rect(r));
    assert!(!Point::new(0.9, 3.0).in_rect(r));
    assert!(r.contains(Point::new(3.0, 2.0)));
}

#[test]
fn neighbors() {
    let p = Point::new(3.0, 3.0);
    assert_eq!(p.left(), Point::new(2.0, 3.0));
    assert_eq!(p.right(), Point::new(4.0, 3.0));
    assert_eq!(p.up(), Point::new(3.0, 2.0));
    assert_eq!(p.down(), Point::new(3.0, 4.0));
    assert_eq!(p.left_up(), Point::new(2.0, 2.0));
    assert_eq!(p.right_up(), Point::new(4.0, 2.0));
    assert_eq!(p.left_down(), Point::new(2.0, 4.0));
    assert_eq!(p.right_down(), Point::new(4.0, 4.0));
}

#[test]
fn distances() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(Point::origin().distance_to(p), 5.0);
    // height above the x axis
    let d = p.distance_to_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0)).unwrap();
    assert!((d - 4.0).abs() < 1e-12);
    // 3-4-5 triangle: origin to the hypotenuse
    let d = Point::origin()
        .distance_to_line(Point::new(3.0, 0.0), Point::new(0.0, 4.0))
        .unwrap();
    assert!((d - 2.4).abs() < 1e-12);
    assert_eq!(
        p.distance_to_line(Point::new(1.0, 1.0), Point::new(1.0, 1.0)),
        Err(pixed::Error::CoincidentPoints)
    );
}

#[test]
fn size_arithmetic() {
    let s = Size::new(-3.7, 2.7);
    assert_eq!(s.abs(), Size::new(3.7, 2.7));
    // shifts truncate to integers first
    assert_eq!(s.shift_left(3), Size::new(-24.0, 16.0));
    assert_eq!(Size::new(33.0, 33.0).shift_left(3), Size::new(264.0, 264.0));
    assert_eq!(Size::new(264.0, 100.0).shift_right(3), Size::new(33.0, 12.0));
    assert_eq!(Size::new(2.0, 3.0) + Size::new(1.0, 1.0), Size::new(3.0, 4.0));
    assert_eq!(Size::new(2.0, 3.0) - Size::new(1.0, 5.0), Size::new(1.0, -2.0));
    assert_eq!(-Size::new(2.0, -3.0), Size::new(-2.0, 3.0));
    assert_eq!(Point::new(5.0, 7.0) - Point::new(2.0, 3.0), Size::new(3.0, 4.0));
    assert_eq!(Point::new(1.0, 1.0) + Size::new(2.0, 0.5), Point::new(3.0, 1.5));
    assert_eq!(Point::new(1.0, 1.0) - Size::new(2.0, 0.5), Point::new(-1.0, 0.5));
}

#[test]
fn standardize_folds_negative_spans() {
    let r = Rect::xywh(10.0, 10.0, -4.0, 6.0).standardize();
    assert_eq!(r, Rect::xywh(6.0, 10.0, 4.0, 6.0));
    let r = Rect::xywh(10.0, 10.0, -4.0, -6.0).standardize();
    assert_eq!(r, Rect::xywh(6.0, 4.0, 4.0, 6.0));
    let r = Rect::xywh(1.0, 2.0, 3.0, 4.0);
    assert_eq!(r.standardize(), r);
}

#[test]
fn anchors_sit_on_border_pixels() {
    let r = Rect::xywh(0.0, 0.0, 10.0, 10.0);
    assert_eq!(r.anchor(Anchor::LeftUp), Point::new(0.0, 0.0));
    assert_eq!(r.anchor(Anchor::Up), Point::new(5.0, 0.0));
    assert_eq!(r.anchor(Anchor::RightUp), Point::new(9.0, 0.0));
    assert_eq!(r.anchor(Anchor::Right), Point::new(9.0, 5.0));
    assert_eq!(r.anchor(Anchor::RightDown), Point::new(9.0, 9.0));
    assert_eq!(r.anchor(Anchor::Down), Point::new(5.0, 9.0));
    assert_eq!(r.anchor(Anchor::LeftDown), Point::new(0.0, 9.0));
    assert_eq!(r.anchor(Anchor::Left), Point::new(0.0, 5.0));
    assert_eq!(r.anchor(Anchor::Center), Point::new(5.0, 5.0));
    // negative spans standardize first
    let r = Rect::xywh(10.0, 10.0, -10.0, -10.0);
    assert_eq!(r.anchor(Anchor::LeftUp), Point::new(0.0, 0.0));
    assert_eq!(r.anchor(Anchor::RightDown), Point::new(9.0, 9.0));
}

#[test]
fn detect_handle_round_trips_every_anchor() {
    let r = Rect::xywh(20.0, 30.0, 12.0, 10.0);
    for &anchor in Anchor::handles().iter() {
        assert_eq!(r.detect_handle(r.anchor(anchor), 0.0), Some(anchor));
    }
    assert_eq!(r.detect_handle(r.anchor(Anchor::Center), 0.0), None);
}

#[test]
fn detect_handle_tolerance() {
    let r = Rect::xywh(0.0, 0.0, 20.0, 20.0);
    // near top and left at once names the corner
    assert_eq!(r.detect_handle(Point::new(5.0, 5.0), 8.0), Some(Anchor::LeftUp));
    // near the top line only
    assert_eq!(r.detect_handle(Point::new(10.0, 2.0), 2.0), Some(Anchor::Up));
    assert_eq!(r.detect_handle(Point::new(10.0, 10.0), 2.0), None);
    // a negative-size rect resolves on its standardized edges
    let r = Rect::xywh(20.0, 20.0, -20.0, -20.0);
    assert_eq!(r.detect_handle(Point::new(0.0, 0.0), 1.0), Some(Anchor::LeftUp));
}
