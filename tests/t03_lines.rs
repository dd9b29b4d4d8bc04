extern crate pixed;

use pixed::{bresenham_line, dda_line, Point, RoundMode};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn dda_walks_the_major_axis() {
    let pts = dda_line(p(0.0, 0.0), p(4.0, 2.0), RoundMode::Ceil);
    assert_eq!(
        pts,
        vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 1.0), p(3.0, 2.0), p(4.0, 2.0)]
    );
}

#[test]
fn dda_round_mode_changes_the_lattice() {
    let pts = dda_line(p(0.0, 0.0), p(4.0, 2.0), RoundMode::Floor);
    assert_eq!(
        pts,
        vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1.0), p(3.0, 1.0), p(4.0, 2.0)]
    );
}

#[test]
fn dda_degenerate_segment_is_one_point() {
    assert_eq!(dda_line(p(3.2, 3.7), p(3.2, 3.7), RoundMode::Ceil), vec![p(4.0, 4.0)]);
    // shorter than half a pixel collapses too
    assert_eq!(dda_line(p(0.0, 0.0), p(0.4, 0.2), RoundMode::Round), vec![p(0.0, 0.0)]);
}

#[test]
fn dda_counts_steps_from_the_longer_axis() {
    let pts = dda_line(p(0.0, 0.0), p(2.0, 7.0), RoundMode::Round);
    assert_eq!(pts.len(), 8);
    assert_eq!(pts[0], p(0.0, 0.0));
    assert_eq!(pts[7], p(2.0, 7.0));
    for pair in pts.windows(2) {
        assert_eq!(pair[1].y - pair[0].y, 1.0);
    }
}

#[test]
fn bresenham_endpoints_and_length() {
    let cases = [
        (p(0.0, 0.0), p(4.0, 2.0)),
        (p(0.0, 0.0), p(2.0, 7.0)),
        (p(5.0, 5.0), p(-3.0, 1.0)),
        (p(2.0, 9.0), p(2.0, 1.0)),
        (p(7.0, 3.0), p(1.0, 3.0)),
    ];
    for &(a, b) in cases.iter() {
        let pts = bresenham_line(a, b);
        let dx = (b.x - a.x).abs() as usize;
        let dy = (b.y - a.y).abs() as usize;
        assert_eq!(pts.len(), dx.max(dy) + 1, "{:?} -> {:?}", a, b);
        assert_eq!(pts[0], a);
        assert_eq!(*pts.last().unwrap(), b);
        // 8-connected, no stalls
        for pair in pts.windows(2) {
            assert!((pair[1].x - pair[0].x).abs() <= 1.0);
            assert!((pair[1].y - pair[0].y).abs() <= 1.0);
            assert!(pair[0] != pair[1]);
        }
    }
}

#[test]
fn bresenham_is_symmetric() {
    let pairs = [
        (p(0.0, 0.0), p(4.0, 2.0)),
        (p(0.0, 0.0), p(2.0, 7.0)),
        (p(-3.0, 4.0), p(6.0, -1.0)),
        (p(1.0, 8.0), p(6.0, 2.0)),
    ];
    for &(a, b) in pairs.iter() {
        let fwd = bresenham_line(a, b);
        let mut rev = bresenham_line(b, a);
        rev.reverse();
        assert_eq!(fwd, rev, "{:?} <-> {:?}", a, b);
    }
}

#[test]
fn single_point_segments() {
    assert_eq!(bresenham_line(p(3.0, 3.0), p(3.0, 3.0)), vec![p(3.0, 3.0)]);
    // fractional endpoints land on the rounded pixel
    assert_eq!(bresenham_line(p(2.6, 1.4), p(2.6, 1.4)), vec![p(3.0, 1.0)]);
}
