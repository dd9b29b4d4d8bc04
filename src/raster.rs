//! Line rasterization
//!
//! Two classic segment rasterizers. Both return every pixel of the
//! segment including the endpoints, one point per step along the
//! major axis.

use crate::point::{Point, RoundMode};
use std::mem;

/// Rasterize a segment with the digital differential analyzer.
///
/// The step count is `max(|dx|, |dy|)` rounded to nearest; the walk
/// accumulates in floating point and each emitted point is rounded
/// with `mode`. A segment shorter than half a pixel collapses to the
/// single rounded start point.
pub fn dda_line(p0: Point, p1: Point, mode: RoundMode) -> Vec<Point> {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let steps = dx.abs().max(dy.abs()).round();
    if steps == 0.0 {
        return vec![p0.round(mode)];
    }
    let xi = dx / steps;
    let yi = dy / steps;
    let n = steps as usize;
    let mut points = Vec::with_capacity(n + 1);
    let (mut x, mut y) = (p0.x, p0.y);
    points.push(Point::new(x, y).round(mode));
    for _ in 0..n {
        x += xi;
        y += yi;
        points.push(Point::new(x, y).round(mode));
    }
    points
}

/// Rasterize a segment with Bresenham's integer midpoint walk.
///
/// Endpoints are rounded to the grid first. The walk itself runs on
/// the endpoint pair in ascending (x, y) order and the output is
/// reversed afterwards when the caller's order was descending, so a
/// segment and its reverse always cover the same pixels.
pub fn bresenham_line(p0: Point, p1: Point) -> Vec<Point> {
    let a = p0.round(RoundMode::Round);
    let b = p1.round(RoundMode::Round);
    let (ax, ay) = (a.x as i64, a.y as i64);
    let (bx, by) = (b.x as i64, b.y as i64);
    let swapped = (bx, by) < (ax, ay);
    let ((x0, y0), (x1, y1)) = if swapped { ((bx, by), (ax, ay)) } else { ((ax, ay), (bx, by)) };

    let mut dx = (x1 - x0).abs();
    let mut dy = (y1 - y0).abs();
    let s1 = if x1 > x0 { 1 } else { -1 };
    let s2 = if y1 > y0 { 1 } else { -1 };
    let mut interchange = false;
    if dy > dx {
        mem::swap(&mut dx, &mut dy);
        interchange = true;
    }

    let mut p = 2 * dy - dx;
    let (mut x, mut y) = (x0, y0);
    let mut points = Vec::with_capacity(dx as usize + 1);
    for _ in 0..=dx {
        points.push(Point::new(x as f64, y as f64));
        if p >= 0 {
            if interchange {
                x += s1;
            } else {
                y += s2;
            }
            p -= 2 * dx;
        }
        if interchange {
            y += s2;
        } else {
            x += s1;
        }
        p += 2 * dy;
    }
    if swapped {
        points.reverse();
    }
    points
}
