//! Seed fills
//!
//! Flood fills bounded by a border color. A pixel is fillable when it
//! is inside the buffer and carries neither the border nor the fill
//! color; everything else stops the spread. A seed on a border pixel,
//! on an already filled pixel, or outside the buffer is a no-op; the
//! border itself is never repainted.

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::point::{Point, RoundMode};

/// Neighbor offsets for the four-connected fill: left, up, right, down
const FOUR: [(i64, i64); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Neighbor offsets for the eight-connected fill, counterclockwise
/// from left
const EIGHT: [(i64, i64); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

fn fillable(buf: &PixelBuffer, x: i64, y: i64, border: Color, fill: Color) -> bool {
    match buf.pixel(x, y) {
        Some(c) => c != border && c != fill,
        None => false,
    }
}

fn seed_coords(buf: &PixelBuffer, seed: Point, border: Color, fill: Color) -> Option<(i64, i64)> {
    let s = seed.round(RoundMode::Round);
    let (x, y) = (s.x as i64, s.y as i64);
    if fillable(buf, x, y, border, fill) {
        Some((x, y))
    } else {
        None
    }
}

/// Flood fill through edge-adjacent neighbors only.
///
/// Cannot cross a diagonal line of border pixels.
pub fn four_neighbor_fill(buf: &mut PixelBuffer, seed: Point, border: Color, fill: Color) {
    stack_fill(buf, seed, border, fill, &FOUR);
}

/// Flood fill through edge- and corner-adjacent neighbors.
///
/// Leaks through diagonal gaps that stop the four-connected fill.
pub fn eight_neighbor_fill(buf: &mut PixelBuffer, seed: Point, border: Color, fill: Color) {
    stack_fill(buf, seed, border, fill, &EIGHT);
}

fn stack_fill(
    buf: &mut PixelBuffer,
    seed: Point,
    border: Color,
    fill: Color,
    neighbors: &[(i64, i64)],
) {
    let start = match seed_coords(buf, seed, border, fill) {
        Some(s) => s,
        None => return,
    };
    let mut stack = vec![start];
    while let Some((x, y)) = stack.pop() {
        // the same pixel can be pushed from two sides; recheck on pop
        if !fillable(buf, x, y, border, fill) {
            continue;
        }
        buf.put(x, y, fill);
        for &(ox, oy) in neighbors {
            let (nx, ny) = (x + ox, y + oy);
            if fillable(buf, nx, ny, border, fill) {
                stack.push((nx, ny));
            }
        }
    }
}

/// Scan-line flood fill, four-connected result.
///
/// Pops a representative point, paints its whole horizontal span, then
/// scans the rows above and below for fillable runs inside the span's
/// extent and pushes one representative per run. Fills the same region
/// as [`four_neighbor_fill`] with far fewer stack entries.
pub fn scan_line_fill(buf: &mut PixelBuffer, seed: Point, border: Color, fill: Color) {
    let start = match seed_coords(buf, seed, border, fill) {
        Some(s) => s,
        None => return,
    };
    let mut stack = vec![start];
    while let Some((px, py)) = stack.pop() {
        if !fillable(buf, px, py, border, fill) {
            continue;
        }
        let mut x = px;
        while fillable(buf, x, py, border, fill) {
            buf.put(x, py, fill);
            x += 1;
        }
        let x_right = x - 1;
        x = px - 1;
        while fillable(buf, x, py, border, fill) {
            buf.put(x, py, fill);
            x -= 1;
        }
        let x_left = x + 1;
        //eprintln!("span y={} [{}, {}]", py, x_left, x_right);
        for &row in [py + 1, py - 1].iter() {
            let mut x = x_left;
            while x <= x_right {
                if fillable(buf, x, row, border, fill) {
                    while x <= x_right && fillable(buf, x, row, border, fill) {
                        x += 1;
                    }
                    stack.push((x - 1, row));
                } else {
                    x += 1;
                }
            }
        }
    }
}
