//! Points and sizes
//!
//! Continuous plane coordinates. Everything stays in `f64` until a
//! rasterization step picks a [`RoundMode`] to land on pixel centers.

use crate::rect::Rect;
use crate::{Error, Result};
use std::ops::{Add, Neg, Sub};

/// How a continuous coordinate lands on an integer grid
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoundMode {
    Ceil,
    Round,
    Floor,
    /// Truncate toward zero
    Trunc,
}

impl RoundMode {
    pub fn apply(self, v: f64) -> f64 {
        match self {
            RoundMode::Ceil => v.ceil(),
            RoundMode::Round => v.round(),
            RoundMode::Floor => v.floor(),
            RoundMode::Trunc => v.trunc(),
        }
    }
}

/// A position in the continuous plane
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
    pub fn origin() -> Self {
        Point::new(0.0, 0.0)
    }
    pub fn add_xy(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
    /// Immediate neighbor one unit to the left
    pub fn left(self) -> Point {
        self.add_xy(-1.0, 0.0)
    }
    pub fn right(self) -> Point {
        self.add_xy(1.0, 0.0)
    }
    pub fn up(self) -> Point {
        self.add_xy(0.0, -1.0)
    }
    pub fn down(self) -> Point {
        self.add_xy(0.0, 1.0)
    }
    pub fn left_up(self) -> Point {
        self.add_xy(-1.0, -1.0)
    }
    pub fn right_up(self) -> Point {
        self.add_xy(1.0, -1.0)
    }
    pub fn left_down(self) -> Point {
        self.add_xy(-1.0, 1.0)
    }
    pub fn right_down(self) -> Point {
        self.add_xy(1.0, 1.0)
    }
    /// Round both coordinates with the given mode
    pub fn round(self, mode: RoundMode) -> Point {
        Point::new(mode.apply(self.x), mode.apply(self.y))
    }
    /// Clamp into `rect`, far edges inclusive.
    ///
    /// The upper bound is applied before the lower one, so a rect with
    /// a negative span collapses onto its origin rather than the far
    /// corner.
    pub fn constrain(self, rect: Rect) -> Point {
        let clamp = |v: f64, lo: f64, span: f64| v.min(lo + span).max(lo);
        Point::new(
            clamp(self.x, rect.origin.x, rect.size.width),
            clamp(self.y, rect.origin.y, rect.size.height),
        )
    }
    /// True when the point lies inside `rect`, far edges inclusive
    pub fn in_rect(self, rect: Rect) -> bool {
        self.x >= rect.origin.x
            && self.x <= rect.origin.x + rect.size.width
            && self.y >= rect.origin.y
            && self.y <= rect.origin.y + rect.size.height
    }
    pub fn distance_to(self, other: Point) -> f64 {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
    /// Perpendicular distance from this point to the infinite line
    /// through `p1` and `p2`.
    ///
    /// Coincident `p1` and `p2` do not define a line and are reported
    /// as an error instead of a divide-by-zero.
    pub fn distance_to_line(self, p1: Point, p2: Point) -> Result<f64> {
        if p1 == p2 {
            return Err(Error::CoincidentPoints);
        }
        let a = p2.y - p1.y;
        let b = p1.x - p2.x;
        let c = p2.x * p1.y - p1.x * p2.y;
        Ok((a * self.x + b * self.y + c).abs() / (a * a + b * b).sqrt())
    }
    pub fn to_size(self) -> Size {
        Size::new(self.x, self.y)
    }
}

impl Add<Size> for Point {
    type Output = Point;
    fn add(self, s: Size) -> Point {
        Point::new(self.x + s.width, self.y + s.height)
    }
}

impl Sub<Size> for Point {
    type Output = Point;
    fn sub(self, s: Size) -> Point {
        Point::new(self.x - s.width, self.y - s.height)
    }
}

impl Sub for Point {
    type Output = Size;
    fn sub(self, other: Point) -> Size {
        Size::new(self.x - other.x, self.y - other.y)
    }
}

/// A two dimensional extent; components may be negative while a drag
/// is in flight
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }
    pub fn empty() -> Self {
        Size::new(0.0, 0.0)
    }
    pub fn abs(self) -> Size {
        Size::new(self.width.abs(), self.height.abs())
    }
    /// Round both components with the given mode
    pub fn round(self, mode: RoundMode) -> Size {
        Size::new(mode.apply(self.width), mode.apply(self.height))
    }
    /// Truncate to integers, then shift left. Matches integer shift
    /// semantics for fractional inputs.
    pub fn shift_left(self, bits: u32) -> Size {
        Size::new(
            ((self.width.trunc() as i64) << bits) as f64,
            ((self.height.trunc() as i64) << bits) as f64,
        )
    }
    /// Truncate to integers, then shift right
    pub fn shift_right(self, bits: u32) -> Size {
        Size::new(
            ((self.width.trunc() as i64) >> bits) as f64,
            ((self.height.trunc() as i64) >> bits) as f64,
        )
    }
    pub fn scale(self, factor: f64) -> Size {
        Size::new(self.width * factor, self.height * factor)
    }
    pub fn to_point(self) -> Point {
        Point::new(self.width, self.height)
    }
}

impl Add for Size {
    type Output = Size;
    fn add(self, other: Size) -> Size {
        Size::new(self.width + other.width, self.height + other.height)
    }
}

impl Sub for Size {
    type Output = Size;
    fn sub(self, other: Size) -> Size {
        Size::new(self.width - other.width, self.height - other.height)
    }
}

impl Neg for Size {
    type Output = Size;
    fn neg(self) -> Size {
        Size::new(-self.width, -self.height)
    }
}
