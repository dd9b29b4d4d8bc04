//! Rectangles and resize anchors
//!
//! A [`Rect`] is an origin plus a size; the size may be negative while
//! a drag is in flight. [`Rect::standardize`] folds a negative span
//! back into the origin so pixel loops always walk positive extents.

use crate::point::{Point, Size};

/// The eight resize handles of a rect plus its center.
///
/// On a standardized rect the edge anchors sit on the outermost pixel
/// rows and columns, so `RightUp` of a w by h rect is (w-1, 0), not
/// (w, 0).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Anchor {
    LeftUp,
    Up,
    RightUp,
    Right,
    RightDown,
    Down,
    LeftDown,
    Left,
    Center,
}

impl Anchor {
    /// The eight draggable handles, center excluded
    pub fn handles() -> [Anchor; 8] {
        [
            Anchor::LeftUp,
            Anchor::Up,
            Anchor::RightUp,
            Anchor::Right,
            Anchor::RightDown,
            Anchor::Down,
            Anchor::LeftDown,
            Anchor::Left,
        ]
    }
}

/// An axis aligned rectangle, origin plus possibly-negative size
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Rect { origin, size }
    }
    pub fn xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect::new(Point::new(x, y), Size::new(width, height))
    }
    /// Equivalent rect with non-negative size.
    ///
    /// A negative span shifts the origin to the far corner on that
    /// axis; the covered area is unchanged.
    pub fn standardize(self) -> Rect {
        let mut origin = self.origin;
        if self.size.width < 0.0 {
            origin.x += self.size.width;
        }
        if self.size.height < 0.0 {
            origin.y += self.size.height;
        }
        Rect::new(origin, self.size.abs())
    }
    /// True when `p` lies inside, far edges inclusive
    pub fn contains(self, p: Point) -> bool {
        p.in_rect(self)
    }
    /// Position of an anchor on the standardized rect
    pub fn anchor(self, anchor: Anchor) -> Point {
        let r = self.standardize();
        let Point { x, y } = r.origin;
        let Size { width: w, height: h } = r.size;
        match anchor {
            Anchor::LeftUp => Point::new(x, y),
            Anchor::Up => Point::new(x + w / 2.0, y),
            Anchor::RightUp => Point::new(x + w - 1.0, y),
            Anchor::Right => Point::new(x + w - 1.0, y + h / 2.0),
            Anchor::RightDown => Point::new(x + w - 1.0, y + h - 1.0),
            Anchor::Down => Point::new(x + w / 2.0, y + h - 1.0),
            Anchor::LeftDown => Point::new(x, y + h - 1.0),
            Anchor::Left => Point::new(x, y + h / 2.0),
            Anchor::Center => Point::new(x + w / 2.0, y + h / 2.0),
        }
    }
    /// Which handle a press at `p` grabs, if any.
    ///
    /// Measures the distance from `p` to the infinite line through
    /// each edge of the standardized rect. Two close edges name a
    /// corner, one names an edge midpoint handle; `Center` is never
    /// returned.
    pub fn detect_handle(self, p: Point, tolerance: f64) -> Option<Anchor> {
        let r = self.standardize();
        let tol = tolerance.max(0.0);
        let top = (p.y - r.origin.y).abs() <= tol;
        let bottom = (p.y - (r.origin.y + r.size.height - 1.0)).abs() <= tol;
        let left = (p.x - r.origin.x).abs() <= tol;
        let right = (p.x - (r.origin.x + r.size.width - 1.0)).abs() <= tol;
        if top && left {
            Some(Anchor::LeftUp)
        } else if top && right {
            Some(Anchor::RightUp)
        } else if bottom && left {
            Some(Anchor::LeftDown)
        } else if bottom && right {
            Some(Anchor::RightDown)
        } else if top {
            Some(Anchor::Up)
        } else if bottom {
            Some(Anchor::Down)
        } else if left {
            Some(Anchor::Left)
        } else if right {
            Some(Anchor::Right)
        } else {
            None
        }
    }
}
