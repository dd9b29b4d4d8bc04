//! Colors
//!
//! RGBA with 8 bits per channel. Channel math comes in as `f64` and is
//! clamped to [0,255] then rounded, so float arithmetic can be fed
//! back into a color without pre-checks.

use crate::{lerp_u8, multiply_u8};
use std::fmt;

/// Clamp an f64 channel value into [0,255] and round to nearest
pub fn cu8(v: f64) -> u8 {
    v.max(0.0).min(255.0).round() as u8
}

/// Color as Red, Green, Blue, and Alpha; alpha is not premultiplied
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// Create a new color from f64 channels, clamped per channel
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color { r: cu8(r), g: cu8(g), b: cu8(b), a: cu8(a) }
    }
    /// Create a new opaque color from f64 channels
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color::new(r, g, b, 255.0)
    }
    /// Create a new color directly from u8 channels
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Color::from_u8(255, 255, 255, 255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Color::from_u8(0, 0, 0, 255)
    }
    /// Fully transparent black (0,0,0,0)
    pub fn transparent() -> Self {
        Color::from_u8(0, 0, 0, 0)
    }
    /// Luma on BT.601 weights, in [0,255]; alpha is ignored
    pub fn gray(&self) -> f64 {
        f64::from(self.r) * 0.299 + f64::from(self.g) * 0.587 + f64::from(self.b) * 0.114
    }
    /// Channel-inverse of the color; the result is opaque
    pub fn reverse(&self) -> Color {
        Color::from_u8(255 - self.r, 255 - self.g, 255 - self.b, 255)
    }
    /// Black or white, whichever contrasts more with this color.
    ///
    /// The decision reads the luma of the channel-inverse, not of the
    /// color itself.
    pub fn reverse_black_or_white(&self) -> Color {
        if self.reverse().gray() < 127.5 {
            Color::black()
        } else {
            Color::white()
        }
    }
    /// True when the two grays differ by at most `tolerance`
    /// (clamped to [0,255]); alpha plays no part
    pub fn like(&self, other: Color, tolerance: f64) -> bool {
        let tol = tolerance.max(0.0).min(255.0);
        (self.gray() - other.gray()).abs() <= tol
    }
    /// Flatten onto an opaque white background, discarding alpha
    pub fn to_rgb(&self) -> Color {
        self.over(Color::white())
    }
    /// Source-over composite of `self` onto an opaque `background`
    pub fn over(&self, background: Color) -> Color {
        let a = f64::from(self.a) / 255.0;
        Color::rgb(
            f64::from(self.r) * a + f64::from(background.r) * (1.0 - a),
            f64::from(self.g) * a + f64::from(background.g) * (1.0 - a),
            f64::from(self.b) * a + f64::from(background.b) * (1.0 - a),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Blend the color `c` onto the pixel value `p` with a coverage.
///
/// Coverage 255 is a plain source-over of `c`; lower coverage scales
/// the effective alpha of `c` first. Fixed point throughout, exact at
/// both endpoints.
pub fn blend_pix(p: Color, c: Color, cover: u8) -> Color {
    let alpha = multiply_u8(c.a, cover);
    Color::from_u8(
        lerp_u8(p.r, c.r, alpha),
        lerp_u8(p.g, c.g, alpha),
        lerp_u8(p.b, c.b, alpha),
        lerp_u8(p.a, c.a, alpha),
    )
}
