//! Interactive 2D rasterization and region editing engine
//!
//!    session = EditorSession( committed PixelBuffer, Algorithm, Picker )
//!  Pointer/keyboard flow
//!    pointer event
//!      session routes by OperateMode (or to the Picker when shown)
//!        Algorithm::update_image_data( clone of committed )
//!          raster::dda_line / raster::bresenham_line -> PixelBuffer::set_pixels
//!          fill::four_neighbor_fill / eight_neighbor_fill / scan_line_fill
//!          ImageState::render -> PixelBuffer::blit_stretched
//!      preview  -> display buffer only
//!      commit   -> committed buffer, driver reads it back
//!  The Picker draws its overlay on a clone of the committed buffer and
//!  never writes through to committed pixels.

pub mod color;
pub mod point;
pub mod rect;
pub mod buffer;
pub mod raster;
pub mod fill;
pub mod algorithm;
pub mod transform;
pub mod picker;
pub mod text;
pub mod session;
pub mod ppm;

pub use crate::color::*;
pub use crate::point::*;
pub use crate::rect::*;
pub use crate::buffer::*;
pub use crate::raster::*;
pub use crate::fill::*;
pub use crate::algorithm::*;
pub use crate::transform::*;
pub use crate::picker::*;
pub use crate::text::*;
pub use crate::session::*;
pub use crate::ppm::*;

use std::fmt;

/// Errors raised by single-pixel access and geometry queries.
///
/// Region operations (fills, blits, overlays) clip instead of failing;
/// only invariant violations surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A pixel coordinate fell outside the buffer.
    OutOfBounds { x: i64, y: i64 },
    /// Two coincident points cannot define a line.
    CoincidentPoints,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfBounds { x, y } => write!(f, "pixel ({}, {}) is out of bounds", x, y),
            Error::CoincidentPoints => write!(f, "two coincident points do not define a line"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

// Fixed-point linear interpolation between two channel values,
// t0/t1 fold the rounding bias back in so 0 and 255 map exactly.
pub fn lerp_u8(p: u8, q: u8, a: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let v = if p > q { 1 } else { 0 };
    let (q, p, a) = (i32::from(q), i32::from(p), i32::from(a));
    let t0: i32 = (q - p) * a + base_msb - v;
    let t1: i32 = ((t0 >> base_shift) + t0) >> base_shift;
    (p + t1) as u8
}

pub fn multiply_u8(a: u8, b: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let (a, b) = (u32::from(a), u32::from(b));
    let t: u32 = a * b + base_msb;
    let tt: u32 = ((t >> base_shift) + t) >> base_shift;
    tt as u8
}
