//! Pixel buffer
//!
//! Row-major RGBA, 8 bits per channel, starting fully transparent.
//! Single-pixel access is bounds checked and returns a [`Result`];
//! region operations clip against the edges and skip what falls
//! outside instead of failing.

use crate::color::{blend_pix, Color};
use crate::point::{Point, RoundMode, Size};
use crate::rect::Rect;
use crate::{Error, Result};

/// Pixel coordinates covered by the one pixel wide border of a rect.
///
/// The rect is standardized, its origin rounded and its size
/// truncated. Top and bottom rows run the full width, the side
/// columns exclude both; no coordinate appears twice.
fn border_coords(rect: Rect) -> Vec<(i64, i64)> {
    let r = rect.standardize();
    let origin = r.origin.round(RoundMode::Round);
    let size = r.size.round(RoundMode::Trunc);
    let (ox, oy) = (origin.x as i64, origin.y as i64);
    let (w, h) = (size.width as i64, size.height as i64);
    let mut coords = Vec::new();
    if w <= 0 || h <= 0 {
        return coords;
    }
    for x in ox..ox + w {
        coords.push((x, oy));
        if h > 1 {
            coords.push((x, oy + h - 1));
        }
    }
    for y in oy + 1..oy + h - 1 {
        coords.push((ox, y));
        if w > 1 {
            coords.push((ox + w - 1, y));
        }
    }
    coords
}

/// Raster of RGBA pixels
///
/// Data is stored in row-major order (C-format), 4 bytes per pixel
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Pixel / Component level data of the image
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
}

impl PixelBuffer {
    /// Create a new buffer, all pixels fully transparent
    pub fn new(width: usize, height: usize) -> Self {
        PixelBuffer { width, height, data: vec![0u8; width * height * 4] }
    }
    /// Size of the underlying byte store
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    pub fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }
    /// Rect of valid pixel coordinates, far edges inclusive
    pub fn pixel_rect(&self) -> Rect {
        Rect::xywh(0.0, 0.0, self.width as f64 - 1.0, self.height as f64 - 1.0)
    }
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
    fn index(&self, x: i64, y: i64) -> usize {
        (y as usize * self.width + x as usize) * 4
    }
    /// Read one pixel; out of bounds is an error
    pub fn get(&self, x: i64, y: i64) -> Result<Color> {
        match self.pixel(x, y) {
            Some(c) => Ok(c),
            None => Err(Error::OutOfBounds { x, y }),
        }
    }
    /// Write one pixel; out of bounds is an error
    pub fn set(&mut self, x: i64, y: i64, color: Color) -> Result<()> {
        if self.put(x, y, color) {
            Ok(())
        } else {
            Err(Error::OutOfBounds { x, y })
        }
    }
    /// Read one pixel, `None` when out of bounds
    pub fn pixel(&self, x: i64, y: i64) -> Option<Color> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let i = self.index(x, y);
        Some(Color::from_u8(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]))
    }
    /// Write one pixel if in bounds; reports whether it was written
    pub fn put(&mut self, x: i64, y: i64, color: Color) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let i = self.index(x, y);
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
        self.data[i + 3] = color.a;
        true
    }
    /// Read the pixel under a continuous point, rounded to nearest
    pub fn get_point(&self, p: Point) -> Result<Color> {
        let p = p.round(RoundMode::Round);
        self.get(p.x as i64, p.y as i64)
    }
    /// Write the pixel under a continuous point, rounded to nearest
    pub fn set_point(&mut self, p: Point, color: Color) -> Result<()> {
        let p = p.round(RoundMode::Round);
        self.set(p.x as i64, p.y as i64, color)
    }
    /// Write a set of points, rounded to nearest; points outside the
    /// buffer are skipped
    pub fn set_pixels(&mut self, points: &[Point], color: Color) {
        for p in points {
            let p = p.round(RoundMode::Round);
            self.put(p.x as i64, p.y as i64, color);
        }
    }
    /// Overwrite every pixel with `color`
    pub fn fill(&mut self, color: Color) {
        for px in self.data.chunks_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = color.a;
        }
    }
    /// Blend `color` onto one pixel with source-over
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color) -> Result<()> {
        let dst = self.get(x, y)?;
        self.set(x, y, blend_pix(dst, color, 255))
    }
    /// Overwrite a rect of pixels; origin rounds to nearest, size
    /// truncates, the far edges are exclusive. Clipped to the buffer,
    /// a non-positive span writes nothing.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.for_rect(rect, |buf, x, y| {
            buf.put(x, y, color);
        });
    }
    /// Blend `color` over a rect of pixels; coverage as [`fill_rect`](Self::fill_rect)
    pub fn fill_rect_blend(&mut self, rect: Rect, color: Color) {
        self.for_rect(rect, |buf, x, y| {
            if let Some(dst) = buf.pixel(x, y) {
                buf.put(x, y, blend_pix(dst, color, 255));
            }
        });
    }
    fn for_rect<F: FnMut(&mut PixelBuffer, i64, i64)>(&mut self, rect: Rect, mut f: F) {
        let origin = rect.origin.round(RoundMode::Round);
        let size = rect.size.round(RoundMode::Trunc);
        let (ox, oy) = (origin.x as i64, origin.y as i64);
        let (w, h) = (size.width as i64, size.height as i64);
        if w <= 0 || h <= 0 {
            return;
        }
        let x0 = ox.max(0);
        let y0 = oy.max(0);
        let x1 = (ox + w).min(self.width as i64);
        let y1 = (oy + h).min(self.height as i64);
        for y in y0..y1 {
            for x in x0..x1 {
                f(self, x, y);
            }
        }
    }
    /// Draw the one pixel border of `rect` in `color`, clipped
    pub fn outline_rect(&mut self, rect: Rect, color: Color) {
        for (x, y) in border_coords(rect) {
            self.put(x, y, color);
        }
    }
    /// Invert the one pixel border of `rect` to maximum contrast.
    ///
    /// Each border pixel is flattened onto white and replaced by the
    /// black-or-white opposite of its own value.
    pub fn invert_rect_border(&mut self, rect: Rect) {
        for (x, y) in border_coords(rect) {
            if let Some(c) = self.pixel(x, y) {
                self.put(x, y, c.to_rgb().reverse_black_or_white());
            }
        }
    }
    /// Magnified copy of a region of this buffer.
    ///
    /// Each source pixel becomes a `2^level` square cell; `level` is
    /// clamped to at least 1. Source pixels outside the buffer leave
    /// their cell transparent.
    pub fn zoom_region(&self, rect: Rect, level: u32) -> PixelBuffer {
        let level = level.max(1);
        let origin = rect.origin.round(RoundMode::Round);
        let size = rect.size.round(RoundMode::Trunc);
        let (ox, oy) = (origin.x as i64, origin.y as i64);
        let (rw, rh) = (size.width as i64, size.height as i64);
        if rw <= 0 || rh <= 0 {
            return PixelBuffer::new(0, 0);
        }
        let cell = 1i64 << level;
        let mut out = PixelBuffer::new((rw * cell) as usize, (rh * cell) as usize);
        for sy in 0..rh {
            for sx in 0..rw {
                let c = match self.pixel(ox + sx, oy + sy) {
                    Some(c) => c,
                    None => continue,
                };
                let (bx, by) = ((sx * cell) as usize, (sy * cell) as usize);
                for yy in 0..cell as usize {
                    let row = ((by + yy) * out.width + bx) * 4;
                    for xx in 0..cell as usize {
                        let i = row + xx * 4;
                        out.data[i] = c.r;
                        out.data[i + 1] = c.g;
                        out.data[i + 2] = c.b;
                        out.data[i + 3] = c.a;
                    }
                }
            }
        }
        out
    }
    /// Copy `src` onto this buffer with its corner at `at`, replacing
    /// pixels (alpha included); clipped against the edges
    pub fn blit(&mut self, src: &PixelBuffer, at: Point) {
        let at = at.round(RoundMode::Round);
        let (ox, oy) = (at.x as i64, at.y as i64);
        for sy in 0..src.height as i64 {
            for sx in 0..src.width as i64 {
                if let Some(c) = src.pixel(sx, sy) {
                    self.put(ox + sx, oy + sy, c);
                }
            }
        }
    }
    /// Draw `src` stretched into `rect` with nearest-neighbor
    /// sampling and source-over compositing.
    ///
    /// A negative span mirrors the source along that axis. The
    /// destination is clipped against the buffer.
    pub fn blit_stretched(&mut self, src: &PixelBuffer, rect: Rect) {
        if src.width == 0 || src.height == 0 {
            return;
        }
        let origin = rect.origin.round(RoundMode::Round);
        let size = rect.size.round(RoundMode::Trunc);
        let mirror_x = size.width < 0.0;
        let mirror_y = size.height < 0.0;
        let dst = Rect::new(origin, size).standardize();
        let (dx0, dy0) = (dst.origin.x as i64, dst.origin.y as i64);
        let (dw, dh) = (dst.size.width as i64, dst.size.height as i64);
        if dw <= 0 || dh <= 0 {
            return;
        }
        let (sw, sh) = (src.width as i64, src.height as i64);
        for dy in 0..dh {
            let py = dy0 + dy;
            if py < 0 || py >= self.height as i64 {
                continue;
            }
            let mut sy = dy * sh / dh;
            if mirror_y {
                sy = sh - 1 - sy;
            }
            for dx in 0..dw {
                let px = dx0 + dx;
                if px < 0 || px >= self.width as i64 {
                    continue;
                }
                let mut sx = dx * sw / dw;
                if mirror_x {
                    sx = sw - 1 - sx;
                }
                if let Some(s) = src.pixel(sx, sy) {
                    if s.a == 0 {
                        continue;
                    }
                    if let Some(d) = self.pixel(px, py) {
                        self.put(px, py, blend_pix(d, s, 255));
                    }
                }
            }
        }
    }
    /// Raw RGBA bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
