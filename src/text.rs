//! Bitmap text
//!
//! Monospace labels for the picker overlay, drawn from the prerendered
//! Noto Sans Mono rasters. Glyph coverage feeds straight into the
//! fixed-point blender, so text antialiases against whatever is
//! already in the buffer.

use crate::buffer::PixelBuffer;
use crate::color::{blend_pix, Color};
use noto_sans_mono_bitmap::{get_raster, get_raster_width, FontWeight, RasterHeight};

/// Height of a rendered line in pixels
pub const FONT_HEIGHT: usize = 16;

/// Advance width of one glyph at [`FONT_HEIGHT`]
pub fn char_width() -> usize {
    get_raster_width(FontWeight::Regular, RasterHeight::Size16)
}

/// Width of `s` when rendered, in pixels
pub fn text_width(s: &str) -> usize {
    s.chars().count() * char_width()
}

/// Draw `s` with its top-left corner at (x, y).
///
/// Characters outside the embedded range fall back to the replacement
/// glyph; pixels falling outside the buffer are skipped.
pub fn draw_text(buf: &mut PixelBuffer, x: i64, y: i64, s: &str, color: Color) {
    let advance = char_width() as i64;
    let mut cx = x;
    for ch in s.chars() {
        let glyph = get_raster(ch, FontWeight::Regular, RasterHeight::Size16)
            .or_else(|| get_raster('\u{fffd}', FontWeight::Regular, RasterHeight::Size16));
        if let Some(glyph) = glyph {
            for (gy, row) in glyph.raster().iter().enumerate() {
                for (gx, cover) in row.iter().enumerate() {
                    if *cover == 0 {
                        continue;
                    }
                    let (px, py) = (cx + gx as i64, y + gy as i64);
                    if let Some(dst) = buf.pixel(px, py) {
                        buf.put(px, py, blend_pix(dst, color, *cover));
                    }
                }
            }
        }
        cx += advance;
    }
}
