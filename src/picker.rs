//! Magnifier and color picker
//!
//! A movable loupe: a square window of committed pixels is magnified
//! eightfold into a view, with a pixel grid, a highlight on the picked
//! pixel, and a caption panel naming the position and its color. The
//! overlay is drawn onto a throwaway clone of the committed buffer, so
//! showing and moving it never alters committed pixels.

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::point::{Point, RoundMode, Size};
use crate::rect::Rect;
use crate::text::{draw_text, text_width, FONT_HEIGHT};

/// Magnification, as a power of two
pub const ZOOM_LEVEL: u32 = 3;
/// Side of the sampled window, in buffer pixels; odd so the picked
/// pixel sits in the middle
pub const ZOOM_WINDOW: f64 = 33.0;

/// Overlay tint for the pixel grid
fn grid_color() -> Color {
    Color::from_u8(33, 33, 33, 50)
}
/// Overlay tint for the caption panel
fn panel_color() -> Color {
    Color::from_u8(33, 33, 33, 100)
}

/// Loupe state: where it points and whether it is shown
#[derive(Debug, Clone)]
pub struct Picker {
    zoom_level: u32,
    window: Size,
    visible: bool,
    point: Option<Point>,
}

impl Default for Picker {
    fn default() -> Self {
        Picker::new()
    }
}

impl Picker {
    pub fn new() -> Self {
        Picker {
            zoom_level: ZOOM_LEVEL,
            window: Size::new(ZOOM_WINDOW, ZOOM_WINDOW),
            visible: false,
            point: None,
        }
    }
    pub fn visible(&self) -> bool {
        self.visible
    }
    pub fn show(&mut self) {
        self.visible = true;
    }
    pub fn hide(&mut self) {
        self.visible = false;
    }
    /// Flip visibility; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
    pub fn point(&self) -> Option<Point> {
        self.point
    }
    /// Side of one magnified cell, in view pixels
    pub fn zoom_unit(&self) -> f64 {
        (1i64 << self.zoom_level) as f64
    }
    /// Size of the magnified view
    pub fn view_size(&self) -> Size {
        self.window.shift_left(self.zoom_level)
    }
    /// Aim the loupe at `p`, clamped into a buffer of `bounds` pixels
    /// and rounded onto the grid
    pub fn set_point(&mut self, p: Point, bounds: Size) {
        let rect = Rect::new(Point::origin(), Size::new(bounds.width - 1.0, bounds.height - 1.0));
        self.point = Some(p.constrain(rect).round(RoundMode::Round));
    }
    /// Move the aim by whole pixels, staying inside the buffer
    pub fn nudge(&mut self, dx: f64, dy: f64, bounds: Size) {
        if let Some(p) = self.point {
            self.set_point(p.add_xy(dx, dy), bounds);
        }
    }
    /// Origin of the sampled window, shifted so the window lies fully
    /// inside a buffer of `bounds` pixels whenever it fits
    pub fn window_origin(&self, bounds: Size) -> Option<Point> {
        self.point.map(|p| Self::centered_origin(p, self.window, bounds))
    }
    /// Origin of the magnified view, placed like the window but with
    /// the view's footprint
    pub fn view_origin(&self, bounds: Size) -> Option<Point> {
        self.point.map(|p| Self::centered_origin(p, self.view_size(), bounds))
    }
    fn centered_origin(p: Point, size: Size, bounds: Size) -> Point {
        let half = size.scale(0.5);
        let room = Rect::new(
            Point::origin(),
            Size::new(bounds.width - size.width, bounds.height - size.height),
        );
        (p - half).constrain(room).round(RoundMode::Round)
    }
    /// View-space corner of the magnified cell covering the picked
    /// pixel
    pub fn pick_in_view(&self, bounds: Size) -> Option<Point> {
        let p = self.point?;
        let window = self.window_origin(bounds)?;
        let view = self.view_origin(bounds)?;
        Some(view + (p - window).shift_left(self.zoom_level))
    }
    /// Picked position and the committed color under it
    pub fn sample(&self, committed: &PixelBuffer) -> Option<(Point, Color)> {
        let p = self.point?;
        let color = committed.get_point(p).ok()?;
        Some((p, color))
    }
    /// Draw the loupe onto `buf`.
    ///
    /// `buf` must be a clone of the committed buffer: the sampled
    /// window is read from it before anything is drawn. Hidden or
    /// unaimed pickers draw nothing.
    pub fn draw_overlay(&self, buf: &mut PixelBuffer) {
        if !self.visible {
            return;
        }
        let point = match self.point {
            Some(p) => p,
            None => return,
        };
        let bounds = buf.size();
        let sample = match buf.get_point(point) {
            Ok(c) => c,
            Err(_) => return,
        };
        let stroke = sample.to_rgb().reverse_black_or_white();
        let window = Self::centered_origin(point, self.window, bounds);
        let view = Self::centered_origin(point, self.view_size(), bounds);
        let Size { width: vw, height: vh } = self.view_size();

        // magnified window first; it must not include the overlay
        let zoomed = buf.zoom_region(Rect::new(window, self.window), self.zoom_level);
        buf.blit(&zoomed, view);
        buf.outline_rect(Rect::new(view, self.view_size()), stroke);

        let cell = self.zoom_unit();
        let mut k = cell;
        while k < vw {
            buf.fill_rect_blend(Rect::xywh(view.x + k, view.y, 1.0, vh), grid_color());
            k += cell;
        }
        let mut k = cell;
        while k < vh {
            buf.fill_rect_blend(Rect::xywh(view.x, view.y + k, vw, 1.0), grid_color());
            k += cell;
        }

        let pick = view + (point - window).shift_left(self.zoom_level);
        buf.outline_rect(Rect::new(pick, Size::new(cell, cell)), stroke);

        buf.fill_rect_blend(Rect::xywh(view.x, view.y + vh * 0.7, vw, vh * 0.3), panel_color());
        let position = format!("({}, {})", point.x, point.y);
        let color = format!("{}", sample);
        self.caption(buf, view, &position, 0.8, stroke);
        self.caption(buf, view, &color, 0.95, stroke);
    }
    /// One centered caption line; `baseline` is the fraction of the
    /// view height where the glyph bottoms land
    fn caption(&self, buf: &mut PixelBuffer, view: Point, s: &str, baseline: f64, color: Color) {
        let Size { width: vw, height: vh } = self.view_size();
        let x = view.x + (vw - text_width(s) as f64) / 2.0;
        let y = view.y + vh * baseline - FONT_HEIGHT as f64;
        draw_text(buf, x.round() as i64, y.round() as i64, s, color);
    }
}
