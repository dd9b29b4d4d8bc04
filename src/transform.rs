//! Image placement
//!
//! State and geometry for stretching a loaded image into a rect of the
//! canvas. The placement is two-tier: an applied rect is the last
//! confirmed position, a tentative rect shadows it while a handle or
//! move drag is in flight. Rendering reads the tentative rect when one
//! exists; releasing the pointer promotes it, cancelling simply drops
//! it.

use crate::buffer::PixelBuffer;
use crate::point::{Point, RoundMode, Size};
use crate::rect::{Anchor, Rect};

/// Side of the square boxes drawn on the resize anchors, in pixels
pub const EDGE_LENGTH: f64 = 8.0;

/// Rect that fits `image` into `canvas` preserving aspect ratio,
/// centered. The origin is rounded to the grid, the size is left
/// fractional.
pub fn center_rect(image: Size, canvas: Size) -> Rect {
    let (iw, ih) = (image.width, image.height);
    let (cw, ch) = (canvas.width, canvas.height);
    let (w, h) = if cw / ch > iw / ih {
        (iw / ih * ch, ch)
    } else {
        (cw, ih / iw * cw)
    };
    Rect::new(
        Point::new((cw - w) / 2.0, (ch - h) / 2.0).round(RoundMode::Round),
        Size::new(w, h),
    )
}

/// Rect after dragging `handle` by `offset`.
///
/// `offset` is drag start minus current pointer, on a standardized
/// rect; each handle moves only its own edges, the opposite edges stay
/// fixed. The result may have a negative span when the drag crosses
/// the far edge.
pub fn resize_by_handle(handle: Anchor, offset: Size, rect: Rect) -> Rect {
    let o = rect.origin;
    let s = rect.size;
    let Size { width: ow, height: oh } = offset;
    match handle {
        Anchor::Right => Rect::new(o, Size::new(s.width - ow, s.height)),
        Anchor::Down => Rect::new(o, Size::new(s.width, s.height - oh)),
        Anchor::Up => Rect::new(o.add_xy(0.0, -oh), Size::new(s.width, s.height + oh)),
        Anchor::Left => Rect::new(o.add_xy(-ow, 0.0), Size::new(s.width + ow, s.height)),
        Anchor::RightDown => Rect::new(o, Size::new(s.width - ow, s.height - oh)),
        Anchor::LeftDown => Rect::new(o.add_xy(-ow, 0.0), Size::new(s.width + ow, s.height - oh)),
        Anchor::RightUp => Rect::new(o.add_xy(0.0, -oh), Size::new(s.width - ow, s.height + oh)),
        Anchor::LeftUp => {
            Rect::new(o.add_xy(-ow, -oh), Size::new(s.width + ow, s.height + oh))
        }
        Anchor::Center => rect,
    }
}

/// Rect after dragging its whole body by `offset` (drag start minus
/// current pointer)
pub fn move_whole(offset: Size, rect: Rect) -> Rect {
    Rect::new(rect.origin - offset, rect.size)
}

/// Placement state of a loaded image
#[derive(Debug, Default, Clone)]
pub struct ImageState {
    image: Option<PixelBuffer>,
    applied: Option<Rect>,
    tentative: Option<Rect>,
}

impl ImageState {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
    pub fn image(&self) -> Option<&PixelBuffer> {
        self.image.as_ref()
    }
    /// Install an image, placed aspect-fit centered in a canvas of
    /// `canvas` size; any tentative rect from a previous image is
    /// dropped
    pub fn set_image(&mut self, image: PixelBuffer, canvas: Size) {
        self.applied = Some(center_rect(image.size(), canvas));
        self.tentative = None;
        self.image = Some(image);
    }
    pub fn applied_rect(&self) -> Option<Rect> {
        self.applied
    }
    pub fn tentative_rect(&self) -> Option<Rect> {
        self.tentative
    }
    /// Stage a rect. While `working` it lands in the tentative slot;
    /// once idle it replaces the applied rect directly.
    pub fn set_image_rect(&mut self, rect: Rect, working: bool) {
        if working {
            self.tentative = Some(rect);
        } else {
            self.applied = Some(rect);
        }
    }
    /// Promote the tentative rect to applied. Without a tentative rect
    /// the applied one is left untouched.
    pub fn apply_image_rect(&mut self) {
        if let Some(r) = self.tentative.take() {
            self.applied = Some(r);
        }
    }
    /// The rect rendering should use: the tentative one while working
    /// when present, otherwise the applied one
    pub fn working_rect(&self, working: bool) -> Option<Rect> {
        if working {
            self.tentative.or(self.applied)
        } else {
            self.applied
        }
    }
    /// Drop the image and both rects
    pub fn reset(&mut self) {
        self.image = None;
        self.applied = None;
        self.tentative = None;
    }
    /// Draw the image stretched into the current working rect.
    /// Without an image or a rect the buffer passes through unchanged.
    pub fn render(&self, mut buf: PixelBuffer, working: bool) -> PixelBuffer {
        if let (Some(image), Some(rect)) = (self.image.as_ref(), self.working_rect(working)) {
            buf.blit_stretched(image, rect);
        }
        buf
    }
    /// Invert the border of the working rect and draw the eight
    /// anchor boxes, each an [`EDGE_LENGTH`] square outline centered
    /// on its anchor
    pub fn draw_stretched_border(&self, buf: &mut PixelBuffer, working: bool) {
        let rect = match self.working_rect(working) {
            Some(r) => r,
            None => return,
        };
        buf.invert_rect_border(rect);
        for &anchor in Anchor::handles().iter() {
            let center = rect.anchor(anchor);
            let corner = center.add_xy(-EDGE_LENGTH / 2.0, -EDGE_LENGTH / 2.0);
            buf.invert_rect_border(Rect::new(corner, Size::new(EDGE_LENGTH, EDGE_LENGTH)));
        }
    }
}
