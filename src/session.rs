//! Editor session
//!
//! Owns the committed and display buffers, the active [`Algorithm`],
//! and the [`Picker`], and routes pointer and keyboard events to them
//! by operate mode. Previews render onto the display buffer only;
//! commits write the committed buffer and mirror it into the display.
//! Drivers poll [`EditorSession::take_events`] for notifications.

use crate::algorithm::{Algorithm, AlgorithmKind, WorkState};
use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::picker::Picker;
use crate::point::{Point, RoundMode};
use crate::rect::Anchor;
use crate::transform::{move_whole, resize_by_handle};
use log::{debug, warn};
use std::mem;
use std::path::Path;

/// Distance within which a press grabs a resize handle
pub const PICK_TOLERANCE: f64 = 8.0;

/// Interaction style of the active tool
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperateMode {
    /// Click vertices, close and commit with the secondary button
    Polygon,
    /// Drag a diagonal, commit on release
    Rectangle,
    /// Click a seed
    Fill,
    /// Drag handles of a loaded image, Enter commits, Escape cancels
    Image,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Keys the session reacts to
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

/// Notifications for the driver, drained with
/// [`EditorSession::take_events`]
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The algorithm entered or left the working state
    WorkingChanged(bool),
    /// The picker accepted a pixel
    PointPicked { point: Point, color: Color },
}

/// An in-flight image drag
#[derive(Debug, Copy, Clone)]
enum DragState {
    Handle { anchor: Anchor, start: Point },
    Move { start: Point },
}

fn kind_supports(kind: AlgorithmKind, mode: OperateMode) -> bool {
    match mode {
        OperateMode::Polygon | OperateMode::Rectangle => match kind {
            AlgorithmKind::Dda | AlgorithmKind::Bresenham => true,
            _ => false,
        },
        OperateMode::Fill => match kind {
            AlgorithmKind::FourNeighborFill
            | AlgorithmKind::EightNeighborFill
            | AlgorithmKind::ScanLineFill => true,
            _ => false,
        },
        OperateMode::Image => kind == AlgorithmKind::ImageTransform,
    }
}

fn default_kind(mode: OperateMode) -> AlgorithmKind {
    match mode {
        OperateMode::Polygon | OperateMode::Rectangle => AlgorithmKind::Dda,
        OperateMode::Fill => AlgorithmKind::FourNeighborFill,
        OperateMode::Image => AlgorithmKind::ImageTransform,
    }
}

/// An interactive editing surface
pub struct EditorSession {
    committed: PixelBuffer,
    display: PixelBuffer,
    background: Color,
    algorithm: Algorithm,
    mode: OperateMode,
    picker: Picker,
    events: Vec<SessionEvent>,
    border_color: Color,
    fill_color: Color,
    rect_anchor: Option<Point>,
    drag: Option<DragState>,
    picker_warned: bool,
}

impl EditorSession {
    /// New session over a canvas of the given pixel size, filled with
    /// the white background
    pub fn new(width: usize, height: usize) -> Self {
        let background = Color::white();
        let mut committed = PixelBuffer::new(width, height);
        committed.fill(background);
        let display = committed.clone();
        EditorSession {
            committed,
            display,
            background,
            algorithm: Algorithm::default(),
            mode: OperateMode::Polygon,
            picker: Picker::new(),
            events: Vec::new(),
            border_color: Color::black(),
            fill_color: Color::black(),
            rect_anchor: None,
            drag: None,
            picker_warned: false,
        }
    }
    /// The committed pixels
    pub fn buffer(&self) -> &PixelBuffer {
        &self.committed
    }
    /// What a driver should present: committed pixels plus any preview
    /// or overlay
    pub fn display(&self) -> &PixelBuffer {
        &self.display
    }
    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }
    pub fn picker(&self) -> &Picker {
        &self.picker
    }
    pub fn mode(&self) -> OperateMode {
        self.mode
    }
    /// Drain pending notifications, oldest first
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        mem::replace(&mut self.events, Vec::new())
    }
    /// Swap in a fresh algorithm of the given kind. Session colors are
    /// reapplied; any preview is dropped.
    pub fn select_algorithm(&mut self, kind: AlgorithmKind) {
        self.algorithm = Algorithm::new(kind);
        self.algorithm.set_border_color(self.border_color);
        self.algorithm.set_fill_color(self.fill_color);
        if !kind_supports(kind, self.mode) {
            self.mode = match kind {
                AlgorithmKind::Dda | AlgorithmKind::Bresenham => OperateMode::Polygon,
                AlgorithmKind::FourNeighborFill
                | AlgorithmKind::EightNeighborFill
                | AlgorithmKind::ScanLineFill => OperateMode::Fill,
                AlgorithmKind::ImageTransform => OperateMode::Image,
            };
        }
        self.rect_anchor = None;
        self.drag = None;
        self.restore_display();
    }
    /// Switch the interaction style; swaps in that mode's default
    /// algorithm when the current one does not fit
    pub fn set_mode(&mut self, mode: OperateMode) {
        if !kind_supports(self.algorithm.kind(), mode) {
            self.select_algorithm(default_kind(mode));
        }
        self.mode = mode;
    }
    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
        self.algorithm.set_border_color(color);
    }
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
        self.algorithm.set_fill_color(color);
    }
    pub fn set_round_mode(&mut self, mode: RoundMode) {
        self.algorithm.set_round_mode(mode);
    }
    /// Wipe both buffers back to the background color. Algorithm state
    /// is untouched.
    pub fn clear_canvas(&mut self) {
        self.committed.fill(self.background);
        self.display = self.committed.clone();
    }
    /// Save the committed pixels; the extension selects the format
    pub fn export<P: AsRef<Path>>(&self, filename: P) -> Result<(), std::io::Error> {
        crate::ppm::write_file(&self.committed, filename)
    }

    pub fn pointer_down(&mut self, p: Point, button: PointerButton) {
        if self.picker.visible() {
            return;
        }
        match self.mode {
            OperateMode::Rectangle => {
                if button == PointerButton::Primary {
                    self.rect_anchor = Some(p);
                }
            }
            OperateMode::Image => {
                if button == PointerButton::Primary {
                    self.image_down(p);
                }
            }
            _ => {}
        }
    }
    pub fn pointer_move(&mut self, p: Point) {
        if self.picker.visible() {
            self.picker_move(p);
            return;
        }
        match self.mode {
            OperateMode::Polygon => self.polygon_move(p),
            OperateMode::Rectangle => self.rectangle_move(p),
            OperateMode::Image => self.image_move(p),
            OperateMode::Fill => {}
        }
    }
    pub fn pointer_up(&mut self, p: Point, button: PointerButton) {
        if self.picker.visible() {
            self.picker_up(button);
            return;
        }
        match self.mode {
            OperateMode::Polygon => self.polygon_up(p, button),
            OperateMode::Rectangle => self.rectangle_up(),
            OperateMode::Fill => {
                if button == PointerButton::Primary {
                    self.fill_click(p);
                }
            }
            OperateMode::Image => self.image_up(),
        }
    }
    /// Pointer left the canvas; an image drag in flight is promoted as
    /// if released
    pub fn pointer_leave(&mut self) {
        if self.picker.visible() {
            return;
        }
        if self.mode == OperateMode::Image {
            self.image_up();
        }
    }
    pub fn key_down(&mut self, key: Key) {
        if self.picker.visible() {
            let bounds = self.committed.size();
            match key {
                Key::ArrowLeft => self.picker.nudge(-1.0, 0.0, bounds),
                Key::ArrowRight => self.picker.nudge(1.0, 0.0, bounds),
                Key::ArrowUp => self.picker.nudge(0.0, -1.0, bounds),
                Key::ArrowDown => self.picker.nudge(0.0, 1.0, bounds),
                _ => return,
            }
            self.replay_picker();
            return;
        }
        if self.mode == OperateMode::Image {
            match key {
                Key::Enter => self.image_commit(),
                Key::Escape => self.image_cancel(),
                _ => {}
            }
        }
    }

    /// Load a picture for placement. Switches to the image transform
    /// when another algorithm is active, centers the picture
    /// aspect-fit, and starts the placement interaction.
    pub fn load_image(&mut self, image: PixelBuffer) {
        if self.algorithm.kind() != AlgorithmKind::ImageTransform {
            self.select_algorithm(AlgorithmKind::ImageTransform);
        }
        self.mode = OperateMode::Image;
        self.algorithm.set_image(image, self.committed.size());
        self.start_work();
        self.image_preview();
    }
    /// Show or hide the picker; hiding restores the plain committed
    /// view. Returns the new visibility.
    pub fn toggle_picker(&mut self) -> bool {
        let shown = self.picker.toggle();
        if shown {
            if self.algorithm.working() && !self.picker_warned {
                warn!("picker reads committed pixels; the preview in flight is not sampled");
                self.picker_warned = true;
            }
        } else {
            self.restore_display();
        }
        shown
    }

    fn emit_work(&mut self, state: WorkState) {
        self.events.push(SessionEvent::WorkingChanged(state.is_working()));
    }
    fn start_work(&mut self) {
        let state = self.algorithm.start_work();
        self.emit_work(state);
    }
    fn stop_work(&mut self) {
        let state = self.algorithm.stop_work();
        self.emit_work(state);
    }
    /// Render the algorithm onto the committed pixels and mirror the
    /// result into the display buffer
    fn commit(&mut self) {
        self.committed = self.algorithm.update_image_data(self.committed.clone());
        self.display = self.committed.clone();
    }
    /// Render the algorithm onto a copy of the committed pixels,
    /// display only
    fn preview(&mut self) {
        self.display = self.algorithm.update_image_data(self.committed.clone());
    }
    fn restore_display(&mut self) {
        self.display = self.committed.clone();
    }

    fn polygon_up(&mut self, p: Point, button: PointerButton) {
        match button {
            PointerButton::Primary => {
                // TODO close the polygon automatically when a click
                // lands within a few pixels of the first vertex
                if !self.algorithm.working() {
                    self.start_work();
                }
                self.algorithm.add_point(p);
            }
            PointerButton::Secondary => {
                if self.algorithm.working() {
                    self.stop_work();
                    self.commit();
                    self.algorithm.reset();
                }
            }
            PointerButton::Middle => {}
        }
    }
    fn polygon_move(&mut self, p: Point) {
        if !self.algorithm.working() {
            return;
        }
        self.algorithm.add_point(p);
        self.preview();
        self.algorithm.pop_point();
    }

    fn rectangle_move(&mut self, p: Point) {
        let anchor = match self.rect_anchor {
            Some(a) => a,
            None => return,
        };
        self.algorithm.reset();
        self.algorithm.add_point(anchor);
        self.algorithm.add_point(Point::new(p.x, anchor.y));
        self.algorithm.add_point(p);
        self.algorithm.add_point(Point::new(anchor.x, p.y));
        // idle vertices close themselves, so the preview is the full
        // outline
        self.preview();
    }
    fn rectangle_up(&mut self) {
        if self.rect_anchor.take().is_some() {
            self.commit();
            self.algorithm.reset();
        }
    }

    fn fill_click(&mut self, p: Point) {
        self.start_work();
        self.algorithm.set_seed(p);
        self.stop_work();
        self.commit();
    }

    fn image_down(&mut self, p: Point) {
        if !self.algorithm.working() {
            return;
        }
        let applied = match self.algorithm.image_state().and_then(|st| st.applied_rect()) {
            Some(r) => r.standardize(),
            None => return,
        };
        if let Some(anchor) = applied.detect_handle(p, PICK_TOLERANCE) {
            self.drag = Some(DragState::Handle { anchor, start: p });
        } else if applied.contains(p) {
            self.drag = Some(DragState::Move { start: p });
        }
    }
    fn image_move(&mut self, p: Point) {
        if !self.algorithm.working() {
            return;
        }
        if let Some(drag) = self.drag {
            let applied = match self.algorithm.image_state().and_then(|st| st.applied_rect()) {
                Some(r) => r.standardize(),
                None => return,
            };
            let rect = match drag {
                DragState::Handle { anchor, start } => {
                    resize_by_handle(anchor, start - p, applied)
                }
                DragState::Move { start } => move_whole(start - p, applied),
            };
            self.algorithm.set_image_rect(rect);
        }
        self.image_preview();
    }
    fn image_up(&mut self) {
        if self.drag.take().is_some() {
            self.algorithm.apply_image_rect();
        }
    }
    fn image_preview(&mut self) {
        self.preview();
        self.algorithm.draw_stretched_border(&mut self.display);
    }
    fn image_commit(&mut self) {
        if !self.algorithm.working() {
            return;
        }
        self.algorithm.apply_image_rect();
        self.stop_work();
        self.commit();
        self.algorithm.reset();
    }
    fn image_cancel(&mut self) {
        if !self.algorithm.working() {
            return;
        }
        self.stop_work();
        self.algorithm.reset();
        self.restore_display();
    }

    fn picker_move(&mut self, p: Point) {
        self.picker.set_point(p, self.committed.size());
        self.replay_picker();
    }
    fn picker_up(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            if let Some((point, color)) = self.picker.sample(&self.committed) {
                debug!("picked {} at ({}, {})", color, point.x, point.y);
                self.events.push(SessionEvent::PointPicked { point, color });
            }
        }
        self.picker.hide();
        self.restore_display();
    }
    fn replay_picker(&mut self) {
        self.display = self.committed.clone();
        self.picker.draw_overlay(&mut self.display);
    }
}
