//! Algorithm state machine
//!
//! An [`Algorithm`] is one drawing operation plus a working flag. The
//! operation carries its own inputs (vertices, a fill seed, or an
//! image placement); [`Algorithm::update_image_data`] renders those
//! inputs onto a buffer without consuming them, so a preview can be
//! produced any number of times from the same state.

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::fill::{eight_neighbor_fill, four_neighbor_fill, scan_line_fill};
use crate::point::{Point, RoundMode, Size};
use crate::raster::{bresenham_line, dda_line};
use crate::rect::Rect;
use crate::transform::ImageState;
use log::debug;

/// Selectable drawing operations
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlgorithmKind {
    Dda,
    Bresenham,
    FourNeighborFill,
    EightNeighborFill,
    ScanLineFill,
    ImageTransform,
}

/// Whether an interaction is in flight
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WorkState {
    Idle,
    Working,
}

impl WorkState {
    pub fn is_working(self) -> bool {
        self == WorkState::Working
    }
}

/// Operations that stroke edges expose a border color
pub trait HasBorderColor {
    fn border_color(&self) -> Color;
    fn set_border_color(&mut self, color: Color);
}

/// Operations that flood an area expose a fill color
pub trait HasFillColor {
    fn fill_color(&self) -> Color;
    fn set_fill_color(&mut self, color: Color);
}

/// Vertex list for the line-based operations
#[derive(Debug, Clone)]
pub struct PolygonState {
    pub points: Vec<Point>,
    pub border_color: Color,
    /// Rounding used by the DDA walk; Bresenham ignores it
    pub round_mode: RoundMode,
}

impl Default for PolygonState {
    fn default() -> Self {
        PolygonState {
            points: Vec::new(),
            border_color: Color::black(),
            round_mode: RoundMode::Ceil,
        }
    }
}

impl HasBorderColor for PolygonState {
    fn border_color(&self) -> Color {
        self.border_color
    }
    fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
    }
}

impl PolygonState {
    /// Stroke consecutive edges; when idle the polygon is closed with
    /// an edge back to the first vertex. A single committed vertex
    /// degenerates to one painted pixel.
    fn render<F>(&self, mut buf: PixelBuffer, working: bool, line: F) -> PixelBuffer
    where
        F: Fn(Point, Point) -> Vec<Point>,
    {
        if self.points.is_empty() {
            return buf;
        }
        let mut points = self.points.clone();
        if !working {
            points.push(points[0]);
        }
        for pair in points.windows(2) {
            let segment = line(pair[0], pair[1]);
            buf.set_pixels(&segment, self.border_color);
        }
        buf
    }
}

/// Seed and colors for the flood fills
#[derive(Debug, Clone)]
pub struct FillState {
    pub seed: Option<Point>,
    pub border_color: Color,
    pub fill_color: Color,
}

impl Default for FillState {
    fn default() -> Self {
        FillState { seed: None, border_color: Color::black(), fill_color: Color::black() }
    }
}

impl HasBorderColor for FillState {
    fn border_color(&self) -> Color {
        self.border_color
    }
    fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
    }
}

impl HasFillColor for FillState {
    fn fill_color(&self) -> Color {
        self.fill_color
    }
    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }
}

impl FillState {
    /// Run a fill from the seed; without a seed the buffer passes
    /// through unchanged
    fn render<F>(&self, mut buf: PixelBuffer, fill: F) -> PixelBuffer
    where
        F: Fn(&mut PixelBuffer, Point, Color, Color),
    {
        if let Some(seed) = self.seed {
            fill(&mut buf, seed, self.border_color, self.fill_color);
        }
        buf
    }
}

/// One drawing operation with its inputs
#[derive(Debug, Clone)]
pub enum Operation {
    Dda(PolygonState),
    Bresenham(PolygonState),
    FourNeighborFill(FillState),
    EightNeighborFill(FillState),
    ScanLineFill(FillState),
    ImageTransform(ImageState),
}

/// A drawing operation plus its lifecycle flag
#[derive(Debug, Clone)]
pub struct Algorithm {
    work: WorkState,
    op: Operation,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::new(AlgorithmKind::Dda)
    }
}

impl Algorithm {
    pub fn new(kind: AlgorithmKind) -> Self {
        let op = match kind {
            AlgorithmKind::Dda => Operation::Dda(PolygonState::default()),
            AlgorithmKind::Bresenham => Operation::Bresenham(PolygonState::default()),
            AlgorithmKind::FourNeighborFill => Operation::FourNeighborFill(FillState::default()),
            AlgorithmKind::EightNeighborFill => Operation::EightNeighborFill(FillState::default()),
            AlgorithmKind::ScanLineFill => Operation::ScanLineFill(FillState::default()),
            AlgorithmKind::ImageTransform => Operation::ImageTransform(ImageState::new()),
        };
        Algorithm { work: WorkState::Idle, op }
    }
    pub fn kind(&self) -> AlgorithmKind {
        match self.op {
            Operation::Dda(_) => AlgorithmKind::Dda,
            Operation::Bresenham(_) => AlgorithmKind::Bresenham,
            Operation::FourNeighborFill(_) => AlgorithmKind::FourNeighborFill,
            Operation::EightNeighborFill(_) => AlgorithmKind::EightNeighborFill,
            Operation::ScanLineFill(_) => AlgorithmKind::ScanLineFill,
            Operation::ImageTransform(_) => AlgorithmKind::ImageTransform,
        }
    }
    pub fn operation(&self) -> &Operation {
        &self.op
    }
    pub fn work_state(&self) -> WorkState {
        self.work
    }
    pub fn working(&self) -> bool {
        self.work.is_working()
    }
    /// Enter the working state; returns the new state
    pub fn start_work(&mut self) -> WorkState {
        debug!("{:?}: start work", self.kind());
        self.work = WorkState::Working;
        self.work
    }
    /// Leave the working state; returns the new state
    pub fn stop_work(&mut self) -> WorkState {
        debug!("{:?}: stop work", self.kind());
        self.work = WorkState::Idle;
        self.work
    }
    /// Clear the operation's inputs and go idle. Colors are
    /// configuration and survive; vertices, seed, and image do not.
    pub fn reset(&mut self) -> WorkState {
        debug!("{:?}: reset", self.kind());
        match &mut self.op {
            Operation::Dda(st) | Operation::Bresenham(st) => st.points.clear(),
            Operation::FourNeighborFill(st)
            | Operation::EightNeighborFill(st)
            | Operation::ScanLineFill(st) => st.seed = None,
            Operation::ImageTransform(st) => st.reset(),
        }
        self.work = WorkState::Idle;
        self.work
    }
    /// Render the operation's current inputs onto `buf` and return it.
    ///
    /// The state is read, never written: rendering twice from the same
    /// state produces identical buffers.
    pub fn update_image_data(&self, buf: PixelBuffer) -> PixelBuffer {
        match &self.op {
            Operation::Dda(st) => {
                st.render(buf, self.working(), |a, b| dda_line(a, b, st.round_mode))
            }
            Operation::Bresenham(st) => st.render(buf, self.working(), bresenham_line),
            Operation::FourNeighborFill(st) => st.render(buf, four_neighbor_fill),
            Operation::EightNeighborFill(st) => st.render(buf, eight_neighbor_fill),
            Operation::ScanLineFill(st) => st.render(buf, scan_line_fill),
            Operation::ImageTransform(st) => st.render(buf, self.working()),
        }
    }
    /// Append a vertex. Ignored by non-polygon operations.
    pub fn add_point(&mut self, p: Point) {
        match &mut self.op {
            Operation::Dda(st) | Operation::Bresenham(st) => st.points.push(p),
            _ => {}
        }
    }
    /// Remove and return the last vertex. Ignored by non-polygon
    /// operations.
    pub fn pop_point(&mut self) -> Option<Point> {
        match &mut self.op {
            Operation::Dda(st) | Operation::Bresenham(st) => st.points.pop(),
            _ => None,
        }
    }
    pub fn points(&self) -> &[Point] {
        match &self.op {
            Operation::Dda(st) | Operation::Bresenham(st) => &st.points,
            _ => &[],
        }
    }
    /// Place the fill seed. Ignored by non-fill operations.
    pub fn set_seed(&mut self, p: Point) {
        match &mut self.op {
            Operation::FourNeighborFill(st)
            | Operation::EightNeighborFill(st)
            | Operation::ScanLineFill(st) => st.seed = Some(p),
            _ => {}
        }
    }
    pub fn seed(&self) -> Option<Point> {
        match &self.op {
            Operation::FourNeighborFill(st)
            | Operation::EightNeighborFill(st)
            | Operation::ScanLineFill(st) => st.seed,
            _ => None,
        }
    }
    pub fn border_color(&self) -> Option<Color> {
        match &self.op {
            Operation::Dda(st) | Operation::Bresenham(st) => Some(st.border_color()),
            Operation::FourNeighborFill(st)
            | Operation::EightNeighborFill(st)
            | Operation::ScanLineFill(st) => Some(st.border_color()),
            Operation::ImageTransform(_) => None,
        }
    }
    pub fn set_border_color(&mut self, color: Color) {
        match &mut self.op {
            Operation::Dda(st) | Operation::Bresenham(st) => st.set_border_color(color),
            Operation::FourNeighborFill(st)
            | Operation::EightNeighborFill(st)
            | Operation::ScanLineFill(st) => st.set_border_color(color),
            Operation::ImageTransform(_) => {}
        }
    }
    pub fn fill_color(&self) -> Option<Color> {
        match &self.op {
            Operation::FourNeighborFill(st)
            | Operation::EightNeighborFill(st)
            | Operation::ScanLineFill(st) => Some(st.fill_color()),
            _ => None,
        }
    }
    pub fn set_fill_color(&mut self, color: Color) {
        match &mut self.op {
            Operation::FourNeighborFill(st)
            | Operation::EightNeighborFill(st)
            | Operation::ScanLineFill(st) => st.set_fill_color(color),
            _ => {}
        }
    }
    /// Rounding mode used by the DDA walk. Ignored elsewhere.
    pub fn set_round_mode(&mut self, mode: RoundMode) {
        match &mut self.op {
            Operation::Dda(st) | Operation::Bresenham(st) => st.round_mode = mode,
            _ => {}
        }
    }
    /// Install an image, aspect-fit centered on a canvas of `canvas`
    /// size. Ignored by non-image operations.
    pub fn set_image(&mut self, image: PixelBuffer, canvas: Size) {
        if let Operation::ImageTransform(st) = &mut self.op {
            st.set_image(image, canvas);
        }
    }
    /// Stage a placement rect; lands in the tentative slot while
    /// working, in the applied one when idle. Ignored by non-image
    /// operations.
    pub fn set_image_rect(&mut self, rect: Rect) {
        let working = self.working();
        if let Operation::ImageTransform(st) = &mut self.op {
            st.set_image_rect(rect, working);
        }
    }
    /// Promote the tentative placement rect, if any
    pub fn apply_image_rect(&mut self) {
        if let Operation::ImageTransform(st) = &mut self.op {
            st.apply_image_rect();
        }
    }
    pub fn image_state(&self) -> Option<&ImageState> {
        match &self.op {
            Operation::ImageTransform(st) => Some(st),
            _ => None,
        }
    }
    /// Draw the working rect border and anchor boxes onto `buf`.
    /// Ignored by non-image operations.
    pub fn draw_stretched_border(&self, buf: &mut PixelBuffer) {
        if let Operation::ImageTransform(st) = &self.op {
            st.draw_stretched_border(buf, self.working());
        }
    }
}
