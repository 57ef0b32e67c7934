//! Drawing a stroke onto a 2D surface.

use csscolorparser::Color;

use crate::{Point, Stroke};

/// Defines the connection between two segments of a stroked line.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Join {
    /// A straight line connecting the segments.
    Bevel,
    /// The segments are extended to their natural intersection point.
    Miter,
    /// An arc between the segments.
    Round,
}

/// Defines the shape to be drawn at the ends of a stroked line.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Cap {
    /// Flat cap.
    Butt,
    /// Square cap with dimensions equal to half the stroke width.
    Square,
    /// Rounded cap with radius equal to half the stroke width.
    Round,
}

/// A 2D drawing surface.
///
/// This is the seam between the stroke geometry and whatever actually
/// rasterizes it: an HTML canvas context, a vector backend, or a test
/// double. The operations mirror the common immediate-mode 2D context
/// model: persistent stroke state, path construction, then a paint call.
pub trait RenderContext {
    /// Push the current drawing state.
    fn save(&mut self);
    /// Pop back to the most recently saved drawing state.
    fn restore(&mut self);
    /// Set the end-cap style for subsequent strokes.
    fn set_line_cap(&mut self, cap: Cap);
    /// Set the segment-join style for subsequent strokes.
    fn set_line_join(&mut self, join: Join);
    /// Set the color used by subsequent strokes.
    fn set_stroke_color(&mut self, color: &Color);
    /// Set the line width used by subsequent strokes.
    fn set_line_width(&mut self, width: f64);
    /// Start a new path, discarding any path under construction.
    fn begin_path(&mut self);
    /// Begin a subpath at `p`.
    fn move_to(&mut self, p: Point);
    /// Extend the current subpath with a straight line to `p`.
    fn line_to(&mut self, p: Point);
    /// Extend the current subpath with a quadratic Bézier to `p`, using
    /// `ctrl` as the control point.
    fn quad_to(&mut self, ctrl: Point, p: Point);
    /// Paint the current path as a line.
    fn stroke(&mut self);
}

impl Stroke {
    /// Draw this stroke onto `ctx`.
    ///
    /// A read-only pass; it may run at any time, including mid-capture.
    /// Strokes with fewer than two samples draw nothing.
    ///
    /// Each segment `i` is painted with `widths[i]`, the width computed
    /// when sample `i` was recorded. The first segment is a straight line;
    /// every later segment is a quadratic from the midpoint of the two
    /// preceding samples to the midpoint of the current pair, with the
    /// shared sample as control point. Chaining midpoints this way renders
    /// the polyline visually smoothed without storing any tangent data.
    pub fn render(&self, ctx: &mut impl RenderContext) {
        let pts = &self.positions;
        if pts.len() < 2 {
            return;
        }
        ctx.save();
        ctx.set_line_cap(Cap::Round);
        ctx.set_line_join(Join::Round);
        ctx.set_stroke_color(&self.color);
        for i in 1..pts.len() {
            ctx.set_line_width(self.widths[i]);
            ctx.begin_path();
            if i == 1 {
                ctx.move_to(pts[0]);
                ctx.line_to(pts[1]);
            } else {
                ctx.move_to(pts[i - 2].midpoint(pts[i - 1]));
                ctx.quad_to(pts[i - 1], pts[i - 1].midpoint(pts[i]));
            }
            ctx.stroke();
        }
        ctx.restore();
    }
}
