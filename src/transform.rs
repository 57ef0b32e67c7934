//! Moving and resizing committed strokes.

use crate::{Point, Rect, Stroke, Vec2};

/// The resize handle being dragged, named by the corner of the stroke's
/// bounding box it sits on.
///
/// During a resize the corner *opposite* the handle stays visually fixed:
/// the offset correction pins that corner's coordinates to the matching
/// corner of the caller-supplied target rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeAnchor {
    /// Dragging the bottom-right handle; the top-left corner holds still.
    BottomRight,
    /// Dragging the bottom-left handle; the top-right corner holds still.
    BottomLeft,
    /// Dragging the top-left handle; the bottom-right corner holds still.
    TopLeft,
    /// Dragging the top-right handle; the bottom-left corner holds still.
    TopRight,
}

/// Smallest bounding-box edge a resize is allowed to shrink.
///
/// A stroke whose box is already at or below this size refuses any scale
/// below 1 on that axis; the algorithm performs no reverse/flip handling,
/// so shrinking degenerate geometry further is a documented limitation
/// rather than a supported operation.
pub const MIN_RECT_SIZE: f64 = 20.0;

impl Stroke {
    /// Shift every position by `delta`.
    ///
    /// The bounding box is reset to the empty extent first and each
    /// updated position folded back in as it is written, so the box ends
    /// exactly equal to the min/max over the shifted positions. Width and
    /// speed-tracking state are untouched.
    pub fn translate(&mut self, delta: Vec2) {
        debug_assert!(self.is_committed(), "transforms require a committed stroke");
        self.reset_bounds();
        for i in 0..self.positions.len() {
            let p = self.positions[i] + delta;
            self.positions[i] = p;
            self.grow_bounds(p);
        }
    }

    /// Scale every position and align one bounding-box corner to `target`.
    ///
    /// Positions scale about the coordinate origin by `(scale_x, scale_y)`
    /// in a first pass, then a second pass shifts them so that the corner
    /// selected by `anchor` lands on the matching corner of `target`. Both
    /// passes reset the box and fold every position back in; an extent
    /// carried over from before the rewrite would corrupt the correction.
    ///
    /// If the current box is already no wider than [`MIN_RECT_SIZE`] and
    /// `scale_x < 1` (or no taller and `scale_y < 1`), the whole call is a
    /// no-op. Only the pre-scale box is consulted; an extreme scale factor
    /// on a box just above the threshold can still produce a near-zero
    /// result.
    pub fn resize(&mut self, scale_x: f64, scale_y: f64, target: Rect, anchor: ResizeAnchor) {
        debug_assert!(self.is_committed(), "transforms require a committed stroke");
        if (self.bounds.width() <= MIN_RECT_SIZE && scale_x < 1.0)
            || (self.bounds.height() <= MIN_RECT_SIZE && scale_y < 1.0)
        {
            return;
        }

        self.reset_bounds();
        for i in 0..self.positions.len() {
            let p = Point::new(self.positions[i].x * scale_x, self.positions[i].y * scale_y);
            self.positions[i] = p;
            self.grow_bounds(p);
        }

        let b = self.bounds;
        let offset = match anchor {
            ResizeAnchor::BottomRight => Vec2::new(b.x0 - target.x0, b.y0 - target.y0),
            ResizeAnchor::BottomLeft => Vec2::new(b.x1 - target.x1, b.y0 - target.y0),
            ResizeAnchor::TopLeft => Vec2::new(b.x1 - target.x1, b.y1 - target.y1),
            ResizeAnchor::TopRight => Vec2::new(b.x0 - target.x0, b.y1 - target.y1),
        };

        self.reset_bounds();
        for i in 0..self.positions.len() {
            let p = self.positions[i] - offset;
            self.positions[i] = p;
            self.grow_bounds(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn committed_stroke(points: &[(f64, f64)]) -> Stroke {
        let mut stroke = Stroke::new("#000000".parse().unwrap(), 10.0, 0);
        for (i, &(x, y)) in points.iter().enumerate() {
            stroke.add_position(Point::new(x, y), i as f64 * 100.0);
        }
        stroke.commit();
        stroke
    }

    #[test]
    fn translate_shifts_positions_and_box() {
        let mut stroke = committed_stroke(&[(0.0, 0.0), (10.0, 0.0)]);
        stroke.translate(Vec2::new(5.0, -3.0));
        assert_eq!(
            stroke.positions(),
            &[Point::new(5.0, -3.0), Point::new(15.0, -3.0)][..]
        );
        let b = stroke.bounds();
        assert_eq!(b, Rect::new(5.0, -3.0, 15.0, -3.0));
        assert_eq!(b.origin(), Point::new(5.0, -3.0));
        assert_eq!(b.width(), 10.0);
        assert_eq!(b.height(), 0.0);
    }

    #[test]
    fn translate_round_trips() {
        let mut rng = rand::rng();
        let pts: Vec<(f64, f64)> = (0..40)
            .map(|_| {
                (
                    rng.random_range(-200.0..200.0),
                    rng.random_range(-200.0..200.0),
                )
            })
            .collect();
        let mut stroke = committed_stroke(&pts);
        let original = stroke.clone();

        let delta = Vec2::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0));
        stroke.translate(delta);
        stroke.translate(-delta);

        for (p, q) in stroke.positions().iter().zip(original.positions()) {
            assert!(p.distance(*q) < 1e-9, "{p:?} != {q:?}");
        }
        let (b, ob) = (stroke.bounds(), original.bounds());
        assert!((b.x0 - ob.x0).abs() < 1e-9);
        assert!((b.y0 - ob.y0).abs() < 1e-9);
        assert!((b.x1 - ob.x1).abs() < 1e-9);
        assert!((b.y1 - ob.y1).abs() < 1e-9);
    }

    #[test]
    fn identity_resize_changes_nothing() {
        for anchor in [
            ResizeAnchor::BottomRight,
            ResizeAnchor::BottomLeft,
            ResizeAnchor::TopLeft,
            ResizeAnchor::TopRight,
        ] {
            let mut stroke = committed_stroke(&[(0.0, 0.0), (30.0, 10.0), (50.0, 40.0)]);
            let original = stroke.clone();
            let current = stroke.bounds();
            stroke.resize(1.0, 1.0, current, anchor);
            assert_eq!(stroke.positions(), original.positions());
            assert_eq!(stroke.bounds(), original.bounds());
        }
    }

    #[test]
    fn resize_pins_the_corner_opposite_a_bottom_right_drag() {
        let mut stroke = committed_stroke(&[(0.0, 0.0), (10.0, 20.0)]);
        // Doubling the width while dragging the bottom-right handle: the
        // target keeps its top-left at (0, 0).
        let target = Rect::new(0.0, 0.0, 20.0, 20.0);
        stroke.resize(2.0, 1.0, target, ResizeAnchor::BottomRight);
        assert_eq!(
            stroke.positions(),
            &[Point::new(0.0, 0.0), Point::new(20.0, 20.0)][..]
        );
        assert_eq!(stroke.bounds(), target);
    }

    #[test]
    fn resize_pins_the_corner_opposite_a_top_left_drag() {
        let mut stroke = committed_stroke(&[(10.0, 10.0), (40.0, 50.0)]);
        // Halving both axes while dragging the top-left handle: the target
        // keeps its bottom-right at (40, 50).
        let target = Rect::new(25.0, 30.0, 40.0, 50.0);
        stroke.resize(0.5, 0.5, target, ResizeAnchor::TopLeft);
        assert_eq!(
            stroke.positions(),
            &[Point::new(25.0, 30.0), Point::new(40.0, 50.0)][..]
        );
        assert_eq!(stroke.bounds(), target);
    }

    #[test]
    fn resize_mixes_axes_for_the_remaining_anchors() {
        // Bottom-left drag: right edge and top edge hold still.
        let mut stroke = committed_stroke(&[(0.0, 0.0), (40.0, 40.0)]);
        let target = Rect::new(-40.0, 0.0, 40.0, 40.0);
        stroke.resize(2.0, 1.0, target, ResizeAnchor::BottomLeft);
        assert_eq!(stroke.bounds(), target);
        assert_eq!(
            stroke.positions(),
            &[Point::new(-40.0, 0.0), Point::new(40.0, 40.0)][..]
        );

        // Top-right drag: left edge and bottom edge hold still.
        let mut stroke = committed_stroke(&[(0.0, 0.0), (40.0, 40.0)]);
        let target = Rect::new(0.0, 20.0, 40.0, 40.0);
        stroke.resize(1.0, 0.5, target, ResizeAnchor::TopRight);
        assert_eq!(stroke.bounds(), target);
        assert_eq!(
            stroke.positions(),
            &[Point::new(0.0, 20.0), Point::new(40.0, 40.0)][..]
        );
    }

    #[test]
    fn shrinking_a_minimal_box_is_refused() {
        // Width at the threshold: shrinking on x is refused outright,
        // even though y alone would be fine.
        let mut stroke = committed_stroke(&[(0.0, 0.0), (MIN_RECT_SIZE, 100.0)]);
        let original = stroke.clone();
        let target = Rect::new(0.0, 0.0, 10.0, 100.0);
        stroke.resize(0.5, 1.0, target, ResizeAnchor::BottomRight);
        assert_eq!(stroke.positions(), original.positions());
        assert_eq!(stroke.bounds(), original.bounds());

        // Symmetric guard on the height axis.
        let mut stroke = committed_stroke(&[(0.0, 0.0), (100.0, MIN_RECT_SIZE)]);
        let original = stroke.clone();
        let target = Rect::new(0.0, 0.0, 100.0, 10.0);
        stroke.resize(1.0, 0.5, target, ResizeAnchor::BottomRight);
        assert_eq!(stroke.positions(), original.positions());
        assert_eq!(stroke.bounds(), original.bounds());
    }

    #[test]
    fn growing_a_minimal_box_is_allowed() {
        let mut stroke = committed_stroke(&[(0.0, 0.0), (10.0, 10.0)]);
        let target = Rect::new(0.0, 0.0, 30.0, 30.0);
        stroke.resize(3.0, 3.0, target, ResizeAnchor::BottomRight);
        assert_eq!(stroke.bounds(), target);
    }

    #[test]
    fn resize_guard_checks_only_the_pre_scale_box() {
        // The guard consults the current box, not the outcome: a box just
        // above the threshold accepts an extreme shrink and ends up far
        // below it. Known tolerance boundary, kept as-is.
        let side = MIN_RECT_SIZE + 1.0;
        let mut stroke = committed_stroke(&[(0.0, 0.0), (side, side)]);
        let target = Rect::new(0.0, 0.0, side * 0.01, side * 0.01);
        stroke.resize(0.01, 0.01, target, ResizeAnchor::BottomRight);
        assert!(stroke.bounds().width() < 1.0);
        assert!(stroke.bounds().width() > 0.0);
    }

    #[test]
    fn transforms_leave_widths_untouched() {
        let mut stroke = committed_stroke(&[(0.0, 0.0), (30.0, 0.0), (60.0, 30.0)]);
        let widths = stroke.widths().to_vec();
        stroke.translate(Vec2::new(12.0, 7.0));
        stroke.resize(2.0, 2.0, Rect::new(0.0, 0.0, 120.0, 60.0), ResizeAnchor::TopLeft);
        assert_eq!(stroke.widths(), &widths[..]);
    }
}
