//! The freehand stroke element.

use csscolorparser::Color;
use smallvec::{smallvec, SmallVec};

use crate::width::WidthProfile;
use crate::{Point, Rect};

/// Sample positions recorded for one stroke, in capture order.
pub type Samples = SmallVec<[Point; 16]>;

/// Per-sample stroke widths, index-aligned with [`Samples`].
pub type Widths = SmallVec<[f64; 16]>;

/// Discriminant shared by every drawable element on a board.
///
/// Other element kinds live outside this crate; the tag exists so a board
/// can group heterogeneous elements in one collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ElementKind {
    /// A freehand stroke captured from pointer samples.
    Freehand,
}

/// One freehand drawable element: samples, widths, color, layer and
/// bounding box.
///
/// A stroke is created on pointer-down with its color, nominal width and
/// layer fixed for its whole life. It grows only through
/// [`add_position`](Stroke::add_position) while capturing; once the
/// external orchestrator calls [`commit`](Stroke::commit) it becomes
/// read-only apart from the transform operations. The sample and width
/// sequences never shrink.
///
/// The width sequence always has exactly one entry per sample. Index 0 is
/// a placeholder written at construction, before any sample exists;
/// rendering starts at segment 1 and never reads it.
#[derive(Clone, Debug)]
pub struct Stroke {
    pub(crate) positions: Samples,
    pub(crate) widths: Widths,
    pub(crate) color: Color,
    pub(crate) layer: i32,
    pub(crate) bounds: Rect,
    pub(crate) profile: WidthProfile,
    committed: bool,
}

impl Stroke {
    /// Create an empty stroke.
    ///
    /// `nominal_width` is the width of a slowly drawn line; fast movement
    /// thins a segment down to half of it. `layer` is an opaque ordering
    /// tag owned by the surrounding board.
    pub fn new(color: Color, nominal_width: f64, layer: i32) -> Stroke {
        Stroke {
            positions: SmallVec::new(),
            widths: smallvec![0.0],
            color,
            layer,
            bounds: Rect::EMPTY,
            profile: WidthProfile::new(nominal_width),
            committed: false,
        }
    }

    /// The drawable-element tag of every stroke.
    #[inline]
    pub fn kind(&self) -> ElementKind {
        ElementKind::Freehand
    }

    /// Record one pointer sample at timestamp `time` (milliseconds).
    ///
    /// Appends the position, folds it into the bounding box and, for every
    /// sample after the first, appends one width derived from the pointer
    /// speed since the previous sample. The timestamp of the last processed
    /// sample is advanced on every call.
    pub fn add_position(&mut self, pos: Point, time: f64) {
        debug_assert!(!self.committed, "committed strokes accept no samples");
        self.positions.push(pos);
        self.bounds = self.bounds.union_pt(pos);
        if self.positions.len() > 1 {
            let prev = self.positions[self.positions.len() - 2];
            let width = self.profile.advance(prev.distance(pos), time);
            self.widths.push(width);
        } else {
            self.profile.touch(time);
        }
    }

    /// End capture.
    ///
    /// Called by the orchestrator on pointer-up. After this the stroke
    /// accepts transforms and no further samples; the transition is never
    /// reversed.
    #[inline]
    pub fn commit(&mut self) {
        self.committed = true;
    }

    /// Whether capture has ended.
    #[inline]
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// The recorded sample positions, in capture order.
    #[inline]
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// The per-sample widths, index-aligned with
    /// [`positions`](Stroke::positions).
    #[inline]
    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    /// The stroke-wide draw color.
    #[inline]
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// The layer tag given at construction.
    #[inline]
    pub fn layer(&self) -> i32 {
        self.layer
    }

    /// The nominal (maximum) line width given at construction.
    #[inline]
    pub fn nominal_width(&self) -> f64 {
        self.profile.max_width
    }

    /// The current bounding box.
    ///
    /// For a stroke with no samples this is [`Rect::EMPTY`].
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Reset the bounding box to the empty extent.
    ///
    /// Every transform starts from this before replaying positions;
    /// a stale extent must never survive into a position rewrite.
    #[inline]
    pub fn reset_bounds(&mut self) {
        self.bounds = Rect::EMPTY;
    }

    /// Fold one position into the bounding box.
    ///
    /// This is the incremental min/max union step used during capture, and
    /// usable by an orchestrator that edits positions in a batch.
    #[inline]
    pub fn grow_bounds(&mut self, pos: Point) {
        self.bounds = self.bounds.union_pt(pos);
    }

    /// Recompute the bounding box from scratch over all current positions.
    pub fn recompute_bounds(&mut self) {
        self.bounds = self
            .positions
            .iter()
            .fold(Rect::EMPTY, |b, &p| b.union_pt(p));
    }
}
