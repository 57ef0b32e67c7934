//! Freehand stroke geometry for interactive drawing surfaces.
//!
//! This crate contains the data structures and algorithms behind a
//! freehand-drawing element: capturing pointer samples, deriving a
//! per-segment line width from pointer speed, maintaining a running
//! bounding box, rendering the stroke as a smoothed curve, and applying
//! anchor-preserving move/resize transforms. It owns no windowing, event
//! dispatch, or persistence; callers feed it positions and timestamps and
//! hand it a [`RenderContext`] to draw on.
//!
//! # Examples
//!
//! Capturing a two-sample stroke and moving it afterwards:
//! ```
//! use freedraw::{Point, Rect, Stroke, Vec2};
//!
//! let color = "#000000".parse().unwrap();
//! let mut stroke = Stroke::new(color, 10.0, 0);
//! stroke.add_position(Point::new(0.0, 0.0), 0.0);
//! stroke.add_position(Point::new(10.0, 0.0), 100.0);
//! // A slow pointer keeps the stroke at its full width.
//! assert_eq!(stroke.widths(), &[0.0, 10.0][..]);
//! assert_eq!(stroke.bounds(), Rect::new(0.0, 0.0, 10.0, 0.0));
//!
//! stroke.commit();
//! stroke.translate(Vec2::new(5.0, -3.0));
//! assert_eq!(stroke.bounds(), Rect::new(5.0, -3.0, 15.0, -3.0));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]

mod point;
mod rect;
mod render;
mod size;
mod stroke;
mod transform;
mod vec2;
mod width;

pub use csscolorparser::Color;

pub use crate::point::*;
pub use crate::rect::*;
pub use crate::render::*;
pub use crate::size::*;
pub use crate::stroke::*;
pub use crate::transform::*;
pub use crate::vec2::*;
pub use crate::width::{MAX_SPEED, MIN_SPEED};
