//! minrect - Minimum-area oriented bounding rectangles
//!
//! Given a strictly convex polygon in counter-clockwise order, this library
//! computes the smallest-area rectangle (of any orientation) that contains
//! it, in O(n) time using the rotating-calipers technique. At least one side
//! of the minimum-area rectangle lies flush with a polygon edge; the
//! calipers walk the polygon's edges, visiting each at most once.
//!
//! Computing the convex hull is out of scope: the input is assumed to
//! already be a convex polygon, typically produced by an upstream hull
//! algorithm.
//!
//! # Example
//!
//! ```
//! use minrect::{min_area_rect, Point2};
//!
//! // A diamond (a square rotated 45 degrees)
//! let diamond: Vec<Point2<f64>> = vec![
//!     Point2::new(1.0, 0.0),
//!     Point2::new(2.0, 1.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let rect = min_area_rect(&diamond).unwrap();
//! assert!((rect.area() - 2.0).abs() < 1e-10);
//! ```

pub mod calipers;
pub mod error;
pub mod primitives;
pub mod rect;

pub use calipers::min_area_rect;
pub use error::MinRectError;
pub use primitives::{Point2, Vec2};
pub use rect::OrientedRect;
