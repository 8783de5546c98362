//! Oriented rectangle type.
//!
//! [`OrientedRect`] is the result record of the calipers algorithm: a
//! rectangle of arbitrary rotation, described by its center, full extents,
//! and orientation angle. It also carries the small consumer surface a
//! downstream rendering or collision system needs (corners, containment,
//! local axes).

use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// A 2D rectangle of arbitrary orientation.
///
/// Represented by a center point, full extents along the local axes, and an
/// orientation angle (radians, counter-clockwise from the positive x-axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRect<F> {
    /// Center of the rectangle.
    pub center: Point2<F>,
    /// Extent along the local x-axis.
    pub width: F,
    /// Extent along the local y-axis.
    pub height: F,
    /// Rotation angle in radians (counter-clockwise from positive x-axis).
    pub angle: F,
}

impl<F: Float> OrientedRect<F> {
    /// Creates a new rectangle with the given parameters.
    #[inline]
    pub fn new(center: Point2<F>, width: F, height: F, angle: F) -> Self {
        Self {
            center,
            width,
            height,
            angle,
        }
    }

    /// Creates an axis-aligned rectangle (angle zero).
    #[inline]
    pub fn axis_aligned(center: Point2<F>, width: F, height: F) -> Self {
        Self {
            center,
            width,
            height,
            angle: F::zero(),
        }
    }

    /// Returns the area of the rectangle.
    #[inline]
    pub fn area(self) -> F {
        self.width * self.height
    }

    /// Returns half the width.
    #[inline]
    pub fn half_width(self) -> F {
        self.width / F::from(2.0).unwrap()
    }

    /// Returns half the height.
    #[inline]
    pub fn half_height(self) -> F {
        self.height / F::from(2.0).unwrap()
    }

    /// Returns the local x-axis direction (unit vector).
    #[inline]
    pub fn axis_x(self) -> Vec2<F> {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }

    /// Returns the local y-axis direction (unit vector).
    #[inline]
    pub fn axis_y(self) -> Vec2<F> {
        Vec2::new(-self.angle.sin(), self.angle.cos())
    }

    /// Returns the four corners of the rectangle in counter-clockwise order,
    /// starting from the corner at (+width/2, +height/2) in local coordinates.
    pub fn corners(self) -> [Point2<F>; 4] {
        let ux = self.axis_x();
        let uy = self.axis_y();
        let hw = self.half_width();
        let hh = self.half_height();

        [
            self.center + ux * hw + uy * hh,
            self.center - ux * hw + uy * hh,
            self.center - ux * hw - uy * hh,
            self.center + ux * hw - uy * hh,
        ]
    }

    /// Returns `true` if this rectangle contains the given point.
    ///
    /// A point on the boundary is considered inside.
    pub fn contains_point(self, p: Point2<F>) -> bool {
        let d = p - self.center;
        let local_x = d.dot(self.axis_x());
        let local_y = d.dot(self.axis_y());

        local_x.abs() <= self.half_width() && local_y.abs() <= self.half_height()
    }
}
