//! Rotating-calipers minimum-area bounding rectangle.
//!
//! The minimum-area rectangle enclosing a convex polygon has at least one
//! side collinear with a polygon edge. The calipers exploit this: starting
//! from a rectangle flush with one edge, each step rotates the rectangle by
//! the smallest angle that brings another side flush with its adjacent
//! polygon edge, advancing the four support vertices as it goes. Every edge
//! serves as the flush "bottom" side at most once, so the sweep is O(n)
//! after the initial O(n) support scan.
//!
//! The input must be a strictly convex polygon in counter-clockwise order.
//! This is a caller obligation and is not re-validated (only the vertex
//! count is checked); non-convex, clockwise, or collinear-triple inputs
//! produce unspecified results.
//!
//! # Example
//!
//! ```
//! use minrect::{min_area_rect, Point2};
//!
//! let square: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ];
//!
//! let rect = min_area_rect(&square).unwrap();
//! assert!((rect.width - 2.0).abs() < 1e-10);
//! assert!((rect.height - 2.0).abs() < 1e-10);
//! ```

use crate::error::MinRectError;
use crate::primitives::{Point2, Vec2};
use crate::rect::OrientedRect;
use num_traits::Float;
use std::cmp::Ordering;

/// Candidate rotation for one caliper side.
///
/// `sin_sqr` is the squared sine of the angle that would bring side `side`
/// flush with its adjacent polygon edge. Squared sines order rotations the
/// same way the angles do (all angles are in [0, π/2]) without any inverse
/// trigonometry.
#[derive(Debug, Clone, Copy)]
struct RotationCandidate<F> {
    sin_sqr: F,
    side: usize,
}

/// Working state of the calipers: a candidate bounding rectangle.
///
/// `index` holds one support vertex per rectangle side in rotational order
/// (0 = bottom, 1 = right, 2 = top, 3 = left). `u0` is the direction of the
/// polygon edge the bottom side lies on, not normalized; `u1` is always
/// `u0.perpendicular()`. `area` is recomputed from the current supports and
/// basis whenever they change, so it is never stale.
#[derive(Debug, Clone, Copy)]
struct CaliperBox<F> {
    index: [usize; 4],
    u0: Vec2<F>,
    u1: Vec2<F>,
    sqr_len_u0: F,
    area: F,
}

impl<F: Float> CaliperBox<F> {
    /// Builds the smallest rectangle whose bottom side is collinear with
    /// the polygon edge from `vertices[i0]` to `vertices[i1]`.
    ///
    /// One scan projects every vertex onto the (u0, u1) basis anchored at
    /// `vertices[i1]` and picks the extreme supports. Ties go to the later
    /// vertex along the sweep direction: largest projection-y for the right
    /// side, smallest projection-x for the top, smallest projection-y for
    /// the left.
    fn initial(vertices: &[Point2<F>], i0: usize, i1: usize) -> Self {
        let u0 = vertices[i1] - vertices[i0];
        let u1 = u0.perpendicular();
        let sqr_len_u0 = u0.magnitude_squared();
        let origin = vertices[i1];

        // The baseline endpoint projects to (0, 0) and seeds all four slots.
        let mut index = [i1; 4];
        let mut proj = [Vec2::zero(); 4];

        for (j, &p) in vertices.iter().enumerate() {
            let diff = p - origin;
            let v = Vec2::new(u0.dot(diff), u1.dot(diff));

            if v.x > proj[1].x || (v.x == proj[1].x && v.y > proj[1].y) {
                index[1] = j;
                proj[1] = v;
            }
            if v.y > proj[2].y || (v.y == proj[2].y && v.x < proj[2].x) {
                index[2] = j;
                proj[2] = v;
            }
            if v.x < proj[3].x || (v.x == proj[3].x && v.y < proj[3].y) {
                index[3] = j;
                proj[3] = v;
            }
        }

        // Projections carry a factor of |u0| each, hence the normalization.
        let area = (proj[1].x - proj[3].x) * proj[2].y / sqr_len_u0;

        Self {
            index,
            u0,
            u1,
            sqr_len_u0,
            area,
        }
    }
}

/// Computes, for each non-degenerate rectangle side, the squared sine of
/// the rotation that would bring it flush with the polygon edge leaving its
/// support vertex.
///
/// A side is degenerate when it shares its support vertex with the next
/// side (the rectangle corner sits exactly on that vertex), in which case
/// rotating about it is meaningless and no candidate is emitted. Returns
/// `false` if no side produced a candidate, which only happens if the
/// rectangle has collapsed to a point; valid convex input never gets there,
/// but the sweep stops rather than spin.
fn compute_angles<F: Float>(
    vertices: &[Point2<F>],
    bx: &CaliperBox<F>,
    candidates: &mut Vec<RotationCandidate<F>>,
) -> bool {
    let n = vertices.len();
    candidates.clear();

    let mut k0 = 3;
    for k1 in 0..4 {
        if bx.index[k0] != bx.index[k1] {
            // Side direction in the box basis: u0 right, u1 up, negated on
            // the far sides.
            let d = match k0 {
                0 => bx.u0,
                1 => bx.u1,
                2 => -bx.u0,
                _ => -bx.u1,
            };

            let j0 = bx.index[k0];
            let j1 = (j0 + 1) % n;
            let e = vertices[j1] - vertices[j0];

            let dp = d.cross(e);
            let sin_sqr = dp * dp / (e.magnitude_squared() * bx.sqr_len_u0);
            candidates.push(RotationCandidate { sin_sqr, side: k0 });
        }
        k0 = k1;
    }

    !candidates.is_empty()
}

/// Ordering for rotation candidates: ascending by squared sine, so the
/// smallest rotation is processed first.
///
/// When fewer than four candidates exist and two compare exactly equal, the
/// larger side index sorts first. Equal angles arise legitimately from
/// parallel polygon edges; putting the more counter-clockwise side first
/// makes its advanced support vertex the one the rectangle is rebased on,
/// so a simultaneous arrival cannot re-select the configuration it just
/// left. Exact floating-point equality is deliberate: angles equal only up
/// to rounding are treated as distinct, and one of them simply wins.
fn candidate_order<F: Float>(
    count: usize,
    a: &RotationCandidate<F>,
    b: &RotationCandidate<F>,
) -> Ordering {
    match a.sin_sqr.partial_cmp(&b.sin_sqr).unwrap_or(Ordering::Equal) {
        Ordering::Equal if count < 4 => b.side.cmp(&a.side),
        ordering => ordering,
    }
}

/// Rotates the rectangle onto the polygon edge selected by the minimal
/// candidate, advancing supports and rebasing the box in place.
///
/// Every candidate tied with the minimal squared sine has its support
/// advanced (its side arrives flush simultaneously, which happens when
/// polygon edges are parallel). If the new bottom support has already
/// served as bottom, the sweep has come full circle and `false` is
/// returned. Otherwise the support array is relabeled so the freshly flush
/// side is the bottom, and the basis and area are recomputed.
fn update_support<F: Float>(
    candidates: &[RotationCandidate<F>],
    vertices: &[Point2<F>],
    visited: &mut [bool],
    bx: &mut CaliperBox<F>,
) -> bool {
    let n = vertices.len();
    let min_sin_sqr = candidates[0].sin_sqr;

    let mut parallel = 0;
    for c in candidates {
        if c.sin_sqr != min_sin_sqr {
            break;
        }
        bx.index[c.side] = (bx.index[c.side] + 1) % n;
        parallel += 1;
    }

    let bottom_side = candidates[0].side;
    let bottom = bx.index[bottom_side];
    if visited[bottom] {
        // The rotation has returned to a configuration already processed.
        return false;
    }
    for c in &candidates[..parallel] {
        visited[bx.index[c.side]] = true;
    }

    // Relabel so the side that just became flush is side 0.
    let mut rotated = [0usize; 4];
    for (k, slot) in rotated.iter_mut().enumerate() {
        *slot = bx.index[(bottom_side + k) % 4];
    }
    bx.index = rotated;

    let i1 = bx.index[0];
    let i0 = (i1 + n - 1) % n;
    bx.u0 = vertices[i1] - vertices[i0];
    bx.u1 = bx.u0.perpendicular();
    bx.sqr_len_u0 = bx.u0.magnitude_squared();

    let diff1 = vertices[bx.index[1]] - vertices[bx.index[3]];
    let diff2 = vertices[bx.index[2]] - vertices[bx.index[0]];
    bx.area = bx.u0.dot(diff1) * bx.u1.dot(diff2) / bx.sqr_len_u0;

    true
}

/// Converts the best caliper box into the output rectangle.
fn extract_rect<F: Float>(vertices: &[Point2<F>], bx: &CaliperBox<F>) -> OrientedRect<F> {
    let n = vertices.len();
    let len = bx.u0.magnitude();
    let normal_u0 = bx.u0 / len;
    let normal_u1 = bx.u1 / len;

    // Bottom-left corner: project the left support onto the bottom line,
    // anchored at the first endpoint of the baseline edge.
    let origin = vertices[(bx.index[0] + n - 1) % n];
    let d3 = vertices[bx.index[3]] - origin;
    let corner = origin + normal_u0 * normal_u0.dot(d3);

    let width = normal_u0
        .dot(vertices[bx.index[1]] - vertices[bx.index[3]])
        .abs();
    let height = normal_u1
        .dot(vertices[bx.index[2]] - vertices[bx.index[0]])
        .abs();
    let angle = bx.u0.y.atan2(bx.u0.x);

    let half = F::from(0.5).unwrap();
    let center = corner + normal_u0 * (width * half) + normal_u1 * (height * half);

    OrientedRect::new(center, width, height, angle)
}

/// Computes the minimum-area oriented bounding rectangle of a convex
/// polygon using rotating calipers.
///
/// # Preconditions
///
/// The vertices must form a strictly convex polygon in counter-clockwise
/// order, with no three consecutive collinear vertices — typically the
/// output of a convex hull algorithm. These invariants are the caller's
/// responsibility and are not re-validated; only the vertex count is
/// checked.
///
/// # Complexity
///
/// - Time: O(n) — one support scan plus at most n caliper rotations
/// - Space: O(n) for the per-invocation visited flags
///
/// # Errors
///
/// Returns [`MinRectError::InsufficientVertices`] if fewer than 3 vertices
/// are provided.
///
/// # Example
///
/// ```
/// use minrect::{min_area_rect, Point2};
///
/// // A 4x3 right triangle
/// let triangle: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(0.0, 3.0),
/// ];
///
/// let rect = min_area_rect(&triangle).unwrap();
/// assert!((rect.area() - 12.0).abs() < 1e-10);
/// ```
pub fn min_area_rect<F: Float>(vertices: &[Point2<F>]) -> Result<OrientedRect<F>, MinRectError> {
    let n = vertices.len();
    if n < 3 {
        return Err(MinRectError::InsufficientVertices { count: n });
    }

    let mut visited = vec![false; n];
    let mut best = CaliperBox::initial(vertices, n - 1, 0);
    visited[best.index[0]] = true;

    // `best` is a plain value snapshot; mutating the working box afterward
    // cannot disturb it.
    let mut bx = best;
    let mut candidates = Vec::with_capacity(4);

    for _ in 0..n {
        if !compute_angles(vertices, &bx, &mut candidates) {
            break;
        }

        let count = candidates.len();
        candidates.sort_by(|a, b| candidate_order(count, a, b));

        if !update_support(&candidates, vertices, &mut visited, &mut bx) {
            break;
        }

        // "<=" lets a later equal-area configuration win, keeping the
        // orientation chosen among ties a deterministic function of the
        // sweep order.
        if bx.area <= best.area {
            best = bx;
        }
    }

    Ok(extract_rect(vertices, &best))
}
