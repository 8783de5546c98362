//! Error types for minrect operations.

use thiserror::Error;

/// Errors that can occur when computing a minimum-area rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinRectError {
    /// The input polygon has fewer than 3 vertices.
    ///
    /// A bounding rectangle of a 0-, 1-, or 2-point "polygon" would be
    /// degenerate; the caller must supply a genuine convex polygon.
    #[error("polygon needs at least 3 vertices, got {count}")]
    InsufficientVertices {
        /// Number of vertices that were provided.
        count: usize,
    },
}
