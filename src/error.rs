//! Errors produced when constructing degenerate geometry.

use thiserror::Error;

/// The error type for invalid geometric constructions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A line or segment was given a direction vector of zero length.
    #[error("line or segment direction has zero length")]
    DegenerateDirection,
    /// A polygon was given fewer than 3 vertices.
    #[error("polygon requires at least 3 vertices, got {count}")]
    TooFewVertices {
        /// The number of vertices supplied.
        count: usize,
    },
    /// Two consecutive polygon vertices coincide, producing a zero-length edge.
    #[error("polygon has a zero-length edge between consecutive vertices")]
    DegenerateEdge,
    /// A circle was given a negative radius.
    #[error("circle radius must be non-negative, got {radius}")]
    NegativeRadius {
        /// The radius supplied.
        radius: f64,
    },
}

/// The result type for geometric constructions.
pub type Result<T> = std::result::Result<T, Error>;
