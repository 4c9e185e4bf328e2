//! Error types for the geometry primitives.
//!
//! Outline construction reports problems through [`GeometryError`]; the
//! joinery crate wraps these with the panel and edge they came from.

use thiserror::Error;

/// Errors raised while constructing or validating 2D outlines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A closed polygon needs at least three vertices.
    #[error("Polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// A vertex has a NaN or infinite coordinate.
    #[error("Non-finite coordinate at vertex {index}")]
    NonFinite {
        /// Index of the offending vertex.
        index: usize,
    },

    /// Two consecutive vertices coincide.
    #[error("Coincident vertices at index {index}")]
    CoincidentVertices {
        /// Index of the second vertex of the pair.
        index: usize,
    },

    /// The outline encloses no area.
    #[error("Polygon has zero area")]
    ZeroArea,

    /// Two edges of the outline cross or overlap.
    #[error("Edges {first} and {second} intersect")]
    SelfIntersection {
        /// Index of the first edge (edge `i` runs from vertex `i` to `i + 1`).
        first: usize,
        /// Index of the second edge.
        second: usize,
    },
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;
