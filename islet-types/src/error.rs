//! Error type used by the crate.

use thiserror::Error;

/// Geometry construction error.
///
/// Returned when the input does not satisfy the invariants of the geometry model. The model never
/// tries to fix such input, it is up to the caller to reject it or repair it before construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A ring must have at least 3 distinct points plus the closing point.
    #[error("ring must have at least 4 points, but has {0}")]
    TooFewPoints(usize),
    /// First and last points of a ring are not the same.
    #[error("ring is not closed: first and last points differ")]
    NotClosed,
    /// One of the coordinates is NaN or infinite.
    #[error("coordinate is not a finite number")]
    NonFiniteCoordinate,
    /// Polygon was given without any rings.
    #[error("polygon has no outer ring")]
    MissingOuterRing,
}
