use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Point2};
use crate::error::GeometryError;

/// Minimum number of points in a ring including the closing point.
const MIN_RING_POINTS: usize = 4;

/// Closed contour of a polygon or a hole.
///
/// A ring is constructed from a point sequence where the first and the last points are the same (as in GeoJSON or
/// WKT). The closing point is not stored: [`ClosedContour`](crate::ClosedContour) iterators do not return it and
/// [`Contour::iter_points_closing`](crate::Contour::iter_points_closing) restores it.
///
/// Construction fails if the sequence has fewer than 4 points, is not closed or has non-finite coordinates.
/// Degenerate rings (all points on one line) are valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<P>", into = "Vec<P>")]
#[serde(bound(
    serialize = "P: Serialize + Clone",
    deserialize = "P: Deserialize<'de> + CartesianPoint2d + Clone, <P as CartesianPoint2d>::Num: Float"
))]
pub struct Ring<P = Point2> {
    points: Vec<P>,
}

impl<P> Ring<P>
where
    P: CartesianPoint2d,
    P::Num: Float,
{
    /// Creates a new ring from a closed point sequence.
    pub fn new(mut points: Vec<P>) -> Result<Self, GeometryError> {
        if points.len() < MIN_RING_POINTS {
            return Err(GeometryError::TooFewPoints(points.len()));
        }

        if points.iter().any(|p| !p.x().is_finite() || !p.y().is_finite()) {
            return Err(GeometryError::NonFiniteCoordinate);
        }

        match (points.first(), points.last()) {
            (Some(first), Some(last)) if first.equal(last) => {}
            _ => return Err(GeometryError::NotClosed),
        }

        points.pop();
        Ok(Self { points })
    }
}

impl<P> Ring<P> {
    /// Points of the ring without the closing point.
    pub fn points(&self) -> &[P] {
        &self.points
    }
}

impl Ring {
    /// Creates a new ring from coordinate pairs. The first and the last pairs must be equal.
    pub fn from_coords(coords: &[[f64; 2]]) -> Result<Self, GeometryError> {
        Self::new(coords.iter().map(|&c| Point2::from(c)).collect())
    }

    /// Coordinate pairs of the ring with the closing point.
    pub fn to_coords(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .chain(self.points.first())
            .map(Point2::coords)
            .collect()
    }
}

impl<P> crate::contour::ClosedContour for Ring<P> {
    type Point = P;

    fn iter_vertices(&self) -> impl Iterator<Item = &'_ P> {
        self.points.iter()
    }
}

impl<P> TryFrom<Vec<P>> for Ring<P>
where
    P: CartesianPoint2d,
    P::Num: Float,
{
    type Error = GeometryError;

    fn try_from(points: Vec<P>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl<P: Clone> From<Ring<P>> for Vec<P> {
    fn from(ring: Ring<P>) -> Self {
        let mut points = ring.points;
        if let Some(first) = points.first().cloned() {
            points.push(first);
        }

        points
    }
}
