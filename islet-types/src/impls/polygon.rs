use serde::{Deserialize, Serialize};

use crate::cartesian::Point2;
use crate::error::GeometryError;
use crate::impls::Ring;

/// Simple implementation of the [`Polygon`](crate::Polygon) trait.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(bound(
    serialize = "Ring<P>: Serialize",
    deserialize = "Ring<P>: Deserialize<'de>"
))]
pub struct Polygon<P = Point2> {
    /// Outer contour.
    pub outer_contour: Ring<P>,
    /// Inner contours (holes).
    pub inner_contours: Vec<Ring<P>>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(outer_contour: Ring<P>, inner_contours: Vec<Ring<P>>) -> Self {
        Self {
            outer_contour,
            inner_contours,
        }
    }
}

impl Polygon {
    /// Creates a polygon from coordinate rings. The first ring is the outer one, the rest are holes.
    pub fn from_coords(rings: &[Vec<[f64; 2]>]) -> Result<Self, GeometryError> {
        let (outer, inner) = rings.split_first().ok_or(GeometryError::MissingOuterRing)?;
        Ok(Self {
            outer_contour: Ring::from_coords(outer)?,
            inner_contours: inner
                .iter()
                .map(|ring| Ring::from_coords(ring))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Coordinate rings of the polygon starting with the outer one. Every ring includes its closing point.
    pub fn to_coords(&self) -> Vec<Vec<[f64; 2]>> {
        std::iter::once(&self.outer_contour)
            .chain(self.inner_contours.iter())
            .map(Ring::to_coords)
            .collect()
    }
}

impl<P> crate::polygon::Polygon for Polygon<P> {
    type Contour = Ring<P>;

    fn outer_contour(&self) -> &Self::Contour {
        &self.outer_contour
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        self.inner_contours.iter()
    }
}

impl<P> From<Ring<P>> for Polygon<P> {
    fn from(value: Ring<P>) -> Self {
        Self {
            outer_contour: value,
            inner_contours: vec![],
        }
    }
}
