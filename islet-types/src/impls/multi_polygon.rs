use serde::{Deserialize, Serialize};

use crate::cartesian::Point2;
use crate::error::GeometryError;
use crate::impls::polygon::Polygon;

/// A set of polygons.
///
/// A multi-polygon without parts is an empty geometry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(bound(
    serialize = "Polygon<P>: Serialize",
    deserialize = "Polygon<P>: Deserialize<'de>"
))]
pub struct MultiPolygon<P = Point2> {
    /// Inner polygons.
    pub parts: Vec<Polygon<P>>,
}

impl<P> Default for MultiPolygon<P> {
    fn default() -> Self {
        Self { parts: vec![] }
    }
}

impl<P> From<Vec<Polygon<P>>> for MultiPolygon<P> {
    fn from(parts: Vec<Polygon<P>>) -> Self {
        Self { parts }
    }
}

impl<P> From<Polygon<P>> for MultiPolygon<P> {
    fn from(polygon: Polygon<P>) -> Self {
        Self {
            parts: vec![polygon],
        }
    }
}

impl<P> MultiPolygon<P> {
    /// Returns reference to the inner polygons.
    pub fn parts(&self) -> &[Polygon<P>] {
        &self.parts
    }

    /// Returns true if the multi-polygon has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl MultiPolygon {
    /// Creates a multi-polygon from coordinate rings of its parts.
    pub fn from_coords(parts: &[Vec<Vec<[f64; 2]>>]) -> Result<Self, GeometryError> {
        Ok(Self {
            parts: parts
                .iter()
                .map(|rings| Polygon::from_coords(rings))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Coordinate rings of all parts. Every ring includes its closing point.
    pub fn to_coords(&self) -> Vec<Vec<Vec<[f64; 2]>>> {
        self.parts.iter().map(Polygon::to_coords).collect()
    }
}

impl<P> crate::multi_polygon::MultiPolygon for MultiPolygon<P> {
    type Polygon = Polygon<P>;

    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon> {
        self.parts.iter()
    }
}
