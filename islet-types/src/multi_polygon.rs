//! Multi-polygon trait: a geometry made of several polygon parts.

use crate::polygon::Polygon;

/// Geometry consisting of several polygons.
pub trait MultiPolygon {
    /// Polygon type.
    type Polygon: Polygon;

    /// Iterates over polygons.
    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon>;

    /// Total number of vertices in all polygons. Closing points are not counted.
    fn vertex_count(&self) -> usize {
        self.polygons().map(Polygon::vertex_count).sum()
    }
}
