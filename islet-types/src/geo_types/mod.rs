//! Conversions between the geometry model and [`geo_types`] geometries.
//!
//! `geo_types` polygons close their rings on construction, so only the number of points and finiteness of the
//! coordinates are checked when converting them into the model.

use geo_types::LineString;

use crate::error::GeometryError;
use crate::impls::{MultiPolygon, Polygon, Ring};

fn ring_from_line_string(line_string: &LineString<f64>) -> Result<Ring, GeometryError> {
    let coords: Vec<[f64; 2]> = line_string.coords().map(|c| [c.x, c.y]).collect();
    Ring::from_coords(&coords)
}

fn ring_to_line_string(ring: &Ring) -> LineString<f64> {
    LineString::from(ring.to_coords())
}

impl TryFrom<&geo_types::Polygon<f64>> for Polygon {
    type Error = GeometryError;

    fn try_from(polygon: &geo_types::Polygon<f64>) -> Result<Self, Self::Error> {
        Ok(Polygon::new(
            ring_from_line_string(polygon.exterior())?,
            polygon
                .interiors()
                .iter()
                .map(ring_from_line_string)
                .collect::<Result<_, _>>()?,
        ))
    }
}

impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(polygon: &Polygon) -> Self {
        geo_types::Polygon::new(
            ring_to_line_string(&polygon.outer_contour),
            polygon
                .inner_contours
                .iter()
                .map(ring_to_line_string)
                .collect(),
        )
    }
}

impl TryFrom<&geo_types::MultiPolygon<f64>> for MultiPolygon {
    type Error = GeometryError;

    fn try_from(multi_polygon: &geo_types::MultiPolygon<f64>) -> Result<Self, Self::Error> {
        Ok(MultiPolygon::from(
            multi_polygon
                .0
                .iter()
                .map(Polygon::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        ))
    }
}

impl From<&MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(multi_polygon: &MultiPolygon) -> Self {
        geo_types::MultiPolygon(
            multi_polygon
                .parts()
                .iter()
                .map(geo_types::Polygon::from)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geo_types::{polygon, MultiPolygon as GeoMultiPolygon};

    use super::*;

    #[test]
    fn polygon_round_trip() {
        let source = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 1.0, y: 2.0), (x: 2.0, y: 2.0)]]
        );

        let polygon = Polygon::try_from(&source).expect("valid polygon");
        assert_eq!(polygon.outer_contour.points().len(), 4);
        assert_eq!(polygon.inner_contours.len(), 1);
        assert_eq!(geo_types::Polygon::from(&polygon), source);
    }

    #[test]
    fn empty_exterior_is_rejected() {
        let source = GeoMultiPolygon(vec![geo_types::Polygon::new(
            LineString::new(vec![]),
            vec![],
        )]);
        assert_matches!(
            MultiPolygon::try_from(&source),
            Err(GeometryError::TooFewPoints(0))
        );
    }
}
