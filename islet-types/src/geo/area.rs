use crate::contour::{ClosedContour, Contour};
use crate::geo::GeoPoint;

/// Measurements of a closed contour on the surface of a sphere. This trait is auto-implemented for all closed
/// contours with geographic points.
pub trait GeoClosedContour {
    /// Signed area of the contour on a sphere with the given `radius`, in squared units of the radius.
    ///
    /// Edges of the contour are treated as following lines of constant bearing between the vertices
    /// (Chamberlain-Duquette approximation), which makes the result exact for contours built of meridians and
    /// parallels. Counterclockwise contours have positive area, clockwise contours have negative area.
    fn spherical_area_signed(&self, radius: f64) -> f64;
}

impl<P, T> GeoClosedContour for T
where
    P: GeoPoint<Num = f64>,
    T: ClosedContour<Point = P>,
{
    fn spherical_area_signed(&self, radius: f64) -> f64 {
        let mut iter = self.iter_points_closing();
        let Some(mut prev) = iter.next() else {
            return 0.0;
        };

        let mut aggr = 0.0;
        for p in iter {
            aggr += (p.lon_rad() - prev.lon_rad()) * (2.0 + prev.lat_rad().sin() + p.lat_rad().sin());
            prev = p;
        }

        -aggr * radius * radius / 2.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geo::EARTH_MEAN_RADIUS;
    use crate::impls::Ring;

    fn lat_lon_box(lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) -> Ring {
        Ring::from_coords(&[
            [lon_min, lat_min],
            [lon_max, lat_min],
            [lon_max, lat_max],
            [lon_min, lat_max],
            [lon_min, lat_min],
        ])
        .expect("valid ring")
    }

    fn exact_box_area(lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) -> f64 {
        let r = EARTH_MEAN_RADIUS;
        r * r
            * (lon_max - lon_min).to_radians()
            * (lat_max.to_radians().sin() - lat_min.to_radians().sin())
    }

    #[test]
    fn one_degree_box_at_equator() {
        let ring = lat_lon_box(0.0, 0.0, 1.0, 1.0);
        let area = ring.spherical_area_signed(EARTH_MEAN_RADIUS);
        assert_relative_eq!(area, 1.2364e10, max_relative = 1e-3);
        assert_relative_eq!(area, exact_box_area(0.0, 0.0, 1.0, 1.0), max_relative = 1e-9);
    }

    #[test]
    fn box_far_from_equator() {
        let ring = lat_lon_box(10.0, 60.0, 20.0, 70.0);
        let area = ring.spherical_area_signed(EARTH_MEAN_RADIUS);
        assert_relative_eq!(area, exact_box_area(10.0, 60.0, 20.0, 70.0), max_relative = 1e-9);
    }

    #[test]
    fn clockwise_ring_is_negative() {
        let ring = Ring::from_coords(&[
            [0.0, 0.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [1.0, 0.0],
            [0.0, 0.0],
        ])
        .expect("valid ring");
        let area = ring.spherical_area_signed(EARTH_MEAN_RADIUS);
        assert_relative_eq!(area, -exact_box_area(0.0, 0.0, 1.0, 1.0), max_relative = 1e-9);
    }

    #[test]
    fn area_scales_with_radius() {
        let ring = lat_lon_box(0.0, 0.0, 1.0, 1.0);
        assert_relative_eq!(
            ring.spherical_area_signed(2.0),
            4.0 * ring.spherical_area_signed(1.0),
            max_relative = 1e-12
        );
    }
}
