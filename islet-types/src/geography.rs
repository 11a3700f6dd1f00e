//! Area of rings and polygons in planar or geographic coordinates.

use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianClosedContour, CartesianPoint2d, Rect};
use crate::contour::ClosedContour;
use crate::geo::{GeoClosedContour, GeoPoint, EARTH_MEAN_RADIUS};
use crate::polygon::Polygon;

/// Kind of coordinates of a geometry collection. Determines which area formula is used.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Geography {
    /// Planar coordinates. Areas are in squared units of the coordinates.
    #[default]
    Projected,
    /// Longitude and latitude in degrees. Areas are in squared units of the sphere radius (square meters by default).
    Geographic,
}

impl Geography {
    /// Guesses the kind of coordinates by their bounding rectangle: if all coordinates fit into the longitude and
    /// latitude ranges, they are considered geographic.
    pub fn detect(bounds: Option<Rect>) -> Self {
        let lon_lat = Rect::new(-180.0, -90.0, 180.0, 90.0);
        match bounds {
            Some(bounds) if bounds.is_within(&lon_lat) => Self::Geographic,
            _ => Self::Projected,
        }
    }
}

/// Problem found while calculating polygon area. The polygon area is reported as zero in both cases.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum AreaIssue {
    /// Outer contour of the polygon has zero area.
    ZeroOuterArea,
    /// Total area of holes is larger than the area of the outer contour.
    HolesExceedOuter {
        /// Absolute area of the outer contour.
        outer: f64,
        /// Sum of absolute areas of the holes.
        holes: f64,
    },
}

/// Effective area of a polygon.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PolygonArea {
    /// Area of the outer contour minus areas of the holes. Never negative.
    pub area: f64,
    /// Set if the area was clamped or is zero because of malformed input.
    pub issue: Option<AreaIssue>,
}

/// Calculates areas of rings and polygons according to the [`Geography`] of the data.
///
/// ```
/// use islet_types::impls::Ring;
/// use islet_types::{AreaCalculator, Geography};
///
/// let ring = Ring::from_coords(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]]).unwrap();
/// assert_eq!(AreaCalculator::new(Geography::Projected).ring_area(&ring), 4.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AreaCalculator {
    geography: Geography,
    earth_radius: f64,
}

impl AreaCalculator {
    /// Creates a new calculator. Geographic areas use the mean Earth radius of 6371008.8 meters.
    pub fn new(geography: Geography) -> Self {
        Self {
            geography,
            earth_radius: EARTH_MEAN_RADIUS,
        }
    }

    /// Sets the sphere radius used for geographic areas.
    pub fn with_earth_radius(mut self, earth_radius: f64) -> Self {
        self.earth_radius = earth_radius;
        self
    }

    /// Geography of the data.
    pub fn geography(&self) -> Geography {
        self.geography
    }

    /// Sphere radius used for geographic areas.
    pub fn earth_radius(&self) -> f64 {
        self.earth_radius
    }

    /// Signed area of a ring: positive for counterclockwise rings, negative for clockwise ones.
    ///
    /// Rings with all points being the same or lying on one line have area of exactly zero.
    pub fn ring_area<C, P>(&self, ring: &C) -> f64
    where
        C: ClosedContour<Point = P>,
        P: CartesianPoint2d<Num = f64> + GeoPoint<Num = f64>,
    {
        if ring.is_degenerate() {
            return 0.0;
        }

        match self.geography {
            Geography::Projected => ring.area_signed(),
            Geography::Geographic => ring.spherical_area_signed(self.earth_radius),
        }
    }

    /// Effective area of a polygon: absolute area of the outer contour minus absolute areas of the holes.
    ///
    /// If the result would be negative, it is clamped to zero and the issue is reported in the returned value.
    pub fn polygon_area<Poly, C, P>(&self, polygon: &Poly) -> PolygonArea
    where
        Poly: Polygon<Contour = C>,
        C: ClosedContour<Point = P>,
        P: CartesianPoint2d<Num = f64> + GeoPoint<Num = f64>,
    {
        let outer = self.ring_area(polygon.outer_contour()).abs();
        let holes: f64 = polygon
            .inner_contours()
            .map(|hole| self.ring_area(hole).abs())
            .sum();

        if outer == 0.0 {
            PolygonArea {
                area: 0.0,
                issue: Some(AreaIssue::ZeroOuterArea),
            }
        } else if holes > outer {
            PolygonArea {
                area: 0.0,
                issue: Some(AreaIssue::HolesExceedOuter { outer, holes }),
            }
        } else {
            PolygonArea {
                area: outer - holes,
                issue: None,
            }
        }
    }
}

/// Signed area of a ring in the given geography with the default Earth radius.
///
/// Shortcut for [`AreaCalculator::ring_area`].
pub fn area<C, P>(ring: &C, geography: Geography) -> f64
where
    C: ClosedContour<Point = P>,
    P: CartesianPoint2d<Num = f64> + GeoPoint<Num = f64>,
{
    AreaCalculator::new(geography).ring_area(ring)
}
