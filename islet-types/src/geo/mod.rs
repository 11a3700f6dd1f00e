//! Geometries in geographic coordinates (latitude and longitude) and their measurement on the surface of a sphere.

mod area;
mod datum;
mod point;

pub use area::GeoClosedContour;
pub use datum::EARTH_MEAN_RADIUS;
pub use point::GeoPoint;
