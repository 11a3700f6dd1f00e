//! Trait based polygon geometries and the measurements needed to tell islands apart.
//!
//! Geometries are described by a small set of traits ([`Contour`], [`ClosedContour`], [`Polygon`],
//! [`MultiPolygon`]) so that algorithms can work with any point and container types. Simple owned
//! implementations of these traits are provided in the [`impls`] module. Those implementations
//! validate their input on construction and never repair it.
//!
//! Area of a ring is calculated either in a plane (see [`cartesian::CartesianClosedContour`]) or
//! on a sphere (see [`geo::GeoClosedContour`]). [`AreaCalculator`] chooses between the two
//! depending on the [`Geography`] of the data.

pub mod cartesian;
pub mod contour;
pub mod error;
pub mod geo;
pub mod geography;
pub mod impls;
pub mod multi_polygon;
pub mod polygon;
pub mod segment;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use contour::{ClosedContour, Contour};
pub use geography::{area, AreaCalculator, AreaIssue, Geography, PolygonArea};
pub use multi_polygon::MultiPolygon;
pub use polygon::Polygon;
