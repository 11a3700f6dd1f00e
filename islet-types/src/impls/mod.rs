//! Simple owned implementations of the geometry traits.

mod multi_polygon;
mod polygon;
mod ring;

pub use multi_polygon::MultiPolygon;
pub use polygon::Polygon;
pub use ring::Ring;
