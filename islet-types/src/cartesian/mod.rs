//! Types and functions on geometries in cartesian coordinates.

mod contour;
mod orient;
mod point;
mod polygon;
mod rect;

pub use contour::CartesianClosedContour;
pub use orient::Orientation;
pub use point::{CartesianPoint2d, Point2};
pub use polygon::CartesianPolygon;
pub use rect::Rect;
