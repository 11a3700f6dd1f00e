use crate::cartesian::CartesianPoint2d;
use crate::contour::ClosedContour;
use crate::polygon::Polygon;

/// Polygon in 2d cartesian coordinates. This trait is auto-implemented for all eligible types.
pub trait CartesianPolygon {
    /// Type of the points of the polygon.
    type Point: CartesianPoint2d;

    /// Returns true if the `point` lies inside the polygon area.
    ///
    /// Points inside holes are outside the polygon. The even-odd rule is used, so the result does not depend on the
    /// winding of the contours. Result for points lying exactly on the polygon boundary is unspecified.
    fn contains_point<P>(&self, point: &P) -> bool
    where
        P: CartesianPoint2d<Num = <Self::Point as CartesianPoint2d>::Num>;
}

impl<P, C, T> CartesianPolygon for T
where
    P: CartesianPoint2d,
    C: ClosedContour<Point = P>,
    T: Polygon<Contour = C>,
{
    type Point = P;

    fn contains_point<Point: CartesianPoint2d<Num = P::Num>>(&self, point: &Point) -> bool {
        let x = point.x();
        let y = point.y();
        let mut is_inside = false;

        for segment in self.iter_segments() {
            let (a, b) = (segment.0, segment.1);
            if (a.y() > y) == (b.y() > y) {
                continue;
            }

            // x coordinate of the crossing of the segment with the horizontal line through the point
            let crossing_x = a.x() + (y - a.y()) * (b.x() - a.x()) / (b.y() - a.y());
            if x < crossing_x {
                is_inside = !is_inside;
            }
        }

        is_inside
    }
}
