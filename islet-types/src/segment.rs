//! Line segments of contours and their intersection test.

use crate::cartesian::{CartesianPoint2d, Orientation};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P: CartesianPoint2d> Segment<'_, P> {
    /// Returns true, if the segment has at least one common point with the `other` segment.
    ///
    /// Touching at an endpoint and overlapping collinear segments both count as intersection.
    pub fn intersects<Point: CartesianPoint2d<Num = P::Num>>(
        &self,
        other: &Segment<Point>,
    ) -> bool {
        let o1 = Orientation::triplet(self.0, self.1, other.0);
        let o2 = Orientation::triplet(self.0, self.1, other.1);
        let o3 = Orientation::triplet(other.0, other.1, self.0);
        let o4 = Orientation::triplet(other.0, other.1, self.1);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        (o1 == Orientation::Collinear && in_box(self.0, self.1, other.0))
            || (o2 == Orientation::Collinear && in_box(self.0, self.1, other.1))
            || (o3 == Orientation::Collinear && in_box(other.0, other.1, self.0))
            || (o4 == Orientation::Collinear && in_box(other.0, other.1, self.1))
    }
}

/// Whether `q` lies inside the bounding box of the `p`-`r` segment.
fn in_box<Num: num_traits::Num + PartialOrd + Copy>(
    p: &impl CartesianPoint2d<Num = Num>,
    r: &impl CartesianPoint2d<Num = Num>,
    q: &impl CartesianPoint2d<Num = Num>,
) -> bool {
    let (x_min, x_max) = if p.x() <= r.x() {
        (p.x(), r.x())
    } else {
        (r.x(), p.x())
    };
    let (y_min, y_max) = if p.y() <= r.y() {
        (p.y(), r.y())
    } else {
        (r.y(), p.y())
    };

    q.x() >= x_min && q.x() <= x_max && q.y() >= y_min && q.y() <= y_max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2;

    fn intersects(a: [[f64; 2]; 2], b: [[f64; 2]; 2]) -> bool {
        let a = [Point2::new(a[0][0], a[0][1]), Point2::new(a[1][0], a[1][1])];
        let b = [Point2::new(b[0][0], b[0][1]), Point2::new(b[1][0], b[1][1])];
        Segment(&a[0], &a[1]).intersects(&Segment(&b[0], &b[1]))
    }

    #[test]
    fn crossing_segments() {
        assert!(intersects([[0.0, 0.0], [2.0, 2.0]], [[0.0, 2.0], [2.0, 0.0]]));
    }

    #[test]
    fn disjoint_segments() {
        assert!(!intersects([[0.0, 0.0], [1.0, 1.0]], [[2.0, 0.0], [3.0, 1.0]]));
        assert!(!intersects([[0.0, 0.0], [1.0, 0.0]], [[0.0, 1.0], [1.0, 1.0]]));
    }

    #[test]
    fn shared_vertex() {
        assert!(intersects([[0.0, 0.0], [1.0, 0.0]], [[1.0, 0.0], [1.0, 1.0]]));
    }

    #[test]
    fn collinear_overlap() {
        assert!(intersects([[0.0, 0.0], [2.0, 0.0]], [[1.0, 0.0], [3.0, 0.0]]));
        assert!(!intersects([[0.0, 0.0], [1.0, 0.0]], [[2.0, 0.0], [3.0, 0.0]]));
    }

    #[test]
    fn collinear_vertical_overlap() {
        assert!(intersects([[0.0, 0.0], [0.0, 2.0]], [[0.0, 1.0], [0.0, 3.0]]));
        assert!(!intersects([[0.0, 0.0], [0.0, 1.0]], [[0.0, 2.0], [0.0, 3.0]]));
    }
}
