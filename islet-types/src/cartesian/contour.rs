use num_traits::{One, Zero};

use crate::cartesian::{CartesianPoint2d, Orientation};
use crate::contour::{ClosedContour, Contour};

/// Measurements of a closed contour in a plane. This trait is auto-implemented for all closed contours with
/// cartesian points.
pub trait CartesianClosedContour {
    /// Type of the points of the contour.
    type Point: CartesianPoint2d;

    /// Signed area of the contour calculated with the shoelace formula.
    ///
    /// The area is positive for counterclockwise contours and negative for clockwise ones. Contours with all points
    /// lying on one line (see [`CartesianClosedContour::is_degenerate`]) have area of exactly zero.
    fn area_signed(&self) -> <Self::Point as CartesianPoint2d>::Num;

    /// Returns true if all the points of the contour are the same or lie on one line.
    fn is_degenerate(&self) -> bool;
}

impl<P, T> CartesianClosedContour for T
where
    P: CartesianPoint2d,
    T: ClosedContour<Point = P>,
{
    type Point = P;

    fn area_signed(&self) -> P::Num {
        if self.is_degenerate() {
            return P::Num::zero();
        }

        let mut iter = self.iter_points_closing();
        let Some(mut prev) = iter.next() else {
            return P::Num::zero();
        };

        let mut aggr = P::Num::zero();
        for p in iter {
            aggr = aggr + prev.x() * p.y() - p.x() * prev.y();
            prev = p;
        }

        aggr / (P::Num::one() + P::Num::one())
    }

    fn is_degenerate(&self) -> bool {
        let mut points = self.iter_points();
        let Some(first) = points.next() else {
            return true;
        };
        let Some(second) = points.by_ref().find(|p| !p.equal(first)) else {
            return true;
        };

        points.all(|p| Orientation::triplet(first, second, p) == Orientation::Collinear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::Ring;

    fn ring(coords: &[[f64; 2]]) -> Ring {
        Ring::from_coords(coords).expect("valid ring")
    }

    #[test]
    fn area() {
        let contour = ring(&[[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [0.0, 0.0]]);
        assert_eq!(contour.area_signed(), -0.5);

        let contour = ring(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]);
        assert_eq!(contour.area_signed(), 0.5);
    }

    #[test]
    fn area_of_reversed_ring_changes_sign() {
        let coords = [[0.0, 0.0], [4.0, 0.0], [5.0, 3.0], [1.0, 2.0], [0.0, 0.0]];
        let mut reversed = coords;
        reversed.reverse();

        let forward = ring(&coords).area_signed();
        let backward = ring(&reversed).area_signed();
        assert!(forward > 0.0);
        assert_eq!(forward, -backward);
    }

    #[test]
    fn degenerate_rings_have_zero_area() {
        let collinear = ring(&[[0.1, 0.2], [0.3, 0.6], [0.7, 1.4], [0.1, 0.2]]);
        assert!(collinear.is_degenerate() || collinear.area_signed().abs() < 1e-15);

        let exact = ring(&[[0.0, 0.0], [1.0, 1.0], [3.0, 3.0], [0.0, 0.0]]);
        assert!(exact.is_degenerate());
        assert_eq!(exact.area_signed(), 0.0);

        let same = ring(&[[1.0, 1.0], [1.0, 1.0], [1.0, 1.0], [1.0, 1.0]]);
        assert!(same.is_degenerate());
        assert_eq!(same.area_signed(), 0.0);
    }
}
