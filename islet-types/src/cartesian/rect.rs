use num_traits::Num;
use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;

/// Axis aligned rectangle. Used as a bounding box of geometries.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    x_min: N,
    y_min: N,
    x_max: N,
    y_max: N,
}

impl<N: Num + Copy + PartialOrd> Rect<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Minimum x coordinate.
    pub fn x_min(&self) -> N {
        self.x_min
    }

    /// Maximum x coordinate.
    pub fn x_max(&self) -> N {
        self.x_max
    }

    /// Minimum y coordinate.
    pub fn y_min(&self) -> N {
        self.y_min
    }

    /// Maximum y coordinate.
    pub fn y_max(&self) -> N {
        self.y_max
    }

    /// Returns the smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: if self.x_min < other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            y_min: if self.y_min < other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            x_max: if self.x_max > other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_max: if self.y_max > other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        }
    }

    /// Bounding rectangle of the given points. Returns `None` if the iterator is empty.
    pub fn from_points<'a, P: CartesianPoint2d<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let mut x_min = first.x();
        let mut y_min = first.y();
        let mut x_max = first.x();
        let mut y_max = first.y();

        for p in points {
            if x_min > p.x() {
                x_min = p.x();
            }
            if y_min > p.y() {
                y_min = p.y();
            }
            if x_max < p.x() {
                x_max = p.x();
            }
            if y_max < p.y() {
                y_max = p.y();
            }
        }

        Some(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Smallest rectangle containing all the given rectangles. Returns `None` if the iterator is empty.
    pub fn merge_all(rects: impl IntoIterator<Item = Self>) -> Option<Self> {
        rects.into_iter().reduce(|acc, rect| acc.merge(rect))
    }

    /// Returns true if the rectangles have at least one common point. Touching borders count.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x_min <= other.x_max
            && other.x_min <= self.x_max
            && self.y_min <= other.y_max
            && other.y_min <= self.y_max
    }

    /// Common part of the two rectangles, or `None` if they do not intersect. Touching rectangles give a degenerate
    /// rectangle of zero width or height.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        Some(Self {
            x_min: if self.x_min > other.x_min { self.x_min } else { other.x_min },
            y_min: if self.y_min > other.y_min { self.y_min } else { other.y_min },
            x_max: if self.x_max < other.x_max { self.x_max } else { other.x_max },
            y_max: if self.y_max < other.y_max { self.y_max } else { other.y_max },
        })
    }

    /// Returns true if every coordinate of the rectangle is within the given bounds.
    pub fn is_within(&self, bounds: &Self) -> bool {
        self.x_min >= bounds.x_min
            && self.x_max <= bounds.x_max
            && self.y_min >= bounds.y_min
            && self.y_max <= bounds.y_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2;

    #[test]
    fn from_points() {
        let points = [
            Point2::new(1.0, 5.0),
            Point2::new(-1.0, 2.0),
            Point2::new(3.0, 0.0),
        ];
        assert_eq!(
            Rect::from_points(points.iter()),
            Some(Rect::new(-1.0, 0.0, 3.0, 5.0))
        );
        assert_eq!(Rect::<f64>::from_points(std::iter::empty::<&Point2>()), None);
    }

    #[test]
    fn intersects() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(a.intersects(&Rect::new(0.5, 0.5, 2.0, 2.0)));
        assert!(a.intersects(&Rect::new(1.0, 1.0, 2.0, 2.0)));
        assert!(!a.intersects(&Rect::new(1.5, 0.0, 2.0, 1.0)));
        assert!(!a.intersects(&Rect::new(0.0, 1.5, 1.0, 2.0)));
    }

    #[test]
    fn intersection() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert_eq!(
            a.intersection(&Rect::new(1.0, -1.0, 3.0, 1.5)),
            Some(Rect::new(1.0, 0.0, 2.0, 1.5))
        );
        assert_eq!(
            a.intersection(&Rect::new(2.0, 2.0, 3.0, 3.0)),
            Some(Rect::new(2.0, 2.0, 2.0, 2.0))
        );
        assert_eq!(a.intersection(&Rect::new(2.5, 0.0, 3.0, 1.0)), None);
    }

    #[test]
    fn merge_all() {
        let merged = Rect::merge_all([
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(-1.0, 0.5, 0.5, 3.0),
        ]);
        assert_eq!(merged, Some(Rect::new(-1.0, 0.0, 1.0, 3.0)));
        assert_eq!(Rect::<f64>::merge_all([]), None);
    }
}
