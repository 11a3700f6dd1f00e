use num_traits::{Bounded, FromPrimitive, Num};
use serde::{Deserialize, Serialize};

/// A point in 2-dimensional cartesian coordinate space.
///
/// When the point is interpreted geographically, `x` is the longitude and `y` is the latitude, both in degrees.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: Num + Copy + PartialOrd + Bounded + FromPrimitive;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates of the points are exactly equal.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }
}

/// Simple 2d point.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point2<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num> Point2<Num> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }

    /// Returns coordinates of the point as an array of `Num`.
    pub fn coords(&self) -> [Num; 2]
    where
        Num: Copy,
    {
        [self.x, self.y]
    }
}

impl<N> CartesianPoint2d for Point2<N>
where
    N: Num + Copy + PartialOrd + Bounded + FromPrimitive,
{
    type Num = N;

    fn x(&self) -> N {
        self.x
    }

    fn y(&self) -> N {
        self.y
    }
}

impl<N: Copy> From<[N; 2]> for Point2<N> {
    fn from([x, y]: [N; 2]) -> Self {
        Self { x, y }
    }
}
