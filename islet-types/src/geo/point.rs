use num_traits::Float;

use crate::cartesian::Point2;

/// A point on the surface of a celestial body, given by its latitude and longitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }
}

/// Geographic interpretation of a point with `x` being the longitude and `y` the latitude.
impl<N: Float> GeoPoint for Point2<N> {
    type Num = N;

    fn lat(&self) -> N {
        self.coords()[1]
    }

    fn lon(&self) -> N {
        self.coords()[0]
    }
}
