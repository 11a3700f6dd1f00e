/// Mean radius of the Earth in meters as defined by IUGG, `(2a + b) / 3` of the WGS84 ellipsoid.
pub const EARTH_MEAN_RADIUS: f64 = 6_371_008.8;
