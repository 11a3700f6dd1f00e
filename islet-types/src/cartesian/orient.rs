use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points.
    ///
    /// The predicate is exact for the input values: no tolerance is applied. Incomparable values (NaN) are
    /// reported as collinear.
    pub fn triplet<Num: num_traits::Num + PartialOrd>(
        p: &impl CartesianPoint2d<Num = Num>,
        q: &impl CartesianPoint2d<Num = Num>,
        r: &impl CartesianPoint2d<Num = Num>,
    ) -> Self {
        let v = (q.y() - p.y()) * (r.x() - q.x()) - (q.x() - p.x()) * (r.y() - q.y());
        match v.partial_cmp(&Num::zero()) {
            Some(Ordering::Greater) => Self::Clockwise,
            Some(Ordering::Less) => Self::Counterclockwise,
            _ => Self::Collinear,
        }
    }
}
