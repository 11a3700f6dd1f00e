//! Contour is a sequence of points.
//!
//! Contours can be:
//! * **open** - meaning that the first and the last points of the contour are not connected.
//! * **closed** - when the first and the last points of the contour are connected. Rings of a
//!   polygon are closed contours.
//!
//! Both open and closed contours are represented by the [`Contour`] trait, but there is also a separate
//! [`ClosedContour`] trait for situations when only closed contour makes sense. For example, a
//! [`Polygon`](super::Polygon) can consist only of closed contours. All closed contours also implement the `Contour`
//! trait automatically.
//!
//! # Contour vs ring
//!
//! In GeoJSON and the OGC Simple Feature Access standard a ring is considered to be closed when the first and the
//! last points in the sequence are exactly same. `Contour` does not have that requirement. Even more, it should not
//! duplicate the first and the last points. `Contour` trait deals with the last segment of closed contours with
//! [`Contour::iter_points_closing`] and [`Contour::iter_segments`] methods instead.

use crate::segment::Segment;

/// Sequence of points. See module level documentation for details.
pub trait Contour {
    /// Type of the points the contour is consisted of.
    type Point;

    /// Whether the contour is closed.
    ///
    /// A closed contour has a segment connecting the last and the first points.
    fn is_closed(&self) -> bool;

    /// Iterate over the points of the contour.
    ///
    /// Note, that the last point shall not be the same as the first one even for the closed contours. If you want to
    /// include the first point at the end of iterator for closed contours, use [`Contour::iter_points_closing`]
    /// instead.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Same as [`Contour::iter_points`] but for closed contours repeats the first point again at the end of the iterator.
    fn iter_points_closing(&self) -> impl Iterator<Item = &'_ Self::Point> {
        ContourPointsIterator::new(self.iter_points(), self.is_closed())
    }

    /// Iterates over segments of the contour. For closed contours this includes the segment between the last and the
    /// first points of the contour.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        ContourSegmentIterator::new(ContourPointsIterator::new(
            self.iter_points(),
            self.is_closed(),
        ))
    }

    /// Number of vertices of the contour. Closing point of a closed contour is not counted.
    fn vertex_count(&self) -> usize {
        self.iter_points().count()
    }
}

/// A closed contour. See module documentation for details.
pub trait ClosedContour {
    /// Type of the points the contour is consisted of.
    type Point;

    /// Iterate over the vertices of the contour.
    ///
    /// The first vertex is not repeated at the end.
    fn iter_vertices(&self) -> impl Iterator<Item = &'_ Self::Point>;
}

impl<P, T: ClosedContour<Point = P>> Contour for T {
    type Point = P;

    fn is_closed(&self) -> bool {
        true
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        self.iter_vertices()
    }
}

/// Iterator of contour points.
#[derive(Debug, Clone)]
pub struct ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: Iter,
    is_closed: bool,
    first_point: Option<&'a P>,
}

impl<'a, P: 'a, Iter> ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: Iter, is_closed: bool) -> Self {
        Self {
            points_iter,
            is_closed,
            first_point: None,
        }
    }
}

impl<'a, P, Iter> Iterator for ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.points_iter.next();
        if self.is_closed && self.first_point.is_none() {
            self.first_point = next;
        }

        if next.is_none() {
            self.first_point.take()
        } else {
            next
        }
    }
}

/// Iterator of contour segments.
#[derive(Debug, Clone)]
pub struct ContourSegmentIterator<'a, P: 'a, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: ContourPointsIterator<'a, P, Iter>,
    prev_point: Option<&'a P>,
}

impl<'a, P, Iter> ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: ContourPointsIterator<'a, P, Iter>) -> Self {
        Self {
            points_iter,
            prev_point: None,
        }
    }
}

impl<'a, P, Iter> Iterator for ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = Segment<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next_point = self.points_iter.next()?;
            if let Some(prev) = self.prev_point.replace(next_point) {
                return Some(Segment(prev, next_point));
            }
        }
    }
}
