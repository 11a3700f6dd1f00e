//! Polygon trait: one outer contour and any number of holes.

use crate::contour::Contour;
use crate::segment::Segment;

/// Polygon geometry. Polygon consists of one outer contour, and zero or more inner contours.
///
/// Inner contours represent *holes* in a polygon. All holes are expected to lie within the outer contour.
pub trait Polygon {
    /// Contour type.
    type Contour: Contour;

    /// Outer contour of the polygon.
    fn outer_contour(&self) -> &Self::Contour;
    /// Iterates over inner contours.
    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour>;

    /// Iterates over all contours of the polygon starting with the outer one.
    fn iter_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        std::iter::once(self.outer_contour()).chain(self.inner_contours())
    }

    /// Iterates over all segments of the polygon contour lines.
    fn iter_segments(
        &self,
    ) -> impl Iterator<Item = Segment<'_, <Self::Contour as Contour>::Point>> {
        self.iter_contours().flat_map(Self::Contour::iter_segments)
    }

    /// Total number of vertices in all contours of the polygon. Closing points are not counted.
    fn vertex_count(&self) -> usize {
        self.iter_contours().map(Contour::vertex_count).sum()
    }
}
