//! Grouping of polygon parts into islands.
//!
//! Two parts of a multi-polygon belong to the same island if their contours share at least one point, or if one
//! part overlaps the area of the other. Parts are first sorted by their bounding rectangles along the axis in which
//! the geometry is longer, and the exact tests are run only for the pairs with intersecting rectangles. Inside such a
//! pair only the segments crossing the common part of the two rectangles are compared.

use islet_types::cartesian::{CartesianPoint2d, CartesianPolygon, Rect};
use islet_types::segment::Segment;
use islet_types::{ClosedContour, Contour, MultiPolygon, Polygon};

/// A maximal set of parts of one geometry connected to each other by touching or overlapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IslandComponent {
    parts: Vec<usize>,
}

impl IslandComponent {
    /// Indices of the parts in the geometry, in increasing order.
    pub fn parts(&self) -> &[usize] {
        &self.parts
    }
}

/// Splits parts of the geometry into islands.
///
/// Components are returned ordered by their first part. Every part belongs to exactly one component.
pub fn group<M, Poly, C, P>(geometry: &M) -> Vec<IslandComponent>
where
    M: MultiPolygon<Polygon = Poly>,
    Poly: Polygon<Contour = C>,
    C: ClosedContour<Point = P>,
    P: CartesianPoint2d<Num = f64>,
{
    let parts: Vec<&Poly> = geometry.polygons().collect();

    let mut bounds: Vec<(usize, Rect)> = parts
        .iter()
        .enumerate()
        .filter_map(|(index, part)| {
            Rect::from_points(part.outer_contour().iter_points()).map(|rect| (index, rect))
        })
        .collect();
    let axis = Axis::longest(bounds.iter().map(|(_, rect)| *rect));
    bounds.sort_by(|a, b| axis.min(&a.1).total_cmp(&axis.min(&b.1)));

    let mut forest = DisjointSet::new(parts.len());
    for (position, (a, a_rect)) in bounds.iter().enumerate() {
        for (b, b_rect) in &bounds[position + 1..] {
            if axis.min(b_rect) > axis.max(a_rect) {
                break;
            }

            let Some(window) = a_rect.intersection(b_rect) else {
                continue;
            };

            if forest.find(*a) == forest.find(*b) {
                continue;
            }

            if touches(parts[*a], parts[*b], &window) {
                forest.union(*a, *b);
            }
        }
    }

    forest.components()
}

/// Sweep direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    /// Axis along which the rectangles spread the most.
    fn longest(rects: impl IntoIterator<Item = Rect>) -> Self {
        match Rect::merge_all(rects) {
            Some(rect) if rect.y_max() - rect.y_min() > rect.x_max() - rect.x_min() => Axis::Y,
            _ => Axis::X,
        }
    }

    fn min(self, rect: &Rect) -> f64 {
        match self {
            Axis::X => rect.x_min(),
            Axis::Y => rect.y_min(),
        }
    }

    fn max(self, rect: &Rect) -> f64 {
        match self {
            Axis::X => rect.x_max(),
            Axis::Y => rect.y_max(),
        }
    }
}

/// Whether the two polygons have at least one common point.
///
/// `window` is the intersection of the bounding rectangles of the polygons. Common points of the contours can only
/// lie inside it.
fn touches<Poly, C, P>(a: &Poly, b: &Poly, window: &Rect) -> bool
where
    Poly: Polygon<Contour = C>,
    C: ClosedContour<Point = P>,
    P: CartesianPoint2d<Num = f64>,
{
    let b_segments: Vec<Segment<P>> = b
        .iter_segments()
        .filter(|segment| crosses(segment, window))
        .collect();
    if !b_segments.is_empty() {
        for a_segment in a.iter_segments().filter(|segment| crosses(segment, window)) {
            if b_segments
                .iter()
                .any(|b_segment| a_segment.intersects(b_segment))
            {
                return true;
            }
        }
    }

    // Boundaries do not cross, so one vertex of an outer contour tells where the whole contour is.
    a.outer_contour()
        .iter_points()
        .next()
        .is_some_and(|point| b.contains_point(point))
        || b.outer_contour()
            .iter_points()
            .next()
            .is_some_and(|point| a.contains_point(point))
}

fn crosses<P: CartesianPoint2d<Num = f64>>(segment: &Segment<P>, window: &Rect) -> bool {
    Rect::from_points([segment.0, segment.1].into_iter()).is_some_and(|rect| rect.intersects(window))
}

/// Disjoint-set forest over part indices. The root of every set is its smallest index.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = index;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let a = self.find(a);
        let b = self.find(b);
        if a < b {
            self.parent[b] = a;
        } else if b < a {
            self.parent[a] = b;
        }
    }

    fn components(mut self) -> Vec<IslandComponent> {
        let mut slots: Vec<Option<usize>> = vec![None; self.parent.len()];
        let mut components: Vec<IslandComponent> = vec![];

        for index in 0..self.parent.len() {
            let root = self.find(index);
            match slots[root] {
                Some(slot) => components[slot].parts.push(index),
                None => {
                    slots[root] = Some(components.len());
                    components.push(IslandComponent { parts: vec![index] });
                }
            }
        }

        components
    }
}
