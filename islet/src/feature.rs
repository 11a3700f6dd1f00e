//! Features and feature collections the filter works on.

use std::sync::Arc;

use islet_types::cartesian::Rect;
use islet_types::impls::MultiPolygon;
use islet_types::{Contour, Geography, Polygon};
use serde::{Deserialize, Serialize};

use crate::attributes::{Attributes, Schema};

/// Identifier of a feature. It is carried through the filter unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    /// String identifier.
    String(String),
    /// Numeric identifier.
    Number(serde_json::Number),
}

/// A polygonal geometry with optional identifier and attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Identifier of the feature.
    pub id: Option<FeatureId>,
    /// Geometry of the feature. `None` is a null geometry, a multi-polygon without parts is an empty one.
    pub geometry: Option<MultiPolygon>,
    /// Attribute record.
    pub attributes: Option<Attributes>,
}

impl Feature {
    /// Creates a new feature without identifier and attributes.
    pub fn new(geometry: impl Into<MultiPolygon>) -> Self {
        Self {
            id: None,
            geometry: Some(geometry.into()),
            attributes: None,
        }
    }

    /// Creates a feature with null geometry.
    pub fn null() -> Self {
        Self::default()
    }

    /// Sets the identifier of the feature.
    pub fn with_id(mut self, id: FeatureId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the attribute record of the feature.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Whether the geometry is null, has no parts or has no vertices.
    pub fn is_empty(&self) -> bool {
        self.geometry
            .as_ref()
            .map_or(true, |geometry| total_vertices(geometry) == 0)
    }
}

fn total_vertices(geometry: &MultiPolygon) -> usize {
    geometry.parts().iter().map(Polygon::vertex_count).sum()
}

/// Ordered set of features sharing one attribute schema and one kind of coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Features in their original order.
    pub features: Vec<Feature>,
    /// Attribute schema. Shared with collections derived from this one.
    pub schema: Arc<Schema>,
    /// Kind of coordinates of all features.
    pub geography: Geography,
}

impl FeatureCollection {
    /// Creates a new collection.
    pub fn new(features: Vec<Feature>, schema: Arc<Schema>, geography: Geography) -> Self {
        Self {
            features,
            schema,
            geography,
        }
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the collection has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Bounding rectangle of all outer rings of all features. `None` if there are no vertices.
    pub fn bounding_rect(&self) -> Option<Rect> {
        Rect::merge_all(
            self.features
                .iter()
                .filter_map(|feature| feature.geometry.as_ref())
                .flat_map(|geometry| geometry.parts())
                .filter_map(|part| Rect::from_points(part.outer_contour.iter_points())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::square;

    #[test]
    fn empty_features() {
        let empty: MultiPolygon = MultiPolygon::default();
        assert!(Feature::null().is_empty());
        assert!(Feature::new(empty).is_empty());
        assert!(!Feature::new(square(0.0, 0.0, 1.0)).is_empty());
    }

    #[test]
    fn bounding_rect() {
        let collection = FeatureCollection::new(
            vec![
                Feature::new(square(0.0, 0.0, 1.0)),
                Feature::null(),
                Feature::new(square(5.0, -2.0, 2.0)),
            ],
            Arc::default(),
            Geography::Projected,
        );

        assert_eq!(
            collection.bounding_rect(),
            Some(Rect::new(0.0, -2.0, 7.0, 1.0))
        );
        assert_eq!(FeatureCollection::default().bounding_rect(), None);
    }
}
