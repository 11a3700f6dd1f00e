//! Conversion between spatial data representations and [`FeatureCollection`](crate::FeatureCollection).
//!
//! The adapter turns the caller's data into the geometry model, runs the [`IslandFilter`] and converts the result back
//! into the same representation the caller used. All decisions about the input format are made here, the filter does
//! not know where the data came from.
//!
//! ```
//! use islet::adapter::{filter_spatial, AdapterOptions, SpatialInput, SpatialOutput};
//! use islet::IslandFilter;
//!
//! let text = r#"{"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}"#;
//! let filter = IslandFilter::builder().with_min_area(1e12).with_drop_empty(true).build()?;
//! let output = filter_spatial(SpatialInput::RawText(text.into()), &filter, &AdapterOptions::default())?;
//! assert!(matches!(output, SpatialOutput::RawText(_)));
//! # Ok::<(), islet::error::IsletError>(())
//! ```

mod attributed;
mod json;

pub use attributed::{AttributedCollection, AttributedRow};
use geojson::GeoJson;
use islet_types::Geography;
use serde::{Deserialize, Serialize};

use crate::error::IsletError;
use crate::feature::FeatureCollection;
use crate::filter::IslandFilter;

/// Kind of spatial data accepted by [`filter_spatial`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// GeoJSON text.
    RawText,
    /// Parsed GeoJSON object.
    ParsedStructure,
    /// Generic JSON value with GeoJSON structure.
    ListStructure,
    /// `geo-types` geometries with attribute rows.
    AttributedCollection,
}

/// Spatial data to filter.
#[derive(Debug, Clone, PartialEq)]
pub enum SpatialInput {
    /// GeoJSON text.
    RawText(String),
    /// Parsed GeoJSON object.
    ParsedStructure(GeoJson),
    /// Generic JSON value with GeoJSON structure.
    ListStructure(serde_json::Value),
    /// `geo-types` geometries with attribute rows.
    AttributedCollection(AttributedCollection),
}

impl SpatialInput {
    /// Kind of the input.
    pub fn kind(&self) -> InputKind {
        match self {
            SpatialInput::RawText(_) => InputKind::RawText,
            SpatialInput::ParsedStructure(_) => InputKind::ParsedStructure,
            SpatialInput::ListStructure(_) => InputKind::ListStructure,
            SpatialInput::AttributedCollection(_) => InputKind::AttributedCollection,
        }
    }
}

/// Filtered spatial data in the representation of the input.
#[derive(Debug, Clone, PartialEq)]
pub enum SpatialOutput {
    /// GeoJSON text.
    RawText(String),
    /// Parsed GeoJSON object.
    ParsedStructure(GeoJson),
    /// Generic JSON value with GeoJSON structure.
    ListStructure(serde_json::Value),
    /// `geo-types` geometries with attribute rows.
    AttributedCollection(AttributedCollection),
    /// Geometries of an attributed collection without attribute fields. See
    /// [`AdapterOptions::force_feature_collection`].
    GeometryCollection(geo_types::GeometryCollection<f64>),
}

/// Options of the conversion done by [`filter_spatial`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterOptions {
    /// Kind of coordinates of the input. If not set, coordinates are considered geographic if all of them are in
    /// longitude and latitude ranges.
    pub geography: Option<Geography>,
    /// Overrides the empty feature policy of the filter. Attributed collections drop empty features unless this is
    /// set to `false`.
    pub drop_empty: Option<bool>,
    /// Return an attributed collection even if the input collection has no attribute fields. Otherwise such input is
    /// returned as a bare geometry collection.
    pub force_feature_collection: bool,
    /// Skip features with invalid geometry instead of failing the whole call.
    pub skip_invalid: bool,
    /// Close rings that have different first and last points.
    pub auto_close: bool,
}

impl AdapterOptions {
    fn geography_of(&self, collection: &FeatureCollection) -> Geography {
        self.geography
            .unwrap_or_else(|| Geography::detect(collection.bounding_rect()))
    }
}

/// Filters spatial data of any supported kind and returns the result in the same kind.
pub fn filter_spatial(
    input: SpatialInput,
    filter: &IslandFilter,
    options: &AdapterOptions,
) -> Result<SpatialOutput, IsletError> {
    match input {
        SpatialInput::RawText(text) => {
            let geojson: GeoJson = text.parse()?;
            let filtered = json::filter_geojson(geojson, filter, options)?;
            Ok(SpatialOutput::RawText(filtered.to_string()))
        }
        SpatialInput::ParsedStructure(geojson) => Ok(SpatialOutput::ParsedStructure(
            json::filter_geojson(geojson, filter, options)?,
        )),
        SpatialInput::ListStructure(value) => {
            let geojson: GeoJson = serde_json::from_value(value)?;
            let filtered = json::filter_geojson(geojson, filter, options)?;
            Ok(SpatialOutput::ListStructure(serde_json::to_value(&filtered)?))
        }
        SpatialInput::AttributedCollection(collection) => {
            attributed::filter_attributed(collection, filter, options)
        }
    }
}

/// Coordinates of the polygon parts of one geometry: parts, rings, points.
type PartCoords = Vec<Vec<Vec<[f64; 2]>>>;

fn close_rings(parts: &mut PartCoords) {
    for ring in parts.iter_mut().flatten() {
        if let (Some(&first), Some(last)) = (ring.first(), ring.last()) {
            if first != *last {
                ring.push(first);
            }
        }
    }
}
