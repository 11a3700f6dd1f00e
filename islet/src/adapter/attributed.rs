//! `geo-types` geometries with attribute rows.

use std::sync::Arc;

use geo_types::GeometryCollection;
use islet_types::impls::MultiPolygon;
use log::warn;

use super::{AdapterOptions, SpatialOutput};
use crate::attributes::{AttributeValue, Attributes, Schema};
use crate::error::IsletError;
use crate::feature::{Feature, FeatureCollection};
use crate::filter::IslandFilter;

/// Table of `geo-types` multi-polygons with attribute values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributedCollection {
    /// Attribute fields. Every row has one value per field.
    pub schema: Arc<Schema>,
    /// Rows of the table.
    pub rows: Vec<AttributedRow>,
}

/// A row of an [`AttributedCollection`].
#[derive(Debug, Clone, PartialEq)]
pub struct AttributedRow {
    /// Geometry of the row. `None` is a null geometry.
    pub geometry: Option<geo_types::MultiPolygon<f64>>,
    /// Values in the order of the schema fields.
    pub values: Vec<AttributeValue>,
}

impl AttributedRow {
    /// Creates a new row.
    pub fn new(geometry: geo_types::MultiPolygon<f64>, values: Vec<AttributeValue>) -> Self {
        Self {
            geometry: Some(geometry),
            values,
        }
    }
}

pub(super) fn filter_attributed(
    input: AttributedCollection,
    filter: &IslandFilter,
    options: &AdapterOptions,
) -> Result<SpatialOutput, IsletError> {
    let collection = decode(input, options)?;
    let filter = filter.with_drop_empty(options.drop_empty.unwrap_or(true));
    let output = filter.apply(&collection);

    if output.collection.schema.is_empty() && !options.force_feature_collection {
        return Ok(SpatialOutput::GeometryCollection(GeometryCollection(
            output
                .collection
                .features
                .iter()
                .filter_map(|feature| feature.geometry.as_ref())
                .map(|geometry| geo_types::Geometry::MultiPolygon(geometry.into()))
                .collect(),
        )));
    }

    Ok(SpatialOutput::AttributedCollection(encode(
        output.collection,
    )))
}

fn decode(
    input: AttributedCollection,
    options: &AdapterOptions,
) -> Result<FeatureCollection, IsletError> {
    let mut features = Vec::with_capacity(input.rows.len());
    for (index, row) in input.rows.into_iter().enumerate() {
        if row.values.len() != input.schema.len() {
            return Err(IsletError::Decoding(format!(
                "row {index} has {} values, but the schema has {} fields",
                row.values.len(),
                input.schema.len()
            )));
        }

        let geometry: Option<MultiPolygon> =
            match row.geometry.as_ref().map(MultiPolygon::try_from).transpose() {
                Ok(geometry) => geometry,
                Err(err) if options.skip_invalid => {
                    warn!("Skipping row {index} with invalid geometry: {err}");
                    continue;
                }
                Err(err) => return Err(IsletError::from(err).in_feature(index)),
            };

        let attributes: Attributes = input
            .schema
            .fields()
            .iter()
            .cloned()
            .zip(row.values)
            .collect();

        features.push(Feature {
            id: None,
            geometry,
            attributes: Some(attributes),
        });
    }

    let mut collection = FeatureCollection::new(features, input.schema, Default::default());
    collection.geography = options.geography_of(&collection);

    Ok(collection)
}

fn encode(collection: FeatureCollection) -> AttributedCollection {
    let rows = collection
        .features
        .into_iter()
        .map(|feature| {
            let mut attributes = feature.attributes.unwrap_or_default();
            AttributedRow {
                geometry: feature.geometry.as_ref().map(Into::into),
                values: collection
                    .schema
                    .fields()
                    .iter()
                    .map(|field| attributes.remove(field).unwrap_or(AttributeValue::Null))
                    .collect(),
            }
        })
        .collect();

    AttributedCollection {
        schema: collection.schema,
        rows,
    }
}
