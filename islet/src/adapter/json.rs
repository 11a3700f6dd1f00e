//! GeoJSON input.

use std::sync::Arc;

use geojson::feature::Id;
use geojson::{GeoJson, Geometry, JsonObject, PolygonType, Value};
use islet_types::impls::MultiPolygon;
use log::warn;

use super::{close_rings, AdapterOptions, PartCoords};
use crate::attributes::{AttributeValue, Attributes, Schema};
use crate::error::IsletError;
use crate::feature::{Feature, FeatureCollection, FeatureId};
use crate::filter::{FilterOutput, IslandFilter};

/// Top level object of the input. The output is given the same shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Shape {
    Geometry,
    GeometryCollection,
    Feature,
    FeatureCollection,
}

/// Type of an input geometry. A polygon is written back as a polygon, even though it is a one-part multi-polygon in
/// the model.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum GeometryKind {
    Polygon,
    MultiPolygon,
}

struct Decoded {
    collection: FeatureCollection,
    kinds: Vec<GeometryKind>,
    shape: Shape,
}

pub(super) fn filter_geojson(
    geojson: GeoJson,
    filter: &IslandFilter,
    options: &AdapterOptions,
) -> Result<GeoJson, IsletError> {
    let decoded = decode(geojson, options)?;
    let filter = match options.drop_empty {
        Some(drop_empty) => filter.with_drop_empty(drop_empty),
        None => *filter,
    };

    let output = filter.apply(&decoded.collection);
    Ok(encode(output, &decoded))
}

fn decode(geojson: GeoJson, options: &AdapterOptions) -> Result<Decoded, IsletError> {
    let (shape, input): (Shape, Vec<geojson::Feature>) = match geojson {
        GeoJson::Geometry(geometry) => match geometry.value {
            Value::GeometryCollection(members) => (
                Shape::GeometryCollection,
                members.into_iter().map(geometry_feature).collect(),
            ),
            value => (Shape::Geometry, vec![geometry_feature(Geometry::new(value))]),
        },
        GeoJson::Feature(feature) => (Shape::Feature, vec![feature]),
        GeoJson::FeatureCollection(collection) => (Shape::FeatureCollection, collection.features),
    };

    let mut schema = Schema::default();
    let mut features = Vec::with_capacity(input.len());
    let mut kinds = Vec::with_capacity(input.len());

    for (index, feature) in input.into_iter().enumerate() {
        let (geometry, kind) = match &feature.geometry {
            None => (None, GeometryKind::MultiPolygon),
            Some(geometry) => {
                let (mut parts, kind) = part_coords(&geometry.value, index)?;
                if options.auto_close {
                    close_rings(&mut parts);
                }

                match MultiPolygon::from_coords(&parts) {
                    Ok(geometry) => (Some(geometry), kind),
                    Err(err) if options.skip_invalid => {
                        warn!("Skipping feature {index} with invalid geometry: {err}");
                        continue;
                    }
                    Err(err) => return Err(IsletError::from(err).in_feature(index)),
                }
            }
        };

        let attributes = feature
            .properties
            .map(|properties| decode_properties(properties, index, &mut schema))
            .transpose()?;

        features.push(Feature {
            id: feature.id.map(decode_id),
            geometry,
            attributes,
        });
        kinds.push(kind);
    }

    let mut collection = FeatureCollection::new(features, Arc::new(schema), Default::default());
    collection.geography = options.geography_of(&collection);

    Ok(Decoded {
        collection,
        kinds,
        shape,
    })
}

fn geometry_feature(geometry: Geometry) -> geojson::Feature {
    geojson::Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: None,
        foreign_members: None,
    }
}

fn part_coords(value: &Value, index: usize) -> Result<(PartCoords, GeometryKind), IsletError> {
    match value {
        // Polygons without rings are empty, both standalone and as multi-polygon members.
        Value::Polygon(rings) if rings.is_empty() => Ok((vec![], GeometryKind::Polygon)),
        Value::Polygon(rings) => Ok((vec![ring_coords(rings)?], GeometryKind::Polygon)),
        Value::MultiPolygon(polygons) => Ok((
            polygons
                .iter()
                .filter(|rings| !rings.is_empty())
                .map(ring_coords)
                .collect::<Result<_, _>>()?,
            GeometryKind::MultiPolygon,
        )),
        other => Err(IsletError::Decoding(format!(
            "feature {index} has geometry of type {}, only polygons are supported",
            type_name(other)
        ))),
    }
}

fn ring_coords(rings: &PolygonType) -> Result<Vec<Vec<[f64; 2]>>, IsletError> {
    rings
        .iter()
        .map(|ring| ring.iter().map(|position| decode_position(position)).collect())
        .collect()
}

fn decode_position(position: &[f64]) -> Result<[f64; 2], IsletError> {
    match position {
        [x, y, ..] => Ok([*x, *y]),
        _ => Err(IsletError::Decoding(format!(
            "position must have at least 2 coordinates, got {}",
            position.len()
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn decode_properties(
    properties: JsonObject,
    index: usize,
    schema: &mut Schema,
) -> Result<Attributes, IsletError> {
    properties
        .into_iter()
        .map(|(name, value)| {
            let value = AttributeValue::from_json(&value).ok_or_else(|| {
                IsletError::Decoding(format!(
                    "property '{name}' of feature {index} is not a scalar value"
                ))
            })?;
            schema.push(name.clone());
            Ok((name, value))
        })
        .collect()
}

fn decode_id(id: Id) -> FeatureId {
    match id {
        Id::String(id) => FeatureId::String(id),
        Id::Number(id) => FeatureId::Number(id),
    }
}

fn encode_id(id: FeatureId) -> Id {
    match id {
        FeatureId::String(id) => Id::String(id),
        FeatureId::Number(id) => Id::Number(id),
    }
}

fn encode(output: FilterOutput, decoded: &Decoded) -> GeoJson {
    let features: Vec<geojson::Feature> = output
        .collection
        .features
        .into_iter()
        .zip(output.retained.iter().map(|&index| decoded.kinds[index]))
        .map(|(feature, kind)| encode_feature(feature, kind, &output.collection.schema))
        .collect();

    match decoded.shape {
        Shape::FeatureCollection => feature_collection(features),
        Shape::Feature => match <[_; 1]>::try_from(features) {
            Ok([feature]) => GeoJson::Feature(feature),
            Err(features) => feature_collection(features),
        },
        Shape::Geometry => match features.into_iter().next().and_then(|f| f.geometry) {
            Some(geometry) => GeoJson::Geometry(geometry),
            None => GeoJson::Geometry(Geometry::new(Value::GeometryCollection(vec![]))),
        },
        Shape::GeometryCollection => GeoJson::Geometry(Geometry::new(Value::GeometryCollection(
            features.into_iter().filter_map(|f| f.geometry).collect(),
        ))),
    }
}

fn feature_collection(features: Vec<geojson::Feature>) -> GeoJson {
    GeoJson::FeatureCollection(geojson::FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

fn encode_feature(feature: Feature, kind: GeometryKind, schema: &Schema) -> geojson::Feature {
    geojson::Feature {
        bbox: None,
        geometry: feature
            .geometry
            .map(|geometry| encode_geometry(&geometry, kind)),
        id: feature.id.map(encode_id),
        properties: feature.attributes.map(|mut attributes| {
            schema
                .fields()
                .iter()
                .filter_map(|name| attributes.remove_entry(name))
                .map(|(name, value)| (name, value.to_json()))
                .collect()
        }),
        foreign_members: None,
    }
}

fn encode_geometry(geometry: &MultiPolygon, kind: GeometryKind) -> Geometry {
    let mut polygons: Vec<PolygonType> = geometry
        .to_coords()
        .into_iter()
        .map(|rings| {
            rings
                .into_iter()
                .map(|ring| ring.into_iter().map(|[x, y]| vec![x, y]).collect())
                .collect()
        })
        .collect();

    let value = match kind {
        GeometryKind::Polygon if polygons.len() <= 1 => {
            Value::Polygon(polygons.pop().unwrap_or_default())
        }
        _ => Value::MultiPolygon(polygons),
    };

    Geometry::new(value)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use insta::assert_compact_debug_snapshot;
    use serde_json::json;

    use super::*;
    use crate::adapter::{filter_spatial, SpatialInput, SpatialOutput};

    fn filter(min_area: f64) -> IslandFilter {
        IslandFilter::builder()
            .with_min_area(min_area)
            .build()
            .expect("valid filter")
    }

    fn run(value: serde_json::Value, filter: &IslandFilter, options: &AdapterOptions) -> serde_json::Value {
        match filter_spatial(SpatialInput::ListStructure(value), filter, options) {
            Ok(SpatialOutput::ListStructure(value)) => value,
            other => panic!("unexpected output: {other:?}"),
        }
    }

    fn square(x: f64, y: f64, size: f64) -> serde_json::Value {
        json!([[[x, y], [x + size, y], [x + size, y + size], [x, y + size], [x, y]]])
    }

    fn projected() -> AdapterOptions {
        AdapterOptions {
            geography: Some(islet_types::Geography::Projected),
            ..Default::default()
        }
    }

    fn islands() -> serde_json::Value {
        json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "id": "a",
                    "geometry": {"type": "MultiPolygon", "coordinates": [square(0.0, 0.0, 1.0), square(5.0, 5.0, 3.0)]},
                    "properties": {"name": "first", "rank": 1}
                },
                {
                    "type": "Feature",
                    "id": 2,
                    "geometry": {"type": "Polygon", "coordinates": square(20.0, 0.0, 1.0)},
                    "properties": {"name": "second", "valid": true}
                },
                {
                    "type": "Feature",
                    "geometry": null,
                    "properties": {"name": "nothing"}
                }
            ]
        })
    }

    #[test]
    fn feature_collection_keeps_shape_and_properties() {
        let output = run(islands(), &filter(2.0), &projected());
        assert_eq!(
            output,
            json!({
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "id": "a",
                        "geometry": {"type": "MultiPolygon", "coordinates": [square(5.0, 5.0, 3.0)]},
                        "properties": {"name": "first", "rank": 1}
                    },
                    {
                        "type": "Feature",
                        "id": 2,
                        "geometry": {"type": "Polygon", "coordinates": []},
                        "properties": {"name": "second", "valid": true}
                    },
                    {
                        "type": "Feature",
                        "geometry": null,
                        "properties": {"name": "nothing"}
                    }
                ]
            })
        );
    }

    #[test]
    fn drop_empty_override() {
        let options = AdapterOptions {
            drop_empty: Some(true),
            ..projected()
        };
        let output = run(islands(), &filter(2.0), &options);
        assert_eq!(output["features"].as_array().map(Vec::len), Some(1));
        assert_eq!(output["features"][0]["id"], json!("a"));
    }

    #[test]
    fn no_thresholds_returns_same_data() {
        let output = run(islands(), &IslandFilter::default(), &projected());
        assert_eq!(output, islands());
    }

    #[test]
    fn schema_is_union_of_properties() {
        let geojson: GeoJson = serde_json::from_value(islands()).expect("valid geojson");
        let decoded = decode(geojson, &projected()).expect("valid input");
        assert_eq!(decoded.collection.schema.fields(), ["name", "rank", "valid"]);
        assert_eq!(decoded.kinds[1], GeometryKind::Polygon);
    }

    #[test]
    fn property_order_follows_the_document() {
        let input = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "Polygon", "coordinates": square(0.0, 0.0, 2.0)},
                    "properties": {"zeta": 1, "alpha": 2}
                },
                {
                    "type": "Feature",
                    "geometry": {"type": "Polygon", "coordinates": square(5.0, 0.0, 2.0)},
                    "properties": {"mid": true, "alpha": 3}
                }
            ]
        });

        let geojson: GeoJson = serde_json::from_value(input.clone()).expect("valid geojson");
        let decoded = decode(geojson, &projected()).expect("valid input");
        assert_eq!(decoded.collection.schema.fields(), ["zeta", "alpha", "mid"]);

        let output = run(input, &filter(1.0), &projected());
        let keys = |index: usize| -> Vec<String> {
            output["features"][index]["properties"]
                .as_object()
                .map(|properties| properties.keys().cloned().collect())
                .unwrap_or_default()
        };
        assert_eq!(keys(0), ["zeta", "alpha"]);
        assert_eq!(keys(1), ["alpha", "mid"]);
    }

    #[test]
    fn multi_polygon_members_without_rings_are_empty() {
        let input = json!({
            "type": "Feature",
            "geometry": {"type": "MultiPolygon", "coordinates": [[], square(0.0, 0.0, 2.0), []]},
            "properties": {"name": "sparse"}
        });
        let output = run(input, &filter(1.0), &projected());
        assert_eq!(
            output["geometry"],
            json!({"type": "MultiPolygon", "coordinates": [square(0.0, 0.0, 2.0)]})
        );

        let input = json!({"type": "MultiPolygon", "coordinates": [[]]});
        let geojson: GeoJson = serde_json::from_value(input).expect("valid geojson");
        let decoded = decode(geojson, &projected()).expect("valid input");
        assert_eq!(decoded.collection.features[0].geometry.as_ref().map(|g| g.parts().len()), Some(0));
    }

    #[test]
    fn geography_is_detected() {
        let geojson: GeoJson = serde_json::from_value(islands()).expect("valid geojson");
        let decoded = decode(geojson, &AdapterOptions::default()).expect("valid input");
        assert_eq!(
            decoded.collection.geography,
            islet_types::Geography::Geographic
        );

        let geojson: GeoJson = serde_json::from_value(json!({
            "type": "Polygon",
            "coordinates": square(500000.0, 4000000.0, 1000.0)
        }))
        .expect("valid geojson");
        let decoded = decode(geojson, &AdapterOptions::default()).expect("valid input");
        assert_eq!(
            decoded.collection.geography,
            islet_types::Geography::Projected
        );
    }

    #[test]
    fn bare_geometry() {
        let input = json!({"type": "Polygon", "coordinates": square(0.0, 0.0, 1.0)});
        assert_eq!(run(input.clone(), &filter(0.5), &projected()), input);

        let options = AdapterOptions {
            drop_empty: Some(true),
            ..projected()
        };
        assert_eq!(
            run(input, &filter(2.0), &options),
            json!({"type": "GeometryCollection", "geometries": []})
        );
    }

    #[test]
    fn geometry_collection() {
        let input = json!({
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Polygon", "coordinates": square(0.0, 0.0, 1.0)},
                {"type": "MultiPolygon", "coordinates": [square(5.0, 0.0, 2.0)]}
            ]
        });
        let options = AdapterOptions {
            drop_empty: Some(true),
            ..projected()
        };
        assert_eq!(
            run(input, &filter(2.0), &options),
            json!({
                "type": "GeometryCollection",
                "geometries": [{"type": "MultiPolygon", "coordinates": [square(5.0, 0.0, 2.0)]}]
            })
        );
    }

    #[test]
    fn single_feature() {
        let input = json!({
            "type": "Feature",
            "geometry": {"type": "Polygon", "coordinates": square(0.0, 0.0, 1.0)},
            "properties": {"name": "small"}
        });
        assert_eq!(run(input.clone(), &filter(0.5), &projected()), input);

        let options = AdapterOptions {
            drop_empty: Some(true),
            ..projected()
        };
        assert_eq!(
            run(input, &filter(2.0), &options),
            json!({"type": "FeatureCollection", "features": []})
        );
    }

    #[test]
    fn raw_text() {
        let text = r#"{"type":"Polygon","coordinates":[[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]}"#;
        let output = filter_spatial(
            SpatialInput::RawText(text.to_string()),
            &filter(0.1),
            &projected(),
        )
        .expect("valid input");
        let SpatialOutput::RawText(output) = output else {
            panic!("unexpected output: {output:?}");
        };
        let output: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        let input: serde_json::Value = serde_json::from_str(text).expect("valid json");
        assert_eq!(output, input);

        let result = filter_spatial(
            SpatialInput::RawText("{not json".to_string()),
            &filter(0.1),
            &projected(),
        );
        assert_matches!(result, Err(IsletError::Decoding(_)));
    }

    #[test]
    fn parsed_structure() {
        let geojson: GeoJson = serde_json::from_value(islands()).expect("valid geojson");
        let output = filter_spatial(
            SpatialInput::ParsedStructure(geojson),
            &filter(2.0),
            &AdapterOptions {
                drop_empty: Some(true),
                ..projected()
            },
        )
        .expect("valid input");
        assert_matches!(output, SpatialOutput::ParsedStructure(GeoJson::FeatureCollection(collection)) if collection.features.len() == 1);
    }

    #[test]
    fn non_polygonal_geometry_is_rejected() {
        let input = json!({"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]});
        let result = filter_spatial(
            SpatialInput::ListStructure(input),
            &filter(1.0),
            &projected(),
        );
        assert_compact_debug_snapshot!(result, @r#"Err(Decoding("feature 0 has geometry of type LineString, only polygons are supported"))"#);
    }

    #[test]
    fn nested_properties_are_rejected() {
        let input = json!({
            "type": "Feature",
            "geometry": {"type": "Polygon", "coordinates": square(0.0, 0.0, 1.0)},
            "properties": {"tags": ["a", "b"]}
        });
        let result = filter_spatial(
            SpatialInput::ListStructure(input),
            &filter(1.0),
            &projected(),
        );
        assert_compact_debug_snapshot!(result, @r#"Err(Decoding("property 'tags' of feature 0 is not a scalar value"))"#);
    }

    fn with_open_ring() -> serde_json::Value {
        json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]]},
                    "properties": {"name": "open"}
                },
                {
                    "type": "Feature",
                    "geometry": {"type": "Polygon", "coordinates": square(10.0, 0.0, 2.0)},
                    "properties": {"name": "closed"}
                }
            ]
        })
    }

    #[test]
    fn invalid_geometry_fails_the_call() {
        let result = filter_spatial(
            SpatialInput::ListStructure(with_open_ring()),
            &filter(1.0),
            &projected(),
        );
        assert_compact_debug_snapshot!(result, @"Err(InvalidGeometry { feature: Some(0), source: NotClosed })");
    }

    #[test]
    fn invalid_geometry_is_skipped() {
        let options = AdapterOptions {
            skip_invalid: true,
            ..projected()
        };
        let output = run(with_open_ring(), &filter(1.0), &options);
        assert_eq!(output["features"].as_array().map(Vec::len), Some(1));
        assert_eq!(output["features"][0]["properties"]["name"], json!("closed"));
    }

    #[test]
    fn open_rings_are_closed_on_request() {
        let options = AdapterOptions {
            auto_close: true,
            ..projected()
        };
        let output = run(with_open_ring(), &filter(1.0), &options);
        assert_eq!(output["features"].as_array().map(Vec::len), Some(2));
        assert_eq!(
            output["features"][0]["geometry"]["coordinates"],
            square(0.0, 0.0, 2.0)
        );
    }
}
