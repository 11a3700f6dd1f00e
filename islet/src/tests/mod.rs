use std::sync::Arc;

use islet_types::impls::Polygon;
use islet_types::Geography;

use crate::attributes::{AttributeValue, Attributes, Schema};
use crate::feature::{Feature, FeatureCollection};

pub fn square_coords(x: f64, y: f64, size: f64) -> Vec<[f64; 2]> {
    rect_coords(x, y, x + size, y + size)
}

pub fn rect_coords(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Vec<[f64; 2]> {
    vec![
        [x_min, y_min],
        [x_max, y_min],
        [x_max, y_max],
        [x_min, y_max],
        [x_min, y_min],
    ]
}

pub fn square(x: f64, y: f64, size: f64) -> Polygon {
    Polygon::from_coords(&[square_coords(x, y, size)]).expect("valid square")
}

/// Longitude-latitude box.
pub fn geo_box(lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) -> Polygon {
    Polygon::from_coords(&[rect_coords(lon_min, lat_min, lon_max, lat_max)]).expect("valid box")
}

pub fn triangle(x: f64, y: f64) -> Polygon {
    Polygon::from_coords(&[vec![
        [x, y],
        [x + 2.0, y],
        [x + 1.0, y + 2.0],
        [x, y],
    ]])
    .expect("valid triangle")
}

pub fn pentagon(x: f64, y: f64) -> Polygon {
    Polygon::from_coords(&[vec![
        [x, y],
        [x + 2.0, y],
        [x + 3.0, y + 1.5],
        [x + 1.0, y + 3.0],
        [x - 1.0, y + 1.5],
        [x, y],
    ]])
    .expect("valid pentagon")
}

pub fn named(name: &str) -> Attributes {
    Attributes::from([("name".to_string(), AttributeValue::String(name.to_string()))])
}

pub fn collection(features: Vec<Feature>, geography: Geography) -> FeatureCollection {
    FeatureCollection::new(features, Arc::new(Schema::new(["name"])), geography)
}

/// Three lon-lat boxes of about 2.49e11, 4.86e11 and 1.23e10 square meters.
pub fn three_islands() -> FeatureCollection {
    collection(
        vec![
            Feature::new(geo_box(0.0, 0.0, 4.04, 5.0)).with_attributes(named("big")),
            Feature::new(geo_box(10.0, 20.0, 16.13, 27.0)).with_attributes(named("bigger")),
            Feature::new(geo_box(30.0, 0.0, 30.995, 1.0)).with_attributes(named("small")),
        ],
        Geography::Geographic,
    )
}
