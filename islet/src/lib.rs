//! Islet removes small detached parts ("islands") from polygon feature collections.
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//!
//! use islet::{filter_islands, Feature, FeatureCollection};
//! use islet_types::impls::MultiPolygon;
//! use islet_types::Geography;
//!
//! let geometry = MultiPolygon::from_coords(&[
//!     vec![vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]]],
//!     vec![vec![[10.0, 0.0], [11.0, 0.0], [11.0, 1.0], [10.0, 0.0]]],
//! ])?;
//! let collection = FeatureCollection::new(
//!     vec![Feature::new(geometry)],
//!     Arc::default(),
//!     Geography::Projected,
//! );
//!
//! let output = filter_islands(&collection, Some(1.0), None, true)?;
//! assert_eq!(output.collection.features[0].geometry.as_ref().map(|g| g.parts().len()), Some(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Main components
//!
//! * [`FeatureCollection`] holds the features with their [`attributes`] and the kind of coordinates
//!   ([`Geography`](islet_types::Geography)), which decides whether areas are calculated in a plane or on a sphere.
//! * [`topology`] splits geometry of a feature into islands: sets of polygons touching or overlapping each other.
//! * [`IslandFilter`] measures every island and keeps the ones reaching the area and vertex count thresholds.
//!   [`filter_islands`] is a shortcut for a one-off call.
//! * [`adapter`] converts GeoJSON and `geo-types` data into the feature model and back, so that the filter can be
//!   applied to the data in the form the caller already has.
//!
//! Features are filtered in parallel with `rayon` when the `parallel` feature is enabled (default).

pub mod adapter;
pub mod attributes;
pub mod error;
pub mod feature;
pub mod filter;
mod parallel;
pub mod topology;

#[cfg(test)]
mod tests;

pub use feature::{Feature, FeatureCollection, FeatureId};
pub use filter::{
    filter_islands, DegenerateGeometryWarning, FilterOptions, FilterOutput, FilterStats,
    IslandFilter, IslandFilterBuilder,
};
pub use islet_types;
