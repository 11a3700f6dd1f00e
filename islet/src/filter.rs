//! Island filter engine.
//!
//! The filter splits every feature's geometry into islands (see [`topology`](crate::topology)), measures their area
//! and vertex count, and keeps only the islands reaching both thresholds. Features are processed independently of each
//! other, in parallel when the `parallel` feature is enabled.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use islet_types::geo::EARTH_MEAN_RADIUS;
use islet_types::impls::MultiPolygon;
use islet_types::{AreaCalculator, AreaIssue, Polygon};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::IsletError;
use crate::feature::{Feature, FeatureCollection};
use crate::parallel::*;
use crate::topology::group;

/// Removes islands below the area and vertex count thresholds from feature collections.
///
/// ```
/// use islet::IslandFilter;
///
/// let filter = IslandFilter::builder()
///     .with_min_area(1e6)
///     .with_min_vertices(4)
///     .with_drop_empty(true)
///     .build()?;
/// # Ok::<(), islet::error::IsletError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IslandFilter {
    min_area: Option<f64>,
    min_vertices: Option<u64>,
    drop_empty: bool,
    earth_radius: f64,
}

impl Default for IslandFilter {
    fn default() -> Self {
        Self {
            min_area: None,
            min_vertices: None,
            drop_empty: false,
            earth_radius: EARTH_MEAN_RADIUS,
        }
    }
}

impl IslandFilter {
    /// Creates a builder without thresholds.
    pub fn builder() -> IslandFilterBuilder {
        IslandFilterBuilder::default()
    }

    /// Minimum area of an island to be kept.
    pub fn min_area(&self) -> Option<f64> {
        self.min_area
    }

    /// Minimum vertex count of an island to be kept.
    pub fn min_vertices(&self) -> Option<u64> {
        self.min_vertices
    }

    /// Whether features with null or empty geometry are removed.
    pub fn drop_empty(&self) -> bool {
        self.drop_empty
    }

    /// Sphere radius for geographic areas.
    pub fn earth_radius(&self) -> f64 {
        self.earth_radius
    }

    /// Returns a copy of the filter with a different empty feature policy.
    pub fn with_drop_empty(mut self, drop_empty: bool) -> Self {
        self.drop_empty = drop_empty;
        self
    }

    /// Filters the collection. The input is not modified.
    pub fn apply(&self, collection: &FeatureCollection) -> FilterOutput {
        let calculator =
            AreaCalculator::new(collection.geography).with_earth_radius(self.earth_radius);

        let results: Vec<FeatureResult> = collection
            .features
            .par_iter()
            .enumerate()
            .map(|(index, feature)| self.filter_feature(index, feature, &calculator))
            .collect();

        let mut stats = FilterStats {
            features_in: collection.len(),
            ..Default::default()
        };
        let mut features = Vec::with_capacity(results.len());
        let mut retained = Vec::with_capacity(results.len());
        let mut warnings = vec![];
        for (index, result) in results.into_iter().enumerate() {
            stats.components_in += result.components_in;
            stats.components_out += result.components_out;
            warnings.extend(result.warnings);
            if let Some(feature) = result.feature {
                features.push(feature);
                retained.push(index);
            }
        }
        stats.features_out = features.len();

        debug!(
            "Island filter kept {} of {} features and {} of {} islands ({} warnings)",
            stats.features_out,
            stats.features_in,
            stats.components_out,
            stats.components_in,
            warnings.len()
        );

        FilterOutput {
            collection: FeatureCollection::new(
                features,
                Arc::clone(&collection.schema),
                collection.geography,
            ),
            retained,
            warnings,
            stats,
        }
    }

    fn filter_feature(
        &self,
        index: usize,
        feature: &Feature,
        calculator: &AreaCalculator,
    ) -> FeatureResult {
        if self.drop_empty && feature.is_empty() {
            trace!("Feature {index} has no geometry and is dropped");
            return FeatureResult::default();
        }

        let Some(geometry) = &feature.geometry else {
            return FeatureResult {
                feature: Some(feature.clone()),
                ..Default::default()
            };
        };

        let components = group(geometry);
        let mut warnings = vec![];
        let mut retained = vec![];
        let mut components_out = 0;

        for component in &components {
            let mut area = 0.0;
            let mut vertices = 0;
            for &part in component.parts() {
                let polygon = &geometry.parts()[part];
                let measured = calculator.polygon_area(polygon);
                if let Some(issue) = measured.issue {
                    let warning = DegenerateGeometryWarning {
                        feature: index,
                        part,
                        issue,
                    };
                    warn!("{warning}");
                    warnings.push(warning);
                }

                area += measured.area;
                vertices += polygon.vertex_count();
            }

            if self.retains(area, vertices) {
                components_out += 1;
                retained.extend_from_slice(component.parts());
            }
        }

        trace!(
            "Feature {index}: {} of {} islands retained",
            components_out,
            components.len()
        );

        retained.sort_unstable();
        let filtered = Feature {
            id: feature.id.clone(),
            geometry: Some(MultiPolygon::from(
                retained
                    .into_iter()
                    .map(|part| geometry.parts()[part].clone())
                    .collect::<Vec<_>>(),
            )),
            attributes: feature.attributes.clone(),
        };

        FeatureResult {
            feature: (!self.drop_empty || !filtered.is_empty()).then_some(filtered),
            warnings,
            components_in: components.len(),
            components_out,
        }
    }

    fn retains(&self, area: f64, vertices: usize) -> bool {
        self.min_area.map_or(true, |min| area >= min)
            && self.min_vertices.map_or(true, |min| vertices as u64 >= min)
    }
}

/// Constructor for an [`IslandFilter`]. Thresholds are validated by [`IslandFilterBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct IslandFilterBuilder {
    min_area: Option<f64>,
    min_vertices: Option<u64>,
    drop_empty: bool,
    earth_radius: Option<f64>,
}

impl IslandFilterBuilder {
    /// Islands with smaller area are removed. The bound is inclusive.
    ///
    /// Area is in squared coordinate units for projected data and in squared units of the Earth radius (meters by
    /// default) for geographic data.
    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = Some(min_area);
        self
    }

    /// Islands with fewer vertices are removed. The bound is inclusive. Closing points of rings are not counted.
    pub fn with_min_vertices(mut self, min_vertices: u64) -> Self {
        self.min_vertices = Some(min_vertices);
        self
    }

    /// Remove features that have null or empty geometry, including the ones that lost all their islands.
    pub fn with_drop_empty(mut self, drop_empty: bool) -> Self {
        self.drop_empty = drop_empty;
        self
    }

    /// Sphere radius in meters used for the area of geographic data. Defaults to the mean Earth radius.
    pub fn with_earth_radius(mut self, earth_radius: f64) -> Self {
        self.earth_radius = Some(earth_radius);
        self
    }

    /// Validates the parameters and creates the filter.
    pub fn build(self) -> Result<IslandFilter, IsletError> {
        if let Some(min_area) = self.min_area {
            if !min_area.is_finite() || min_area < 0.0 {
                return Err(IsletError::InvalidArgument(format!(
                    "min_area must be a finite non-negative number, got {min_area}"
                )));
            }
        }

        let earth_radius = self.earth_radius.unwrap_or(EARTH_MEAN_RADIUS);
        if !earth_radius.is_finite() || earth_radius <= 0.0 {
            return Err(IsletError::Configuration(format!(
                "earth radius must be a finite positive number, got {earth_radius}"
            )));
        }

        Ok(IslandFilter {
            min_area: self.min_area,
            min_vertices: self.min_vertices,
            drop_empty: self.drop_empty,
            earth_radius,
        })
    }
}

/// Serializable filter configuration.
///
/// ```
/// use islet::FilterOptions;
///
/// let options: FilterOptions = serde_json::from_str(r#"{"min_area": 1000.0, "drop_empty": true}"#)?;
/// let filter = options.build()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterOptions {
    /// See [`IslandFilterBuilder::with_min_area`].
    pub min_area: Option<f64>,
    /// See [`IslandFilterBuilder::with_min_vertices`]. Negative values are rejected.
    pub min_vertices: Option<i64>,
    /// See [`IslandFilterBuilder::with_drop_empty`].
    pub drop_empty: bool,
    /// See [`IslandFilterBuilder::with_earth_radius`].
    pub earth_radius: Option<f64>,
}

impl FilterOptions {
    /// Validates the options and creates the filter.
    pub fn build(&self) -> Result<IslandFilter, IsletError> {
        let mut builder = IslandFilter::builder().with_drop_empty(self.drop_empty);
        if let Some(min_area) = self.min_area {
            builder = builder.with_min_area(min_area);
        }
        if let Some(min_vertices) = self.min_vertices {
            let min_vertices = u64::try_from(min_vertices).map_err(|_| {
                IsletError::InvalidArgument(format!(
                    "min_vertices must be non-negative, got {min_vertices}"
                ))
            })?;
            builder = builder.with_min_vertices(min_vertices);
        }
        if let Some(earth_radius) = self.earth_radius {
            builder = builder.with_earth_radius(earth_radius);
        }

        builder.build()
    }
}

impl TryFrom<&FilterOptions> for IslandFilter {
    type Error = IsletError;

    fn try_from(options: &FilterOptions) -> Result<Self, Self::Error> {
        options.build()
    }
}

/// Removes islands smaller than `min_area` or having fewer than `min_vertices` vertices from every feature of the
/// collection.
///
/// Features that have no geometry, or lose all their islands, are removed if `drop_empty` is set. Order of features,
/// their attributes and the schema of the collection are kept. Fails with [`IsletError::InvalidArgument`] before
/// looking at any feature if `min_area` is negative or not finite.
pub fn filter_islands(
    collection: &FeatureCollection,
    min_area: Option<f64>,
    min_vertices: Option<u64>,
    drop_empty: bool,
) -> Result<FilterOutput, IsletError> {
    let mut builder = IslandFilter::builder().with_drop_empty(drop_empty);
    if let Some(min_area) = min_area {
        builder = builder.with_min_area(min_area);
    }
    if let Some(min_vertices) = min_vertices {
        builder = builder.with_min_vertices(min_vertices);
    }

    Ok(builder.build()?.apply(collection))
}

/// Result of filtering a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutput {
    /// Filtered collection.
    pub collection: FeatureCollection,
    /// Input indices of the features in the filtered collection.
    pub retained: Vec<usize>,
    /// Polygons with malformed areas found while filtering.
    pub warnings: Vec<DegenerateGeometryWarning>,
    /// Counts of features and islands before and after filtering.
    pub stats: FilterStats,
}

/// A polygon whose area was reported as zero because of malformed contours. Filtering goes on with the zero area.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DegenerateGeometryWarning {
    /// Index of the feature in the input collection.
    pub feature: usize,
    /// Index of the polygon in the feature geometry.
    pub part: usize,
    /// What is wrong with the polygon.
    pub issue: AreaIssue,
}

impl Display for DegenerateGeometryWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.issue {
            AreaIssue::ZeroOuterArea => write!(
                f,
                "polygon {} of feature {} has outer contour of zero area",
                self.part, self.feature
            ),
            AreaIssue::HolesExceedOuter { outer, holes } => write!(
                f,
                "holes of polygon {} of feature {} have area {holes} exceeding the outer contour area {outer}",
                self.part, self.feature
            ),
        }
    }
}

/// Counters of a filter run.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Number of input features.
    pub features_in: usize,
    /// Number of output features.
    pub features_out: usize,
    /// Number of islands in the input features that were not dropped as empty.
    pub components_in: usize,
    /// Number of retained islands.
    pub components_out: usize,
}

#[derive(Default)]
struct FeatureResult {
    feature: Option<Feature>,
    warnings: Vec<DegenerateGeometryWarning>,
    components_in: usize,
    components_out: usize,
}
