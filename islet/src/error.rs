//! Error types used by the crate.

use islet_types::error::GeometryError;
use thiserror::Error;

/// Islet error type.
#[derive(Debug, Error)]
pub enum IsletError {
    /// Filter thresholds are malformed. Nothing is processed when this error is returned.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Geometry of a feature does not satisfy the ring or polygon invariants.
    #[error("invalid geometry{}: {source}", .feature.map(|i| format!(" in feature {i}")).unwrap_or_default())]
    InvalidGeometry {
        /// Index of the feature in the input, if known.
        feature: Option<usize>,
        /// The violated invariant.
        source: GeometryError,
    },
    /// Invalid filter or adapter configuration.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// Input data cannot be decoded.
    #[error("failed to decode data: {0}")]
    Decoding(String),
}

impl IsletError {
    /// Attaches the index of the offending feature to an [`IsletError::InvalidGeometry`] error.
    pub fn in_feature(self, index: usize) -> Self {
        match self {
            IsletError::InvalidGeometry { source, .. } => IsletError::InvalidGeometry {
                feature: Some(index),
                source,
            },
            other => other,
        }
    }
}

impl From<GeometryError> for IsletError {
    fn from(source: GeometryError) -> Self {
        Self::InvalidGeometry {
            feature: None,
            source,
        }
    }
}

impl From<serde_json::Error> for IsletError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decoding(value.to_string())
    }
}

impl From<geojson::Error> for IsletError {
    fn from(value: geojson::Error) -> Self {
        Self::Decoding(value.to_string())
    }
}
