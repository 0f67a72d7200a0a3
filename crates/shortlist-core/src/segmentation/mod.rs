//! Customer segmentation over precomputed RFM clusters.
//!
//! The model artifact (feature scaler, cluster centers in scaled space, and
//! per-segment profiles) is produced by an offline training pipeline;
//! prediction here is nearest-center assignment plus a distance-derived
//! confidence.

pub mod error;


pub use error::SegmentationError;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scaled distance at which prediction confidence bottoms out at zero.
const DISTANCE_CONFIDENCE_SCALE: f64 = 5.0;

/// Recency / frequency / monetary features for one customer.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RfmFeatures {
    /// Days since last purchase.
    pub recency: f64,
    /// Number of transactions.
    pub frequency: f64,
    /// Total spend.
    pub monetary: f64,
}

impl RfmFeatures {
    fn as_array(&self) -> [f64; 3] {
        [self.recency, self.frequency, self.monetary]
    }

    fn validate(&self) -> Result<(), SegmentationError> {
        for (name, value) in [
            ("recency", self.recency),
            ("frequency", self.frequency),
            ("monetary", self.monetary),
        ] {
            if !value.is_finite() {
                return Err(SegmentationError::InvalidFeatures {
                    reason: format!("{} must be finite", name),
                });
            }
            if value < 0.0 {
                return Err(SegmentationError::InvalidFeatures {
                    reason: format!("{} must be non-negative", name),
                });
            }
        }
        Ok(())
    }
}

/// Per-feature standardization parameters fitted offline.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureScaler {
    pub mean: [f64; 3],
    pub std: [f64; 3],
}

impl FeatureScaler {
    fn transform(&self, features: [f64; 3]) -> [f64; 3] {
        [
            (features[0] - self.mean[0]) / self.std[0],
            (features[1] - self.mean[1]) / self.std[1],
            (features[2] - self.mean[2]) / self.std[2],
        ]
    }
}

/// One precomputed cluster with its human-readable profile.
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterProfile {
    pub cluster_id: u32,
    pub segment_name: String,
    /// Cluster center in scaled feature space.
    pub center: [f64; 3],
    #[serde(default)]
    pub stats: BTreeMap<String, f64>,
}

/// Precomputed segmentation model loaded from a JSON artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentModel {
    pub scaler: FeatureScaler,
    pub clusters: Vec<ClusterProfile>,
}

/// Prediction output for one customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentPrediction {
    pub segment_id: u32,
    pub segment_name: String,
    /// Euclidean distance to the assigned center, in scaled space.
    pub distance_to_center: f64,
    /// `max(0, 1 - distance / 5)`; close-to-center points score high.
    pub confidence: f64,
    pub stats: BTreeMap<String, f64>,
}

impl SegmentModel {
    /// Loads and validates the model artifact.
    pub fn from_json_file(path: &Path) -> Result<Self, SegmentationError> {
        if !path.exists() {
            return Err(SegmentationError::ArtifactNotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = std::fs::read_to_string(path)?;
        let model: SegmentModel =
            serde_json::from_str(&raw).map_err(|e| SegmentationError::MalformedArtifact {
                reason: e.to_string(),
            })?;

        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), SegmentationError> {
        if self.clusters.is_empty() {
            return Err(SegmentationError::InvalidModel {
                reason: "artifact carries no clusters".to_string(),
            });
        }

        if self.scaler.std.iter().any(|&s| s <= 0.0 || !s.is_finite()) {
            return Err(SegmentationError::InvalidModel {
                reason: "scaler stds must be positive and finite".to_string(),
            });
        }

        Ok(())
    }

    /// Number of clusters the model carries.
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Assigns the nearest cluster to the given features.
    pub fn predict(&self, features: &RfmFeatures) -> Result<SegmentPrediction, SegmentationError> {
        features.validate()?;

        let scaled = self.scaler.transform(features.as_array());

        // validate() guarantees at least one cluster.
        let (cluster, distance) = self
            .clusters
            .iter()
            .map(|cluster| (cluster, euclidean_distance(&scaled, &cluster.center)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .ok_or_else(|| SegmentationError::InvalidModel {
                reason: "artifact carries no clusters".to_string(),
            })?;

        let confidence = (1.0 - distance / DISTANCE_CONFIDENCE_SCALE).max(0.0);

        debug!(
            segment_id = cluster.cluster_id,
            distance, confidence, "Segment assigned"
        );

        Ok(SegmentPrediction {
            segment_id: cluster.cluster_id,
            segment_name: cluster.segment_name.clone(),
            distance_to_center: distance,
            confidence,
            stats: cluster.stats.clone(),
        })
    }
}

fn euclidean_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
