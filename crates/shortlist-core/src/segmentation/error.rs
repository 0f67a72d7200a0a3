use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SegmentationError {
    #[error("segment model artifact not found: {path}")]
    ArtifactNotFound { path: PathBuf },

    #[error("failed to read segment model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed segment model artifact: {reason}")]
    MalformedArtifact { reason: String },

    #[error("invalid segment model: {reason}")]
    InvalidModel { reason: String },

    #[error("invalid features: {reason}")]
    InvalidFeatures { reason: String },
}
