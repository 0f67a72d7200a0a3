//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary constants from primary ones to avoid drift.
//!
//! # Dimension Invariants
//!
//! The embedding dimension is an invariant shared by the embedder, the
//! content store, and the ranker. Use [`validate_embedding_dim`] at module
//! boundaries to catch mismatches early instead of deep in the scoring
//! loop.

/// Output dimension of the default sentence-embedding model (all-MiniLM-L6-v2).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the embedding model per text.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Number of ranked results returned when the caller does not ask for a count.
pub const DEFAULT_TOP_K: usize = 3;

/// Minimum cosine similarity a candidate must reach to appear in ranked output.
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.5;

/// Sentinel score reported by direct by-id lookups (no ranking performed).
pub const SCORE_DIRECT_LOOKUP: f32 = 1.0;

/// Sentinel score reported by unranked listings.
pub const SCORE_UNRANKED: f32 = 0.0;

/// Error returned when dimension validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimValidationError {
    /// Runtime dimension does not match expected dimension.
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for DimValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for DimValidationError {}

/// Validates that a runtime embedding dimension matches the expected dimension.
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_embedding_dim_match() {
        assert!(validate_embedding_dim(384, 384).is_ok());
    }

    #[test]
    fn test_validate_embedding_dim_mismatch() {
        assert_eq!(
            validate_embedding_dim(768, 384),
            Err(DimValidationError::DimensionMismatch {
                expected: 384,
                actual: 768
            })
        );
    }

    #[test]
    fn test_error_display() {
        let err = DimValidationError::DimensionMismatch {
            expected: 384,
            actual: 768,
        };
        assert!(err.to_string().contains("384"));
        assert!(err.to_string().contains("768"));
    }
}
