use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    /// One of the vectors has zero norm; cosine similarity is undefined.
    #[error("degenerate vector: zero norm")]
    DegenerateVector,

    /// Vector lengths differ (or are zero).
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
