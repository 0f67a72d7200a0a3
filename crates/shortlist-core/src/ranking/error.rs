use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum RankingError {
    /// Malformed caller input. Surfaced directly; never retried.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Ranker construction rejected its configuration.
    #[error("invalid ranker configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The embedding provider failed; fatal to the current call.
    #[error("embedding provider failed: {0}")]
    Embedding(#[from] EmbeddingError),

    /// The content store failed; fatal to the current call.
    #[error("content store failed: {0}")]
    Store(#[from] StoreError),
}
