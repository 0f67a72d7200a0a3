use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by content-store implementations and the catalog loader.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Catalog file does not exist.
    #[error("catalog file not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Reading the catalog file failed.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog contents could not be parsed.
    #[error("malformed catalog: {reason}")]
    MalformedCatalog { reason: String },

    /// The backing store rejected or failed the operation.
    #[error("content store unavailable: {reason}")]
    Unavailable { reason: String },
}
