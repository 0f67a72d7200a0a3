//! Embedding provider.
//!
//! [`minilm`] wraps a sentence-transformer BERT checkpoint behind
//! [`MiniLmEmbedder`], with a deterministic stub mode for environments
//! without model files.

/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// MiniLM sentence embedder.
pub mod minilm;
/// Tokenizer loading helpers.
pub mod utils;

pub use error::EmbeddingError;
pub use minilm::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig, MiniLmEmbedder};
