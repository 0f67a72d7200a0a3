//! Content ranking.
//!
//! [`ContentRanker`] orchestrates query embedding, store filtering, cosine
//! scoring, threshold rejection, and top-k selection. Each call is
//! self-contained and read-only; concurrent calls need no coordination.

pub mod error;


pub use error::RankingError;

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_K, validate_embedding_dim,
};
use crate::content::{ContentFilter, RetrievedContent};
use crate::embedding::MiniLmEmbedder;
use crate::scoring::{ScoringError, cosine_similarity, round_score};
use crate::store::ContentStore;

/// Ranking policy knobs.
#[derive(Debug, Clone, Copy)]
pub struct RankerConfig {
    /// Expected embedding dimension for the query and every stored item.
    pub embedding_dim: usize,
    /// Result count used when the caller does not ask for one.
    pub top_k_default: usize,
    /// Hard similarity floor; candidates strictly below it are rejected.
    pub similarity_threshold: f32,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            top_k_default: DEFAULT_TOP_K,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl RankerConfig {
    pub fn with_embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    pub fn with_top_k_default(mut self, top_k_default: usize) -> Self {
        self.top_k_default = top_k_default;
        self
    }

    pub fn with_threshold(mut self, similarity_threshold: f32) -> Self {
        self.similarity_threshold = similarity_threshold;
        self
    }

    pub fn validate(&self) -> Result<(), RankingError> {
        if self.embedding_dim == 0 {
            return Err(RankingError::InvalidConfig {
                reason: "embedding_dim must be > 0".to_string(),
            });
        }
        if self.top_k_default == 0 {
            return Err(RankingError::InvalidConfig {
                reason: "top_k_default must be >= 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(RankingError::InvalidConfig {
                reason: format!(
                    "similarity_threshold must be between 0.0 and 1.0, got {}",
                    self.similarity_threshold
                ),
            });
        }
        Ok(())
    }
}

/// Ranks stored content against free-text queries.
///
/// Construct once with its collaborators and share via cheap clones of the
/// store handle and the `Arc`'d embedder; the ranker carries no per-call
/// state.
pub struct ContentRanker<S: ContentStore> {
    embedder: Arc<MiniLmEmbedder>,
    store: S,
    config: RankerConfig,
}

impl<S: ContentStore> std::fmt::Debug for ContentRanker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentRanker")
            .field("embedder", &self.embedder)
            .field("config", &self.config)
            .finish()
    }
}

impl<S: ContentStore> ContentRanker<S> {
    /// Creates a ranker, validating the config against the embedder.
    pub fn new(
        embedder: Arc<MiniLmEmbedder>,
        store: S,
        config: RankerConfig,
    ) -> Result<Self, RankingError> {
        config.validate()?;

        validate_embedding_dim(embedder.embedding_dim(), config.embedding_dim).map_err(|e| {
            RankingError::InvalidConfig {
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            embedder,
            store,
            config,
        })
    }

    /// Returns the embedding provider handle.
    pub fn embedder(&self) -> &MiniLmEmbedder {
        &self.embedder
    }

    /// Returns the ranking configuration.
    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Ranks active content against `query`.
    ///
    /// Embeds the query once, scores every filtered candidate with a
    /// well-formed embedding, rejects scores strictly below the threshold,
    /// and returns at most `top_k` results sorted by score descending (ties
    /// keep store order). Empty candidate sets yield an empty list, not an
    /// error.
    pub async fn rank(
        &self,
        query: &str,
        filter: Option<&ContentFilter>,
        top_k: Option<usize>,
    ) -> Result<Vec<RetrievedContent>, RankingError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(RankingError::InvalidArgument {
                reason: "query must not be empty".to_string(),
            });
        }

        let top_k = match top_k {
            Some(0) => {
                return Err(RankingError::InvalidArgument {
                    reason: "top_k must be >= 1".to_string(),
                });
            }
            Some(k) => k,
            None => self.config.top_k_default,
        };

        let query_vector = self.embedder.embed(query)?;

        let unfiltered = ContentFilter::default();
        let filter = filter.unwrap_or(&unfiltered);
        let candidates = self.store.query_active(filter).await?;

        debug!(
            query_len = query.len(),
            candidates = candidates.len(),
            top_k,
            "Scoring candidates"
        );

        let mut scored = Vec::new();
        for item in candidates {
            let Some(embedding) = item.embedding.as_deref() else {
                warn!(id = item.id, "Skipping item without embedding");
                continue;
            };

            if embedding.len() != self.config.embedding_dim {
                warn!(
                    id = item.id,
                    expected = self.config.embedding_dim,
                    actual = embedding.len(),
                    "Skipping item with wrongly-sized embedding"
                );
                continue;
            }

            let score = match cosine_similarity(&query_vector, embedding) {
                Ok(score) => score,
                Err(ScoringError::DegenerateVector) => {
                    warn!(id = item.id, "Zero-norm vector, treating as no similarity");
                    0.0
                }
                Err(e @ ScoringError::DimensionMismatch { .. }) => {
                    warn!(id = item.id, error = %e, "Skipping unscorable item");
                    continue;
                }
            };

            if score >= self.config.similarity_threshold {
                scored.push((item, score));
            }
        }

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(top_k);

        debug!(results = scored.len(), "Ranking complete");

        Ok(scored
            .into_iter()
            .map(|(item, score)| RetrievedContent::from_item(&item, round_score(score)))
            .collect())
    }

    /// Direct lookup by id; bypasses scoring and reports the sentinel score.
    ///
    /// Absent and inactive items both yield `None`.
    pub async fn retrieve_by_id(&self, id: u64) -> Result<Option<RetrievedContent>, RankingError> {
        let item = self.store.get(id).await?;
        Ok(item
            .filter(|item| item.is_active)
            .map(|item| RetrievedContent::direct(&item)))
    }

    /// Offset window over active items in store order, tagged as unranked.
    pub async fn list_active(
        &self,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<RetrievedContent>, RankingError> {
        let items = self.store.list_active(skip, limit).await?;
        Ok(items.iter().map(RetrievedContent::unranked).collect())
    }
}
