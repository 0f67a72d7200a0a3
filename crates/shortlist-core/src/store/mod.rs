//! Content repository seam.
//!
//! [`ContentStore`] is the narrow interface the ranker reads through;
//! [`MemoryStore`] is the in-process implementation backing the service and
//! its tests. Iteration order is insertion order, which keeps tie-breaks and
//! pagination stable.

pub mod catalog;
pub mod error;
pub mod memory;

#[cfg(any(test, feature = "mock"))]
pub mod fixtures;


pub use catalog::{CatalogEntry, load_catalog};
pub use error::StoreError;
pub use memory::MemoryStore;

use crate::content::{ContentFilter, ContentItem};

/// Read/write surface required from a content repository.
///
/// Reads must be consistent within one call; no transaction semantics are
/// assumed beyond that.
pub trait ContentStore: Send + Sync {
    /// Returns active items matching the filter, in stable store order.
    fn query_active(
        &self,
        filter: &ContentFilter,
    ) -> impl std::future::Future<Output = Result<Vec<ContentItem>, StoreError>> + Send;

    /// Fetches a single item by id (active or not).
    fn get(
        &self,
        id: u64,
    ) -> impl std::future::Future<Output = Result<Option<ContentItem>, StoreError>> + Send;

    /// Returns an offset window over active items in stable store order.
    fn list_active(
        &self,
        skip: usize,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<ContentItem>, StoreError>> + Send;

    /// Inserts or replaces an item by id.
    fn upsert(
        &self,
        item: ContentItem,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Number of active items.
    fn count_active(
        &self,
    ) -> impl std::future::Future<Output = Result<usize, StoreError>> + Send;
}
