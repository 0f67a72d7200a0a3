use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::content::{ContentFilter, ContentItem};

use super::error::StoreError;
use super::ContentStore;

/// In-process content repository.
///
/// Cloning shares the underlying storage. Items keep insertion order, so
/// query results and listings iterate deterministically.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    items: Vec<ContentItem>,
    index: HashMap<u64, usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an item by id, synchronously.
    pub fn insert(&self, item: ContentItem) {
        let mut inner = self.inner.write();
        match inner.index.get(&item.id).copied() {
            Some(pos) => inner.items[pos] = item,
            None => {
                let pos = inner.items.len();
                inner.index.insert(item.id, pos);
                inner.items.push(item);
            }
        }
    }

    /// Total number of items, active or not.
    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().items.is_empty()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("items", &self.len())
            .finish()
    }
}

impl ContentStore for MemoryStore {
    async fn query_active(&self, filter: &ContentFilter) -> Result<Vec<ContentItem>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .items
            .iter()
            .filter(|item| item.is_active && filter.matches(item))
            .cloned()
            .collect())
    }

    async fn get(&self, id: u64) -> Result<Option<ContentItem>, StoreError> {
        let inner = self.inner.read();
        Ok(inner.index.get(&id).map(|&pos| inner.items[pos].clone()))
    }

    async fn list_active(&self, skip: usize, limit: usize) -> Result<Vec<ContentItem>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .items
            .iter()
            .filter(|item| item.is_active)
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn upsert(&self, item: ContentItem) -> Result<(), StoreError> {
        self.insert(item);
        Ok(())
    }

    async fn count_active(&self) -> Result<usize, StoreError> {
        let inner = self.inner.read();
        Ok(inner.items.iter().filter(|item| item.is_active).count())
    }
}
