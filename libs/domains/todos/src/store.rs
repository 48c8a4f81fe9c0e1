//! In-memory implementation of ItemRepository
//!
//! `ItemStore` is the authoritative collection of items plus the id
//! counter. Map and counter live behind one `tokio::sync::RwLock`:
//! writers queue on it in FIFO order, so mutations apply one at a time in
//! the order they were submitted, and readers only ever see the state
//! between two complete mutations.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;

#[derive(Debug, Default)]
struct Inner {
    items: HashMap<String, Item>,
    /// Next id to hand out; only ever increases
    next_id: u64,
}

/// Memory-resident, non-durable item collection
#[derive(Debug, Default)]
pub struct ItemStore {
    inner: RwLock<Inner>,
}

impl ItemStore {
    /// Create an empty store whose first id is `"0"`
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored item, in no particular order
    pub async fn get_all(&self) -> Vec<Item> {
        let inner = self.inner.read().await;
        inner.items.values().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Option<Item> {
        let inner = self.inner.read().await;
        inner.items.get(id).cloned()
    }

    /// Store a new item under the next id from the counter
    #[instrument(skip(self, title))]
    pub async fn add(&self, order: i64, title: String, completed: bool) -> Item {
        let mut inner = self.inner.write().await;

        let id = inner.next_id.to_string();
        inner.next_id += 1;

        let item = Item::new(id.clone(), order, title, completed);
        inner.items.insert(id, item.clone());

        tracing::info!(item_id = %item.id, title = %item.title, "Added item");
        item
    }

    /// Apply a partial update; `None` if the id is unknown
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: &str, update: UpdateItem) -> Option<Item> {
        let mut inner = self.inner.write().await;

        let Some(item) = inner.items.get_mut(id) else {
            tracing::warn!(item_id = %id, "Could not find item to update");
            return None;
        };

        item.apply_update(update);
        tracing::debug!(item_id = %id, "Updated item");
        Some(item.clone())
    }

    /// Remove an item; unknown ids are ignored
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) {
        let mut inner = self.inner.write().await;
        if inner.items.remove(id).is_some() {
            tracing::debug!(item_id = %id, "Deleted item");
        } else {
            tracing::debug!(item_id = %id, "Delete of unknown item ignored");
        }
    }

    /// Remove every item. The id counter keeps counting.
    #[instrument(skip(self))]
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        let removed = inner.items.len();
        inner.items.clear();
        tracing::info!(removed, "Cleared all items");
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.items.len()
    }
}

#[async_trait]
impl ItemRepository for ItemStore {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        Ok(self.get_all().await)
    }

    async fn get_by_id(&self, id: &str) -> ItemResult<Option<Item>> {
        Ok(self.get(id).await)
    }

    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        Ok(self.add(input.order, input.title, input.completed).await)
    }

    async fn update(&self, id: &str, input: UpdateItem) -> ItemResult<Option<Item>> {
        Ok(ItemStore::update(self, id, input).await)
    }

    async fn delete(&self, id: &str) -> ItemResult<()> {
        ItemStore::delete(self, id).await;
        Ok(())
    }

    async fn clear(&self) -> ItemResult<()> {
        ItemStore::clear(self).await;
        Ok(())
    }

    async fn count(&self) -> ItemResult<usize> {
        Ok(ItemStore::count(self).await)
    }
}
