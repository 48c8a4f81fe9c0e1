//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// The service turns absent items into explicit [`ItemError::NotFound`]
/// outcomes and otherwise delegates to the repository.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every item
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: &str) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ItemError::NotFound(id.to_string()))
    }

    /// Create a new item
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        tracing::info!("Received {}", input.title);
        self.repository.create(input).await
    }

    /// Partially update an existing item
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: &str, input: UpdateItem) -> ItemResult<Item> {
        self.repository
            .update(id, input)
            .await?
            .ok_or_else(|| ItemError::NotFound(id.to_string()))
    }

    /// Replace every client-controlled field of an existing item
    #[instrument(skip(self, input))]
    pub async fn replace_item(&self, id: &str, input: CreateItem) -> ItemResult<Item> {
        self.update_item(id, UpdateItem::from(input)).await
    }

    /// Delete an item; unknown IDs are not an error
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: &str) -> ItemResult<()> {
        tracing::info!("Requesting a delete");
        self.repository.delete(id).await
    }

    /// Delete every item
    #[instrument(skip(self))]
    pub async fn clear_items(&self) -> ItemResult<()> {
        tracing::info!("Requested clearing the entire list");
        self.repository.clear().await
    }

    /// Number of stored items
    #[instrument(skip(self))]
    pub async fn count_items(&self) -> ItemResult<usize> {
        self.repository.count().await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
