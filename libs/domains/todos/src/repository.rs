use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};

/// Repository trait for Item persistence
///
/// This trait defines the data access interface for items. Absent items
/// are `Ok(None)`, never an error; turning that into "not found" is the
/// service's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List every item, in no particular order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Get an item by ID
    async fn get_by_id(&self, id: &str) -> ItemResult<Option<Item>>;

    /// Create a new item under a freshly issued ID
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// Apply a partial update to an existing item
    async fn update(&self, id: &str, input: UpdateItem) -> ItemResult<Option<Item>>;

    /// Delete an item by ID; deleting an unknown ID succeeds
    async fn delete(&self, id: &str) -> ItemResult<()>;

    /// Delete every item
    async fn clear(&self) -> ItemResult<()>;

    /// Number of stored items
    async fn count(&self) -> ItemResult<usize>;
}
