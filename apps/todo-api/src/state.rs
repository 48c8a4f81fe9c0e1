//! Application state management.
//!
//! Each collection gets its own store, constructed once at startup and
//! handed to its router. Nothing here is a process-wide global.

use domain_todos::{ItemService, ItemStore};

/// Shared application state.
///
/// Cloning is cheap: services share their store through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Todo list collection
    pub todos: ItemService<ItemStore>,
    /// Channel collection, independent ids from `todos`
    pub channels: ItemService<ItemStore>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            todos: ItemService::new(ItemStore::new()),
            channels: ItemService::new(ItemStore::new()),
        }
    }
}
