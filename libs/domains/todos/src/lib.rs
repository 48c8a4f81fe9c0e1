//! Todos Domain
//!
//! In-memory todo/channel item collections with CRUD over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, lenient JSON bodies
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← absent → NotFound
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory ItemStore)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{handlers, ItemService, ItemStore};
//!
//! // One store per collection, owned by the service
//! let service = ItemService::new(ItemStore::new());
//!
//! // Create Axum router
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod coerce;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{CreateItem, Item, UpdateItem};
pub use repository::ItemRepository;
pub use service::ItemService;
pub use store::ItemStore;
