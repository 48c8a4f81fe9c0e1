//! Server infrastructure module.
//!
//! This module provides:
//! - Router setup with OpenAPI documentation and cross-cutting middleware
//! - Health endpoint
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{server::ServerConfig, cors::CorsConfig, app_info};
//!
//! let router = create_router::<ApiDoc>(api_routes, &CorsConfig::default())?;
//! let app = router.merge(health_router(app_info!()));
//! create_production_app(app, &ServerConfig::default(), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
