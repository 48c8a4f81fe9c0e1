//! Todo REST API
//!
//! Serves two independent in-memory item collections over HTTP.
//!
//! ## Routes
//!
//! ```text
//! /api/todos/...     todo list (list, fetch, create, replace, patch, delete, clear, count)
//! /api/channels/...  channel list, same operations, separate id counter
//! /api/ready         readiness with per-collection counts
//! /health            liveness
//! /swagger-ui        OpenAPI UI
//! ```

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use std::io;

pub use config::Config;
pub use state::AppState;

/// Build the full application router: API routes, docs, middleware and health.
pub fn build_app(state: &AppState) -> io::Result<Router> {
    let api_routes = api::routes(state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.cors)?;

    Ok(router.merge(health_router(state.config.app)))
}
