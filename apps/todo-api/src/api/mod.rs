//! API routes module
//!
//! This module defines all HTTP API routes for the todo backend.

pub mod channels;
pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/todos", todos::router(state))
        .nest("/channels", channels::router(state))
        .merge(health::router(state.clone()))
}
