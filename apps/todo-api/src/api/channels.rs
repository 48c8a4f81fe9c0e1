//! Channels API routes

use axum::Router;
use domain_todos::handlers;

use crate::state::AppState;

/// Create channels router, backed by its own store
pub fn router(state: &AppState) -> Router {
    handlers::router(state.channels.clone())
}
