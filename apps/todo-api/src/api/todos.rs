//! Todos API routes
//!
//! Wires the todo collection's store into the items domain router.

use axum::Router;
use domain_todos::handlers;

use crate::state::AppState;

/// Create todos router
pub fn router(state: &AppState) -> Router {
    handlers::router(state.todos.clone())
}
