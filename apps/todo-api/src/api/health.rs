//! Readiness endpoint

use axum::{Json, Router, extract::State, routing::get};
use domain_todos::ItemError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadyResponse {
    pub status: String,
    /// Items currently in the todo collection
    pub todos: usize,
    /// Items currently in the channel collection
    pub channels: usize,
}

/// Create a readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - reports the size of each collection
#[utoipa::path(
    get,
    path = "/api/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse)
    )
)]
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<ReadyResponse>, ItemError> {
    let todos = state.todos.count_items().await?;
    let channels = state.channels.count_items().await?;

    Ok(Json(ReadyResponse {
        status: "ready".to_string(),
        todos,
        channels,
    }))
}
