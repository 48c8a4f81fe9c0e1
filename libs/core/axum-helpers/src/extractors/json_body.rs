//! JSON body extractor with uniform error responses.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON extractor that renders every rejection as the standard error body.
///
/// A missing body, a missing or non-JSON `Content-Type`, unparsable JSON
/// and a body of the wrong shape all become `400 Bad Request`, so handlers
/// never run on malformed input.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::JsonBody;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Rename {
///     title: String,
/// }
///
/// async fn rename(JsonBody(payload): JsonBody<Rename>) -> String {
///     format!("Renaming to: {}", payload.title)
/// }
///
/// let app = Router::new().route("/rename", post(rename));
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(JsonBody(data))
    }
}
