use axum::http::{HeaderValue, Method, header};
use core_config::cors::{AllowedOrigins, CorsConfig};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Methods browser clients may use against the API.
const ALLOWED_METHODS: [Method; 7] = [
    Method::GET,
    Method::HEAD,
    Method::POST,
    Method::DELETE,
    Method::OPTIONS,
    Method::PUT,
    Method::PATCH,
];

/// Creates the CORS layer described by `config`.
///
/// # Returns
/// A configured `CorsLayer` with:
/// - `*` or the configured allow-list as origin
/// - GET, HEAD, POST, DELETE, OPTIONS, PUT, PATCH
/// - `accept` and `content-type` request headers
/// - 1 hour max age
///
/// # Errors
/// Returns `InvalidInput` if an origin in the allow-list is not a valid header value.
pub fn create_cors_layer(config: &CorsConfig) -> io::Result<CorsLayer> {
    let origin = match &config.allowed_origins {
        AllowedOrigins::Any => AllowOrigin::any(),
        AllowedOrigins::List(origins) => {
            let values = origins
                .iter()
                .map(|o| o.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
                    )
                })?;
            AllowOrigin::list(values)
        }
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600)))
}
