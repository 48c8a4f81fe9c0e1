use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{cors::create_cors_layer, security::security_headers};
use axum::{Router, middleware};
use core_config::{cors::CorsConfig, server::ServerConfig};
use std::io;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI documentation (`/api-docs/openapi.json`, Swagger UI, Scalar)
/// - API routes nested under `/api`, with a trailing slash ignored
/// - Common middleware (tracing, security headers, CORS)
/// - 404 and 405 fallback handlers
///
/// Health endpoints should be merged by the app using `health_router()`.
///
/// Domain routers apply their own state; this function only adds the
/// cross-cutting concerns.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
///
/// # Errors
/// Returns `InvalidInput` if the CORS allow-list contains an invalid origin.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum_helpers::server::create_router;
/// use core_config::cors::CorsConfig;
///
/// let api_routes = Router::new()
///     .route("/example", get(handler))
///     .with_state(my_state);
///
/// let router = create_router::<ApiDoc>(api_routes, &CorsConfig::default())?;
/// ```
pub fn create_router<T>(apis: Router, cors: &CorsConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = create_cors_layer(cors)?;
    info!("CORS configured with allowed origins: {:?}", cors.allowed_origins);

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest_service("/api", api_service(apis))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer);

    Ok(router)
}

/// `/api/todos/` and `/api/todos` reach the same route. Only the API is
/// trimmed: the Swagger UI redirects `/swagger-ui` to `/swagger-ui/`.
fn api_service(apis: Router) -> NormalizePath<Router> {
    let apis = apis
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found);

    NormalizePath::trim_trailing_slash(apis)
}

/// Serves `router` until SIGINT/SIGTERM, then drains and runs `cleanup`.
///
/// This provides:
/// - Graceful shutdown of in-flight requests
/// - A cleanup phase bounded by `server_config.shutdown_timeout`
/// - Error logging for server failures
///
/// # Example
/// ```ignore
/// use axum_helpers::server::create_production_app;
///
/// create_production_app(router, &config.server, async move {
///     info!("Dropping in-memory stores");
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, mut serve_rx) = ShutdownCoordinator::new();
    let mut cleanup_rx = coordinator.subscribe();
    let shutdown_timeout = server_config.shutdown_timeout;

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal_handle = coordinator.clone();
    let signal_task = tokio::spawn(async move {
        signal_handle.wait_for_signal().await;
    });

    let cleanup_handle = tokio::spawn(async move {
        let _ = cleanup_rx.recv().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => {
                tracing::warn!(
                    "Cleanup exceeded timeout of {:?}, forcing shutdown",
                    shutdown_timeout
                );
            }
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = serve_rx.recv().await;
        })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Releases the cleanup task when the server stopped on its own.
    coordinator.shutdown();
    signal_task.abort();
    cleanup_handle.await.ok();

    serve_result
}
