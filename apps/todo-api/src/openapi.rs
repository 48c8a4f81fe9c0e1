//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::health::ReadyResponse;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "In-memory REST backend for todo and channel lists",
        license(name = "Apache-2.0")
    ),
    servers(
        (url = "http://localhost:8090", description = "Local development server")
    ),
    paths(crate::api::health::readiness_check),
    components(schemas(ReadyResponse)),
    nest(
        (path = "/api/todos", api = domain_todos::ApiDoc),
        (path = "/api/channels", api = domain_todos::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Todo/channel item endpoints (in-memory)"),
        (name = "Health", description = "Readiness reporting")
    )
)]
pub struct ApiDoc;
