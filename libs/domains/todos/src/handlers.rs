use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    JsonBody,
    errors::responses::{BadRequestJsonResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for an item collection
#[derive(OpenApi)]
#[openapi(
    paths(
        list_items,
        create_item,
        clear_items,
        count_items,
        get_item,
        replace_item,
        patch_item,
        post_update_item,
        delete_item,
    ),
    components(
        schemas(Item, CreateItem, UpdateItem),
        responses(NotFoundResponse, BadRequestJsonResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Items", description = "Todo/channel item endpoints (in-memory)")
    )
)]
pub struct ApiDoc;

const COLLECTION_METHODS: &str = "GET, HEAD, POST, DELETE, OPTIONS";
const COUNT_METHODS: &str = "GET, HEAD, OPTIONS";
const ITEM_METHODS: &str = "GET, HEAD, PUT, PATCH, POST, DELETE, OPTIONS";

/// Create the items router with all HTTP endpoints
///
/// CORS preflights are answered by the CORS layer before routing; a plain
/// `OPTIONS` gets `200` with the route's `Allow` header.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_items)
                .post(create_item)
                .delete(clear_items)
                .options(|| async { allow(COLLECTION_METHODS) }),
        )
        .route("/count", get(count_items).options(|| async { allow(COUNT_METHODS) }))
        .route(
            "/{id}",
            get(get_item)
                .put(replace_item)
                .patch(patch_item)
                .post(post_update_item)
                .delete(delete_item)
                .options(|| async { allow(ITEM_METHODS) }),
        )
        .with_state(shared_service)
}

fn allow(methods: &'static str) -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, methods)])
}

/// List all items
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "All items, in no particular order", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, response = BadRequestJsonResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    JsonBody(input): JsonBody<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Delete every item
#[utoipa::path(
    delete,
    path = "",
    tag = "Items",
    responses(
        (status = 204, description = "All items deleted"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn clear_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<StatusCode> {
    service.clear_items().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Count stored items
#[utoipa::path(
    get,
    path = "/count",
    tag = "Items",
    responses(
        (status = 200, description = "Item count", body = usize),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn count_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<usize>> {
    let count = service.count_items().await?;
    Ok(Json(count))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(&id).await?;
    Ok(Json(item))
}

/// Replace an item; omitted fields reset to their defaults
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    request_body = CreateItem,
    responses(
        (status = 200, description = "Item replaced", body = Item),
        (status = 400, response = BadRequestJsonResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<CreateItem>,
) -> ItemResult<Json<Item>> {
    let item = service.replace_item(&id, input).await?;
    Ok(Json(item))
}

/// Partially update an item; omitted fields are left unchanged
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, response = BadRequestJsonResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateItem>,
) -> ItemResult<Json<Item>> {
    let item = service.update_item(&id, input).await?;
    Ok(Json(item))
}

/// Partially update an item (alias of PATCH for clients that cannot send it)
#[utoipa::path(
    post,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, response = BadRequestJsonResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn post_update_item<R: ItemRepository>(
    state: State<Arc<ItemService<R>>>,
    id: Path<String>,
    body: JsonBody<UpdateItem>,
) -> ItemResult<Json<Item>> {
    patch_item(state, id, body).await
}

/// Delete an item; deleting an unknown ID also succeeds
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted (or was already absent)"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
) -> ItemResult<StatusCode> {
    service.delete_item(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
