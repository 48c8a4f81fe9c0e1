//! Handler tests for the todos domain
//!
//! These tests drive the items router directly:
//! - Request deserialization and field coercion
//! - Response serialization
//! - HTTP status codes
//! - Error responses
//!
//! They exercise one collection router, without the application's
//! `/api` nesting, CORS or security middleware.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_todos::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::collections::HashSet;
use tower::ServiceExt; // For oneshot()

fn app() -> (Router, ItemService<ItemStore>) {
    let service = ItemService::new(ItemStore::new());
    (handlers::router(service.clone()), service)
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn seed(service: &ItemService<ItemStore>, order: i64, title: &str) -> Item {
    service
        .create_item(CreateItem {
            order,
            title: title.to_string(),
            completed: false,
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_item_returns_201_with_store_id() {
    let (app, _) = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({"order": 1, "title": "buy milk", "completed": false}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let item: Item = json_body(response.into_body()).await;
    assert_eq!(
        item,
        Item::new("0".to_string(), 1, "buy milk".to_string(), false)
    );
}

#[tokio::test]
async fn test_create_item_applies_defaults_and_ignores_client_id() {
    let (app, _) = app();

    let response = app
        .oneshot(json_request("POST", "/", json!({"id": "abc"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({"id": "0", "order": 0, "title": "", "completed": false})
    );
}

#[tokio::test]
async fn test_create_item_coerces_loose_types() {
    let (app, _) = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({"order": "3", "title": 42, "completed": "true"}),
        ))
        .await
        .unwrap();

    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.order, 3);
    assert_eq!(item.title, "42");
    assert!(item.completed);
}

#[tokio::test]
async fn test_create_item_rejects_malformed_body() {
    let (app, service) = app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_JSON");
    assert_eq!(service.count_items().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_item_rejects_missing_body() {
    let (app, service) = app();

    let response = app.oneshot(empty_request("POST", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(service.count_items().await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_items_returns_all() {
    let (app, service) = app();
    seed(&service, 1, "buy milk").await;
    seed(&service, 2, "walk dog").await;

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Item> = json_body(response.into_body()).await;
    let titles: HashSet<String> = items.into_iter().map(|i| i.title).collect();
    assert_eq!(
        titles,
        HashSet::from(["buy milk".to_string(), "walk dog".to_string()])
    );
}

#[tokio::test]
async fn test_list_items_empty_store_is_empty_array() {
    let (app, _) = app();

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_item_returns_200() {
    let (app, service) = app();
    let created = seed(&service, 5, "read").await;

    let response = app
        .oneshot(empty_request("GET", &format!("/{}", created.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item, created);
}

#[tokio::test]
async fn test_get_item_returns_404_for_missing() {
    let (app, _) = app();

    let response = app.oneshot(empty_request("GET", "/17")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Item 17 not found");
}

#[tokio::test]
async fn test_patch_changes_only_supplied_fields() {
    let (app, service) = app();
    let created = seed(&service, 1, "buy milk").await;

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/{}", created.id),
            json!({"completed": true}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(
        item,
        Item::new("0".to_string(), 1, "buy milk".to_string(), true)
    );
}

#[tokio::test]
async fn test_patch_null_field_is_left_unchanged() {
    let (app, service) = app();
    let created = seed(&service, 4, "keep me").await;

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/{}", created.id),
            json!({"title": null, "order": 0}),
        ))
        .await
        .unwrap();

    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.title, "keep me");
    assert_eq!(item.order, 0);
}

#[tokio::test]
async fn test_post_with_id_is_a_partial_update() {
    let (app, service) = app();
    let created = seed(&service, 2, "walk dog").await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/{}", created.id),
            json!({"title": "walk cat"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.title, "walk cat");
    assert_eq!(item.order, 2);
}

#[tokio::test]
async fn test_put_resets_omitted_fields() {
    let (app, service) = app();
    let created = seed(&service, 9, "old").await;
    service
        .update_item(
            &created.id,
            UpdateItem {
                completed: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", created.id),
            json!({"title": "new"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item, Item::new(created.id, 0, "new".to_string(), false));
}

#[tokio::test]
async fn test_update_missing_item_returns_404_and_store_unchanged() {
    let (app, service) = app();
    seed(&service, 0, "only").await;

    for method in ["PATCH", "PUT", "POST"] {
        let response = app
            .clone()
            .oneshot(json_request(method, "/99", json!({"title": "ghost"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method}");
    }

    assert_eq!(service.count_items().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_item_is_idempotent() {
    let (app, service) = app();
    let created = seed(&service, 0, "gone soon").await;
    let uri = format!("/{}", created.id);

    let first = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NO_CONTENT);

    let fetch = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(fetch.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clear_and_count() {
    let (app, service) = app();
    seed(&service, 0, "a").await;
    seed(&service, 0, "b").await;

    let count = app
        .clone()
        .oneshot(empty_request("GET", "/count"))
        .await
        .unwrap();
    assert_eq!(json_body::<usize>(count.into_body()).await, 2);

    let cleared = app
        .clone()
        .oneshot(empty_request("DELETE", "/"))
        .await
        .unwrap();
    assert_eq!(cleared.status(), StatusCode::NO_CONTENT);

    let count = app.oneshot(empty_request("GET", "/count")).await.unwrap();
    assert_eq!(json_body::<usize>(count.into_body()).await, 0);

    let next = seed(&service, 0, "c").await;
    assert_eq!(next.id, "2");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_over_http() {
    let (app, service) = app();

    let requests = (0..50).map(|i| {
        let app = app.clone();
        async move {
            let response = app
                .oneshot(json_request("POST", "/", json!({"title": format!("t{i}")})))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            json_body::<Item>(response.into_body()).await.id
        }
    });

    let ids: HashSet<String> = futures::future::join_all(requests)
        .await
        .into_iter()
        .collect();

    assert_eq!(ids.len(), 50);
    assert_eq!(service.count_items().await.unwrap(), 50);
}

#[tokio::test]
async fn test_plain_options_lists_allowed_methods() {
    let (app, service) = app();

    let cases = [
        ("/", "GET, HEAD, POST, DELETE, OPTIONS"),
        ("/count", "GET, HEAD, OPTIONS"),
        ("/3", "GET, HEAD, PUT, PATCH, POST, DELETE, OPTIONS"),
    ];
    for (uri, allowed) in cases {
        let response = app
            .clone()
            .oneshot(empty_request("OPTIONS", uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(response.headers()["allow"], allowed, "{uri}");
    }

    assert_eq!(service.count_items().await.unwrap(), 0);
}
