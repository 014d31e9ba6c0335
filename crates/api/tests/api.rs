//! End-to-end tests for the API surface.
//!
//! Each test builds the full router over a fresh in-memory `SQLite` store
//! and drives it with `tower::ServiceExt::oneshot`.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use shoplite_api::config::AppConfig;
use shoplite_api::state::AppState;
use shoplite_api::{app, db};

/// Build the application over a fresh single-connection in-memory store.
async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    db::init_schema(&pool).await.expect("schema");

    let config = AppConfig {
        database_url: SecretString::from("sqlite::memory:"),
        host: "127.0.0.1".parse().expect("valid address"),
        port: 0,
    };
    app(AppState::new(config, pool))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, value)
}

fn user_payload(name: &str) -> Value {
    json!({
        "user_name": name,
        "lastname": "cooper",
        "email": format!("{name}@example.com"),
        "password": "hunter22",
    })
}

fn product_payload(name: &str, price: i64) -> Value {
    json!({
        "product_name": name,
        "description": format!("{name} description"),
        "price": price,
    })
}

fn order_payload(id_user: i64, products: &[i64], status: &str) -> Value {
    json!({
        "id_user": id_user,
        "id_product": products,
        "date": "2026-08-28T12:00:00Z",
        "status": status,
    })
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_string()));

    let (status, _) = send(&app, "GET", "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_collection_paths_accept_both_spellings() {
    let app = test_app().await;

    for uri in [
        "/users/", "/users", "/products/", "/products", "/orders/", "/orders",
    ] {
        let (status, _) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "GET {uri}");
    }

    // Create works through the bare spelling too.
    let (status, _) = send(&app, "POST", "/orders", Some(order_payload(1, &[1], "pending"))).await;
    assert_eq!(status, StatusCode::CREATED);
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_user_create_roundtrip_excludes_password() {
    let app = test_app().await;

    let (status, created) = send(&app, "POST", "/users/", Some(user_payload("alice"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["user_name"], "alice");
    assert_eq!(created["email"], "alice@example.com");
    assert!(created.get("password").is_none());
    assert!(created.get("password_hash").is_none());

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_user_password_validation_boundary() {
    let app = test_app().await;

    let mut payload = user_payload("alice");
    payload["password"] = json!("1234567");
    let (status, body) = send(&app, "POST", "/users/", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["field"], "password");

    // Nothing reached the store.
    let (_, listed) = send(&app, "GET", "/users/", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);

    let mut payload = user_payload("alice");
    payload["password"] = json!("12345678");
    let (status, _) = send(&app, "POST", "/users/", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_user_update_replaces_all_fields() {
    let app = test_app().await;

    let (_, created) = send(&app, "POST", "/users/", Some(user_payload("alice"))).await;
    let id = created["id"].as_i64().unwrap();

    let replacement = json!({
        "user_name": "bob",
        "lastname": "marley",
        "email": "bob@example.com",
        "password": "different1",
    });
    let (status, updated) =
        send(&app, "PUT", &format!("/users/{id}"), Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"].as_i64().unwrap(), id);

    let (_, fetched) = send(&app, "GET", &format!("/users/{id}"), None).await;
    assert_eq!(fetched["user_name"], "bob");
    assert_eq!(fetched["lastname"], "marley");
    assert_eq!(fetched["email"], "bob@example.com");
}

#[tokio::test]
async fn test_user_list_completeness() {
    let app = test_app().await;

    for name in ["alice", "bob", "carol"] {
        let (status, _) = send(&app, "POST", "/users/", Some(user_payload(name))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, listed) = send(&app, "GET", "/users/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_user_delete_idempotent() {
    let app = test_app().await;

    let (_, created) = send(&app, "POST", "/users/", Some(user_payload("alice"))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, first) = send(&app, "DELETE", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["message"], "User deleted");

    let (status, second) = send(&app, "DELETE", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, first);

    let (status, _) = send(&app, "GET", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_product_crud_roundtrip() {
    let app = test_app().await;

    let (status, created) =
        send(&app, "POST", "/products/", Some(product_payload("widget", 1000))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/products/{id}"),
        Some(product_payload("gadget", 2500)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["product_name"], "gadget");
    assert_eq!(updated["price"], 2500);

    let (status, body) = send(&app, "DELETE", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product deleted");
}

#[tokio::test]
async fn test_product_description_too_long_rejected() {
    let app = test_app().await;

    let mut payload = product_payload("widget", 1000);
    payload["description"] = json!("d".repeat(1025));
    let (status, body) = send(&app, "POST", "/products/", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["field"], "description");
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
async fn test_order_flattened_list_roundtrip() {
    let app = test_app().await;

    let (_, user) = send(&app, "POST", "/users/", Some(user_payload("alice"))).await;
    let user_id = user["id"].as_i64().unwrap();

    let (status, created) = send(
        &app,
        "POST",
        "/orders/",
        Some(order_payload(user_id, &[2, 5, 9], "pending")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id_product"], json!([2, 5, 9]));

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id_product"], json!([2, 5, 9]));
    assert_eq!(fetched["id_user"].as_i64().unwrap(), user_id);
    assert_eq!(fetched["status"], "pending");

    let (_, listed) = send(&app, "GET", "/orders/", None).await;
    assert_eq!(listed[0]["id_product"], json!([2, 5, 9]));
}

#[tokio::test]
async fn test_order_empty_product_list() {
    let app = test_app().await;

    let (status, created) =
        send(&app, "POST", "/orders/", Some(order_payload(1, &[], "pending"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_i64().unwrap();
    let (_, fetched) = send(&app, "GET", &format!("/orders/{id}"), None).await;
    assert_eq!(fetched["id_product"], json!([]));
}

#[tokio::test]
async fn test_order_status_too_long_rejected() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/orders/",
        Some(order_payload(1, &[1], "way-too-long-status")),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["field"], "status");
}

#[tokio::test]
async fn test_order_update_replaces_all_fields() {
    let app = test_app().await;

    let (_, created) =
        send(&app, "POST", "/orders/", Some(order_payload(1, &[1], "pending"))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/orders/{id}"),
        Some(order_payload(2, &[7, 8], "shipped")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = send(&app, "GET", &format!("/orders/{id}"), None).await;
    assert_eq!(fetched["id_user"], 2);
    assert_eq!(fetched["id_product"], json!([7, 8]));
    assert_eq!(fetched["status"], "shipped");
}

// ============================================================================
// Unified not-found policy
// ============================================================================

#[tokio::test]
async fn test_get_missing_returns_404_for_all_entities() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/users/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "User not found");

    let (status, body) = send(&app, "GET", "/products/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Product not found");

    let (status, body) = send(&app, "GET", "/orders/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Order not found");
}

#[tokio::test]
async fn test_update_missing_returns_404_for_all_entities() {
    let app = test_app().await;

    let (status, _) = send(&app, "PUT", "/users/99", Some(user_payload("ghost"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) =
        send(&app, "PUT", "/products/99", Some(product_payload("ghost", 1))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) =
        send(&app, "PUT", "/orders/99", Some(order_payload(1, &[1], "ghost"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_still_acknowledged() {
    let app = test_app().await;

    let (status, body) = send(&app, "DELETE", "/users/99", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted");

    let (status, body) = send(&app, "DELETE", "/orders/99", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order deleted");
}

// ============================================================================
// Fixtures
// ============================================================================

#[tokio::test]
async fn test_fake_users() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/fake_users/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "2 fake users created");

    let (_, listed) = send(&app, "GET", "/users/", None).await;
    let users = listed.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["user_name"], "user0");
}

#[tokio::test]
async fn test_fake_products() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/fake_products/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "3 fake products created");

    let (_, listed) = send(&app, "GET", "/products/", None).await;
    let products = listed.as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0]["price"], 1000);
}
