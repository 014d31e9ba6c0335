//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                - Liveness check
//! GET    /health/ready          - Readiness check (verifies the store)
//!
//! # Users
//! GET    /users/                - List users
//! POST   /users/                - Create user
//! GET    /users/{id}            - Get one user
//! PUT    /users/{id}            - Replace user
//! DELETE /users/{id}            - Delete user
//!
//! # Products
//! GET    /products/             - List products
//! POST   /products/             - Create product
//! GET    /products/{id}         - Get one product
//! PUT    /products/{id}         - Replace product
//! DELETE /products/{id}         - Delete product
//!
//! # Orders
//! GET    /orders/               - List orders
//! POST   /orders/               - Create order
//! GET    /orders/{id}           - Get one order
//! PUT    /orders/{id}           - Replace order
//! DELETE /orders/{id}           - Delete order
//!
//! # Fixtures (manual testing / demos)
//! GET    /fake_users/{count}    - Insert N synthetic users
//! GET    /fake_products/{count} - Insert N synthetic products
//! ```

pub mod fixtures;
pub mod orders;
pub mod products;
pub mod users;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};

use crate::state::AppState;

// Collection paths are registered under both spellings: axum does not
// redirect trailing slashes, and clients of the original service used both
// `/orders/` and `/orders`.

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    let collection = get(users::index).post(users::create);
    Router::new()
        .route("/users/", collection.clone())
        .route("/users", collection)
        .route(
            "/users/{id}",
            get(users::show).put(users::update).delete(users::destroy),
        )
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    let collection = get(products::index).post(products::create);
    Router::new()
        .route("/products/", collection.clone())
        .route("/products", collection)
        .route(
            "/products/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    let collection = get(orders::index).post(orders::create);
    Router::new()
        .route("/orders/", collection.clone())
        .route("/orders", collection)
        .route(
            "/orders/{id}",
            get(orders::show)
                .put(orders::update)
                .delete(orders::destroy),
        )
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(user_routes())
        .merge(product_routes())
        .merge(order_routes())
        .route("/fake_users/{count}", get(fixtures::fake_users))
        .route("/fake_products/{count}", get(fixtures::fake_products))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
