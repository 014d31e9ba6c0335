//! Product CRUD handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use shoplite_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::{Product, ProductIn};
use crate::state::AppState;

/// List all products.
///
/// GET /products/
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// Get one product.
///
/// GET /products/{id}
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Product>> {
    ProductRepository::new(state.pool())
        .get(ProductId::new(id))
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Product"))
}

/// Create a product.
///
/// POST /products/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProductIn>,
) -> Result<(StatusCode, Json<Product>)> {
    input.validate().map_err(AppError::Validation)?;

    let product = ProductRepository::new(state.pool()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace all fields of a product.
///
/// PUT /products/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<ProductIn>,
) -> Result<Json<Product>> {
    input.validate().map_err(AppError::Validation)?;

    ProductRepository::new(state.pool())
        .update(ProductId::new(id), &input)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Product"))
}

/// Delete a product.
///
/// DELETE /products/{id}
///
/// Idempotent: deleting an absent id still returns the confirmation.
pub async fn destroy(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Value>> {
    ProductRepository::new(state.pool())
        .delete(ProductId::new(id))
        .await?;
    Ok(Json(json!({ "message": "Product deleted" })))
}
