//! Order CRUD handlers.
//!
//! The product list of an order is flattened into one stored column; the
//! repository encodes it on write and decodes it on read, so these handlers
//! only ever see the decoded list.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use shoplite_core::OrderId;

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::models::{Order, OrderIn};
use crate::state::AppState;

/// List all orders.
///
/// GET /orders/
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool()).list().await?;
    Ok(Json(orders))
}

/// Get one order.
///
/// GET /orders/{id}
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Order>> {
    OrderRepository::new(state.pool())
        .get(OrderId::new(id))
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Order"))
}

/// Create an order.
///
/// POST /orders/
///
/// The referenced user and product ids are stored as given; existence is
/// not checked (referential integrity beyond the declared foreign key is
/// out of scope, so dangling references are possible).
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<OrderIn>,
) -> Result<(StatusCode, Json<Order>)> {
    input.validate().map_err(AppError::Validation)?;

    let order = OrderRepository::new(state.pool()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Replace all fields of an order.
///
/// PUT /orders/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<OrderIn>,
) -> Result<Json<Order>> {
    input.validate().map_err(AppError::Validation)?;

    OrderRepository::new(state.pool())
        .update(OrderId::new(id), &input)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Order"))
}

/// Delete an order.
///
/// DELETE /orders/{id}
///
/// Idempotent: deleting an absent id still returns the confirmation.
pub async fn destroy(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Value>> {
    OrderRepository::new(state.pool())
        .delete(OrderId::new(id))
        .await?;
    Ok(Json(json!({ "message": "Order deleted" })))
}
