//! Fixture-generation endpoints for manual testing and demos.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::db::{ProductRepository, UserRepository};
use crate::error::Result;
use crate::services::password;
use crate::state::AppState;

/// Placeholder credential for fixture users. Hashed once per request; the
/// rows are synthetic, not accounts anyone logs into.
const FIXTURE_PASSWORD: &str = "fixture-password";

/// Insert `count` synthetic users.
///
/// GET /fake_users/{count}
pub async fn fake_users(
    State(state): State<AppState>,
    Path(count): Path<u32>,
) -> Result<Json<Value>> {
    let password_hash = password::hash(FIXTURE_PASSWORD)?;
    UserRepository::new(state.pool())
        .insert_fixtures(count, &password_hash)
        .await?;

    tracing::info!(count, "inserted fixture users");
    Ok(Json(json!({ "message": format!("{count} fake users created") })))
}

/// Insert `count` synthetic products.
///
/// GET /fake_products/{count}
pub async fn fake_products(
    State(state): State<AppState>,
    Path(count): Path<u32>,
) -> Result<Json<Value>> {
    ProductRepository::new(state.pool())
        .insert_fixtures(count)
        .await?;

    tracing::info!(count, "inserted fixture products");
    Ok(Json(json!({ "message": format!("{count} fake products created") })))
}
