//! User CRUD handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use shoplite_core::UserId;

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::models::{User, UserIn};
use crate::services::password;
use crate::state::AppState;

/// List all users.
///
/// GET /users/
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = UserRepository::new(state.pool()).list().await?;
    Ok(Json(users))
}

/// Get one user.
///
/// GET /users/{id}
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<User>> {
    UserRepository::new(state.pool())
        .get(UserId::new(id))
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("User"))
}

/// Create a user.
///
/// POST /users/
///
/// The password is validated, hashed with Argon2id, and never echoed back.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<UserIn>,
) -> Result<(StatusCode, Json<User>)> {
    input.validate().map_err(AppError::Validation)?;
    let password_hash = password::hash(&input.password)?;

    let user = UserRepository::new(state.pool())
        .create(&input, &password_hash)
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace all fields of a user.
///
/// PUT /users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UserIn>,
) -> Result<Json<User>> {
    input.validate().map_err(AppError::Validation)?;
    let password_hash = password::hash(&input.password)?;

    UserRepository::new(state.pool())
        .update(UserId::new(id), &input, &password_hash)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("User"))
}

/// Delete a user.
///
/// DELETE /users/{id}
///
/// Idempotent: deleting an absent id still returns the confirmation.
pub async fn destroy(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Value>> {
    UserRepository::new(state.pool())
        .delete(UserId::new(id))
        .await?;
    Ok(Json(json!({ "message": "User deleted" })))
}
