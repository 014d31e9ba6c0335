//! Shoplite API - online-store CRUD service.
//!
//! # Architecture
//!
//! - Axum web framework serving a JSON REST surface
//! - `SQLite` via sqlx for persistence; schema applied idempotently at start
//! - Three entities (users, products, orders) with uniform CRUD handlers
//! - An order's product references are flattened into one stored column
//!   (`shoplite_core::ProductIdList` owns that codec)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router with all routes and middleware.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
