//! Database operations for the shoplite `SQLite` store.
//!
//! ## Tables
//!
//! - `users` - Registered store users (passwords stored as Argon2id hashes)
//! - `products` - Catalog entries
//! - `orders` - One row per order; the product list lives in a flattened
//!   TEXT column (see `shoplite_core::ProductIdList`)
//!
//! The schema is applied at process start via [`init_schema`]; every
//! statement is `CREATE TABLE IF NOT EXISTS`, so startup is idempotent.

pub mod orders;
pub mod products;
pub mod users;

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if it does not exist.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<SqlitePool, sqlx::Error> {
    let options =
        SqliteConnectOptions::from_str(database_url.expose_secret())?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Apply the schema to the store, creating tables that are absent.
///
/// The orders table declares the one structural foreign key (`id_user`);
/// the orders-to-products relationship is intentionally flattened into the
/// `id_product` TEXT column and is not a relational constraint.
///
/// # Errors
///
/// Returns `sqlx::Error` if a statement fails.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            user_name     TEXT NOT NULL,
            lastname      TEXT NOT NULL,
            email         TEXT NOT NULL,
            password_hash TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS products (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            product_name TEXT NOT NULL,
            description  TEXT NOT NULL,
            price        INTEGER NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS orders (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            id_user    INTEGER NOT NULL REFERENCES users (id),
            id_product TEXT NOT NULL,
            date       TEXT NOT NULL,
            status     TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}
