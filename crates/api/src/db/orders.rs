//! Order repository for database operations.
//!
//! The product references of an order are flattened into the `id_product`
//! TEXT column. Encoding happens on every write and decoding on every read;
//! a row whose column cannot be decoded surfaces as
//! `RepositoryError::DataCorruption` rather than a silent drop.

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use shoplite_core::{OrderId, ProductIdList};

use super::RepositoryError;
use crate::models::{Order, OrderIn};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all orders.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if a stored column cannot be
    /// decoded.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows =
            sqlx::query("SELECT id, id_user, id_product, date, status FROM orders ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in &rows {
            orders.push(row_to_order(row)?);
        }
        Ok(orders)
    }

    /// Get an order by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if the stored column cannot be
    /// decoded.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query("SELECT id, id_user, id_product, date, status FROM orders WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        row.as_ref().map(row_to_order).transpose()
    }

    /// Insert a new order, returning the record with its assigned ID.
    ///
    /// The referenced user and products are not checked for existence.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, order: &OrderIn) -> Result<Order, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO orders (id_user, id_product, date, status) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(order.id_user)
        .bind(order.id_product.to_column())
        .bind(order.date.to_rfc3339())
        .bind(&order.status)
        .execute(self.pool)
        .await?;

        Ok(Order {
            id: OrderId::new(result.last_insert_rowid()),
            id_user: order.id_user,
            id_product: order.id_product.clone(),
            date: order.date,
            status: order.status.clone(),
        })
    }

    /// Replace all columns of the order matching `id`.
    ///
    /// Returns `None` if no row matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: OrderId,
        order: &OrderIn,
    ) -> Result<Option<Order>, RepositoryError> {
        let result = sqlx::query(
            "UPDATE orders SET id_user = ?1, id_product = ?2, date = ?3, status = ?4 WHERE id = ?5",
        )
        .bind(order.id_user)
        .bind(order.id_product.to_column())
        .bind(order.date.to_rfc3339())
        .bind(&order.status)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(Order {
            id,
            id_user: order.id_user,
            id_product: order.id_product.clone(),
            date: order.date,
            status: order.status.clone(),
        }))
    }

    /// Delete the order matching `id`.
    ///
    /// Returns `true` if a row was deleted, `false` if none matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: OrderId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_order(row: &SqliteRow) -> Result<Order, RepositoryError> {
    let literal: String = row.try_get("id_product")?;
    let id_product = ProductIdList::from_column(&literal)
        .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;

    let date_text: String = row.try_get("date")?;
    let date = DateTime::parse_from_rfc3339(&date_text)
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid date {date_text:?}: {e}")))?
        .with_timezone(&Utc);

    Ok(Order {
        id: row.try_get("id")?,
        id_user: row.try_get("id_user")?,
        id_product,
        date,
        status: row.try_get("status")?,
    })
}
