//! Product repository for database operations.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use shoplite_core::ProductId;

use super::RepositoryError;
use crate::models::{Product, ProductIn};

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows =
            sqlx::query("SELECT id, product_name, description, price FROM products ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        let mut products = Vec::with_capacity(rows.len());
        for row in &rows {
            products.push(row_to_product(row)?);
        }
        Ok(products)
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row =
            sqlx::query("SELECT id, product_name, description, price FROM products WHERE id = ?1")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        row.as_ref().map(row_to_product).transpose()
    }

    /// Insert a new product, returning the record with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, product: &ProductIn) -> Result<Product, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO products (product_name, description, price) VALUES (?1, ?2, ?3)",
        )
        .bind(&product.product_name)
        .bind(&product.description)
        .bind(product.price)
        .execute(self.pool)
        .await?;

        Ok(Product {
            id: ProductId::new(result.last_insert_rowid()),
            product_name: product.product_name.clone(),
            description: product.description.clone(),
            price: product.price,
        })
    }

    /// Replace all columns of the product matching `id`.
    ///
    /// Returns `None` if no row matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: ProductId,
        product: &ProductIn,
    ) -> Result<Option<Product>, RepositoryError> {
        let result = sqlx::query(
            "UPDATE products SET product_name = ?1, description = ?2, price = ?3 WHERE id = ?4",
        )
        .bind(&product.product_name)
        .bind(&product.description)
        .bind(product.price)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(Product {
            id,
            product_name: product.product_name.clone(),
            description: product.description.clone(),
            price: product.price,
        }))
    }

    /// Delete the product matching `id`.
    ///
    /// Returns `true` if a row was deleted, `false` if none matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Insert `count` synthetic products for manual testing and demos.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if an insert fails.
    pub async fn insert_fixtures(&self, count: u32) -> Result<(), RepositoryError> {
        for i in 0..count {
            sqlx::query(
                "INSERT INTO products (product_name, description, price) VALUES (?1, ?2, ?3)",
            )
            .bind(format!("product{i}"))
            .bind(format!("description {i}"))
            .bind(1000 + i64::from(i))
            .execute(self.pool)
            .await?;
        }
        Ok(())
    }
}

fn row_to_product(row: &SqliteRow) -> Result<Product, RepositoryError> {
    Ok(Product {
        id: row.try_get("id")?,
        product_name: row.try_get("product_name")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
    })
}
