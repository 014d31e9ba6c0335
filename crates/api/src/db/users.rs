//! User repository for database operations.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use shoplite_core::UserId;

use super::RepositoryError;
use crate::models::{User, UserIn};

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query("SELECT id, user_name, lastname, email FROM users ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        let mut users = Vec::with_capacity(rows.len());
        for row in &rows {
            users.push(row_to_user(row)?);
        }
        Ok(users)
    }

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT id, user_name, lastname, email FROM users WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Insert a new user, returning the record with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        user: &UserIn,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO users (user_name, lastname, email, password_hash) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&user.user_name)
        .bind(&user.lastname)
        .bind(&user.email)
        .bind(password_hash)
        .execute(self.pool)
        .await?;

        Ok(User {
            id: UserId::new(result.last_insert_rowid()),
            user_name: user.user_name.clone(),
            lastname: user.lastname.clone(),
            email: user.email.clone(),
        })
    }

    /// Replace all columns of the user matching `id`.
    ///
    /// Returns `None` if no row matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: UserId,
        user: &UserIn,
        password_hash: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let result = sqlx::query(
            "UPDATE users SET user_name = ?1, lastname = ?2, email = ?3, password_hash = ?4 \
             WHERE id = ?5",
        )
        .bind(&user.user_name)
        .bind(&user.lastname)
        .bind(&user.email)
        .bind(password_hash)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(User {
            id,
            user_name: user.user_name.clone(),
            lastname: user.lastname.clone(),
            email: user.email.clone(),
        }))
    }

    /// Delete the user matching `id`.
    ///
    /// Returns `true` if a row was deleted, `false` if none matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Insert `count` synthetic users for manual testing and demos.
    ///
    /// Every fixture row shares `password_hash`; fixtures are not real
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if an insert fails.
    pub async fn insert_fixtures(
        &self,
        count: u32,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        for i in 0..count {
            sqlx::query(
                "INSERT INTO users (user_name, lastname, email, password_hash) \
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(format!("user{i}"))
            .bind(format!("user{i}"))
            .bind(format!("user{i}@example.com"))
            .bind(password_hash)
            .execute(self.pool)
            .await?;
        }
        Ok(())
    }
}

fn row_to_user(row: &SqliteRow) -> Result<User, RepositoryError> {
    Ok(User {
        id: row.try_get("id")?,
        user_name: row.try_get("user_name")?,
        lastname: row.try_get("lastname")?,
        email: row.try_get("email")?,
    })
}
