//! User payload shapes.

use serde::{Deserialize, Serialize};

use shoplite_core::UserId;

use super::{ValidationError, check_max_chars, check_min_chars};

/// Maximum length of `user_name` and `lastname`.
pub const MAX_NAME_LEN: usize = 32;
/// Maximum length of `email`.
pub const MAX_EMAIL_LEN: usize = 128;
/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 8;
/// Maximum password length.
pub const MAX_PASSWORD_LEN: usize = 128;

/// Input shape: fields the client supplies when creating or updating a user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserIn {
    pub user_name: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

impl UserIn {
    /// Check field constraints, collecting every violation.
    ///
    /// # Errors
    ///
    /// Returns all field-level violations found.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_max_chars(&mut errors, "user_name", &self.user_name, MAX_NAME_LEN);
        check_max_chars(&mut errors, "lastname", &self.lastname, MAX_NAME_LEN);
        check_max_chars(&mut errors, "email", &self.email, MAX_EMAIL_LEN);
        check_min_chars(&mut errors, "password", &self.password, MIN_PASSWORD_LEN);
        check_max_chars(&mut errors, "password", &self.password, MAX_PASSWORD_LEN);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Record shape: a stored user, as returned to the client.
///
/// The password never appears here; only its Argon2id hash is persisted and
/// the hash stays inside the store.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub user_name: String,
    pub lastname: String,
    pub email: String,
}
