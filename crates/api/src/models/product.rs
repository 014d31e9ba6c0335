//! Product payload shapes.

use serde::{Deserialize, Serialize};

use shoplite_core::ProductId;

use super::{ValidationError, check_max_chars};

/// Maximum length of `product_name`.
pub const MAX_NAME_LEN: usize = 32;
/// Maximum length of `description`.
pub const MAX_DESCRIPTION_LEN: usize = 1024;

/// Input shape: fields the client supplies when creating or updating a
/// product.
///
/// The price is an integer currency amount with no fractional unit, a
/// modeling limitation inherited from the original store.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductIn {
    pub product_name: String,
    pub description: String,
    pub price: i64,
}

impl ProductIn {
    /// Check field constraints, collecting every violation.
    ///
    /// # Errors
    ///
    /// Returns all field-level violations found.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_max_chars(&mut errors, "product_name", &self.product_name, MAX_NAME_LEN);
        check_max_chars(
            &mut errors,
            "description",
            &self.description,
            MAX_DESCRIPTION_LEN,
        );
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Record shape: a stored product, as returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub product_name: String,
    pub description: String,
    pub price: i64,
}
