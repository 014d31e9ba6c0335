//! Order payload shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shoplite_core::{OrderId, ProductIdList, UserId};

use super::{ValidationError, check_max_chars};

/// Maximum length of `status`.
pub const MAX_STATUS_LEN: usize = 10;

/// Input shape: fields the client supplies when creating or updating an
/// order.
///
/// `id_user` and the entries of `id_product` are references by identifier;
/// neither is checked against the referenced tables (referential integrity
/// beyond the declared foreign key is out of scope). `status` is free text
/// with no enforced transition set.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderIn {
    pub id_user: UserId,
    pub id_product: ProductIdList,
    pub date: DateTime<Utc>,
    pub status: String,
}

impl OrderIn {
    /// Check field constraints, collecting every violation.
    ///
    /// # Errors
    ///
    /// Returns all field-level violations found.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_max_chars(&mut errors, "status", &self.status, MAX_STATUS_LEN);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Record shape: a stored order, as returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub id_user: UserId,
    pub id_product: ProductIdList,
    pub date: DateTime<Utc>,
    pub status: String,
}
