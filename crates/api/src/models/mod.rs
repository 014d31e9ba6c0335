//! Payload models: input and record shapes per entity.
//!
//! Each entity has two view-shapes. The input shape carries every
//! client-supplied field and knows how to validate its basic constraints
//! (lengths, minimums); the record shape adds the store-assigned identifier
//! and is what gets serialized back to the client. No shape performs
//! cross-entity validation.

pub mod order;
pub mod product;
pub mod user;

use serde::Serialize;

pub use order::{Order, OrderIn};
pub use product::{Product, ProductIn};
pub use user::{User, UserIn};

/// A single field-level constraint violation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable description of the violation.
    pub message: String,
}

/// Record a violation when `value` exceeds `max` characters.
pub(crate) fn check_max_chars(
    errors: &mut Vec<ValidationError>,
    field: &'static str,
    value: &str,
    max: usize,
) {
    if value.chars().count() > max {
        errors.push(ValidationError {
            field,
            message: format!("must be at most {max} characters"),
        });
    }
}

/// Record a violation when `value` is shorter than `min` characters.
pub(crate) fn check_min_chars(
    errors: &mut Vec<ValidationError>,
    field: &'static str,
    value: &str,
    min: usize,
) {
    if value.chars().count() < min {
        errors.push(ValidationError {
            field,
            message: format!("must be at least {min} characters"),
        });
    }
}
