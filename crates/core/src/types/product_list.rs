//! The flattened product-id column for orders.
//!
//! An order references a variable-length list of products, but the orders
//! table stores that list in a single TEXT column rather than a join table.
//! `ProductIdList` owns the encode/decode contract for that column: the list
//! is written as its JSON text form (`[2,5,9]`) and read back preserving
//! order and multiplicity exactly. The decoder also accepts the spaced
//! literal form found in rows written by the legacy system (`[2, 5, 9]`),
//! which is valid JSON as well.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::ProductId;

/// Error decoding a flattened product-id column.
#[derive(Debug, Error)]
#[error("invalid product id list {literal:?}: {source}")]
pub struct ProductIdListError {
    /// The column text that failed to parse.
    pub literal: String,
    source: serde_json::Error,
}

/// An ordered list of product references, stored as one TEXT column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductIdList(Vec<ProductId>);

impl ProductIdList {
    /// Create a list from product IDs.
    #[must_use]
    pub const fn new(ids: Vec<ProductId>) -> Self {
        Self(ids)
    }

    /// The product IDs, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[ProductId] {
        &self.0
    }

    /// Number of product references.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the order references no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode to the column text form, e.g. `[2,5,9]`.
    #[must_use]
    pub fn to_column(&self) -> String {
        let ids: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        format!("[{}]", ids.join(","))
    }

    /// Decode from the column text form.
    ///
    /// # Errors
    ///
    /// Returns `ProductIdListError` if the text is not a JSON array of
    /// integers.
    pub fn from_column(literal: &str) -> Result<Self, ProductIdListError> {
        let ids: Vec<i64> = serde_json::from_str(literal).map_err(|source| ProductIdListError {
            literal: literal.to_owned(),
            source,
        })?;
        Ok(Self(ids.into_iter().map(ProductId::new).collect()))
    }
}

impl fmt::Display for ProductIdList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_column())
    }
}

impl FromStr for ProductIdList {
    type Err = ProductIdListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_column(s)
    }
}

impl From<Vec<ProductId>> for ProductIdList {
    fn from(ids: Vec<ProductId>) -> Self {
        Self(ids)
    }
}

impl FromIterator<ProductId> for ProductIdList {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
