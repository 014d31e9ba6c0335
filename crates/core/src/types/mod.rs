//! Core types for shoplite.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod product_list;

pub use id::*;
pub use product_list::{ProductIdList, ProductIdListError};
