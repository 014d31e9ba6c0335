//! Shoplite Core - Shared types library.
//!
//! This crate provides the common types used by the shoplite API service.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! `SQLite` trait implementations are available behind the `sqlite` feature.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the flattened
//!   product-id list column

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
