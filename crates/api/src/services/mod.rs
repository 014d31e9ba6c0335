//! Service-layer helpers.

pub mod password;
