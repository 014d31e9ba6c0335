//! Password hashing.
//!
//! The store never persists a raw password; it stores an Argon2id hash in
//! PHC string format. `verify` is the comparison half of that format:
//! the HTTP surface has no login endpoint yet, so it is only exercised
//! by the tests here, but storing hashes without the matching check
//! would leave the stored format unvalidated.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Errors from hashing or verifying a password.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password")]
    Hash,
    #[error("invalid credentials")]
    Verify,
}

/// Hash a password using Argon2id with a fresh random salt.
///
/// # Errors
///
/// Returns `PasswordError::Hash` if hashing fails.
pub fn hash(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| PasswordError::Hash)
}

/// Verify a password against a stored hash.
///
/// # Errors
///
/// Returns `PasswordError::Verify` if the hash is malformed or the
/// password does not match.
pub fn verify(password: &str, hash: &str) -> Result<(), PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::Verify)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| PasswordError::Verify)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verify_roundtrip() {
        let hashed = hash("hunter22").expect("hash");
        assert!(verify("hunter22", &hashed).is_ok());
        assert!(verify("wrong-password", &hashed).is_err());
    }

    #[test]
    fn test_salts_are_unique() {
        let first = hash("hunter22").expect("hash");
        let second = hash("hunter22").expect("hash");
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify("hunter22", "not-a-phc-string").is_err());
    }
}
