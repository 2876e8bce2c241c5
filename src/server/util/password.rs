//! Password hashing collaborator.
//!
//! `UserService` only sees the `PasswordEncoder` trait, so tests can substitute a
//! deterministic encoder while the application uses Argon2.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// Hashes and verifies user passwords.
pub trait PasswordEncoder {
    /// Hashes a plaintext password for storage.
    fn encode(&self, raw_password: &str) -> Result<String, AppError>;

    /// Checks a plaintext password against a stored hash.
    fn matches(&self, raw_password: &str, encoded_password: &str) -> Result<bool, AppError>;
}

/// Argon2id encoder producing PHC-format hash strings with a random salt.
#[derive(Default)]
pub struct Argon2PasswordEncoder {
    argon2: Argon2<'static>,
}

impl Argon2PasswordEncoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordEncoder for Argon2PasswordEncoder {
    fn encode(&self, raw_password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(raw_password.as_bytes(), &salt)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

        Ok(hash.to_string())
    }

    fn matches(&self, raw_password: &str, encoded_password: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(encoded_password).map_err(|e| {
            AppError::InternalError(format!("Stored password hash is malformed: {}", e))
        })?;

        Ok(self
            .argon2
            .verify_password(raw_password.as_bytes(), &parsed)
            .is_ok())
    }
}
