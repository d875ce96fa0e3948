//! Port abstraction for one-way password hashing.

use async_trait::async_trait;

/// Error raised when hashing or verification cannot complete.
///
/// Hashing failures are infrastructure faults, not form errors: the
/// create-user handler propagates them instead of rendering a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("password hashing failed: {message}")]
pub struct PasswordHashError {
    message: String,
}

impl PasswordHashError {
    /// Create an error with the given message. The message must never
    /// contain the plaintext.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One-way hashing of plaintext credentials before storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage.
    async fn hash(&self, plaintext: &str) -> Result<String, PasswordHashError>;

    /// Check a plaintext password against a stored hash.
    async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordHashError>;
}
