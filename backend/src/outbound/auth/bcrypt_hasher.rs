//! Bcrypt-backed implementation of the `PasswordHasher` port.
//!
//! Bcrypt is CPU-bound, so both operations run on the blocking thread pool
//! rather than stalling the async executor.

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Work factor applied to new hashes.
pub const WORK_FACTOR: u32 = 10;

/// Bcrypt password hasher with a fixed work factor.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self { cost: WORK_FACTOR }
    }
}

impl BcryptPasswordHasher {
    /// Create a hasher with the default work factor.
    pub fn new() -> Self {
        Self::default()
    }
}

fn join_error(err: tokio::task::JoinError) -> PasswordHashError {
    PasswordHashError::new(format!("hashing task failed: {err}"))
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, PasswordHashError> {
        let cost = self.cost;
        let plaintext = Zeroizing::new(plaintext.to_owned());

        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext.as_str(), cost))
            .await
            .map_err(join_error)?
            .map_err(|err| PasswordHashError::new(err.to_string()))
    }

    async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordHashError> {
        let plaintext = Zeroizing::new(plaintext.to_owned());
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(plaintext.as_str(), &hash))
            .await
            .map_err(join_error)?
            .map_err(|err| PasswordHashError::new(err.to_string()))
    }
}
