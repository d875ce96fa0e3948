//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::user::{NewUser, UserRecord};

/// Persistence errors raised by user repository adapters.
///
/// Uniqueness violations are deliberately not distinguished from other
/// statement failures; the create-user handler reports one message for all
/// of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection {
        /// Adapter-level detail, logged but never shown to the caller.
        message: String,
    },
    /// Statement failed during execution.
    #[error("user repository statement failed: {message}")]
    Query {
        /// Adapter-level detail, logged but never shown to the caller.
        message: String,
    },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence gateway for user rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user row. Duplicate emails surface as a query error.
    async fn insert(&self, user: &NewUser) -> Result<(), UserPersistenceError>;

    /// Fetch the stored account for an email address, if one exists.
    async fn find_by_email(&self, email: &str)
    -> Result<Option<UserRecord>, UserPersistenceError>;
}
