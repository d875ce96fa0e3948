//! Port abstraction for invoice persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::invoice::{InvoiceUpdate, NewInvoice};

/// Persistence errors raised by invoice repository adapters.
///
/// Handlers never surface the distinction to the caller; both variants
/// collapse to the handler's single storage-failure message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvoicePersistenceError {
    /// Repository connection could not be established.
    #[error("invoice repository connection failed: {message}")]
    Connection {
        /// Adapter-level detail, logged but never shown to the caller.
        message: String,
    },
    /// Statement failed during execution.
    #[error("invoice repository statement failed: {message}")]
    Query {
        /// Adapter-level detail, logged but never shown to the caller.
        message: String,
    },
}

impl InvoicePersistenceError {
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

/// Persistence gateway for invoice rows. Each operation issues exactly one
/// parameterised statement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Insert a new invoice; the storage engine generates the id.
    async fn insert(&self, invoice: &NewInvoice) -> Result<(), InvoicePersistenceError>;

    /// Replace the mutable columns of the invoice with the given id. An id
    /// matching no row is not an error.
    async fn update(&self, id: &str, update: &InvoiceUpdate)
    -> Result<(), InvoicePersistenceError>;

    /// Delete the invoice with the given id. An id matching no row is not an
    /// error.
    async fn delete(&self, id: &str) -> Result<(), InvoicePersistenceError>;
}
