//! Shared Diesel error mapping for the repository adapters.
//!
//! Storage failures are deliberately coarse at the port boundary: the
//! handlers collapse them all to one user-facing message, so the mapping
//! only distinguishes connection loss from statement failure and logs the
//! underlying kind at debug level.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub(crate) fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel error variants into query/connection constructors.
pub(crate) fn map_diesel_error<E, Q, C>(error: diesel::result::Error, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => query("database error"),
        _ => query("database error"),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::InvoicePersistenceError;

    fn map(error: diesel::result::Error) -> InvoicePersistenceError {
        map_diesel_error(
            error,
            InvoicePersistenceError::query,
            InvoicePersistenceError::connection,
        )
    }

    #[test]
    fn pool_errors_map_to_connection() {
        let mapped: InvoicePersistenceError = map_pool_error(
            PoolError::checkout("timed out"),
            InvoicePersistenceError::connection,
        );
        assert_eq!(mapped, InvoicePersistenceError::connection("timed out"));
    }

    #[test]
    fn closed_connections_map_to_connection() {
        let error = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ClosedConnection,
            Box::new("connection closed".to_owned()),
        );
        assert_eq!(
            map(error),
            InvoicePersistenceError::connection("database connection error")
        );
    }

    #[test]
    fn unique_violations_stay_query_errors() {
        let error = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key".to_owned()),
        );
        assert_eq!(map(error), InvoicePersistenceError::query("database error"));
    }
}
