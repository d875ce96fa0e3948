//! PostgreSQL-backed `InvoiceRepository` implementation using Diesel.
//!
//! Identifiers arrive as opaque strings from the form boundary. The adapter
//! parses them against the uuid columns; a malformed identifier is reported
//! as a query error so the handler surfaces its usual storage-failure
//! message, exactly as the database itself would have rejected the value.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceUpdate, NewInvoice};
use crate::domain::ports::{InvoicePersistenceError, InvoiceRepository};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{InvoiceChangeset, NewInvoiceRow};
use super::pool::DbPool;
use super::schema::invoices;

/// Diesel-backed implementation of the `InvoiceRepository` port.
#[derive(Clone)]
pub struct DieselInvoiceRepository {
    pool: DbPool,
}

impl DieselInvoiceRepository {
    /// Create a repository backed by the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn parse_uuid(raw: &str, column: &str) -> Result<Uuid, InvoicePersistenceError> {
    Uuid::parse_str(raw).map_err(|_| {
        tracing::debug!(column, "rejecting malformed uuid input");
        InvoicePersistenceError::query("invalid input syntax for uuid column")
    })
}

fn map_error(error: diesel::result::Error) -> InvoicePersistenceError {
    map_diesel_error(
        error,
        InvoicePersistenceError::query,
        InvoicePersistenceError::connection,
    )
}

#[async_trait]
impl InvoiceRepository for DieselInvoiceRepository {
    async fn insert(&self, invoice: &NewInvoice) -> Result<(), InvoicePersistenceError> {
        let customer_id = parse_uuid(&invoice.customer_id, "customer_id")?;
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, InvoicePersistenceError::connection))?;

        diesel::insert_into(invoices::table)
            .values(NewInvoiceRow {
                customer_id,
                amount: invoice.amount_cents,
                status: invoice.status.as_str(),
                date: invoice.date,
            })
            .execute(&mut conn)
            .await
            .map_err(map_error)?;

        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        update: &InvoiceUpdate,
    ) -> Result<(), InvoicePersistenceError> {
        let id = parse_uuid(id, "id")?;
        let customer_id = parse_uuid(&update.customer_id, "customer_id")?;
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, InvoicePersistenceError::connection))?;

        // Zero rows affected is a success; the statement itself completed.
        diesel::update(invoices::table.filter(invoices::id.eq(id)))
            .set(InvoiceChangeset {
                customer_id,
                amount: update.amount_cents,
                status: update.status.as_str(),
            })
            .execute(&mut conn)
            .await
            .map_err(map_error)?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), InvoicePersistenceError> {
        let id = parse_uuid(id, "id")?;
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, InvoicePersistenceError::connection))?;

        diesel::delete(invoices::table.filter(invoices::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(map_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for identifier parsing; statement execution is exercised by
    //! the stub-backed service tests and a live database.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("not-a-uuid")]
    #[case("")]
    #[case("1234")]
    fn malformed_identifiers_become_query_errors(#[case] raw: &str) {
        let err = parse_uuid(raw, "id").expect_err("malformed uuid must fail");
        assert_eq!(
            err,
            InvoicePersistenceError::query("invalid input syntax for uuid column")
        );
    }

    #[test]
    fn well_formed_identifiers_parse() {
        let id = parse_uuid("7ad2c5b4-2cf4-44d4-b13a-2ec8f77c19b8", "id")
            .expect("well-formed uuid must parse");
        assert_eq!(id.to_string(), "7ad2c5b4-2cf4-44d4-b13a-2ec8f77c19b8");
    }
}
