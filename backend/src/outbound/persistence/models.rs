//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer; never exposed to the
//! domain.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{invoices, users};

/// Insertable struct for creating invoice rows; the id is left to the
/// database default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = invoices)]
pub(crate) struct NewInvoiceRow<'a> {
    pub customer_id: Uuid,
    pub amount: i64,
    pub status: &'a str,
    pub date: NaiveDate,
}

/// Changeset struct replacing the mutable invoice columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = invoices)]
pub(crate) struct InvoiceChangeset<'a> {
    pub customer_id: Uuid,
    pub amount: i64,
    pub status: &'a str,
}

/// Insertable struct for creating user rows.
#[derive(Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub firstname: &'a str,
    pub lastname: &'a str,
    pub name: &'a str,
    pub profile: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub createddate: NaiveDate,
}

/// Row struct for the columns authentication reads back.
#[derive(Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserAuthRow {
    pub email: String,
    pub name: String,
    pub password: String,
}
