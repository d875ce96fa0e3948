//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; `diesel
//! print-schema` can regenerate them from a live database.

diesel::table! {
    /// Invoices raised against customers.
    ///
    /// The `id` column is generated by the database on insert.
    invoices (id) {
        /// Primary key: UUID generated by the storage engine.
        id -> Uuid,
        /// Customer the invoice is raised against.
        customer_id -> Uuid,
        /// Amount in integer cents; non-negative by table constraint.
        amount -> Int8,
        /// Lifecycle token: pending, paid, or overdue.
        status -> Varchar,
        /// UTC calendar date the invoice was created.
        date -> Date,
    }
}

diesel::table! {
    /// Dashboard user accounts, keyed by their unique email address.
    users (email) {
        /// First name as submitted.
        firstname -> Varchar,
        /// Last name as submitted.
        lastname -> Varchar,
        /// Derived full name.
        name -> Varchar,
        /// Account profile token.
        profile -> Varchar,
        /// Primary key: unique email address.
        email -> Varchar,
        /// One-way password hash.
        password -> Varchar,
        /// Creation date in the server's local timezone.
        createddate -> Date,
    }
}
