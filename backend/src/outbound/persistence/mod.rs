//! PostgreSQL persistence adapters for the domain's repository ports.

mod diesel_invoice_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
pub(crate) mod schema;

pub use diesel_invoice_repository::DieselInvoiceRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending};
pub use pool::{DbPool, PoolConfig, PoolError};
