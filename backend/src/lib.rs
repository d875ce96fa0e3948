//! Siteledger backend library modules.
//!
//! An administrative dashboard backend: form submissions are validated
//! against declarative schemas, persisted to PostgreSQL as single
//! statements, and answered with a redirect signal or a structured form
//! state. See `domain` for the handlers, `inbound` for the HTTP surface,
//! and `outbound` for the infrastructure adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use doc::ApiDoc;
pub use middleware::Trace;
