//! Domain primitives, form pipeline, and mutation services.
//!
//! Purpose: hold everything transport- and storage-agnostic — the entity
//! types and their declarative form schemas, the transient form state, the
//! mutation handlers, and the ports adapters plug into. Inbound adapters
//! translate HTTP into these types; outbound adapters implement the ports.

pub mod auth;
pub mod error;
pub mod forms;
pub mod invoice;
pub mod invoice_service;
pub mod ports;
pub mod schema;
pub mod sign_in_service;
pub mod user;
pub mod user_service;

pub use self::auth::{AuthenticatedUser, LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::forms::{FieldErrors, FormData, FormState, MutationOutcome};
pub use self::invoice_service::InvoiceMutationService;
pub use self::sign_in_service::SignInService;
pub use self::user_service::UserMutationService;

/// Convenient result alias for fallible domain operations.
pub type ApiResult<T> = Result<T, Error>;
