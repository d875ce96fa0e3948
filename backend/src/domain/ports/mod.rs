//! Domain ports and supporting types for the hexagonal boundary.

mod invoice_mutations;
mod invoice_repository;
mod password_hasher;
mod sign_in;
mod sign_in_provider;
mod user_mutations;
mod user_repository;
mod view_cache;

#[cfg(test)]
pub use invoice_mutations::MockInvoiceMutations;
pub use invoice_mutations::InvoiceMutations;
#[cfg(test)]
pub use invoice_repository::MockInvoiceRepository;
pub use invoice_repository::{InvoicePersistenceError, InvoiceRepository};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use sign_in::MockSignIn;
pub use sign_in::{SignIn, SignInOutcome};
#[cfg(test)]
pub use sign_in_provider::MockSignInProvider;
pub use sign_in_provider::{AuthErrorKind, SignInError, SignInProvider};
#[cfg(test)]
pub use user_mutations::MockUserMutations;
pub use user_mutations::UserMutations;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use view_cache::MockViewCache;
pub use view_cache::ViewCache;
