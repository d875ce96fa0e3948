//! Authentication adapters: password hashing and the credentials provider.

mod bcrypt_hasher;
mod credentials_provider;

pub use bcrypt_hasher::{BcryptPasswordHasher, WORK_FACTOR};
pub use credentials_provider::CredentialsSignInProvider;
