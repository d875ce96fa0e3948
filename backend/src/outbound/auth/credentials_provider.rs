//! Credentials sign-in provider built on the user repository and hasher.
//!
//! Mirrors a credentials auth callback: look the account up by email,
//! verify the password against the stored hash. An unknown email and a
//! wrong password are indistinguishable to the caller. Lookup or
//! verification machinery failures are reported as the provider's own
//! callback failure kind, which the handler renders as its generic message —
//! they are still classified, so they never propagate as fatal.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::auth::{AuthenticatedUser, LoginCredentials};
use crate::domain::ports::{
    AuthErrorKind, PasswordHasher, SignInError, SignInProvider, UserRepository,
};

/// Sign-in provider backed by stored accounts.
#[derive(Clone)]
pub struct CredentialsSignInProvider {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl CredentialsSignInProvider {
    /// Create a provider backed by the given repository and hasher.
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl SignInProvider for CredentialsSignInProvider {
    async fn sign_in(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedUser, SignInError> {
        let account = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(|error| {
                debug!(%error, "account lookup failed during sign-in");
                SignInError::auth(AuthErrorKind::CallbackRouteError)
            })?;

        let Some(account) = account else {
            return Err(SignInError::auth(AuthErrorKind::CredentialsSignin));
        };

        let matches = self
            .hasher
            .verify(credentials.password(), &account.password_hash)
            .await
            .map_err(|error| {
                debug!(%error, "password verification failed during sign-in");
                SignInError::auth(AuthErrorKind::CallbackRouteError)
            })?;

        if matches {
            Ok(AuthenticatedUser::new(account.email, account.name))
        } else {
            Err(SignInError::auth(AuthErrorKind::CredentialsSignin))
        }
    }
}
