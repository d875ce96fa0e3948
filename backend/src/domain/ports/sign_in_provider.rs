//! Driven port for the credentials-based sign-in provider.
//!
//! The provider reports authentication failures through a typed error
//! carrying a kind discriminator. The authenticate handler maps recognised
//! kinds onto fixed user-facing strings; anything the provider does not
//! classify as an authentication failure propagates fatally instead of being
//! softened into a message.

use async_trait::async_trait;

use crate::domain::auth::{AuthenticatedUser, LoginCredentials};

/// Provider-reported kind of an authentication failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthErrorKind {
    /// The submitted credentials were not recognised.
    CredentialsSignin,
    /// The provider's own callback pipeline failed (lookup or verification
    /// machinery, not the credentials themselves).
    CallbackRouteError,
}

/// Failure returned by [`SignInProvider::sign_in`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    /// An authentication failure the provider classified.
    #[error("authentication failed: {kind:?}")]
    Auth {
        /// Provider-reported failure kind.
        kind: AuthErrorKind,
    },
    /// A failure the provider could not classify; never mapped to a
    /// user-facing string.
    #[error("sign-in failed unexpectedly: {message}")]
    Unexpected {
        /// Diagnostic detail for the propagated fault.
        message: String,
    },
}

impl SignInError {
    /// Create a classified authentication failure.
    pub fn auth(kind: AuthErrorKind) -> Self {
        Self::Auth { kind }
    }

    /// Create an unclassified failure that will propagate fatally.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }
}

/// Credentials-based sign-in provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignInProvider: Send + Sync {
    /// Authenticate the credentials and return the signed-in identity.
    async fn sign_in(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedUser, SignInError>;
}
