//! Driving port for the authenticate use-case.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::forms::FormData;

/// Outcome of an authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Credentials accepted; the caller establishes the session and
    /// navigates to `redirect`.
    SignedIn {
        /// The signed-in identity.
        user: AuthenticatedUser,
        /// Logical view path to land on.
        redirect: String,
    },
    /// Credentials rejected or the provider pipeline failed; the caller
    /// renders `message`.
    Failed {
        /// Fixed user-facing failure message.
        message: String,
    },
}

impl SignInOutcome {
    /// Build a signed-in outcome.
    pub fn signed_in(user: AuthenticatedUser, redirect: impl Into<String>) -> Self {
        Self::SignedIn {
            user,
            redirect: redirect.into(),
        }
    }

    /// Build a failed outcome.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// Authentication handler backing the login form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignIn: Send + Sync {
    /// Authenticate the submitted credentials.
    ///
    /// `previous` is the prior failure message from the submission contract;
    /// its content is ignored. Failures the provider does not classify as
    /// authentication failures return `Err` and propagate to the caller.
    async fn authenticate<'a>(
        &self,
        previous: Option<&'a str>,
        form: &FormData,
    ) -> Result<SignInOutcome, Error>;
}
