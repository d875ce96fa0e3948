//! Authenticate handler backing the login form.
//!
//! Classifies provider-reported failure kinds into exactly two user-facing
//! strings. Anything the provider does not classify as an authentication
//! failure is re-raised untouched; infrastructure faults must never read as
//! a credentials problem.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::Error;
use crate::domain::auth::LoginCredentials;
use crate::domain::forms::FormData;
use crate::domain::ports::{AuthErrorKind, SignIn, SignInError, SignInOutcome, SignInProvider};

/// Fixed message for rejected credentials.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
/// Fixed message for any other provider-classified failure.
pub const SIGN_IN_FAILED: &str = "Something went wrong.";
/// Landing view after a successful sign-in.
pub const DASHBOARD_VIEW: &str = "/dashboard";

/// Stateless authenticate service delegating to the sign-in provider.
pub struct SignInService {
    provider: Arc<dyn SignInProvider>,
}

impl SignInService {
    /// Create a service backed by the given provider.
    pub fn new(provider: Arc<dyn SignInProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl SignIn for SignInService {
    async fn authenticate<'a>(
        &self,
        _previous: Option<&'a str>,
        form: &FormData,
    ) -> Result<SignInOutcome, Error> {
        // An empty email or password can never match an account; reject it
        // as the provider would, without a round trip.
        let credentials = match LoginCredentials::try_from_parts(
            form.get("email").unwrap_or_default(),
            form.get("password").unwrap_or_default(),
        ) {
            Ok(credentials) => credentials,
            Err(error) => {
                debug!(%error, "login submission missing credentials");
                return Ok(SignInOutcome::failed(INVALID_CREDENTIALS));
            }
        };

        match self.provider.sign_in(&credentials).await {
            Ok(user) => Ok(SignInOutcome::signed_in(user, DASHBOARD_VIEW)),
            Err(SignInError::Auth { kind }) => match kind {
                AuthErrorKind::CredentialsSignin => {
                    Ok(SignInOutcome::failed(INVALID_CREDENTIALS))
                }
                _ => Ok(SignInOutcome::failed(SIGN_IN_FAILED)),
            },
            Err(SignInError::Unexpected { message }) => Err(Error::internal(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for failure-kind classification.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::auth::AuthenticatedUser;
    use crate::domain::ports::MockSignInProvider;
    use rstest::rstest;

    fn login_form(email: &str, password: &str) -> FormData {
        FormData::new()
            .with_field("email", email)
            .with_field("password", password)
    }

    #[tokio::test]
    async fn accepted_credentials_redirect_to_the_dashboard() {
        let mut provider = MockSignInProvider::new();
        provider.expect_sign_in().returning(|credentials| {
            assert_eq!(credentials.email(), "ada@example.com");
            Ok(AuthenticatedUser::new("ada@example.com", "Ada Lovelace"))
        });

        let outcome = SignInService::new(Arc::new(provider))
            .authenticate(None, &login_form("ada@example.com", "pw"))
            .await
            .expect("sign-in must not fail fatally");

        assert_eq!(
            outcome,
            SignInOutcome::signed_in(
                AuthenticatedUser::new("ada@example.com", "Ada Lovelace"),
                DASHBOARD_VIEW,
            )
        );
    }

    #[rstest]
    #[case(AuthErrorKind::CredentialsSignin, INVALID_CREDENTIALS)]
    #[case(AuthErrorKind::CallbackRouteError, SIGN_IN_FAILED)]
    #[tokio::test]
    async fn classified_failures_map_to_their_fixed_strings(
        #[case] kind: AuthErrorKind,
        #[case] expected: &str,
    ) {
        let mut provider = MockSignInProvider::new();
        provider
            .expect_sign_in()
            .returning(move |_| Err(SignInError::auth(kind)));

        let outcome = SignInService::new(Arc::new(provider))
            .authenticate(None, &login_form("ada@example.com", "wrong"))
            .await
            .expect("classified failures are rendered, not raised");

        assert_eq!(outcome, SignInOutcome::failed(expected));
    }

    #[tokio::test]
    async fn unclassified_failures_propagate_fatally() {
        let mut provider = MockSignInProvider::new();
        provider
            .expect_sign_in()
            .returning(|_| Err(SignInError::unexpected("session store offline")));

        let err = SignInService::new(Arc::new(provider))
            .authenticate(None, &login_form("ada@example.com", "pw"))
            .await
            .expect_err("unclassified failures must propagate");

        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "session store offline");
    }

    #[rstest]
    #[case("", "pw")]
    #[case("ada@example.com", "")]
    #[tokio::test]
    async fn blank_credentials_fail_without_a_provider_round_trip(
        #[case] email: &str,
        #[case] password: &str,
    ) {
        let mut provider = MockSignInProvider::new();
        provider.expect_sign_in().times(0);

        let outcome = SignInService::new(Arc::new(provider))
            .authenticate(Some(INVALID_CREDENTIALS), &login_form(email, password))
            .await
            .expect("blank credentials are a rendered failure");

        assert_eq!(outcome, SignInOutcome::failed(INVALID_CREDENTIALS));
    }
}
